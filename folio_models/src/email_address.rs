use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

/// Dot-atom local part over the characters HTML's `type=email` allows, followed
/// by a domain of at least two labels ending in an alphabetic top-level label.
/// Plus-addressing is accepted, internationalized domains are not.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

#[nutype(
    sanitize(trim),
    validate(regex = EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self
    }
}
