use std::sync::LazyLock;

use folio_models::{contact::ContactPayload, form::FieldValues};

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0";

pub static JANE_VALUES: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    name: "Jane Doe".into(),
    email: "jane@example.com".into(),
    message: "Hello, I would like to connect.".into(),
});

pub static JANE: LazyLock<ContactPayload> = LazyLock::new(|| ContactPayload {
    name: "Jane Doe".try_into().unwrap(),
    email: "jane@example.com".try_into().unwrap(),
    message: "Hello, I would like to connect.".try_into().unwrap(),
});

/// Fails every field rule at once.
pub static INVALID_VALUES: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    name: "".into(),
    email: "x".into(),
    message: "short".into(),
});
