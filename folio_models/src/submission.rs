/// Terminal outcome of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(String),
}

impl SubmissionResult {
    pub const NETWORK_ERROR: &'static str = "network error";

    pub fn network_error() -> Self {
        Self::Failure(Self::NETWORK_ERROR.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// User-facing toast derived from a [`SubmissionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NotificationVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

impl Notification {
    pub const SUCCESS: Self = Self {
        title: "Success!",
        description: "Your message has been sent.",
        variant: NotificationVariant::Default,
    };

    pub const FAILURE: Self = Self {
        title: "Error",
        description: "Failed to send message. Please try again.",
        variant: NotificationVariant::Destructive,
    };
}

impl From<&SubmissionResult> for Notification {
    fn from(value: &SubmissionResult) -> Self {
        match value {
            SubmissionResult::Success => Self::SUCCESS,
            SubmissionResult::Failure(_) => Self::FAILURE,
        }
    }
}
