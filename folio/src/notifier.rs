use folio_core_form_contracts::OutcomeNotifier;
use folio_models::submission::{Notification, NotificationVariant, SubmissionResult};
use tracing::{info, warn};

/// Prints the submission toast to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl OutcomeNotifier for TerminalNotifier {
    fn notify(&self, result: SubmissionResult) {
        match &result {
            SubmissionResult::Success => info!("Contact form submission delivered"),
            SubmissionResult::Failure(reason) => {
                warn!("Contact form submission failed: {reason}")
            }
        }

        let notification = Notification::from(&result);
        match notification.variant {
            NotificationVariant::Default => {
                println!("{}\n{}", notification.title, notification.description)
            }
            NotificationVariant::Destructive => {
                eprintln!("{}\n{}", notification.title, notification.description)
            }
        }
    }
}
