use anyhow::bail;
use clap::Args;
use folio_config::Config;
use folio_core_form_contracts::{FormService, SubmitOutcome};
use folio_core_form_impl::FormServiceImpl;
use folio_models::{
    form::{FieldValues, FormField},
    submission::SubmissionResult,
};

use crate::{environment, notifier::TerminalNotifier};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Name of the sender
    #[arg(short, long, default_value = "")]
    name: String,
    /// Email address of the sender
    #[arg(short, long, default_value = "")]
    email: String,
    /// Message content
    #[arg(short, long, default_value = "")]
    message: String,
    /// Client metadata stored with data store inserts
    #[arg(long)]
    user_agent: Option<String>,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let gateway = environment::gateway(&config, self.user_agent)?;
        let form = FormServiceImpl::new(gateway, TerminalNotifier);

        submit(
            &form,
            FieldValues {
                name: self.name,
                email: self.email,
                message: self.message,
            },
        )
        .await
    }
}

/// Types `values` into `form` and submits it once.
pub async fn submit(form: &impl FormService, values: FieldValues) -> anyhow::Result<()> {
    for field in FormField::ALL {
        form.on_field_change(field, values.get(field).into()).await;
    }

    match form.on_submit().await {
        SubmitOutcome::Completed(SubmissionResult::Success) => Ok(()),
        SubmitOutcome::Completed(SubmissionResult::Failure(reason)) => {
            bail!("Failed to deliver message: {reason}")
        }
        SubmitOutcome::Invalid(errors) => {
            for (field, error) in errors.iter() {
                eprintln!("{}: {error}", field.as_str());
            }
            bail!("Contact form is invalid")
        }
        SubmitOutcome::Rejected => bail!("Another submission is still in progress"),
    }
}
