use folio_core_contact_contracts::MockSubmissionGateway;
use folio_core_form_contracts::{FormService, MockOutcomeNotifier};
use folio_models::form::{FieldValues, FormField};

use crate::FormServiceImpl;

mod submit;

type Sut = FormServiceImpl<MockSubmissionGateway, MockOutcomeNotifier>;

/// Builds a form and types `values` into it without blurring any field.
async fn make_sut(
    gateway: MockSubmissionGateway,
    notifier: MockOutcomeNotifier,
    values: &FieldValues,
) -> Sut {
    let sut = FormServiceImpl::new(gateway, notifier);
    for field in FormField::ALL {
        sut.on_field_change(field, values.get(field).into()).await;
    }
    sut
}
