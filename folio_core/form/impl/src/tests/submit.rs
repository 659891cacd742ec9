use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::MockSubmissionGateway;
use folio_core_form_contracts::{FormPhase, FormService, MockOutcomeNotifier, SubmitOutcome};
use folio_demo::{INVALID_VALUES, JANE, JANE_VALUES};
use folio_models::{
    form::{FieldError, FieldState, FieldStates, FormField},
    submission::SubmissionResult,
};
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use crate::tests::make_sut;

#[tokio::test]
async fn ok() {
    // Arrange
    let gateway = MockSubmissionGateway::new().with_send(JANE.clone(), SubmissionResult::Success);
    let notifier = MockOutcomeNotifier::new().with_notify(SubmissionResult::Success);
    let sut = make_sut(gateway, notifier, &JANE_VALUES).await;

    // Act
    let result = sut.on_submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Completed(SubmissionResult::Success));
    let snapshot = sut.snapshot().await;
    assert_eq!(snapshot.phase, FormPhase::Editing);
    assert_eq!(snapshot.fields, FieldStates::default());
}

#[tokio::test]
async fn failure_keeps_fields() {
    // Arrange
    let gateway =
        MockSubmissionGateway::new().with_send(JANE.clone(), SubmissionResult::network_error());
    let notifier = MockOutcomeNotifier::new().with_notify(SubmissionResult::network_error());
    let sut = make_sut(gateway, notifier, &JANE_VALUES).await;

    // Act
    let result = sut.on_submit().await;

    // Assert
    assert_eq!(
        result,
        SubmitOutcome::Completed(SubmissionResult::Failure("network error".into()))
    );
    let snapshot = sut.snapshot().await;
    assert_eq!(snapshot.phase, FormPhase::Editing);
    assert_eq!(snapshot.fields.values(), *JANE_VALUES);
    for field in FormField::ALL {
        assert!(snapshot.fields.get(field).touched);
        assert_eq!(snapshot.fields.get(field).error, None);
    }
}

#[tokio::test]
async fn retry_after_failure() {
    // Arrange
    let mut gateway = MockSubmissionGateway::new();
    let mut seq = mockall::Sequence::new();
    for result in [SubmissionResult::network_error(), SubmissionResult::Success] {
        gateway
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .with(mockall::predicate::eq(JANE.clone()))
            .return_once(move |_| Box::pin(std::future::ready(result)));
    }
    let mut notifier = MockOutcomeNotifier::new();
    notifier.expect_notify().times(2).return_const(());
    let sut = make_sut(gateway, notifier, &JANE_VALUES).await;

    // Act
    let first = sut.on_submit().await;
    let second = sut.on_submit().await;

    // Assert
    assert_matches!(first, SubmitOutcome::Completed(SubmissionResult::Failure(_)));
    assert_eq!(second, SubmitOutcome::Completed(SubmissionResult::Success));
    assert_eq!(sut.snapshot().await.fields, FieldStates::default());
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let sut = make_sut(
        MockSubmissionGateway::new(),
        MockOutcomeNotifier::new(),
        &INVALID_VALUES,
    )
    .await;

    // Act
    let result = sut.on_submit().await;

    // Assert
    let SubmitOutcome::Invalid(errors) = result else {
        panic!("expected validation errors, got {result:?}");
    };
    assert_eq!(errors.iter().count(), 3);

    let snapshot = sut.snapshot().await;
    assert_eq!(snapshot.phase, FormPhase::Editing);
    assert_eq!(
        snapshot.fields,
        FieldStates {
            name: FieldState {
                value: "".into(),
                touched: true,
                error: Some(FieldError::NameRequired),
            },
            email: FieldState {
                value: "x".into(),
                touched: true,
                error: Some(FieldError::InvalidEmail),
            },
            message: FieldState {
                value: "short".into(),
                touched: true,
                error: Some(FieldError::MessageRequired),
            },
        }
    );
}

#[tokio::test]
async fn invalid_single_field() {
    // Arrange
    let sut = make_sut(
        MockSubmissionGateway::new(),
        MockOutcomeNotifier::new(),
        &JANE_VALUES,
    )
    .await;
    sut.on_field_change(FormField::Email, "jane@example".into()).await;

    // Act
    let result = sut.on_submit().await;

    // Assert
    assert_matches!(
        &result,
        SubmitOutcome::Invalid(errors)
            if errors.iter().eq([(FormField::Email, FieldError::InvalidEmail)])
    );
    let snapshot = sut.snapshot().await;
    assert_eq!(snapshot.fields.name.error, None);
    assert!(snapshot.fields.name.touched);
    assert_eq!(snapshot.fields.email.error, Some(FieldError::InvalidEmail));
}

#[tokio::test]
async fn concurrent_submit_is_rejected() {
    // Arrange
    let (release_tx, release_rx) = oneshot::channel::<()>();
    let mut gateway = MockSubmissionGateway::new();
    gateway
        .expect_send()
        .once()
        .with(mockall::predicate::eq(JANE.clone()))
        .return_once(move |_| {
            Box::pin(async move {
                release_rx.await.unwrap();
                SubmissionResult::Success
            })
        });
    let notifier = MockOutcomeNotifier::new().with_notify(SubmissionResult::Success);
    let sut = Arc::new(make_sut(gateway, notifier, &JANE_VALUES).await);

    let in_flight = tokio::spawn({
        let sut = Arc::clone(&sut);
        async move { sut.on_submit().await }
    });
    while sut.snapshot().await.phase != FormPhase::Submitting {
        tokio::task::yield_now().await;
    }

    // Act
    let second = sut.on_submit().await;
    release_tx.send(()).unwrap();
    let first = in_flight.await.unwrap();

    // Assert
    assert_eq!(second, SubmitOutcome::Rejected);
    assert_eq!(first, SubmitOutcome::Completed(SubmissionResult::Success));
    assert_eq!(sut.snapshot().await.phase, FormPhase::Editing);
}

#[tokio::test]
async fn cancelled_submit_returns_to_editing() {
    // Arrange
    let mut gateway = MockSubmissionGateway::new();
    let mut seq = mockall::Sequence::new();
    gateway
        .expect_send()
        .once()
        .in_sequence(&mut seq)
        .with(mockall::predicate::eq(JANE.clone()))
        .return_once(|_| Box::pin(std::future::pending()));
    gateway
        .expect_send()
        .once()
        .in_sequence(&mut seq)
        .with(mockall::predicate::eq(JANE.clone()))
        .return_once(|_| Box::pin(std::future::ready(SubmissionResult::Success)));
    let notifier = MockOutcomeNotifier::new().with_notify(SubmissionResult::Success);
    let sut = make_sut(gateway, notifier, &JANE_VALUES).await;

    // Act
    let cancelled = tokio::time::timeout(Duration::from_millis(10), sut.on_submit()).await;
    let phase_after_cancel = sut.snapshot().await.phase;
    let retried = sut.on_submit().await;

    // Assert
    assert!(cancelled.is_err());
    assert_eq!(phase_after_cancel, FormPhase::Editing);
    assert_eq!(retried, SubmitOutcome::Completed(SubmissionResult::Success));
    assert_eq!(sut.snapshot().await.fields, FieldStates::default());
}
