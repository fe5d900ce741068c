use std::fmt;
use std::future::Future;

use tokio::sync::watch;

use super::store::FormStateStore;
use super::values::{FormErrors, FormValues};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionOutcome<T, E> {
    /// At least one field failed validation; the operation was not called.
    Invalid(FormErrors),
    Succeeded(T),
    Failed(E),
}

impl<T, E> SubmissionOutcome<T, E> {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, SubmissionOutcome::Invalid(_))
    }

    /// Whether the submit operation ran, whatever it returned.
    pub fn reached_operation(&self) -> bool {
        !self.is_invalid()
    }
}

/// Validates a whole form and, when it passes, runs the injected submit
/// operation while publishing [`SubmissionState`].
///
/// Overlapping calls to [`submit`](Self::submit) are not prevented here.
/// Whoever triggers submits should watch [`state`](Self::state) (or
/// [`subscribe`](Self::subscribe)) and hold back while a submission is in
/// flight.
#[derive(Debug)]
pub struct SubmissionController {
    form: &'static str,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionController {
    pub fn new(form: &'static str) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        SubmissionController { form, state }
    }

    pub fn form(&self) -> &'static str {
        self.form
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state() == SubmissionState::InFlight
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Validates every field of `store`; if all pass, awaits `operation`
    /// exactly once with a snapshot of the values. The fresh validation
    /// result is written to the store either way, so after a failed
    /// operation the form shows no field errors.
    pub async fn submit<F, Fut, T, E>(
        &self,
        store: &mut FormStateStore,
        operation: F,
    ) -> SubmissionOutcome<T, E>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let _in_flight = InFlightGuard::begin(&self.state);

        let errors = store.validate_all();
        let outcome = if errors.is_valid() {
            let values = (*store.values()).clone();
            match operation(values).await {
                Ok(value) => {
                    tracing::info!(form = self.form, "submission succeeded");
                    SubmissionOutcome::Succeeded(value)
                }
                Err(e) => {
                    tracing::warn!(form = self.form, error = %e, "submission failed");
                    SubmissionOutcome::Failed(e)
                }
            }
        } else {
            tracing::warn!(
                form = self.form,
                failing = errors.failing().count(),
                "submission blocked by validation"
            );
            SubmissionOutcome::Invalid(errors.clone())
        };

        store.commit_errors(errors);
        outcome
    }
}

/// Holds the state at `InFlight` and puts it back to `Idle` when dropped,
/// including when the submit future itself is dropped mid-await.
struct InFlightGuard<'a>(&'a watch::Sender<SubmissionState>);

impl<'a> InFlightGuard<'a> {
    fn begin(state: &'a watch::Sender<SubmissionState>) -> Self {
        state.send_replace(SubmissionState::InFlight);
        InFlightGuard(state)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(SubmissionState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{login_store, register_store, RecordingOperation};
    use crate::validation::{PASSWORDS_DO_NOT_MATCH, REQUIRED_FIELD};

    #[tokio::test]
    async fn test_invalid_form_never_calls_operation() {
        let controller = SubmissionController::new("login");
        let mut store = login_store(&[("email", ""), ("password", "x")]);
        let operation = RecordingOperation::succeeding();

        let outcome = controller.submit(&mut store, operation.call()).await;

        assert_eq!(operation.calls().len(), 0);
        match outcome {
            SubmissionOutcome::Invalid(errors) => {
                assert_eq!(errors.get("email"), REQUIRED_FIELD);
                assert_eq!(errors.get("password"), "");
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(store.error("email"), REQUIRED_FIELD);
        assert_eq!(store.error("password"), "");
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_valid_form_calls_operation_once_with_snapshot() {
        let controller = SubmissionController::new("login");
        let mut store = login_store(&[("email", "a@b.com"), ("password", "secret")]);
        let operation = RecordingOperation::succeeding();

        let outcome = controller.submit(&mut store, operation.call()).await;

        assert!(outcome.is_succeeded());
        let calls = operation.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("email"), "a@b.com");
        assert_eq!(calls[0].get("password"), "secret");
        assert_eq!(calls[0].len(), 2);
        assert!(store.errors().is_valid());
    }

    #[tokio::test]
    async fn test_failed_operation_leaves_no_field_errors() {
        let controller = SubmissionController::new("login");
        let mut store = login_store(&[("email", "a@b.com"), ("password", "secret")]);
        store.set_field_error("password", "stale").unwrap();
        let operation = RecordingOperation::failing("Invalid credentials");

        let outcome = controller.submit(&mut store, operation.call()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed("Invalid credentials".to_string())
        );
        assert!(outcome.reached_operation());
        assert_eq!(operation.calls().len(), 1);
        assert!(store.errors().is_valid());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_state_is_in_flight_while_operation_runs() {
        let controller = SubmissionController::new("login");
        let mut store = login_store(&[("email", "a@b.com"), ("password", "secret")]);
        let observer = controller.subscribe();
        assert_eq!(controller.state(), SubmissionState::Idle);

        let outcome: SubmissionOutcome<SubmissionState, String> = controller
            .submit(&mut store, |_| {
                let seen = *observer.borrow();
                async move {
                    tokio::task::yield_now().await;
                    Ok(seen)
                }
            })
            .await;

        assert_eq!(outcome, SubmissionOutcome::Succeeded(SubmissionState::InFlight));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_invalid_submit_still_passes_through_in_flight() {
        let controller = SubmissionController::new("login");
        let mut store = login_store(&[("email", ""), ("password", "")]);
        let mut observer = controller.subscribe();

        let outcome = controller
            .submit(&mut store, RecordingOperation::succeeding().call())
            .await;

        assert!(outcome.is_invalid());
        assert!(observer.has_changed().unwrap());
        assert_eq!(*observer.borrow_and_update(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_dropped_submission_returns_to_idle() {
        let controller = SubmissionController::new("login");
        let mut store = login_store(&[("email", "a@b.com"), ("password", "secret")]);

        {
            let pending = controller.submit(&mut store, |_| {
                std::future::pending::<Result<(), String>>()
            });
            tokio::pin!(pending);
            let polled = futures::poll!(pending.as_mut());
            assert!(polled.is_pending());
            assert!(controller.is_in_flight());
        }

        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_mismatched_repeat_password_blocks_registration() {
        let controller = SubmissionController::new("register_client");
        let mut store = register_store(&[
            ("firstName", "Ana"),
            ("lastName", "Pop"),
            ("phoneNumber", "0712345678"),
            ("email", "ana@pop.com"),
            ("password", "p1"),
            ("repeatPassword", "p2"),
        ]);
        let operation = RecordingOperation::succeeding();

        let outcome = controller.submit(&mut store, operation.call()).await;

        assert!(outcome.is_invalid());
        assert_eq!(operation.calls().len(), 0);
        assert_eq!(store.error("repeatPassword"), PASSWORDS_DO_NOT_MATCH);
    }
}
