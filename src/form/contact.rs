use serde_json::Value;

use super::error::SubmitError;
use crate::api::{ApiResponse, ContactApi, TransportError};
use crate::model::{ContactFields, ContactPayload, Field, FieldErrors, validate};

/// Number of characters of the server's reply shown after a success.
pub const PREVIEW_CHARS: usize = 100;

/// Phase of the current (or most recent) submission attempt.
#[derive(Debug, Default)]
pub enum SubmissionState {
    /// Nothing in flight and no banner to show.
    #[default]
    Idle,
    /// A request has been sent and its outcome is pending.
    Submitting,
    /// The server accepted the submission; holds its parsed reply.
    Succeeded(Value),
    /// The attempt failed.
    Failed(SubmitError),
}

impl SubmissionState {
    /// Returns `true` while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Serializes `body` and keeps the first [`PREVIEW_CHARS`] characters,
/// followed by an ellipsis.
pub fn response_preview(body: &Value) -> String {
    let mut preview: String = body.to_string().chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// State of one contact form instance.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    submission: SubmissionState,
}

impl ContactForm {
    /// Creates an empty form with no errors and nothing submitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Errors from the last submit attempt that have not been edited away.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current submission phase.
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Returns `true` while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Replaces the value of `field` and drops any error it was showing.
    ///
    /// Does not re-validate; the error reappears only if the next submit
    /// attempt still rejects the value.
    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.remove(field);
    }

    /// Starts a submit attempt.
    ///
    /// Clears any banner and validates the current values. Returns the payload
    /// to send when the form is valid, moving into
    /// [`SubmissionState::Submitting`]. Returns `None` when validation fails
    /// (errors are stored for display) or when a request is already in flight
    /// (nothing changes).
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            return None;
        }

        self.submission = SubmissionState::Idle;
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return None;
        }

        self.submission = SubmissionState::Submitting;
        Some(self.fields.to_payload())
    }

    /// Applies the outcome of the request started by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// On a 2xx reply the fields and errors are reset. Any other outcome
    /// leaves the fields untouched so the user can resubmit.
    pub fn finish(&mut self, outcome: Result<ApiResponse, TransportError>) {
        self.submission = match outcome {
            Ok(response) if response.is_success() => {
                self.fields = ContactFields::default();
                self.errors = FieldErrors::default();
                SubmissionState::Succeeded(response.body)
            }
            Ok(response) => {
                let err = SubmitError::from_response(response.status, &response.body);
                tracing::warn!(status = response.status, "submission rejected: {err}");
                SubmissionState::Failed(err)
            }
            Err(e) => {
                tracing::warn!("submission failed: {e}");
                SubmissionState::Failed(SubmitError::Transport(e))
            }
        };
    }

    /// Runs a whole attempt against `api`: validate, send, apply the outcome.
    pub async fn submit(&mut self, api: &dyn ContactApi) -> &SubmissionState {
        if let Some(payload) = self.begin_submit() {
            let outcome = api.submit(payload).await;
            self.finish(outcome);
        }
        &self.submission
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::stub::{StubApi, invalid_body_error, request_error};
    use crate::model::ValidationError;

    fn fill(form: &mut ContactForm, name: &str, email: &str, phone: &str, message: &str) {
        form.on_change(Field::Name, name);
        form.on_change(Field::Email, email);
        form.on_change(Field::Phone, phone);
        form.on_change(Field::Message, message);
    }

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new();
        fill(&mut form, "Jo", "jo@x.com", "1", "hi");
        form
    }

    mod on_change {
        use super::*;

        #[test]
        fn sets_value() {
            let mut form = ContactForm::new();
            form.on_change(Field::Email, "a@b.c");
            assert_eq!(form.fields().email, "a@b.c");
        }

        #[test]
        fn clears_only_edited_fields_error() {
            let mut form = ContactForm::new();
            assert!(form.begin_submit().is_none());
            assert_eq!(form.errors().len(), 4);

            form.on_change(Field::Email, "x");
            assert!(form.errors().get(Field::Email).is_none());
            assert_eq!(form.errors().len(), 3);
            for field in [Field::Name, Field::Phone, Field::Message] {
                assert_eq!(
                    form.errors().get(field),
                    Some(&ValidationError::Required(field))
                );
            }
        }

        #[test]
        fn clears_error_even_when_new_value_is_still_invalid() {
            let mut form = ContactForm::new();
            form.begin_submit();
            form.on_change(Field::Name, "   ");
            assert!(form.errors().get(Field::Name).is_none());
        }

        #[test]
        fn without_error_leaves_errors_alone() {
            let mut form = ContactForm::new();
            form.on_change(Field::Phone, "5");
            assert!(form.errors().is_empty());
        }
    }

    mod begin_submit {
        use super::*;

        #[test]
        fn empty_form_records_four_errors() {
            let mut form = ContactForm::new();
            assert_eq!(form.begin_submit(), None);
            assert_eq!(form.errors().len(), 4);
            assert!(matches!(form.submission(), SubmissionState::Idle));
        }

        #[test]
        fn bad_email_only() {
            let mut form = ContactForm::new();
            fill(&mut form, "Jo", "jo@x", "1", "hi");
            assert_eq!(form.begin_submit(), None);
            assert_eq!(form.errors().len(), 1);
            assert_eq!(
                form.errors().get(Field::Email),
                Some(&ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn valid_form_returns_trimmed_payload() {
            let mut form = ContactForm::new();
            fill(&mut form, " Jo ", " jo@x.com ", " 1 ", " hi ");
            let payload = form.begin_submit().expect("payload");
            assert_eq!(payload.name, "Jo");
            assert_eq!(payload.email, "jo@x.com");
            assert_eq!(payload.phone, "1");
            assert_eq!(payload.message, "hi");
            assert!(form.is_submitting());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn refused_while_submitting() {
            let mut form = valid_form();
            assert!(form.begin_submit().is_some());
            form.on_change(Field::Name, "");
            assert_eq!(form.begin_submit(), None);
            assert!(form.is_submitting());
            assert!(form.errors().is_empty(), "no validation while in flight");
        }

        #[test]
        fn clears_previous_failure_banner() {
            let mut form = valid_form();
            form.begin_submit();
            form.finish(Err(invalid_body_error()));
            assert!(matches!(form.submission(), SubmissionState::Failed(_)));

            form.on_change(Field::Email, "bad");
            assert_eq!(form.begin_submit(), None);
            assert!(matches!(form.submission(), SubmissionState::Idle));
        }

        #[test]
        fn clears_previous_success_banner() {
            let mut form = valid_form();
            form.begin_submit();
            form.finish(Ok(ApiResponse {
                status: 200,
                body: json!({"id": 1}),
            }));
            assert!(form.begin_submit().is_none());
            assert!(matches!(form.submission(), SubmissionState::Idle));
        }
    }

    mod finish {
        use super::*;

        #[test]
        fn success_resets_fields_and_keeps_body() {
            let mut form = valid_form();
            form.begin_submit();
            form.finish(Ok(ApiResponse {
                status: 201,
                body: json!({"id": 1}),
            }));
            assert!(form.fields().is_empty());
            assert!(form.errors().is_empty());
            match form.submission() {
                SubmissionState::Succeeded(body) => assert_eq!(body, &json!({"id": 1})),
                other => panic!("expected Succeeded, got {other:?}"),
            }
        }

        #[test]
        fn server_error_keeps_fields() {
            let mut form = valid_form();
            form.begin_submit();
            form.finish(Ok(ApiResponse {
                status: 422,
                body: json!({"message": "spam detected"}),
            }));
            assert_eq!(form.fields().name, "Jo");
            match form.submission() {
                SubmissionState::Failed(SubmitError::Server { status, detail }) => {
                    assert_eq!(*status, 422);
                    assert_eq!(detail, "spam detected");
                }
                other => panic!("expected server failure, got {other:?}"),
            }
        }

        #[test]
        fn transport_error_keeps_fields() {
            let mut form = valid_form();
            form.begin_submit();
            form.finish(Err(request_error()));
            assert_eq!(form.fields().email, "jo@x.com");
            assert!(matches!(
                form.submission(),
                SubmissionState::Failed(SubmitError::Transport(_))
            ));
        }

        #[test]
        fn any_outcome_reenables_submit() {
            let outcomes: Vec<Result<ApiResponse, TransportError>> = vec![
                Ok(ApiResponse {
                    status: 200,
                    body: json!(null),
                }),
                Ok(ApiResponse {
                    status: 500,
                    body: json!({}),
                }),
                Err(invalid_body_error()),
            ];
            for outcome in outcomes {
                let mut form = valid_form();
                form.begin_submit();
                form.finish(outcome);
                assert!(!form.is_submitting());
            }
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn success_clears_form() {
            let api = StubApi::replying(200, json!({"id": 1}));
            let mut form = valid_form();
            let state = form.submit(&api).await;
            assert!(matches!(state, SubmissionState::Succeeded(_)));
            assert!(form.fields().is_empty());
            assert!(form.errors().is_empty());
            assert_eq!(api.sent().len(), 1);
        }

        #[tokio::test]
        async fn bad_request_reports_status_and_detail() {
            let api = StubApi::replying(400, json!({"detail": "duplicate"}));
            let mut form = valid_form();
            let message = match form.submit(&api).await {
                SubmissionState::Failed(err) => err.to_string(),
                other => panic!("expected Failed, got {other:?}"),
            };
            assert!(message.contains("400"), "{message}");
            assert!(message.contains("duplicate"), "{message}");
            assert_eq!(form.fields(), valid_form().fields());
        }

        #[tokio::test]
        async fn transport_failure_reports_cause() {
            let api = StubApi::failing_before_response();
            let expected = request_error().to_string();
            let mut form = valid_form();
            let message = match form.submit(&api).await {
                SubmissionState::Failed(err) => err.to_string(),
                other => panic!("expected Failed, got {other:?}"),
            };
            assert!(message.contains(&expected), "{message}");
            assert_eq!(form.fields(), valid_form().fields());
        }

        #[tokio::test]
        async fn non_json_reply_is_transport_failure() {
            let api = StubApi::failing_with_invalid_body();
            let mut form = valid_form();
            match form.submit(&api).await {
                SubmissionState::Failed(err @ SubmitError::Transport(_)) => {
                    let message = err.to_string();
                    assert!(
                        message.starts_with("Error: response body is not valid JSON"),
                        "{message}"
                    );
                    assert!(message.ends_with(". Please try again."), "{message}");
                }
                other => panic!("expected transport failure, got {other:?}"),
            }
            assert_eq!(api.sent().len(), 1);
            assert_eq!(form.fields(), valid_form().fields());
            assert!(!form.is_submitting());
        }

        #[tokio::test]
        async fn invalid_form_never_reaches_api() {
            let api = StubApi::replying(200, json!({}));
            let mut form = ContactForm::new();
            fill(&mut form, "Jo", "jo@x", "1", "hi");
            let state = form.submit(&api).await;
            assert!(matches!(state, SubmissionState::Idle));
            assert!(api.sent().is_empty());
        }

        #[tokio::test]
        async fn sends_trimmed_payload() {
            let api = StubApi::replying(200, json!({}));
            let mut form = ContactForm::new();
            fill(&mut form, "Jo  ", "jo@x.com", "\t1", "hi\n");
            form.submit(&api).await;
            let sent = api.sent();
            assert_eq!(sent[0].name, "Jo");
            assert_eq!(sent[0].phone, "1");
            assert_eq!(sent[0].message, "hi");
        }
    }

    mod preview {
        use super::*;

        #[test]
        fn short_body_gets_ellipsis() {
            assert_eq!(response_preview(&json!({"id": 1})), r#"{"id":1}..."#);
        }

        #[test]
        fn long_body_is_truncated() {
            let body = json!({"text": "x".repeat(500)});
            let preview = response_preview(&body);
            assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
            assert!(preview.ends_with("..."));
        }

        #[test]
        fn truncates_on_char_boundaries() {
            let body = json!("é".repeat(200));
            let preview = response_preview(&body);
            assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        }
    }
}
