use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use super::validation::{Field, FieldErrors, FormData, validate};

pub const GENERIC_FAILURE_NOTICE: &str =
    "Failed to send message. Please try again or email me directly.";

/// How long the confirmation stays up before the form resets itself.
pub const CONFIRMATION_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Invalid(FieldErrors),
    AlreadySubmitting,
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
enum SubmitError {
    #[error("The contact endpoint answered with status {0}.")]
    UnexpectedStatus(StatusCode),
    #[error("Failed to reach the contact endpoint.")]
    Transport(#[from] reqwest::Error),
}

#[derive(Default)]
struct FormView {
    data: FormData,
    errors: FieldErrors,
    state: FormState,
    notice: Option<String>,
}

struct Inner {
    http_client: Client,
    endpoint: Url,
    confirmation_display: Duration,
    in_flight: AtomicBool,
    view: Mutex<FormView>,
}

/// One contact form instance. Clones share the same fields and in-flight flag.
#[derive(Clone)]
pub struct ContactForm {
    inner: Arc<Inner>,
}

impl ContactForm {
    pub fn new(http_client: Client, endpoint: Url, confirmation_display: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                http_client,
                endpoint,
                confirmation_display,
                in_flight: AtomicBool::new(false),
                view: Mutex::new(FormView::default()),
            }),
        }
    }

    /// Update one field. Only that field's error is cleared.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut view = self.view();
        view.data.set(field, value.into());
        view.errors.clear(field);
    }

    pub fn data(&self) -> FormData {
        self.view().data.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.view().errors.clone()
    }

    pub fn state(&self) -> FormState {
        self.view().state
    }

    /// The failure notice of the last submission, if it failed.
    pub fn notice(&self) -> Option<String> {
        self.view().notice.clone()
    }

    #[tracing::instrument(name = "Submitting the contact form", skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn submit(&self) -> SubmitOutcome {
        if self
            .inner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SubmitOutcome::AlreadySubmitting;
        }

        let data = {
            let mut view = self.view();
            let validation = validate(&view.data);
            view.errors = validation.errors.clone();
            if !validation.valid {
                drop(view);
                self.inner.in_flight.store(false, Ordering::Release);
                return SubmitOutcome::Invalid(validation.errors);
            }
            view.state = FormState::Submitting;
            view.notice = None;
            view.data.clone()
        };

        match self.post(&data).await {
            Ok(()) => {
                self.view().state = FormState::Submitted;
                self.schedule_reset();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Error sending message"
                );
                {
                    let mut view = self.view();
                    view.state = FormState::Idle;
                    view.notice = Some(GENERIC_FAILURE_NOTICE.to_string());
                }
                self.inner.in_flight.store(false, Ordering::Release);
                SubmitOutcome::Failed(GENERIC_FAILURE_NOTICE.to_string())
            }
        }
    }

    async fn post(&self, data: &FormData) -> Result<(), SubmitError> {
        let response = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .json(data)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SubmitError::UnexpectedStatus(response.status()));
        }
        Ok(())
    }

    /// Keep the confirmation up for the display window, then start over.
    /// The in-flight flag stays raised until then.
    fn schedule_reset(&self) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.confirmation_display).await;
            *inner.view.lock().unwrap_or_else(PoisonError::into_inner) = FormView::default();
            inner.in_flight.store(false, Ordering::Release);
        });
    }

    fn view(&self) -> MutexGuard<'_, FormView> {
        self.inner.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
