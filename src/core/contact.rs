use crate::domain::model::ContactSubmission;
use crate::domain::ports::SubmissionSink;
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_form_text};
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// How long a front-end should keep the success banner before calling [`ContactForm::dismiss`].
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactSubmission,
    status: FormStatus,
}

/// Holds the form in `Loading` for the duration of one insert. If the submit
/// future is dropped before the insert resolves, the form ends up in the
/// failure state instead of staying busy.
struct InFlight<'a> {
    status: &'a mut FormStatus,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(status: &'a mut FormStatus) -> Self {
        *status = FormStatus::Loading;
        Self {
            status,
            settled: false,
        }
    }

    fn settle(mut self, outcome: FormStatus) {
        *self.status = outcome;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("Contact submission abandoned before the sink answered");
            *self.status = FormStatus::Error(FAILURE_MESSAGE.to_string());
        }
    }
}

impl ContactForm {
    pub fn new(fields: ContactSubmission) -> Self {
        Self {
            fields,
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Loading
    }

    pub fn validate(&self) -> Result<()> {
        let f = &self.fields;
        validate_form_text("name", &f.name)?;
        validate_email("email", &f.email)?;
        validate_form_text("subject", &f.subject)?;
        validate_form_text("message", &f.message)?;
        Ok(())
    }

    /// One insert of the trimmed fields, no retry. Fields are cleared on
    /// success and kept on failure or cancellation.
    pub async fn submit<S: SubmissionSink + ?Sized>(&mut self, sink: &S) -> &FormStatus {
        if self.is_busy() {
            return &self.status;
        }

        if let Err(e) = self.validate() {
            tracing::debug!("Contact form rejected before submission: {}", e);
            self.status = FormStatus::Error(e.user_friendly_message());
            return &self.status;
        }

        let payload = self.fields.trimmed();
        let in_flight = InFlight::begin(&mut self.status);

        match sink.insert(&payload).await {
            Ok(()) => {
                tracing::info!("Contact submission stored");
                in_flight.settle(FormStatus::Success(SUCCESS_MESSAGE.to_string()));
                self.fields = ContactSubmission::default();
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                in_flight.settle(FormStatus::Error(FAILURE_MESSAGE.to_string()));
            }
        }

        &self.status
    }

    /// Clears a finished banner. Has no effect while idle or loading.
    pub fn dismiss(&mut self) {
        if matches!(self.status, FormStatus::Success(_) | FormStatus::Error(_)) {
            self.status = FormStatus::Idle;
        }
    }
}
