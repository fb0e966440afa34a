//! Posting a collected signup to the form-handling endpoint.
//!
//! One user-initiated submit makes at most one request. The outcome is
//! reported through a [`Notifier`]; on success the form is cleared, on
//! failure it is left exactly as the user set it so they can try again.

use async_trait::async_trait;
use reqwest::{Client, Url};

use callboard_core::model::FormResult;
use callboard_core::SignupForm;

use crate::error::{ClientError, ClientResult};

/// Field carrying the pretty-printed [`FormResult`].
pub const FORM_DATA_FIELD: &str = "form-data";
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const FAILURE_MESSAGE: &str = "There was an error submitting the form. Please try again.";

/// Shows a blocking message to the user.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Accepts a URL-encoded form body.
#[async_trait]
pub trait FormEndpoint: Send + Sync {
    /// Posts `fields` once. Any non-success answer is an error.
    async fn post_form(&self, fields: &[(String, String)]) -> ClientResult<()>;
}

/// A [`FormEndpoint`] reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    http: Client,
    url: Url,
}

impl HttpEndpoint {
    pub fn new(url: Url) -> ClientResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("callboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FormEndpoint for HttpEndpoint {
    async fn post_form(&self, fields: &[(String, String)]) -> ClientResult<()> {
        // `form` sets Content-Type: application/x-www-form-urlencoded
        let response = self
            .http
            .post(self.url.clone())
            .form(fields)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// The endpoint accepted the submission and the form was cleared.
    Submitted,
    /// The request failed; the form is unchanged.
    Failed,
}

/// The form's native fields with the serialized result set as
/// `form-data`, replacing any existing field of that name.
pub fn submission_fields(
    form: &SignupForm,
    result: &FormResult,
) -> ClientResult<Vec<(String, String)>> {
    let payload = result.to_pretty_json()?;
    let mut fields = form.form_fields();
    match fields.iter_mut().find(|(name, _)| name == FORM_DATA_FIELD) {
        Some(field) => field.1 = payload,
        None => fields.push((FORM_DATA_FIELD.to_string(), payload)),
    }
    Ok(fields)
}

/// Sends signups to one endpoint.
#[derive(Debug, Clone)]
pub struct Submitter<E> {
    endpoint: E,
}

impl<E: FormEndpoint> Submitter<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// The user-initiated submit: validate, collect, then submit.
    ///
    /// An invalid form is reported with the validation message and never
    /// reaches the endpoint.
    pub async fn handle(&self, form: &mut SignupForm, notifier: &mut dyn Notifier) -> SubmitOutcome {
        let validation = form.validate();
        if !validation.valid {
            notifier.alert(&validation.message);
            return SubmitOutcome::Invalid;
        }

        let result = form.collect();
        log::info!(
            "Submitting availability for {:?} across {} performances",
            result.name,
            result.performances.len()
        );
        if let Ok(json) = result.to_pretty_json() {
            log::debug!("Form results: {json}");
        }

        self.submit(form, &result, notifier).await
    }

    /// Posts `result` once and reports the outcome.
    ///
    /// Success clears the name and every option on every card; failure
    /// leaves the form untouched.
    pub async fn submit(
        &self,
        form: &mut SignupForm,
        result: &FormResult,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let sent = match submission_fields(form, result) {
            Ok(fields) => self.endpoint.post_form(&fields).await,
            Err(e) => Err(e),
        };

        match sent {
            Ok(()) => {
                log::info!("Form submitted successfully");
                notifier.alert(SUCCESS_MESSAGE);
                form.clear();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                log::error!("Error submitting form: {e}");
                notifier.alert(FAILURE_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}
