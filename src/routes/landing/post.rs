use crate::{
    app_state::AppState,
    domain::{SignupForm, SignupRejection},
    mailing_list::{MailingList, MailingListError},
};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Serialize;

#[tracing::instrument(
    name = "Adding a new waitlist signup",
    skip(app_state, fields),
    fields(signup_email = tracing::field::Empty)
)]
pub(super) async fn signup(
    State(app_state): State<AppState>,
    fields: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<SignupResponse>, SignupError> {
    let Form(fields) = fields.map_err(SignupError::InvalidForm)?;
    register_signup(app_state.mailing_list.as_ref(), SignupForm::from_iter(fields)).await?;

    Ok(Json(SignupResponse::succeeded()))
}

/// Validates the form and hands the email to the mailing list. At most one
/// call reaches `mailing_list`, and only for a non-bot with an email.
pub async fn register_signup(
    mailing_list: &dyn MailingList,
    form: SignupForm,
) -> Result<(), SignupError> {
    let email = form.validate()?;
    tracing::Span::current().record("signup_email", &tracing::field::display(&email));

    mailing_list
        .create_contact(&email)
        .await
        .map_err(|e| match e {
            MailingListError::Rejected(message) => SignupError::ProviderError(message),
            MailingListError::UnexpectedError(e) => SignupError::UnexpectedError(e),
        })
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SignupResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SignupResponse {
    fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("No bots allowed")]
    BotRejected,
    #[error("Email is required")]
    MissingEmail,
    #[error("{0}")]
    ProviderError(String),
    #[error("Something went wrong")]
    UnexpectedError(#[source] anyhow::Error),
    #[error("{0}")]
    InvalidForm(FormRejection),
}

impl From<SignupRejection> for SignupError {
    fn from(rejection: SignupRejection) -> Self {
        match rejection {
            SignupRejection::Bot => Self::BotRejected,
            SignupRejection::MissingEmail => Self::MissingEmail,
        }
    }
}

impl SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BotRejected | Self::MissingEmail => StatusCode::BAD_REQUEST,
            Self::ProviderError(_) | Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidForm(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        match &self {
            Self::BotRejected | Self::MissingEmail | Self::InvalidForm(_) => {
                tracing::warn!("{:#?}", self)
            }
            Self::ProviderError(_) | Self::UnexpectedError(_) => tracing::error!("{:#?}", self),
        }

        let body = SignupResponse::failed(self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}
