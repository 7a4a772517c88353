use crate::{
    domain::WaitlistEmail,
    mailing_list::{MailingList, MailingListError},
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REJECTED_WITHOUT_MESSAGE: &str = "Failed to create contact";

/// HTTP client for the Loops contacts API.
#[derive(Clone, Debug)]
pub struct LoopsClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl LoopsClient {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl MailingList for LoopsClient {
    #[tracing::instrument(name = "Create Loops contact", skip(self))]
    async fn create_contact(&self, email: &WaitlistEmail) -> Result<(), MailingListError> {
        let url = format!("{}/api/v1/contacts/create", &self.base_url);
        let request_body = CreateContactRequest {
            email: email.as_ref(),
        };

        // Loops reports refusals as JSON with a 4xx status, so the body is
        // read regardless of the status code.
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .context("Failed to send create contact request to Loops")?;

        let status = response.status();
        let response_body: CreateContactResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to read Loops create contact response ({status})"))?;

        if response_body.success {
            tracing::info!(contact_id = ?response_body.id, "Loops contact created");
            Ok(())
        } else {
            Err(MailingListError::Rejected(
                response_body
                    .message
                    .unwrap_or_else(|| REJECTED_WITHOUT_MESSAGE.into()),
            ))
        }
    }
}

#[derive(Serialize)]
struct CreateContactRequest<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct CreateContactResponse {
    success: bool,
    id: Option<String>,
    message: Option<String>,
}
