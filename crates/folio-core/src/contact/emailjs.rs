//! EmailJS delivery

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::ContactForm;
use crate::config::EmailJsConfig;
use crate::constants::contact::EMAILJS_ENDPOINT;
use crate::constants::http::{CONNECT_TIMEOUT, REQUEST_TIMEOUT, USER_AGENT};
use crate::error::{FolioError, Result};

/// Something that can deliver a contact message
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// EmailJS REST client
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    config: EmailJsConfig,
}

impl EmailJsClient {
    /// Requires all three EmailJS identifiers
    pub fn new(config: EmailJsConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(FolioError::MissingCredentials("emailjs"));
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: EMAILJS_ENDPOINT.to_string(),
            config,
        })
    }

    /// Point at a different endpoint (self-hosted relay, tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        url::Url::parse(&endpoint)?;
        self.endpoint = endpoint;
        Ok(self)
    }

    fn request<'a>(&'a self, form: &'a ContactForm) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                name: form.name.trim(),
                email: form.email.trim(),
                message: &form.message,
            },
        }
    }
}

#[async_trait]
impl EmailTransport for EmailJsClient {
    async fn send(&self, form: &ContactForm) -> Result<()> {
        debug!(endpoint = %self.endpoint, "Sending contact message");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request(form))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Status {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }
        Ok(())
    }
}
