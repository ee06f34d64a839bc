use crate::config::{ApiKey, ClassifierConfig};
use crate::error::{ClassifierError, Result};
use crate::http::payload::GenerateContentRequest;
use crate::prompt::{build_prompt, response_schema};
use crate::traits::RequestBuilder;
use reqwest::{Client, Request};
use url::Url;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Implementation of RequestBuilder trait
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    endpoint: Url,
    api_key: ApiKey,
}

impl RequestBuilderImpl {
    /// Create a new request builder for the configured model endpoint
    pub fn new(client: Client, config: &ClassifierConfig, api_key: ApiKey) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint()).map_err(|e| {
            ClassifierError::invalid_config(format!("Invalid model endpoint: {}", e))
        })?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RequestBuilder for RequestBuilderImpl {
    fn build_request(&self, email_content: &str) -> Result<Request> {
        let payload =
            GenerateContentRequest::json_completion(build_prompt(email_content), response_schema());

        self.client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&payload)
            .build()
            .map_err(Into::into)
    }
}
