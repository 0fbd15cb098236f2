use crate::{
    config::Config,
    error::{Error, Result},
};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Shared HTTP session used by every endpoint group.
///
/// Holds the connection settings and the underlying [`reqwest::Client`].
/// All request construction happens here; endpoints only supply the method,
/// path, query params and body.
pub struct Session {
    base_url: String,
    apikey: String,
    organisation: Option<String>,
    client: Client,
}

impl Session {
    /// Create a new Session from the given config
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            apikey: config.apikey.clone(),
            organisation: config.organisation.clone(),
            client,
        })
    }

    /// Issue a request and decode the JSON response body
    pub(crate) async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        json: Option<Value>,
    ) -> Result<T> {
        let response = self.send(method, path, params, json).await?;

        Ok(response.json::<T>().await?)
    }

    /// Issue a request and discard the response body
    pub(crate) async fn make_request_empty(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        json: Option<Value>,
    ) -> Result<()> {
        self.send(method, path, params, json).await?;

        Ok(())
    }

    /// Build, authenticate and send a request, surfacing non-2xx as errors
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        json: Option<Value>,
    ) -> Result<Response> {
        tracing::debug!("{} {}{}", method, self.base_url, path);

        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.apikey);

        if let Some(organisation) = &self.organisation {
            request = request.header("X-Organisation", organisation);
        }

        if let Some(params) = params {
            request = request.query(params);
        }

        if let Some(json) = &json {
            request = request.json(json);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        Ok(response)
    }
}
