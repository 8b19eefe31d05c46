//! Product store implementation using reqwest.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{ApiConfig, AppError, NewProduct, Operation, Product, ProductId, ProductPatch};
use crate::ports::ProductStore;

const DEFAULT_STATUS_MESSAGE: &str = "Request failed";

/// HTTP transport for a json-server style collection endpoint.
///
/// One request per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpProductStore {
    collection_url: Url,
    client: Client,
}

impl HttpProductStore {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        let collection_url = collection_url(&config.base_url, &config.collection)?;
        Ok(Self { collection_url, client })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn item_url(&self, id: &ProductId) -> Result<Url, AppError> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid_url(&self.collection_url, "cannot append product id"))?
            .push(id.as_str());
        Ok(url)
    }

    fn search_url(&self, name: &str) -> Url {
        let mut url = self.collection_url.clone();
        url.query_pairs_mut().append_pair("name", name);
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending request");
        self.client.request(method, url)
    }

    fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().map_err(|e| AppError::Api {
            operation,
            status: None,
            message: format!("HTTP request failed: {}", e),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().unwrap_or_default();
        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.trim().to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                format!("{} ({})", DEFAULT_STATUS_MESSAGE, status)
            }
        });

        Err(AppError::Api { operation, status: Some(status.as_u16()), message })
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = self.send(operation, request)?;
        let status = response.status();
        let body_text = response.text().map_err(|e| AppError::Api {
            operation,
            status: Some(status.as_u16()),
            message: format!("Failed to read response: {}", e),
        })?;

        serde_json::from_str(&body_text).map_err(|e| AppError::Api {
            operation,
            status: Some(status.as_u16()),
            message: format!("Failed to parse response: {}", e),
        })
    }
}

impl ProductStore for HttpProductStore {
    fn list(&self) -> Result<Vec<Product>, AppError> {
        let request = self.request(Method::GET, self.collection_url.clone());
        self.send_json(Operation::Load, request)
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Product>, AppError> {
        let request = self.request(Method::GET, self.search_url(name));
        self.send_json(Operation::Search, request)
    }

    fn create(&self, product: &NewProduct) -> Result<Product, AppError> {
        let request = self.request(Method::POST, self.collection_url.clone()).json(product);
        self.send_json(Operation::Create, request)
    }

    fn patch(&self, id: &ProductId, patch: &ProductPatch) -> Result<(), AppError> {
        let request = self.request(Method::PATCH, self.item_url(id)?).json(patch);
        self.send(patch.operation(), request).map(|_| ())
    }

    fn delete(&self, id: &ProductId) -> Result<(), AppError> {
        let request = self.request(Method::DELETE, self.item_url(id)?);
        self.send(Operation::Delete, request).map(|_| ())
    }
}

fn collection_url(base_url: &Url, collection: &str) -> Result<Url, AppError> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| invalid_url(base_url, "cannot be used as a base"))?
        .pop_if_empty()
        .push(collection.trim_matches('/'));
    Ok(url)
}

fn invalid_url(url: &Url, details: &str) -> AppError {
    AppError::InvalidUrl { url: url.to_string(), details: details.to_string() }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
