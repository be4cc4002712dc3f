use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderName, AUTHORIZATION},
    StatusCode,
};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),
    #[error("invalid value for header '{0}'")]
    InvalidHeaderValue(String),
    #[error("error while retrieving content from server: {0}")]
    Request(#[from] reqwest::Error),
}

/// Text-only GET client bound to a base url.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: Url,
    client: reqwest::Client,
}

impl RestClient {
    pub fn new(base_url: Url, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues a single GET to `{base_url}/{path}?{query}`.
    ///
    /// Returns `Ok(None)` when the server answers with anything but
    /// `200 OK`, or with an empty body. Transport failures are errors.
    pub async fn get_text(
        &self,
        path: &str,
        headers: &BTreeMap<&str, &str>,
        query: &BTreeMap<&str, &str>,
    ) -> Result<Option<String>, TransportError> {
        let url = self.request_url(path, query)?;
        log::debug!("making request to: {}", url);

        let response = self
            .client
            .get(url)
            .headers(header_map(headers)?)
            .send()
            .await?;

        let status = response.status();
        log::info!("received a response with status: {}", status);
        if status != StatusCode::OK {
            return Ok(None);
        }

        let content = response.text().await?;
        Ok((!content.is_empty()).then_some(content))
    }

    fn request_url(&self, path: &str, query: &BTreeMap<&str, &str>) -> Result<Url, TransportError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        ))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

fn header_map(headers: &BTreeMap<&str, &str>) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (&name, &value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::InvalidHeaderValue(name.to_string()))?;
        if name == AUTHORIZATION {
            value.set_sensitive(true);
        }
        map.insert(name, value);
    }
    Ok(map)
}
