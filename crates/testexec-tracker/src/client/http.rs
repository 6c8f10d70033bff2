//! HTTP layer: auth header, JSON bodies, status mapping.
//!
//! This is the ONLY place for status code handling. client/mod.rs never
//! interprets status codes.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::BearerToken;
use crate::error::{TrackerError, TrackerResult};

use super::helpers::{parse_error_body, resource_from_url};

/// HTTP backend for making requests (holds reqwest client, base URL, token).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: BearerToken,
}

impl HttpBackend {
    /// `{base}/rest/api/2/{segments...}`. Each segment is percent-encoded on its
    /// own, so a `/`, `?` or `#` inside an issue key stays part of that segment.
    pub(crate) fn api_url(&self, segments: &[&str]) -> TrackerResult<String> {
        let mut url = Url::parse(&self.base_url).map_err(|e| TrackerError::Config {
            message: format!("SERVER is not a valid URL ('{}'): {}", self.base_url, e),
        })?;
        {
            let mut path = url.path_segments_mut().map_err(|()| TrackerError::Config {
                message: format!("SERVER cannot take a path ('{}')", self.base_url),
            })?;
            path.pop_if_empty()
                .extend(["rest", "api", "2"])
                .extend(segments);
        }
        Ok(url.into())
    }

    /// GET and decode a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> TrackerResult<T> {
        let response = self.request(Method::GET, segments, None).await?;
        decode(response, segments).await
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &serde_json::Value,
    ) -> TrackerResult<T> {
        let response = self.request(Method::POST, segments, Some(body)).await?;
        decode(response, segments).await
    }

    /// Send a JSON body where the tracker answers 204 No Content.
    pub(crate) async fn send_no_content(
        &self,
        method: Method,
        segments: &[&str],
        body: &serde_json::Value,
    ) -> TrackerResult<()> {
        self.request(method, segments, Some(body)).await?;
        Ok(())
    }

    /// Make a single request and map non-2xx statuses to errors.
    pub(crate) async fn request(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&serde_json::Value>,
    ) -> TrackerResult<reqwest::Response> {
        let url = self.api_url(segments)?;
        debug!(method = %method, url = %url, "tracker request");

        let mut request = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, self.token.header_value())
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %url, "tracker response");

        match status.as_u16() {
            200..=299 => Ok(response),

            401 | 403 => {
                let body = response.text().await.unwrap_or_default();
                let detail = parse_error_body(&body);
                Err(TrackerError::Unauthorized {
                    message: if detail.is_empty() {
                        format!("HTTP {}: invalid or expired token", status.as_u16())
                    } else {
                        format!("HTTP {}: {}", status.as_u16(), detail)
                    },
                })
            }

            404 => Err(TrackerError::NotFound {
                resource: resource_from_url(&url),
            }),

            400 => {
                let body = response.text().await.unwrap_or_default();
                let detail = parse_error_body(&body);
                Err(TrackerError::Rejected {
                    message: if detail.is_empty() {
                        "HTTP 400".to_string()
                    } else {
                        detail
                    },
                })
            }

            _ => {
                let body = response.text().await.unwrap_or_default();
                let detail = parse_error_body(&body);
                Err(TrackerError::Network {
                    message: if detail.is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        format!("HTTP {}: {}", status.as_u16(), detail)
                    },
                })
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    segments: &[&str],
) -> TrackerResult<T> {
    let text = response.text().await.map_err(|e| TrackerError::Network {
        message: format!("failed to read response body: {}", e),
    })?;
    serde_json::from_str(&text).map_err(|e| TrackerError::InvalidResponse {
        message: format!("failed to parse {} response: {}", segments.join("/"), e),
    })
}
