//! Client for the site's AJAX endpoints
//!
//! Only the like toggle goes over the wire; everything else the page script
//! does is local state.

use crate::http::HttpError;
use crate::page::{get_cookie, LikeButton, LikeResponse, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
use crate::Result;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Connection settings for the review site
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site root, e.g. `https://taproom.beer`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Cookie whose value goes into the CSRF header
    pub csrf_cookie_name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            csrf_cookie_name: CSRF_COOKIE_NAME.to_string(),
        }
    }
}

/// HTTP client for the review site
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: ReqwestClient,
    config: SiteConfig,
}

impl SiteClient {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| crate::Error::Http {
                message: format!("Failed to create HTTP client: {}", e),
                status_code: None,
                source: Some(anyhow::Error::new(e)),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Endpoint toggling the current user's like on a review
    pub fn like_url(&self, review_id: u64) -> String {
        format!(
            "{}/reviews/like/{}/",
            self.config.base_url.trim_end_matches('/'),
            review_id
        )
    }

    /// POST the like toggle for a review
    ///
    /// `cookie_header` is the browser's cookie string; it is forwarded as-is
    /// and the value of the configured CSRF cookie goes into the CSRF header.
    pub async fn toggle_like(&self, review_id: u64, cookie_header: &str) -> Result<LikeResponse> {
        let url = self.like_url(review_id);
        debug!(review_id, url = %url, "Toggling like");

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json");

        if !cookie_header.trim().is_empty() {
            request = request.header(COOKIE, cookie_header);
        }
        match get_cookie(cookie_header, &self.config.csrf_cookie_name) {
            Some(token) => request = request.header(CSRF_HEADER_NAME, token),
            None => warn!(review_id, "No CSRF token in cookies; the site will likely reject the request"),
        }

        let response = request
            .send()
            .await
            .map_err(HttpError::from_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::from_response(response).await.into());
        }

        let body = response
            .json::<LikeResponse>()
            .await
            .map_err(|e| HttpError::decode(status, format!("Unexpected like response: {}", e)))?;

        debug!(review_id, liked = body.liked, like_count = body.like_count, "Like toggled");
        Ok(body)
    }

    /// Drive a [`LikeButton`] through one click
    ///
    /// On failure the button gets its previous icon back and the error is
    /// returned after being logged.
    pub async fn toggle_button(&self, button: &mut LikeButton, cookie_header: &str) -> Result<()> {
        button.begin();
        match self.toggle_like(button.review_id, cookie_header).await {
            Ok(response) => {
                button.apply(response);
                Ok(())
            }
            Err(e) => {
                error!(review_id = button.review_id, error = %e, "Like request failed");
                button.revert();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::LikeIcon;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SiteClient {
        SiteClient::new(SiteConfig {
            base_url: format!("{}/", server.uri()),
            timeout_secs: 5,
            ..SiteConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_like_url() {
        let client = SiteClient::new(SiteConfig {
            base_url: "https://taproom.beer/".to_string(),
            ..SiteConfig::default()
        })
        .unwrap();
        assert_eq!(client.like_url(42), "https://taproom.beer/reviews/like/42/");
    }

    #[tokio::test]
    async fn test_toggle_like_sends_csrf_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reviews/like/7/"))
            .and(header("X-CSRFToken", "tok123"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"liked": true, "like_count": 12})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .toggle_like(7, "sessionid=abc; csrftoken=tok123")
            .await
            .unwrap();
        assert_eq!(response, LikeResponse { liked: true, like_count: 12 });
    }

    #[tokio::test]
    async fn test_toggle_button_applies_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reviews/like/3/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"liked": false, "like_count": 0})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut button = LikeButton::new(3, true, Some(1));
        client.toggle_button(&mut button, "csrftoken=x").await.unwrap();

        assert!(!button.is_liked());
        assert_eq!(button.like_count(), Some(0));
        assert_eq!(button.icon(), LikeIcon::Heart);
    }

    #[tokio::test]
    async fn test_toggle_button_reverts_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "CSRF failed"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut button = LikeButton::new(9, true, Some(5));
        let err = client.toggle_button(&mut button, "").await.unwrap_err();

        assert!(err.to_string().contains("CSRF failed"));
        assert_eq!(button.icon(), LikeIcon::HeartFill);
        assert!(button.is_liked());
        assert_eq!(button.like_count(), Some(5));
        assert!(!button.is_pending());
    }

    #[tokio::test]
    async fn test_custom_csrf_cookie_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("X-CSRFToken", "fromcustom"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"liked": true, "like_count": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteClient::new(SiteConfig {
            base_url: server.uri(),
            csrf_cookie_name: "taproom_csrf".to_string(),
            ..SiteConfig::default()
        })
        .unwrap();
        client
            .toggle_like(2, "csrftoken=ignored; taproom_csrf=fromcustom")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.toggle_like(1, "csrftoken=x").await.unwrap_err();
        assert!(err.to_string().contains("Unexpected like response"));
    }
}
