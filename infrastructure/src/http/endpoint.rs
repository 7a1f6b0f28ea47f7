//! reqwest-backed `POST /chat` client

use async_trait::async_trait;
use tracing::{debug, trace};
use twin_application::{ChatEndpoint, ChatRequest, ChatResponse, EndpointError};

/// Path appended to the configured base URL
const CHAT_PATH: &str = "/chat";

/// Chat endpoint reached over HTTP.
///
/// No timeout is configured: a request stays outstanding until the server
/// answers or the connection drops.
pub struct HttpChatEndpoint {
    client: reqwest::Client,
    chat_url: String,
}

impl HttpChatEndpoint {
    /// Create an endpoint for the service rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            chat_url: format!("{}{}", base_url.trim().trim_end_matches('/'), CHAT_PATH),
        }
    }

    /// Full URL requests are posted to
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, EndpointError> {
        debug!("POST {}", self.chat_url);

        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        let status = response.status();
        trace!("{} answered {}", self.chat_url, status);
        if !status.is_success() {
            return Err(EndpointError::Status {
                code: status.as_u16(),
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| EndpointError::Decode(e.to_string()))
    }
}
