use std::collections::BTreeMap;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problem document returned by the service on 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Error)]
pub enum EchoError {
    /// The request never completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service rejected the message.
    #[error("rejected ({}): {}", .0.status, .0.title)]
    Rejected(Problem),
    /// The service answered with something other than a problem document.
    #[error("unexpected status {status}: {body}")]
    Unexpected { status: StatusCode, body: String },
}

pub struct PingClient {
    client: Client,
    base_url: String,
}

impl PingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/ping", self.base_url)
    }

    /// `GET /ping`; the service replies "Pong!".
    pub async fn ping(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(self.url())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    /// `POST /ping` with `message` as a JSON string.
    pub async fn echo(&self, message: &str) -> Result<String, EchoError> {
        let resp = self.client.post(self.url()).json(message).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if status.is_success() {
            return Ok(text);
        }

        match serde_json::from_str::<Problem>(&text) {
            Ok(problem) => Err(EchoError::Rejected(problem)),
            Err(_) => Err(EchoError::Unexpected { status, body: text }),
        }
    }

    /// `POST /ping` with a raw body, `None` for no body at all.
    pub async fn post_raw(&self, body: Option<String>) -> Result<Response, reqwest::Error> {
        let mut req = self
            .client
            .post(self.url())
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.body(body);
        }
        req.send().await
    }
}
