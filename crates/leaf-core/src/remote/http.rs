//! HTTP client for the notes API.
//!
//! Routes are relative to the configured base URL:
//! `GET/POST /api/notes` and `PUT/DELETE /api/notes/{id}`.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::NoteCollection;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NoteInput};
use crate::util::compact_text;

const NOTES_PATH: &str = "/api/notes";

#[derive(Clone)]
pub struct HttpNoteCollection {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNoteCollection {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.api_base_url.clone(),
            client: reqwest::Client::builder().build()?,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{NOTES_PATH}", self.base_url)
    }

    fn item_url(&self, id: &NoteId) -> String {
        format!(
            "{}{NOTES_PATH}/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }
}

impl std::fmt::Debug for HttpNoteCollection {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HttpNoteCollection")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NoteCollection for HttpNoteCollection {
    async fn list(&self) -> Result<Vec<Note>> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);
        read_json(send(self.client.get(&url)).await?).await
    }

    async fn create(&self, input: &NoteInput) -> Result<Note> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);
        read_json(send(self.client.post(&url).json(input)).await?).await
    }

    async fn update(&self, id: &NoteId, input: &NoteInput) -> Result<Note> {
        let url = self.item_url(id);
        tracing::debug!("PUT {}", url);
        read_json(send(self.client.put(&url).json(input)).await?).await
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);
        send(self.client.delete(&url)).await?;
        Ok(())
    }
}

/// Send a request and turn non-success statuses into [`Error::Api`].
async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.header("Accept", "application/json").send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            message: parse_api_error(status, &body),
        });
    }

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return message.trim().to_string();
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed
    }
}
