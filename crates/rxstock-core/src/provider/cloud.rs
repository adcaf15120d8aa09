//! Cloud extraction service client.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use tracing::{debug, info};

use super::{DocumentProvider, ExtractedDocument, ProcessingMode, Result};
use crate::error::ProviderError;
use crate::models::config::ProviderConfig;

/// Output types understood by the extraction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputType {
    Markdown,
    Text,
    Html,
    SpecifiedFields,
    Json,
}

impl OutputType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Text => "text",
            Self::Html => "html",
            Self::SpecifiedFields => "specified-fields",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Option<serde_json::Value>,
    message: Option<String>,
}

/// Shared client state; one per process.
struct Session {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

/// Provider backed by the cloud extraction service.
pub struct CloudProvider {
    session: Arc<Session>,
    mode: ProcessingMode,
}

impl CloudProvider {
    /// Build a provider. An empty or missing API key selects free mode.
    pub fn new(config: &ProviderConfig, api_key: Option<&str>) -> Result<Self> {
        let mode = ProcessingMode::for_api_key(api_key);

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| ProviderError::Init(e.to_string()))?;

        match mode {
            ProcessingMode::CloudAuthenticated => info!("Initialized cloud extraction with API key"),
            _ => info!("Initialized cloud extraction in free mode"),
        }

        let api_key = match mode {
            ProcessingMode::CloudAuthenticated => api_key.map(str::to_string),
            _ => None,
        };

        Ok(Self {
            session: Arc::new(Session {
                client,
                endpoint: config.endpoint.clone(),
                api_key,
            }),
            mode,
        })
    }
}

impl DocumentProvider for CloudProvider {
    fn mode(&self) -> ProcessingMode {
        self.mode
    }

    fn open(&self, path: &Path) -> Result<Box<dyn ExtractedDocument>> {
        let data = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();

        debug!("Read {} bytes from {}", data.len(), path.display());

        Ok(Box::new(CloudDocument {
            session: Arc::clone(&self.session),
            file_name,
            data,
        }))
    }
}

/// A document uploaded once per requested output type.
struct CloudDocument {
    session: Arc<Session>,
    file_name: String,
    data: Vec<u8>,
}

impl CloudDocument {
    fn request(&self, output: OutputType, fields: Option<&[&str]>) -> Result<serde_json::Value> {
        let part = multipart::Part::bytes(self.data.clone())
            .file_name(self.file_name.clone())
            .mime_str("application/pdf")
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let mut form = multipart::Form::new()
            .part("file", part)
            .text("output_type", output.as_str());

        if let Some(fields) = fields {
            let encoded = serde_json::to_string(fields)
                .map_err(|e| ProviderError::Request(e.to_string()))?;
            form = form.text("specified_fields", encoded);
        }

        let mut request = self.session.client.post(&self.session.endpoint).multipart(form);
        if let Some(key) = &self.session.api_key {
            request = request.bearer_auth(key);
        }

        debug!("Requesting {} output", output.as_str());
        let response = request
            .send()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ApiResponse = response
            .json()
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        parsed.content.ok_or_else(|| {
            ProviderError::InvalidResponse(
                parsed.message.unwrap_or_else(|| "response has no content".to_string()),
            )
        })
    }

    fn render(&self, output: OutputType) -> Result<String> {
        match self.request(output, None)? {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Null => Ok(String::new()),
            other => Ok(other.to_string()),
        }
    }
}

impl ExtractedDocument for CloudDocument {
    fn markdown(&self) -> Result<String> {
        self.render(OutputType::Markdown)
    }

    fn text(&self) -> Result<String> {
        self.render(OutputType::Text)
    }

    fn html(&self) -> Result<String> {
        self.render(OutputType::Html)
    }

    fn fields(&self, fields: Option<&[&str]>) -> Result<serde_json::Value> {
        let value = match fields {
            Some(names) => self.request(OutputType::SpecifiedFields, Some(names))?,
            None => self.request(OutputType::Json, None)?,
        };

        // Some responses carry the JSON document as an encoded string
        match value {
            serde_json::Value::String(s) => {
                Ok(serde_json::from_str(&s).unwrap_or(serde_json::Value::String(s)))
            }
            other => Ok(other),
        }
    }
}
