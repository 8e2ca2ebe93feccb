use std::io::Read;

use serde::Deserialize;
use serde_json::json;

use crate::utils::http;

use super::{Classifier, ClassifyError, Prediction};

/// The Hugging Face hosted inference API
pub static DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models";

const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Connection options for the hosted inference API
#[derive(Clone, Debug)]
pub struct Options {
    /// The base URL, with the model name appended per request
    pub api_url: String,

    /// An optional bearer token
    pub api_token: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
        }
    }
}

/// A classifier that calls a text-classification model on the hosted inference API
pub struct Hosted {
    /// The model to call (e.g., "tnlanh99/phobert-news-classification")
    model_name: String,

    options: Options,
}

/// Single inputs come back either nested in a batch or flat, depending on the API version
#[derive(Deserialize)]
#[serde(untagged)]
enum Response {
    Batch(Vec<Vec<Prediction>>),
    Single(Vec<Prediction>),
}

impl Hosted {
    /// Create a new hosted classifier
    pub fn new(model_name: &str, options: Options) -> Self {
        Self {
            model_name: model_name.to_string(),
            options,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/{}",
            self.options.api_url.trim_end_matches('/'),
            self.model_name
        )
    }
}

impl Classifier for Hosted {
    fn classify(&self, text: &str, top_k: usize) -> Result<Vec<Prediction>, ClassifyError> {
        let mut request = http::agent()
            .post(&self.url())
            .set("Accept", "application/json");

        if let Some(token) = &self.options.api_token {
            request = request.set("Authorization", &format!("Bearer {}", token.trim()));
        }

        let body = json!({
            "inputs": text,
            "parameters": { "top_k": top_k, "truncation": true },
            "options": { "wait_for_model": true },
        });

        let response = match request.send_json(body) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = read_body(response).unwrap_or_else(|e| e.to_string());
                return Err(ClassifyError::Status { status, body });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(ClassifyError::Transport(err.to_string()));
            }
        };

        let body = read_body(response)?;
        let parsed: Response =
            serde_json::from_str(&body).map_err(|e| ClassifyError::Json(e.to_string()))?;

        let predictions = match parsed {
            Response::Batch(mut batch) if !batch.is_empty() => batch.swap_remove(0),
            Response::Batch(_) => Vec::new(),
            Response::Single(predictions) => predictions,
        };

        Ok(predictions)
    }
}

fn read_body(response: ureq::Response) -> Result<String, ClassifyError> {
    read_limited(response.into_reader(), MAX_RESPONSE_BYTES)
}

/// Read at most `limit` bytes, failing instead of truncating when the body is larger
fn read_limited(reader: impl Read, limit: usize) -> Result<String, ClassifyError> {
    let mut bytes = Vec::new();

    reader
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ClassifyError::Transport(e.to_string()))?;

    if bytes.len() > limit {
        return Err(ClassifyError::TooLarge { limit });
    }

    String::from_utf8(bytes).map_err(|e| ClassifyError::Json(e.to_string()))
}
