//! In-memory transport for driving the client without a network.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, HttpTransport, RawResponse};

/// Replays queued responses in order and records every request it was sent.
/// Running out of responses is reported as a transport failure.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: RawResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

pub fn json_response(status: u16, body: Value) -> RawResponse {
    RawResponse {
        status,
        status_text: String::new(),
        content_type: Some("application/json; charset=utf-8".to_string()),
        body: body.to_string(),
    }
}

pub fn text_response(status: u16, status_text: &str, body: &str) -> RawResponse {
    RawResponse {
        status,
        status_text: status_text.to_string(),
        content_type: Some("text/html".to_string()),
        body: body.to_string(),
    }
}

/// A stored hackathon as the service would return it.
pub fn hackathon_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "hackName": name,
        "officialLink": "https://example.com",
        "appliedDate": "2025-01-05T00:00:00.000Z",
        "lastDateToApply": "2025-01-20T00:00:00.000Z",
        "status": "Applied",
        "teamType": "Solo",
        "techStack": ["Rust"],
        "createdAt": "2025-01-05T10:00:00.000Z"
    })
}
