#![allow(dead_code)]

use kanka::{Client, Config, HttpRequest, HttpResponse, Result, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport answering from a queue of canned responses.
///
/// The last queued response is repeated once the others are used up.
/// Clones share the queue and the request log.
#[derive(Clone, Default)]
pub struct StubTransport {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubTransport {
    pub fn new(status: u16, body: &str) -> Self {
        StubTransport::default().then(status, body)
    }

    /// Queue another response
    pub fn then(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub fn client(&self) -> Client {
        Client::with_transport("test-token", Config::default(), self.clone())
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let mut responses = self.responses.lock().unwrap();
        let response = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };
        Ok(response.unwrap_or(HttpResponse {
            status: 200,
            body: b"{}".to_vec(),
        }))
    }
}

/// Body of a listing with the given items and sync time
pub fn list_body(items: serde_json::Value) -> String {
    serde_json::json!({
        "data": items,
        "sync": "2019-08-20T16:05:57.000000Z",
    })
    .to_string()
}

/// Body of a single-resource response
pub fn data_body(item: serde_json::Value) -> String {
    serde_json::json!({ "data": item }).to_string()
}
