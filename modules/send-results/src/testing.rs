// Test mock for the submission loop.
//
// MockSink records every batch it receives and answers from a queue of
// scripted responses. Once the queue is drained it answers `true`.

use std::collections::VecDeque;
use std::sync::Mutex;

use assignment_client::{AssignmentError, TeamAssignment};
use async_trait::async_trait;
use serde_json::Value;

use crate::submit::AssignmentSink;

pub struct MockSink {
    endpoint: String,
    responses: Mutex<VecDeque<std::result::Result<Value, AssignmentError>>>,
    received: Mutex<Vec<Vec<TeamAssignment>>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            endpoint: "http://mock/graphql".to_string(),
            responses: Mutex::new(VecDeque::new()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, value: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(value));
        self
    }

    pub fn fail(self, err: AssignmentError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Batches received so far, in submission order.
    pub fn received(&self) -> Vec<Vec<TeamAssignment>> {
        self.received.lock().unwrap().clone()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssignmentSink for MockSink {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn assign_teams(
        &self,
        batch: &[TeamAssignment],
    ) -> std::result::Result<Value, AssignmentError> {
        self.received.lock().unwrap().push(batch.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Bool(true)))
    }
}
