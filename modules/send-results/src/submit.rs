// Sequential submission of assignment batches.
//
// AssignmentSink is the seam between the executor loop and the HTTP client,
// so tests can record submissions without a server.

use assignment_client::{AssignmentClient, AssignmentError, TeamAssignment};
use async_trait::async_trait;
use serde_json::Value;

use crate::batch::AssignmentBatch;
use crate::error::{Result, SendResultsError, SubmissionFailure};

#[async_trait]
pub trait AssignmentSink: Send + Sync {
    /// Where submissions go, for logging.
    fn endpoint(&self) -> &str;

    /// Submit one batch and return the `assignTeams` result.
    async fn assign_teams(
        &self,
        batch: &[TeamAssignment],
    ) -> std::result::Result<Value, AssignmentError>;
}

#[async_trait]
impl AssignmentSink for AssignmentClient {
    fn endpoint(&self) -> &str {
        AssignmentClient::endpoint(self)
    }

    async fn assign_teams(
        &self,
        batch: &[TeamAssignment],
    ) -> std::result::Result<Value, AssignmentError> {
        AssignmentClient::assign_teams(self, batch).await
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitReport {
    pub chunks: usize,
    pub entries: usize,
}

/// Submit `batches` one after another. Each response must be truthy before
/// the next batch is sent; the first failure aborts the run.
pub async fn submit_batches<S: AssignmentSink + ?Sized>(
    sink: &S,
    batches: &[AssignmentBatch<'_>],
) -> Result<SubmitReport> {
    let mut report = SubmitReport::default();

    if batches.is_empty() {
        tracing::warn!("No assignments to submit");
        return Ok(report);
    }

    tracing::info!("Sending data to: {}", sink.endpoint());

    for batch in batches {
        tracing::trace!(chunk = batch.index, data = %batch.argument_literal(), "Chunk contents");

        let fail = |reason: SubmissionFailure| SendResultsError::Submission {
            chunk: batch.index,
            submitted: report.chunks,
            reason,
        };

        let result = sink
            .assign_teams(batch.assignments)
            .await
            .map_err(|e| fail(e.into()))?;
        if !is_truthy(&result) {
            return Err(fail(SubmissionFailure::EmptyResult(result)));
        }

        report.chunks += 1;
        report.entries += batch.len();
        tracing::info!(
            chunk = batch.index,
            entries = batch.len(),
            total = batches.len(),
            "Chunk accepted"
        );
    }

    tracing::info!(chunks = report.chunks, entries = report.entries, "All assignments submitted");
    Ok(report)
}

/// Null, `false`, zero, and empty strings, arrays and objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
