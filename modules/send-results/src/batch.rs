use assignment_client::TeamAssignment;

use crate::error::{Result, SendResultsError};
use crate::input::AssignmentMapping;

/// Maximum number of assignments submitted per mutation.
pub const BATCH_SIZE: usize = 100;

/// A contiguous slice of the mapping, submitted as one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentBatch<'a> {
    pub index: usize,
    pub assignments: &'a [TeamAssignment],
}

impl AssignmentBatch<'_> {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Comma-joined `{teamId:"..",groupId:".."}` literals, the inline form of
    /// the `data` argument. String contents are escaped.
    pub fn argument_literal(&self) -> String {
        self.assignments
            .iter()
            .map(|a| {
                format!(
                    "{{teamId:{},groupId:{}}}",
                    string_literal(&a.team_id),
                    string_literal(&a.group_id)
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Split `mapping` into consecutive batches of at most `size` entries, in
/// mapping order.
pub fn batches(mapping: &AssignmentMapping, size: usize) -> Result<Vec<AssignmentBatch<'_>>> {
    if size == 0 {
        return Err(SendResultsError::Config("batch size must be at least 1".into()));
    }

    Ok(mapping
        .entries()
        .chunks(size)
        .enumerate()
        .map(|(index, assignments)| AssignmentBatch { index, assignments })
        .collect())
}

// JSON string escaping is a subset of GraphQL's StringValue grammar.
fn string_literal(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
