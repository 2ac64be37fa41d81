use std::path::Path;

use assignment_client::TeamAssignment;
use serde_json::Value;

use crate::error::{Result, SendResultsError};

/// Team id to group id correspondence, in the order the input file declares it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentMapping {
    entries: Vec<TeamAssignment>,
}

impl AssignmentMapping {
    /// Read the JSON result file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read(path).map_err(|source| SendResultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: Value =
            serde_json::from_slice(&contents).map_err(|source| SendResultsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mapping = Self::from_json(parsed)?;
        tracing::info!("Successfully parsed JSON ({} entries).", mapping.len());
        Ok(mapping)
    }

    /// Build a mapping from an already parsed document. The root must be an
    /// object whose values are all strings.
    pub fn from_json(value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(SendResultsError::Type(format!(
                    "expected a JSON object at the top level, found {}",
                    kind(&other)
                )))
            }
        };

        let entries = object
            .into_iter()
            .map(|(team_id, group)| match group {
                Value::String(group_id) => Ok(TeamAssignment { team_id, group_id }),
                other => Err(SendResultsError::Type(format!(
                    "group id for team \"{team_id}\" must be a string, found {}",
                    kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TeamAssignment] {
        &self.entries
    }
}

impl FromIterator<TeamAssignment> for AssignmentMapping {
    fn from_iter<I: IntoIterator<Item = TeamAssignment>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
