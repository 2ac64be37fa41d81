use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- Mutation input ---

/// One team-to-group assignment, serialized as the `data` list element of
/// the `assignTeams` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
}

impl TeamAssignment {
    pub fn new(team_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            group_id: group_id.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssignTeamsVariables<'a> {
    pub data: &'a [TeamAssignment],
}

// --- GraphQL envelope ---

/// POST body for a GraphQL-over-HTTP request.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

impl GraphQlResponse {
    /// Joined error messages, or `None` when the response carried no errors.
    pub fn error_summary(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|e| !e.is_empty())?;
        Some(
            errors
                .iter()
                .map(|e| match &e.path {
                    Some(path) if !path.is_empty() => {
                        let path: Vec<String> = path
                            .iter()
                            .map(|seg| match seg {
                                Value::String(s) => s.clone(),
                                other => other.to_string(),
                            })
                            .collect();
                        format!("{} (at {})", e.message, path.join("."))
                    }
                    _ => e.message.clone(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assignment_serializes_with_graphql_field_names() {
        let value = serde_json::to_value(TeamAssignment::new("team1", "groupA")).unwrap();
        assert_eq!(value, json!({"teamId": "team1", "groupId": "groupA"}));
    }

    #[test]
    fn error_summary_joins_messages_with_paths() {
        let resp: GraphQlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [
                {"message": "unknown team", "path": ["assignTeams", 0]},
                {"message": "forbidden"}
            ]
        }))
        .unwrap();

        assert_eq!(
            resp.error_summary().as_deref(),
            Some("unknown team (at assignTeams.0); forbidden")
        );
    }

    #[test]
    fn empty_errors_array_is_not_an_error() {
        let resp: GraphQlResponse =
            serde_json::from_value(json!({"data": {"assignTeams": true}, "errors": []})).unwrap();
        assert!(resp.error_summary().is_none());
    }
}
