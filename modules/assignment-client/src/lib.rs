pub mod error;
pub mod types;

pub use error::{AssignmentError, Result};
pub use types::{GraphQlResponse, TeamAssignment};

use serde_json::Value;
use types::{AssignTeamsVariables, GraphQlRequest};

/// Input object type the `data` list is declared with when no override is configured.
pub const DEFAULT_INPUT_TYPE: &str = "TeamAssignmentInput";

const OPERATION_NAME: &str = "AssignTeams";
const MUTATION_FIELD: &str = "assignTeams";

/// Parameterized `assignTeams` mutation. Assignments travel as the `$data`
/// variable and are never spliced into the document.
pub fn assign_teams_document(input_type: &str) -> String {
    format!(
        "mutation {OPERATION_NAME}($data: [{input_type}!]!) {{ {MUTATION_FIELD}(data: $data) }}"
    )
}

pub struct AssignmentClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
    input_type: String,
    document: String,
}

impl AssignmentClient {
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self::with_input_type(endpoint, token, DEFAULT_INPUT_TYPE)
    }

    pub fn with_input_type(endpoint: &str, token: &str, input_type: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            input_type: input_type.to_string(),
            document: assign_teams_document(input_type),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one `assignTeams` mutation for `batch` and return the field's value.
    ///
    /// Transport failures, non-2xx statuses, GraphQL `errors` and a missing
    /// `data` object are all errors. Judging whether the returned value is an
    /// acceptable result is left to the caller.
    pub async fn assign_teams(&self, batch: &[TeamAssignment]) -> Result<Value> {
        let body = GraphQlRequest {
            query: &self.document,
            operation_name: OPERATION_NAME,
            variables: AssignTeamsVariables { data: batch },
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            entries = batch.len(),
            "Posting assignTeams mutation"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AssignmentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = resp.bytes().await?;
        let gql: GraphQlResponse = serde_json::from_slice(&bytes)?;
        extract_field(gql, MUTATION_FIELD).map_err(|err| self.flag_input_type(err))
    }

    // Variable validation errors name the declared type; surface those separately
    // so callers can point at the type override.
    fn flag_input_type(&self, err: AssignmentError) -> AssignmentError {
        match err {
            AssignmentError::GraphQl(message) if message.contains(&self.input_type) => {
                AssignmentError::InputType {
                    input_type: self.input_type.clone(),
                    message,
                }
            }
            other => other,
        }
    }
}

fn extract_field(resp: GraphQlResponse, field: &'static str) -> Result<Value> {
    if let Some(summary) = resp.error_summary() {
        return Err(AssignmentError::GraphQl(summary));
    }

    match resp.data {
        Some(Value::Object(mut data)) => {
            data.remove(field).ok_or(AssignmentError::MissingData(field))
        }
        _ => Err(AssignmentError::MissingData(field)),
    }
}
