pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod submit;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use batch::{batches, AssignmentBatch, BATCH_SIZE};
pub use config::AssignmentConfig;
pub use error::{Result, SendResultsError, SubmissionFailure};
pub use input::AssignmentMapping;
pub use submit::{submit_batches, AssignmentSink, SubmitReport};

use std::path::Path;

use assignment_client::AssignmentClient;

/// Load the config and result file, then submit every batch to the
/// configured endpoint.
pub async fn send_results(result_file: &Path, config_path: &Path) -> Result<SubmitReport> {
    let config = AssignmentConfig::load(config_path)?;
    let mapping = AssignmentMapping::load(result_file)?;

    let client =
        AssignmentClient::with_input_type(&config.endpoint, &config.token, &config.input_type);
    let batches = batches(&mapping, BATCH_SIZE)?;
    submit_batches(&client, &batches).await
}
