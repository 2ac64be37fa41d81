use std::fmt;
use std::path::Path;

use assignment_client::DEFAULT_INPUT_TYPE;

use crate::error::{Result, SendResultsError};

pub const ENDPOINT_KEY: &str = "ASSIGNMENT_ENDPOINT";
pub const TOKEN_KEY: &str = "TOKEN";
pub const INPUT_TYPE_KEY: &str = "ASSIGNMENT_INPUT_TYPE";

/// Connection settings for the assignment API, read from a `KEY=value` file.
#[derive(Clone)]
pub struct AssignmentConfig {
    pub endpoint: String,
    pub token: String,
    /// GraphQL input object type of the `data` list elements.
    pub input_type: String,
}

impl AssignmentConfig {
    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SendResultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents)?;
        config.log_keys();
        Ok(config)
    }

    /// Parse `KEY=value` lines. Blank lines, `#`/`;` comments and `[section]`
    /// headers are skipped, unknown keys are ignored and the last occurrence
    /// of a key wins.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut endpoint = None;
        let mut token = None;
        let mut input_type = None;

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with(';')
                || (line.starts_with('[') && line.ends_with(']'))
            {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim() {
                ENDPOINT_KEY => endpoint = Some(value),
                TOKEN_KEY => token = Some(value),
                INPUT_TYPE_KEY => input_type = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            endpoint: required(endpoint, ENDPOINT_KEY)?,
            token: required(token, TOKEN_KEY)?,
            input_type: input_type
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_INPUT_TYPE.to_string()),
        })
    }

    fn log_keys(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  {ENDPOINT_KEY}: {}", self.endpoint);
        tracing::info!("  {TOKEN_KEY}: {}", preview(&self.token));
        tracing::info!("  {INPUT_TYPE_KEY}: {}", self.input_type);
    }
}

impl fmt::Debug for AssignmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssignmentConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &preview(&self.token))
            .field("input_type", &self.input_type)
            .finish()
    }
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(SendResultsError::Config(format!("Empty '{key}' in config"))),
        None => Err(SendResultsError::Config(format!("Missing '{key}' in config"))),
    }
}

fn preview(val: &str) -> String {
    let head: String = val.chars().take(3).collect();
    format!("{head}...({} chars)", val.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_values_after_equals() {
        let config = AssignmentConfig::parse(
            "ASSIGNMENT_ENDPOINT=  http://x/graphql  \nTOKEN=abc123\n",
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://x/graphql");
        assert_eq!(config.token, "abc123");
        assert_eq!(config.input_type, DEFAULT_INPUT_TYPE);
    }

    #[test]
    fn ignores_unrelated_lines_comments_and_sections() {
        let config = AssignmentConfig::parse(
            "[assignment]\n\
             # TOKEN=commented-out\n\
             ; ASSIGNMENT_ENDPOINT=nope\n\
             DATABASE_URL=postgres://localhost\n\
             just some text\n\
             \n\
             TOKEN = s3cr=t\n\
             ASSIGNMENT_ENDPOINT=https://api.example.org/graphql?x=1\n",
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://api.example.org/graphql?x=1");
        assert_eq!(config.token, "s3cr=t");
    }

    #[test]
    fn last_occurrence_wins() {
        let config = AssignmentConfig::parse("TOKEN=old\nASSIGNMENT_ENDPOINT=http://a\nTOKEN=new\n")
            .unwrap();
        assert_eq!(config.token, "new");
    }

    #[test]
    fn prefixed_keys_are_not_mistaken_for_token() {
        let err = AssignmentConfig::parse("ASSIGNMENT_ENDPOINT=http://a\nAUTH_TOKEN=abc\n")
            .unwrap_err();
        assert!(matches!(err, SendResultsError::Config(ref m) if m.contains("'TOKEN'")));
    }

    #[test]
    fn missing_endpoint_is_config_error() {
        let err = AssignmentConfig::parse("TOKEN=abc\n").unwrap_err();
        assert!(matches!(err, SendResultsError::Config(ref m) if m.contains(ENDPOINT_KEY)));
    }

    #[test]
    fn missing_token_is_config_error() {
        let err = AssignmentConfig::parse("ASSIGNMENT_ENDPOINT=http://a\n").unwrap_err();
        assert!(matches!(err, SendResultsError::Config(ref m) if m.contains("Missing 'TOKEN'")));
    }

    #[test]
    fn empty_value_is_config_error() {
        let err = AssignmentConfig::parse("ASSIGNMENT_ENDPOINT=http://a\nTOKEN=   \n").unwrap_err();
        assert!(matches!(err, SendResultsError::Config(ref m) if m.contains("Empty 'TOKEN'")));
    }

    #[test]
    fn input_type_override() {
        let config = AssignmentConfig::parse(
            "ASSIGNMENT_ENDPOINT=http://a\nTOKEN=t\nASSIGNMENT_INPUT_TYPE=AssignInput\n",
        )
        .unwrap();
        assert_eq!(config.input_type, "AssignInput");
    }

    #[test]
    fn debug_redacts_token() {
        let config =
            AssignmentConfig::parse("ASSIGNMENT_ENDPOINT=http://a\nTOKEN=supersecret\n").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("sup...(11 chars)"));
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let err = AssignmentConfig::load(Path::new("/nonexistent/config.ini")).unwrap_err();
        assert!(matches!(err, SendResultsError::Io { .. }));
    }
}
