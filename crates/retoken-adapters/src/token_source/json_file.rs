//! Token value files: a JSON array of `{ "key": ..., "value": ... }` objects.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use retoken_core::{
    application::{ApplicationError, ports::TokenSource},
    domain::TokenSet,
    error::RetokenResult,
};

/// Reads one token value file.
///
/// No validation beyond the JSON structure: a missing file, an unreadable
/// file, or malformed JSON all fail the load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> RetokenResult<TokenSet> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::TokenSourceNotFound {
                source_name: self.name(),
            },
            _ => ApplicationError::TokenSourceFailed {
                source_name: self.name(),
                reason: e.to_string(),
            },
        })?;

        let tokens: TokenSet =
            serde_json::from_str(&content).map_err(|e| ApplicationError::TokenSourceFailed {
                source_name: self.name(),
                reason: format!("invalid token JSON: {e}"),
            })?;

        debug!(count = tokens.len(), "Parsed token file");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retoken_core::error::RetokenError;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_token_array() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "token1.tkconf",
            r#"[{ "key": "token1", "value": "test"} ]"#,
        );

        let tokens = JsonFileSource::new(&path).load().unwrap();

        assert_eq!(tokens.get("token1"), Some("test"));
    }

    #[test]
    fn empty_array_is_valid() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "empty.json", "[]");

        assert!(JsonFileSource::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = JsonFileSource::new(temp.path().join("missing.json"))
            .load()
            .unwrap_err();

        assert!(matches!(
            err,
            RetokenError::Application(ApplicationError::TokenSourceNotFound { .. })
        ));
    }

    #[test]
    fn malformed_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bad.json", r#"[{ "key": "a", "value": "#);

        let err = JsonFileSource::new(&path).load().unwrap_err();

        assert!(matches!(
            err,
            RetokenError::Application(ApplicationError::TokenSourceFailed { .. })
        ));
        assert!(err.to_string().contains("invalid token JSON"));
    }

    #[test]
    fn object_instead_of_array_fails() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "obj.json", r#"{ "key": "a", "value": "b" }"#);

        assert!(JsonFileSource::new(&path).load().is_err());
    }

    #[test]
    fn name_is_the_path() {
        let source = JsonFileSource::new("conf/tokens.json");
        assert_eq!(source.name(), Path::new("conf/tokens.json").display().to_string());
    }
}
