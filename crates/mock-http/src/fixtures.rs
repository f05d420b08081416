//! Fixture loading
//!
//! A fixture is a canned response body stored as a JSON file. It is read
//! verbatim; the only check is that it parses as JSON.

use std::path::Path;

use anyhow::{Context, Result};

/// Read a fixture file and return its body unchanged
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain valid JSON.
pub fn load_fixture(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture '{}'", path.display()))?;

    serde_json::from_str::<serde_json::Value>(&body)
        .with_context(|| format!("Fixture '{}' is not valid JSON", path.display()))?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture_returns_body_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\n  \"thingName\": \"cpp_test_thing\"\n}}").unwrap();

        let body = load_fixture(file.path()).unwrap();
        assert_eq!(body, "{\n  \"thingName\": \"cpp_test_thing\"\n}");
    }

    #[test]
    fn test_load_fixture_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_fixture(dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read fixture"));
    }

    #[test]
    fn test_load_fixture_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_fixture(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }
}
