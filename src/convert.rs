use std::fs;
use std::path::{Path, PathBuf};

use crate::hjson;
use crate::indent::Indent;

/// Errors from a single conversion pass.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{path}: invalid JSON: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convert a JSON string to Hjson text.
///
/// Input is parsed strictly as JSON; lenient Hjson input is rejected.
pub fn convert_str(input: &str, indent: &Indent) -> Result<String, ConvertError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(hjson::render(&value, indent))
}

/// Whether a path is eligible for file conversion.
///
/// The file name must end in `.json`, case-sensitively. A bare dotfile
/// named `.json` qualifies too; a name without a dot does not.
pub fn is_json_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"))
}

/// Convert a JSON file, writing a sibling file with the extension replaced
/// by `.hjson`. Returns the output path.
///
/// The caller filters with [`is_json_file`]; this converts whatever it is
/// handed.
pub fn convert_file(path: &Path, indent: &Indent) -> Result<PathBuf, ConvertError> {
    let input = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&input).map_err(|source| ConvertError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
    let rendered = hjson::render(&value, indent);

    let out_path = hjson_sibling(path);
    fs::write(&out_path, rendered.as_bytes()).map_err(|source| ConvertError::Write {
        path: out_path.clone(),
        source,
    })?;
    tracing::debug!(path = %out_path.display(), bytes = rendered.len(), "wrote hjson");
    Ok(out_path)
}

/// Sibling output path: everything after the last dot in the file name is
/// replaced with `hjson`, so `.json` becomes `.hjson` (unlike
/// `Path::with_extension`, which treats a bare dotfile as extensionless).
fn hjson_sibling(path: &Path) -> PathBuf {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => {
            let stem = match name.rfind('.') {
                Some(idx) => &name[..idx],
                None => name,
            };
            path.with_file_name(format!("{stem}.hjson"))
        }
        None => path.with_extension("hjson"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tab() -> Indent {
        Indent::from_width(None)
    }

    // --- convert_str ---

    #[test]
    fn convert_str_valid_json() {
        let out = convert_str(r#"{"a": 1}"#, &tab()).unwrap();
        assert!(out.contains("a: 1"), "got: {out}");
    }

    #[test]
    fn convert_str_invalid_json_is_parse_error() {
        let err = convert_str("not json", &tab()).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn convert_str_rejects_lenient_hjson_input() {
        // Quoteless members are valid Hjson but not JSON.
        let err = convert_str("{a: 1}", &tab()).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn convert_str_empty_input_is_parse_error() {
        let err = convert_str("", &tab()).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    // --- is_json_file ---

    #[test]
    fn json_extension_matches() {
        assert!(is_json_file(Path::new("config.json")));
        assert!(is_json_file(Path::new("/etc/app/deep/nested.json")));
        assert!(is_json_file(Path::new("a.b.json")));
    }

    #[test]
    fn bare_dotfile_json_matches() {
        assert!(is_json_file(Path::new(".json")));
        assert!(is_json_file(Path::new("/some/dir/.json")));
    }

    #[test]
    fn other_extensions_do_not_match() {
        assert!(!is_json_file(Path::new("config.hjson")));
        assert!(!is_json_file(Path::new("config.txt")));
        assert!(!is_json_file(Path::new("config")));
        assert!(!is_json_file(Path::new("json")));
        assert!(!is_json_file(Path::new("config.JSON")));
    }

    // --- hjson_sibling ---

    #[test]
    fn sibling_swaps_last_extension() {
        assert_eq!(
            hjson_sibling(Path::new("dir/config.json")),
            PathBuf::from("dir/config.hjson")
        );
        assert_eq!(
            hjson_sibling(Path::new("a.b.json")),
            PathBuf::from("a.b.hjson")
        );
    }

    #[test]
    fn sibling_of_bare_dotfile_is_dot_hjson() {
        assert_eq!(hjson_sibling(Path::new("dir/.json")), PathBuf::from("dir/.hjson"));
    }

    // --- convert_file ---

    #[test]
    fn convert_file_writes_sibling_hjson() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("config.json");
        fs::write(&json_path, r#"{"name": "demo", "port": 8080}"#).unwrap();

        let out_path = convert_file(&json_path, &tab()).unwrap();
        assert_eq!(out_path, dir.path().join("config.hjson"));

        let written = fs::read_to_string(&out_path).unwrap();
        let back: serde_json::Value = nu_json::from_str(&written).unwrap();
        assert_eq!(back, serde_json::json!({"name": "demo", "port": 8080}));
    }

    #[test]
    fn convert_file_bare_dotfile_writes_dot_hjson() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join(".json");
        fs::write(&json_path, r#"{"a": 1}"#).unwrap();

        let out_path = convert_file(&json_path, &tab()).unwrap();
        assert_eq!(out_path, dir.path().join(".hjson"));
        assert!(out_path.exists());
    }

    #[test]
    fn convert_file_missing_input_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = convert_file(&dir.path().join("absent.json"), &tab()).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
    }

    #[test]
    fn convert_file_invalid_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("broken.json");
        fs::write(&json_path, "{ broken").unwrap();

        let err = convert_file(&json_path, &tab()).unwrap_err();
        assert!(matches!(err, ConvertError::ParseFile { .. }));
        assert!(err.to_string().contains("broken.json"), "got: {err}");
    }

    #[test]
    fn convert_file_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("config.json");
        let hjson_path = dir.path().join("config.hjson");
        fs::write(&json_path, r#"{"v": 2}"#).unwrap();
        fs::write(&hjson_path, "stale").unwrap();

        convert_file(&json_path, &tab()).unwrap();
        let written = fs::read_to_string(&hjson_path).unwrap();
        assert!(written.contains("v: 2"), "got: {written}");
    }
}
