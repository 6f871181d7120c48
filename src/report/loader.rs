//! Build report loader
//!
//! Load a build report from a JSON file, string, or reader.

use std::io::Read;
use std::path::{Path, PathBuf};

use super::BuildReport;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parse error in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
}

pub struct ReportLoader;

impl ReportLoader {
    pub fn load_file(path: &Path) -> Result<BuildReport, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_json_str(content: &str) -> Result<BuildReport, LoadError> {
        Self::parse(content, "<string>")
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<BuildReport, LoadError> {
        serde_json::from_reader(reader).map_err(|e| LoadError::Json {
            origin: "<reader>".to_string(),
            source: e,
        })
    }

    fn parse(content: &str, origin: &str) -> Result<BuildReport, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::Json {
            origin: origin.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.json");

        fs::write(
            &path,
            r#"{
                "platform": "2.0",
                "steps": [
                    { "name": "Spin up environment", "actions": [
                        { "step": 0, "type": "infrastructure", "status": "success" }
                    ] }
                ]
            }"#,
        )
        .unwrap();

        let report = ReportLoader::load_file(&path).unwrap();
        assert_eq!(report.platform, Some(serde_json::json!("2.0")));
        assert_eq!(report.steps.unwrap().valid().unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = ReportLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{ "steps": [ "#).unwrap();

        let err = ReportLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_from_json_str() {
        let report = ReportLoader::from_json_str(r#"{ "build_num": 7, "steps": [] }"#).unwrap();
        assert!(report.steps.is_some());

        let err = ReportLoader::from_json_str("[1, 2").unwrap_err();
        assert!(err.to_string().contains("<string>"));
    }

    #[test]
    fn test_wrong_typed_steps_still_load() {
        let report = ReportLoader::from_json_str(r#"{ "steps": "not a list" }"#).unwrap();
        assert!(report.steps.unwrap().valid().is_err());
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{ "steps": [] }"#;
        let report = ReportLoader::from_reader(&json[..]).unwrap();
        assert!(report.steps.unwrap().valid().unwrap().is_empty());
    }
}
