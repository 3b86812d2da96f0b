//! Downloadable renderings of a result set.

use crate::error::StoreError;
use crate::types::EnhancedResult;
use std::path::{Path, PathBuf};

const RECORD_SEPARATOR_WIDTH: usize = 40;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Pretty-printed JSON array of the results
pub fn to_json(results: &[EnhancedResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// Plain-text listing, one numbered block per result
pub fn to_text(results: &[EnhancedResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut block = format!(
                "[PROMPT {}]\n{}\n\n[EXPLANATION]\n{}\n",
                i + 1,
                r.enhanced_prompt,
                r.explanation
            );
            if let Some(negative) = r.negative_prompt() {
                block.push_str(&format!("\n[NEGATIVE]\n{}\n", negative));
            }
            block.push('\n');
            block.push_str(&"-".repeat(RECORD_SEPARATOR_WIDTH));
            block.push('\n');
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `results` in `format`
pub fn render(format: ExportFormat, results: &[EnhancedResult]) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Text => Ok(to_text(results)),
        ExportFormat::Json => to_json(results),
    }
}

/// Download file name for an export taken at `timestamp_ms`
pub fn file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!(
        "prompt_wizard_results_{}.{}",
        timestamp_ms,
        format.extension()
    )
}

/// Write an export into `dir`, named for the current time. Returns the path written.
pub fn write_to(
    dir: impl AsRef<Path>,
    format: ExportFormat,
    results: &[EnhancedResult],
) -> Result<PathBuf, StoreError> {
    let content = render(format, results)?;
    let path = dir
        .as_ref()
        .join(file_name(format, chrono::Utc::now().timestamp_millis()));
    std::fs::write(&path, content)?;
    tracing::info!("exported {} results to {}", results.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<EnhancedResult> {
        vec![
            EnhancedResult {
                enhanced_prompt: "a red fox, golden hour".to_string(),
                explanation: "Added lighting.".to_string(),
                tags: vec!["fox".to_string()],
                suggested_negative_prompt: Some("blur".to_string()),
            },
            EnhancedResult {
                enhanced_prompt: "a fox in snow".to_string(),
                explanation: "Changed setting.".to_string(),
                tags: vec![],
                suggested_negative_prompt: Some("".to_string()),
            },
        ]
    }

    #[test]
    fn test_text_export() {
        let dashes = "-".repeat(40);
        let expected = format!(
            "[PROMPT 1]\na red fox, golden hour\n\n[EXPLANATION]\nAdded lighting.\n\n[NEGATIVE]\nblur\n\n{dashes}\n\
             \n\
             [PROMPT 2]\na fox in snow\n\n[EXPLANATION]\nChanged setting.\n\n{dashes}\n",
            dashes = dashes
        );
        assert_eq!(to_text(&results()), expected);
        assert_eq!(to_text(&[]), "");
    }

    #[test]
    fn test_json_export() {
        let json = to_json(&results()).unwrap();
        assert!(json.contains("\n  {"));

        let parsed: Vec<EnhancedResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name(ExportFormat::Text, 1700000000000),
            "prompt_wizard_results_1700000000000.txt"
        );
        assert_eq!(
            file_name(ExportFormat::Json, 42),
            "prompt_wizard_results_42.json"
        );
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }

    #[test]
    fn test_write_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_to(dir.path(), ExportFormat::Text, &results()).unwrap();

        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("prompt_wizard_results_"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), to_text(&results()));
    }
}
