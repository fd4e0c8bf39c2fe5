use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("WriteFailed: {0}")]
    WriteFailed(String),
}

/// Provenance written next to every analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMeta {
    pub doc_id: String,
    pub source: String,
    pub sha256: String,
    pub started_ms: u128,
    pub finished_ms: u128,
}

/// Atomically write `report` as pretty JSON to `<outdir>/<doc_id>.analysis.json`.
pub fn emit_report<T: Serialize>(report: &T, outdir: &str, doc_id: &str) -> Result<PathBuf, EmitError> {
    std::fs::create_dir_all(outdir).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    let path = Path::new(outdir).join(format!("{}.analysis.json", doc_id));

    // Write a temp sibling then rename over the target
    let tmp = path.with_extension(format!("json.tmp.{}", std::process::id()));
    let bytes = serde_json::to_vec_pretty(report).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    std::fs::write(&tmp, bytes).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    std::fs::rename(&tmp, &path).map_err(|e| EmitError::WriteFailed(e.to_string()))?;

    Ok(path)
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    out.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Lowercase ASCII slug of a file stem; other characters collapse to single dashes.
pub fn slugify(base: &str) -> String {
    let mut slug = String::with_capacity(base.len());
    let mut prev_dash = true;
    for ch in base.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "doc".to_string()
    } else {
        trimmed.to_string()
    }
}
