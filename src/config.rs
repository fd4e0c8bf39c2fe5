use std::path::{Component, Path, PathBuf};

use globwalk::GlobWalkerBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INPUT_GLOB: &str = "./input/**/*.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub id: String,
    #[serde(default)]
    pub inputs: Option<Vec<InputSource>>,
    #[serde(default)]
    pub outputs: Option<Outputs>,
    #[serde(default = "default_true")]
    pub normalize: bool,
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSource {
    pub name: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outputs {
    pub dir: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_preview_chars() -> usize {
    500
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            id: "clausescan".to_string(),
            inputs: None,
            outputs: None,
            normalize: true,
            preview_chars: default_preview_chars(),
        }
    }
}

impl ScanConfig {
    pub fn input_glob(&self) -> String {
        self.inputs
            .as_ref()
            .and_then(|i| i.first())
            .and_then(|i| i.path.clone())
            .unwrap_or_else(|| DEFAULT_INPUT_GLOB.to_string())
    }

    pub fn output_dir(&self) -> String {
        self.outputs
            .as_ref()
            .and_then(|o| o.dir.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Read and validate a YAML run configuration.
pub fn load_config(path: &Path) -> Result<ScanConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
    parse_config(&raw)
}

pub fn parse_config(raw: &str) -> Result<ScanConfig, ConfigError> {
    let cfg: ScanConfig = serde_yaml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if cfg.id.trim().is_empty() {
        return Err(ConfigError::Invalid("missing id".into()));
    }
    let has_input_glob = cfg
        .inputs
        .as_ref()
        .and_then(|i| i.first())
        .and_then(|i| i.path.as_ref())
        .is_some();
    let has_out_dir = cfg.outputs.as_ref().and_then(|o| o.dir.as_ref()).is_some();
    if !has_input_glob || !has_out_dir {
        return Err(ConfigError::Invalid("missing inputs.path or outputs.dir".into()));
    }

    Ok(cfg)
}

#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("NoFilesFound")]
    NoFilesFound { guidance: String },
}

/// Enumerate text inputs using a glob pattern (e.g., "./input/**/*.txt").
/// Returns a sorted list of paths.
pub fn enumerate_inputs(glob_pattern: &str) -> Result<Vec<PathBuf>, EnumerateError> {
    let (root, pattern) = split_glob(glob_pattern);
    let mut paths: Vec<PathBuf> = GlobWalkerBuilder::from_patterns(&root, &[pattern.as_str()])
        .case_insensitive(false)
        .follow_links(false)
        .build()
        .map_err(|_| EnumerateError::NoFilesFound { guidance: input_guidance(glob_pattern) })?
        .filter_map(|e| e.ok())
        .map(|e| e.path().to_path_buf())
        .collect();

    paths.sort();
    paths.retain(|p| p.is_file());

    if paths.is_empty() {
        return Err(EnumerateError::NoFilesFound { guidance: input_guidance(glob_pattern) });
    }

    Ok(paths)
}

/// Walk from the longest wildcard-free directory prefix instead of the filesystem root.
fn split_glob(glob_pattern: &str) -> (PathBuf, String) {
    let is_wild = |c: &Component| c.as_os_str().to_string_lossy().contains(|ch: char| matches!(ch, '*' | '?' | '[' | '{'));
    let path = Path::new(glob_pattern.trim_start_matches("./"));
    let comps: Vec<Component> = path.components().collect();
    let literal = comps
        .iter()
        .take(comps.len().saturating_sub(1))
        .take_while(|c| !is_wild(*c))
        .count();
    let root: PathBuf = comps[..literal].iter().collect();
    let rest: PathBuf = comps[literal..].iter().collect();
    let root = if root.as_os_str().is_empty() { PathBuf::from(".") } else { root };
    (root, rest.to_string_lossy().into_owned())
}

fn input_guidance(glob_pattern: &str) -> String {
    format!(
        "No text files match {}\nExtract judgments to plain text first, e.g.:\n  pdftotext -layout judgment.pdf ./input/judgment.txt",
        glob_pattern
    )
}
