use std::fs;
use std::path::PathBuf;

use judgment_clauses::config::parse_config;
use judgment_clauses::emit::slugify;
use judgment_clauses::{analyze, emit_report, enumerate_inputs, load_config, sha256_hex, ConfigError, ScanConfig};

#[test]
fn config_parses_with_defaults() {
    let raw = "id: judgments\ninputs:\n  - name: sc\n    path: ./input/**/*.txt\noutputs:\n  dir: ./out\n";
    let cfg = parse_config(raw).expect("valid config");
    assert_eq!(cfg.id, "judgments");
    assert_eq!(cfg.input_glob(), "./input/**/*.txt");
    assert_eq!(cfg.output_dir(), "./out");
    assert!(cfg.normalize);
    assert_eq!(cfg.preview_chars, 500);
}

#[test]
fn config_requires_inputs_and_outputs() {
    let err = parse_config("id: judgments\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert_eq!(err.to_string(), "Invalid config: missing inputs.path or outputs.dir");

    let err = parse_config("id: ''\ninputs: [{path: a}]\noutputs: {dir: b}\n").unwrap_err();
    assert_eq!(err.to_string(), "Invalid config: missing id");

    assert!(matches!(parse_config("id: [unterminated"), Err(ConfigError::Parse(_))));
}

#[test]
fn load_config_reports_missing_file() {
    let td = tempfile::tempdir().unwrap();
    let err = load_config(&td.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read(_)));

    let path = td.path().join("clausescan.yaml");
    fs::write(&path, "id: x\ninputs: [{path: 'in/*.txt'}]\noutputs: {dir: out}\nnormalize: false\n").unwrap();
    let cfg = load_config(&path).unwrap();
    assert!(!cfg.normalize);
}

#[test]
fn default_config_points_at_conventional_dirs() {
    let cfg = ScanConfig::default();
    assert_eq!(cfg.input_glob(), "./input/**/*.txt");
    assert_eq!(cfg.output_dir(), "./output");
}

#[test]
fn enumerate_inputs_finds_nested_text_files() {
    let td = tempfile::tempdir().unwrap();
    let base = td.path();
    let dir = base.join("input/sc");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("b.txt"), "b").unwrap();
    fs::write(dir.join("a.txt"), "a").unwrap();
    fs::write(dir.join("skip.pdf"), "%PDF").unwrap();

    let pattern = format!("{}/input/**/*.txt", base.display());
    let files = enumerate_inputs(&pattern).expect("should find files");
    let files: Vec<PathBuf> = files.into_iter().map(|p| p.strip_prefix(base).unwrap().to_path_buf()).collect();
    assert_eq!(files, vec![PathBuf::from("input/sc/a.txt"), PathBuf::from("input/sc/b.txt")]);
}

#[test]
fn enumerate_inputs_empty_is_an_error() {
    let td = tempfile::tempdir().unwrap();
    let pattern = format!("{}/input/**/*.txt", td.path().display());
    let err = enumerate_inputs(&pattern).unwrap_err();
    assert_eq!(err.to_string(), "NoFilesFound");
}

#[test]
fn emit_writes_report_atomically() {
    let td = tempfile::tempdir().unwrap();
    let outdir = td.path().join("out");
    let analysis = analyze("IN THE SUPREME COURT OF XYZ");
    let report = serde_json::json!({ "meta": { "doc_id": "judgment-1" }, "analysis": analysis });

    let path = emit_report(&report, outdir.to_str().unwrap(), "judgment-1").expect("emit ok");
    assert_eq!(path, outdir.join("judgment-1.analysis.json"));
    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, report);

    let leftovers: Vec<_> = fs::read_dir(&outdir).unwrap().filter_map(|e| e.ok()).collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn slugs_and_hashes_are_stable() {
    assert_eq!(slugify("SC Appeal 45-2019 (final)"), "sc-appeal-45-2019-final");
    assert_eq!(slugify("***"), "doc");
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}
