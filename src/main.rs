use std::collections::HashSet;
use std::path::{Path, PathBuf};

use judgment_clauses::emit::slugify;
use judgment_clauses::{
    analyze, emit_report, enumerate_inputs, join_pages, list_clauses, load_config, normalize_text, registry,
    sha256_hex, split_pages, ReportMeta, ScanConfig,
};

const DEFAULT_CONFIG: &str = "clausescan.yaml";

fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn unique_slug(slug_in: String, used: &mut HashSet<String>) -> String {
    if used.insert(slug_in.clone()) {
        return slug_in;
    }
    let mut i = 1;
    loop {
        let candidate = format!("{}-{}", slug_in, i);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        i += 1;
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--list-clauses") {
        let clauses = list_clauses();
        println!(
            "{}",
            serde_json::json!({ "total_clauses": clauses.len(), "clauses": clauses })
        );
        return;
    }

    let to_stdout = args.iter().any(|a| a == "--stdout");
    let no_normalize = args.iter().any(|a| a == "--no-normalize");
    let mut config_path: Option<String> = None;
    let mut files: Vec<PathBuf> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--config" {
            if let Some(val) = args.get(i + 1) {
                if !val.starts_with("--") {
                    config_path = Some(val.clone());
                    i += 1;
                }
            }
        } else if !arg.starts_with("--") {
            files.push(PathBuf::from(arg));
        }
        i += 1;
    }

    // 1) Configuration: explicit path must load, default path is optional
    let cfg_file = config_path.clone().or_else(|| {
        Path::new(DEFAULT_CONFIG).exists().then(|| DEFAULT_CONFIG.to_string())
    });
    let cfg = match cfg_file.as_deref() {
        Some(path) => match load_config(Path::new(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!(
                    "{}",
                    serde_json::json!({ "tool": "load_config", "file": path, "error": e.to_string() })
                );
                std::process::exit(3);
            }
        },
        None => ScanConfig::default(),
    };
    let normalize = cfg.normalize && !no_normalize;
    eprintln!(
        "{}",
        serde_json::json!({
            "tool": "load_config",
            "file": cfg_file,
            "status": "ok",
            "input_glob": cfg.input_glob(),
            "output_dir": cfg.output_dir(),
            "normalize": normalize
        })
    );

    // 2) Registry health; malformed rules are skipped, not fatal
    let reg = registry();
    let invalid: Vec<String> = reg.diagnostics().iter().map(|d| d.to_string()).collect();
    eprintln!(
        "{}",
        serde_json::json!({ "tool": "registry", "clauses": reg.len(), "invalid_rules": invalid })
    );

    // 3) Inputs: explicit files win over the configured glob
    let inputs = if files.is_empty() {
        match enumerate_inputs(&cfg.input_glob()) {
            Ok(found) => found,
            Err(judgment_clauses::EnumerateError::NoFilesFound { guidance }) => {
                eprintln!(
                    "{}",
                    serde_json::json!({ "tool": "enumerate_inputs", "error": "NoFilesFound" })
                );
                eprintln!("{}", guidance);
                std::process::exit(2);
            }
        }
    } else {
        files
    };
    eprintln!("{}", serde_json::json!({ "tool": "enumerate_inputs", "count": inputs.len() }));

    let mut used_doc_ids: HashSet<String> = HashSet::new();
    let mut failures = 0usize;
    for file in inputs {
        let started_ms = now_ms();
        let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("doc");
        let doc_id = unique_slug(slugify(stem), &mut used_doc_ids);

        let raw = match std::fs::read_to_string(&file) {
            Ok(s) => s,
            Err(e) => {
                eprintln!(
                    "{}",
                    serde_json::json!({ "tool": "read_input", "file": file.display().to_string(), "error": e.to_string() })
                );
                failures += 1;
                continue;
            }
        };

        let paged = if raw.contains('\u{000C}') { join_pages(&split_pages(&raw)) } else { raw };
        let text = if normalize { normalize_text(&paged) } else { paged };

        let analysis = analyze(&text);
        eprintln!(
            "{}",
            serde_json::json!({
                "tool": "analyze",
                "file": file.display().to_string(),
                "doc_id": doc_id,
                "present": analysis.statistics.present,
                "missing": analysis.statistics.missing,
                "corrupted": analysis.statistics.corrupted,
                "completion_percentage": analysis.statistics.completion_percentage,
                "corrupted_regions": analysis.corrupted_regions.len()
            })
        );

        let meta = ReportMeta {
            doc_id: doc_id.clone(),
            source: file.display().to_string(),
            sha256: sha256_hex(text.as_bytes()),
            started_ms,
            finished_ms: now_ms(),
        };
        let report = serde_json::json!({
            "meta": meta,
            "text_preview": preview(&text, cfg.preview_chars),
            "analysis": analysis,
        });

        if to_stdout {
            match serde_json::to_string_pretty(&report) {
                Ok(s) => println!("{}", s),
                Err(e) => {
                    eprintln!("{}", serde_json::json!({ "tool": "emit", "file": file.display().to_string(), "error": e.to_string() }));
                    failures += 1;
                }
            }
            continue;
        }

        match emit_report(&report, &cfg.output_dir(), &doc_id) {
            Ok(path) => {
                eprintln!("{}", serde_json::json!({ "tool": "emit", "doc_id": doc_id, "path": path.display().to_string() }));
            }
            Err(e) => {
                eprintln!("{}", serde_json::json!({ "tool": "emit", "doc_id": doc_id, "error": e.to_string() }));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(4);
    }
}
