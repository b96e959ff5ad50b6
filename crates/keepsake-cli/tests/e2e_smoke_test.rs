use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use keepsake_cli::{Args, run};

/// Demos are at workspace root, relative to workspace not the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .toml files from a directory
fn collect_toml_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = if let Ok(entries) = fs::read_dir(dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        chart: None,
        check: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(&demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.html",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let html = fs::read_to_string(&output_path).unwrap();
                assert!(html.starts_with("<!DOCTYPE html>"), "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(&demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.html",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "{}", demo_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_check_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.html");
    let chart_path = temp_dir.path().join("chart.svg");

    let mut args = args_for(&demos_dir().join("greeting.toml"), &output_path);
    args.check = true;
    args.chart = Some(chart_path.to_string_lossy().to_string());

    run(&args).expect("check should succeed");
    assert!(!output_path.exists());
    assert!(!chart_path.exists());
}

#[test]
fn e2e_check_still_fails_on_errors() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = args_for(
        &demos_dir().join("errors").join("duplicate_ids.toml"),
        &temp_dir.path().join("out.html"),
    );
    args.check = true;

    assert!(run(&args).is_err());
}

#[test]
fn e2e_chart_is_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.html");
    let chart_path = temp_dir.path().join("chart.svg");

    let mut args = args_for(&demos_dir().join("minimal.toml"), &output_path);
    args.chart = Some(chart_path.to_string_lossy().to_string());

    run(&args).expect("render should succeed");

    let svg = fs::read_to_string(&chart_path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Defense"));
    assert!(svg.contains("overflow"));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[interaction]\ntimeline = \"expanded\"\n").unwrap();
    let output_path = temp_dir.path().join("out.html");

    let mut args = args_for(&demos_dir().join("greeting.toml"), &output_path);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("render should succeed");

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("<details open"));
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("absent.toml"),
        &temp_dir.path().join("out.html"),
    );

    assert!(run(&args).is_err());
}
