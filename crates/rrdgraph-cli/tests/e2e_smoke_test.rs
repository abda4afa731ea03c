use std::{fs, path::PathBuf};

use tempfile::tempdir;

use rrdgraph::{RrdGraphError, RunnerError};
use rrdgraph_cli::{Args, run};

const DOCUMENT: &str = r##"
title = "Smoke"
end = 1700000000

[[elements]]
type = "def"
name = "a"
rrd = "a.rrd"
ds = "value"

[[elements]]
type = "line"
source = "a"
color = "#ff0000"
"##;

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
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

fn args(input: &PathBuf, output: &PathBuf, config: Option<&PathBuf>, dry_run: bool) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: config.map(|path| path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
        dry_run,
    }
}

#[test]
fn e2e_smoke_test_demo_documents() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // Demos are at workspace root, relative to workspace not the crate
    let demos_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos");
    let demos = collect_toml_files(demos_path);

    assert!(!demos.is_empty(), "No demo documents found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &demos {
        let output_path = temp_dir.path().join("unused.png");
        if let Err(e) = run(&args(demo_path, &output_path, None, true)) {
            failed_demos.push(format!("{}: {e}", demo_path.display()));
        }
    }

    assert!(
        failed_demos.is_empty(),
        "Failed demos:\n{}",
        failed_demos.join("\n")
    );
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("missing.toml");
    let output = temp_dir.path().join("out.png");

    let result = run(&args(&input, &output, None, true));
    assert!(matches!(result, Err(RrdGraphError::Io(_))));
}

#[test]
fn e2e_missing_binary_is_runner_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("graph.toml");
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("out.png");
    fs::write(&input, DOCUMENT).unwrap();
    fs::write(&config, "[rrdtool]\nbinary = \"/nonexistent/rrdtool\"\n").unwrap();

    let result = run(&args(&input, &output, Some(&config), false));
    assert!(matches!(
        result,
        Err(RrdGraphError::Runner(RunnerError::Spawn { .. }))
    ));
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn e2e_output_is_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("graph.toml");
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("out.png");
    fs::write(&input, DOCUMENT).unwrap();
    // `echo` stands in for rrdtool and prints the arguments it received
    fs::write(&config, "[rrdtool]\nbinary = \"echo\"\n").unwrap();

    run(&args(&input, &output, Some(&config), false)).expect("echo should succeed");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "graph - --end 1700000000 --title Smoke DEF:a=a.rrd:value:AVERAGE LINE:a#FF0000\n"
    );
}
