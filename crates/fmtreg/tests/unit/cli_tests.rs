//! Command line parsing and output

use std::fs;

use clap::Parser;
use fmtreg::cli::{Cli, Command, load_config, run};
use fmtreg::infrastructure::AppConfig;

fn run_to_string(command: &Command, config: &AppConfig) -> String {
    let mut out = Vec::new();
    run(command, config, &mut out).expect("command should succeed");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_parse_subcommands() {
    let cli = Cli::try_parse_from(["fmtreg", "filter", "--sort"]).expect("valid args");
    assert_eq!(
        cli.command,
        Command::Filter {
            all: false,
            sort: true
        }
    );

    let cli = Cli::try_parse_from(["fmtreg", "detect", "a.cbz", "b.pdf", "--config", "x.toml"])
        .expect("valid args");
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
    assert!(matches!(cli.command, Command::Detect { ref sources } if sources.len() == 2));

    assert!(Cli::try_parse_from(["fmtreg", "detect"]).is_err());
}

#[test]
fn test_detect_output() {
    let output = run_to_string(
        &Command::Detect {
            sources: vec![
                "issue.cbz".to_string(),
                "ComicInfo.xml".to_string(),
                "notes.txt".to_string(),
            ],
        },
        &AppConfig::default(),
    );
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "issue.cbz\tComic Book Zip\tZipImageProvider");
    assert_eq!(lines[1], "ComicInfo.xml\tComicInfo\tComicInfoProvider");
    assert_eq!(lines[2], "notes.txt\tUnknown\t-");
}

#[test]
fn test_extensions_output() {
    let output = run_to_string(&Command::Extensions, &AppConfig::default());
    let extensions: Vec<&str> = output.lines().collect();

    assert!(extensions.contains(&"cbz"));
    assert!(extensions.contains(&"pdf"));
    assert_eq!(
        extensions.iter().filter(|ext| **ext == "cbz").count(),
        1
    );
}

#[test]
fn test_filter_uses_config_defaults() {
    let output = run_to_string(
        &Command::Filter {
            all: false,
            sort: false,
        },
        &AppConfig::default(),
    );
    assert!(output.starts_with("All supported files|"));

    let mut config = AppConfig::default();
    config.registry.all_filter = false;
    let output = run_to_string(
        &Command::Filter {
            all: false,
            sort: true,
        },
        &config,
    );
    assert!(output.starts_with("Comic Book"));
}

#[test]
fn test_providers_json() {
    let output = run_to_string(&Command::Providers { json: true }, &AppConfig::default());
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    let providers = value.as_array().expect("array of providers");

    assert!(providers.iter().any(|p| p["capability"] == "metadata"));
    let zip = providers
        .iter()
        .find(|p| {
            p["provider"]
                .as_str()
                .is_some_and(|name| name.ends_with("ZipImageProvider"))
        })
        .expect("zip provider listed");
    assert_eq!(zip["formats"][0]["name"], "Comic Book Zip");
    assert_eq!(zip["formats"][0]["extensions"][1], "zip");
}

#[test]
fn test_providers_text() {
    let output = run_to_string(&Command::Providers { json: false }, &AppConfig::default());
    assert!(output.contains("[image] ZipImageProvider"));
    assert!(output.contains("Comic Book Zip (*.cbz, *.zip)"));
    assert!(output.contains("[metadata] NfoProvider"));
}

#[test]
fn test_load_config_from_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fmtreg.toml");
    fs::write(&path, "[registry]\ndisabled_providers = [\"zip\"]\n").expect("write config");

    let config = load_config(Some(&path)).expect("config should load");
    let output = run_to_string(
        &Command::Detect {
            sources: vec!["issue.cbz".to_string()],
        },
        &config,
    );
    assert_eq!(output.trim_end(), "issue.cbz\tUnknown\t-");
}
