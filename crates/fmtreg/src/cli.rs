//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `providers [--json]` | Registered providers and their formats |
//! | `detect <SOURCE>...` | Format name and provider resolved per source |
//! | `extensions` | Deduplicated extensions of all image formats |
//! | `filter [--all] [--sort]` | File dialog filter string |

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fmtreg_application::ProviderRegistry;
use fmtreg_domain::{FileFormat, ProviderType};
use fmtreg_infrastructure::config::{AppConfig, ConfigLoader};
use fmtreg_infrastructure::RegistryCatalog;
use serde::Serialize;

/// Command line interface for fmtreg
#[derive(Parser, Debug)]
#[command(name = "fmtreg")]
#[command(about = "fmtreg - Format-to-provider registry inspector")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered image and metadata providers with their formats
    Providers {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve the format and provider for each source
    Detect {
        /// Source identifiers (paths, file names, folders ending in '/')
        #[arg(required = true)]
        sources: Vec<String>,
    },
    /// Print the deduplicated image file extensions
    Extensions,
    /// Print the file dialog filter for image formats
    Filter {
        /// Prepend the "All supported files" entry
        #[arg(long)]
        all: bool,
        /// Sort entries by format name
        #[arg(long)]
        sort: bool,
    },
}

/// Load configuration from `path`, or from the default locations
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

/// Execute `command` against registries built from `config`
pub fn run<W: Write>(command: &Command, config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    let catalog = RegistryCatalog::build(config);

    match command {
        Command::Providers { json } => print_providers(&catalog, *json, out),
        Command::Detect { sources } => print_detection(&catalog, sources, out),
        Command::Extensions => {
            for ext in catalog.image().file_extensions() {
                writeln!(out, "{ext}")?;
            }
            Ok(())
        }
        Command::Filter { all, sort } => {
            let all = *all || config.registry.all_filter;
            let sort = *sort || config.registry.sort_filter;
            writeln!(out, "{}", catalog.image().dialog_filter(all, sort))?;
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
struct ProviderReport {
    capability: &'static str,
    provider: ProviderType,
    formats: Vec<FileFormat>,
}

fn reports<T>(capability: &'static str, registry: &ProviderRegistry<T>) -> Vec<ProviderReport>
where
    T: ?Sized + Send + Sync + 'static,
{
    registry
        .provider_infos()
        .iter()
        .map(|info| ProviderReport {
            capability,
            provider: info.provider_type(),
            formats: info.formats().to_vec(),
        })
        .collect()
}

fn print_providers<W: Write>(
    catalog: &RegistryCatalog,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut all = reports("image", catalog.image());
    all.extend(reports("metadata", catalog.metadata()));

    if json {
        serde_json::to_writer_pretty(&mut *out, &all).context("Failed to encode providers")?;
        writeln!(out)?;
        return Ok(());
    }

    for report in &all {
        writeln!(out, "[{}] {}", report.capability, report.provider)?;
        for format in &report.formats {
            let patterns = format.dialog_patterns();
            if patterns.is_empty() {
                writeln!(out, "  {:>4}  {}", format.id(), format.name())?;
            } else {
                writeln!(
                    out,
                    "  {:>4}  {} ({})",
                    format.id(),
                    format.name(),
                    patterns.join(", ")
                )?;
            }
        }
    }
    Ok(())
}

fn print_detection<W: Write>(
    catalog: &RegistryCatalog,
    sources: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    for source in sources {
        let (format_name, provider) = match catalog.image().source_provider_type(source) {
            Some(provider) => (catalog.image().source_format_name(source), Some(provider)),
            None => (
                catalog.metadata().source_format_name(source),
                catalog.metadata().source_provider_type(source),
            ),
        };
        match provider {
            Some(provider) => writeln!(out, "{source}\t{format_name}\t{provider}")?,
            None => writeln!(out, "{source}\t{format_name}\t-")?,
        }
    }
    Ok(())
}
