// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Meshmetrics CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use meshmetrics::cli::{AnalysisReport, Reporter, Runner};
use meshmetrics::io::discover_models;
use meshmetrics::{AnalyzerConfig, FaceCountPolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshmetrics")]
#[command(about = "Surface area and complexity measurements for triangle meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./meshmetrics.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure model files (STL, glTF, GLB) or directories of them
    Analyze {
        /// Files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print the report as JSON instead of the console summary
        #[arg(long)]
        json: bool,

        /// Write latest.json and report.md to the configured output directory
        #[arg(short, long)]
        save: bool,

        /// Write reports to this directory instead (implies --save)
        #[arg(short, long, value_name = "DIR")]
        report_dir: Option<PathBuf>,

        /// Face count policy (nominal, valid)
        #[arg(long)]
        face_count: Option<FaceCountPolicy>,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::from_file(path)?
            .with_env_overrides(|key| std::env::var(key).ok())?,
        None => AnalyzerConfig::load()?,
    };

    match cli.command {
        Commands::Analyze {
            paths,
            json,
            save,
            report_dir,
            face_count,
        } => {
            let mut config = config;
            if let Some(policy) = face_count {
                config.face_count_policy = policy;
            }
            let report_dir = report_dir.or_else(|| save.then(|| config.output_dir.clone()));
            analyze_command(&paths, json, report_dir, &config, cli.verbose)?;
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
        Commands::Version => {
            println!("Meshmetrics v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn analyze_command(
    paths: &[PathBuf],
    json: bool,
    report_dir: Option<PathBuf>,
    config: &AnalyzerConfig,
    verbose: bool,
) -> Result<()> {
    let models = discover_models(paths);
    if models.is_empty() {
        Reporter::report_error("No supported model files found (stl, gltf, glb)");
        std::process::exit(1);
    }

    log::debug!("measuring {} models with {:?}", models.len(), config.face_count_policy);

    let progress = if verbose && models.len() > 1 && !json {
        let pb = ProgressBar::new(models.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let runner = Runner::with_options(config.options());
    let mut report = AnalysisReport::new();

    for path in &models {
        let name = path.display().to_string();
        if let Some(ref pb) = progress {
            pb.set_message(format!("Measuring {}", name));
        }

        match runner.measure(path) {
            Ok(measurement) => {
                if !json {
                    Reporter::print_model(&measurement);
                }
                report.add_result(measurement);
            }
            Err(e) => {
                log::warn!("{}: {}", name, e);
                report.add_error(name, e.to_string());
            }
        }

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Measurement complete");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Reporter::print_summary(&report);
    }

    if let Some(dir) = report_dir {
        std::fs::create_dir_all(&dir)?;
        Reporter::write_json(&report, &dir.join("latest.json"))?;
        Reporter::write_markdown(&report, &dir.join("report.md"))?;
        if !json {
            println!(
                "  {} {}",
                "Reports:".bright_black(),
                dir.display().to_string().cyan()
            );
        }
    }

    if report.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
