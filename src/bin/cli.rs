// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadgen CLI

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use scadgen::cli::Reporter;
use scadgen::models::Demo;
use scadgen::{Generator, GeneratorConfig};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "scadgen")]
#[command(about = "scadgen - generate OpenSCAD modules from typed records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./scadgen.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a bundled demo model
    Demo {
        /// Demo name (cube, translated-cube, dimple, die, sign)
        name: String,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the files instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a demo model's call tree as JSON
    Encode {
        /// Demo name
        name: String,
    },

    /// List bundled demo models
    List,

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::load()?,
    };
    config.verbose |= cli.verbose;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Demo { name, out, dry_run } => {
            if let Some(out) = out {
                config.output_dir = out;
            }
            demo_command(&name, config, dry_run)?;
        }
        Commands::Encode { name } => {
            encode_command(&name)?;
        }
        Commands::List => {
            for demo in Demo::ALL {
                println!("{}", demo.as_str());
            }
        }
        Commands::Version => {
            println!("scadgen v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn find_demo(name: &str) -> Result<Demo> {
    match Demo::from_name(name) {
        Some(demo) => Ok(demo),
        None => {
            Reporter::report_error(&format!("Unknown demo: {}", name));
            bail!("unknown demo {:?}, try `scadgen list`", name)
        }
    }
}

fn demo_command(name: &str, config: GeneratorConfig, dry_run: bool) -> Result<()> {
    let demo = find_demo(name)?;
    let verbose = config.verbose;
    let generator = Generator::new(config);
    let model = demo.model();

    if verbose {
        Reporter::report_info(&format!(
            "Rendering {} into {}",
            demo.as_str(),
            generator.config().output_dir.display()
        ));
    }

    let start = std::time::Instant::now();
    if dry_run {
        let files = generator.render(&model)?;
        Reporter::print_files(&files);
        if verbose {
            Reporter::report_generated(demo.as_str(), &files, start.elapsed(), false);
        }
    } else {
        let files = generator.write(&model)?;
        Reporter::report_generated(demo.as_str(), &files, start.elapsed(), true);
    }

    Ok(())
}

fn encode_command(name: &str) -> Result<()> {
    let demo = find_demo(name)?;
    let function = scadgen::encode(&demo.model())?;
    println!("{}", serde_json::to_string_pretty(&function)?);
    Ok(())
}
