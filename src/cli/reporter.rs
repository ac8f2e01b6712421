// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::io::ScadFile;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Summarize generated files
    pub fn report_generated(model: &str, files: &[ScadFile], duration: Duration, written: bool) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Model:".bold(), model.cyan());
        println!("{}", "━".repeat(80).bright_black());

        for file in files {
            println!(
                "  {} {} {}",
                if written { "✅".green() } else { "•".bright_black() },
                file.path.display().to_string().cyan(),
                format!("({} bytes)", file.body.len()).bright_black()
            );
        }

        println!(
            "\n  {} {}",
            "Modules:".bright_black(),
            files.len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Print every file with a header, for dry runs
    pub fn print_files(files: &[ScadFile]) {
        for file in files {
            println!("{} {}", "//".bright_black(), file.path.display().to_string().bright_black());
            print!("{}", file.body);
            println!();
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
