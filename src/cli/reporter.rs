// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Console, JSON and Markdown reporting

use super::report::AnalysisReport;
use super::runner::ModelMeasurement;
use crate::utils::{format_area, format_count, format_dimensions, format_ratio};
use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Report writer
pub struct Reporter;

impl Reporter {
    /// Print one model's measurements
    pub fn print_model(measurement: &ModelMeasurement) {
        let result = &measurement.result;

        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Model:".bold(), measurement.model.cyan());
        println!("{}", "━".repeat(80).bright_black());

        println!(
            "  {} {}",
            "Surface Area:".bright_black(),
            format_area(result.surface_area).cyan()
        );
        println!(
            "  {} {}",
            "Faces:".bright_black(),
            format_count(result.face_count).cyan()
        );
        println!(
            "  {} {}",
            "Vertices:".bright_black(),
            format_count(result.vertex_count).cyan()
        );
        println!(
            "  {} {}",
            "Parts:".bright_black(),
            measurement.parts.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Dimensions:".bright_black(),
            format_dimensions(&measurement.bounds).cyan()
        );
        println!(
            "  {} {}",
            "Bounding Box Area:".bright_black(),
            format_area(result.bounding_box_area).cyan()
        );
        println!(
            "  {} {}",
            "Complexity:".bright_black(),
            Self::color_ratio(result.complexity_ratio)
        );

        if result.skipped_triangles > 0 {
            Self::report_warning(&format!(
                "{} triangles reference missing vertices and add no area",
                result.skipped_triangles
            ));
        }

        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(measurement.total_time()).yellow()
        );
    }

    /// Print batch totals
    pub fn print_summary(report: &AnalysisReport) {
        println!("\n{}", "═".repeat(80).bright_black());
        println!("{}", "Measurement Summary".bold());
        println!("{}", "═".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Total Models:".bright_black(),
            report.total_models.to_string().cyan()
        );
        println!(
            "  {} {} ({:.1}%)",
            "Measured:".bright_black(),
            report.measured.to_string().green(),
            report.success_rate()
        );
        println!(
            "  {} {}",
            "Errors:".bright_black(),
            if report.errors > 0 {
                report.errors.to_string().red()
            } else {
                report.errors.to_string().green()
            }
        );
        println!(
            "  {} {}",
            "Total Surface Area:".bright_black(),
            format_area(report.total_surface_area).cyan()
        );

        for err in &report.error_details {
            println!("    {} {}", "❌".red(), err.model);
            println!("       {}", err.error.bright_black());
        }
        println!("{}", "═".repeat(80).bright_black());
    }

    /// Write JSON report
    pub fn write_json(report: &AnalysisReport, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Write Markdown report
    pub fn write_markdown(report: &AnalysisReport, path: &Path) -> Result<()> {
        fs::write(path, Self::markdown(report))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Render the Markdown report
    pub fn markdown(report: &AnalysisReport) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "# Mesh Measurement Report ({})\n\n",
            Utc::now().format("%Y-%m-%d")
        ));

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Total Models**: {}\n", report.total_models));
        md.push_str(&format!(
            "- **Measured**: {} ({:.1}%)\n",
            report.measured,
            report.success_rate()
        ));
        md.push_str(&format!("- **Errors**: {}\n", report.errors));
        md.push_str(&format!(
            "- **Total Surface Area**: {}\n\n",
            format_area(report.total_surface_area)
        ));

        md.push_str("## Detailed Results\n\n");
        md.push_str("| Model | Surface Area | Faces | Vertices | Dimensions | BBox Area | Complexity |\n");
        md.push_str("|-------|--------------|-------|----------|------------|-----------|------------|\n");

        for m in &report.results {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                m.model,
                format_area(m.result.surface_area),
                format_count(m.result.face_count),
                format_count(m.result.vertex_count),
                format_dimensions(&m.bounds),
                format_area(m.result.bounding_box_area),
                format_ratio(m.result.complexity_ratio)
            ));
        }

        let inconsistent: Vec<_> = report.inconsistent_models().collect();
        if !inconsistent.is_empty() {
            md.push_str("\n## Skipped Triangles\n\n");
            for m in inconsistent {
                md.push_str(&format!(
                    "- ⚠️ **{}**: {} of {} faces reference missing vertices\n",
                    m.model, m.result.skipped_triangles, m.result.face_count
                ));
            }
        }

        if report.errors > 0 {
            md.push_str("\n## Load Errors\n\n");
            for error in &report.error_details {
                md.push_str(&format!("- ❌ **{}**\n", error.model));
                md.push_str(&format!("  ```\n  {}\n  ```\n", error.error));
            }
        }

        md.push_str(&format!("\n---\n\n*Generated on {}*\n", report.timestamp));
        md
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("  {} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Ratios near 1 are box-like; higher means more surface detail
    fn color_ratio(ratio: f64) -> ColoredString {
        let text = format_ratio(ratio);
        if ratio <= 0.0 {
            text.bright_black()
        } else if ratio < 1.5 {
            text.green()
        } else if ratio < 3.0 {
            text.yellow()
        } else {
            text.red()
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{AnalysisResult, BoundingBox};
    use tempfile::TempDir;

    fn sample_report() -> AnalysisReport {
        let mut report = AnalysisReport::new();
        report.add_result(ModelMeasurement {
            model: "mug.glb".into(),
            path: "scans/mug.glb".into(),
            parts: 2,
            bounds: BoundingBox::from_extents(0.1, 0.12, 0.1),
            result: AnalysisResult {
                surface_area: 0.05,
                face_count: 1200,
                vertex_count: 640,
                bounding_box_area: 0.068,
                complexity_ratio: 0.735,
                skipped_triangles: 3,
            },
            load_time_ms: 12,
            analysis_time_ms: 1,
        });
        report.add_error("broken.stl".into(), "invalid STL data".into());
        report
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(Reporter::format_duration(Duration::from_micros(500)), "500µs");
        assert_eq!(Reporter::format_duration(Duration::from_millis(5)), "5.00ms");
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }

    #[test]
    fn test_markdown_sections() {
        let md = Reporter::markdown(&sample_report());
        assert!(md.contains("| mug.glb | 0.05 m² | 1,200 | 640 | 10.0 × 12.0 × 10.0 cm |"));
        assert!(md.contains("## Skipped Triangles"));
        assert!(md.contains("## Load Errors"));
        assert!(md.contains("broken.stl"));
    }

    #[test]
    fn test_write_json_round_trips() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("latest.json");
        Reporter::write_json(&sample_report(), &path)?;

        let parsed: AnalysisReport = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(parsed.total_models, 2);
        assert_eq!(parsed.results[0].result.face_count, 1200);
        Ok(())
    }
}
