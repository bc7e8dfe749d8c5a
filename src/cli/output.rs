use console::style;
use std::fmt::Write as FmtWrite;

use crate::cli::commands::SamplesReport;
use crate::models::OutputFormat;
use crate::services::PrepareStats;

pub trait Formatter {
    fn format_prepare_stats(&self, stats: &PrepareStats) -> String;
    fn format_samples(&self, report: &SamplesReport) -> String;
    fn format_error(&self, error: &str, hint: Option<&str>) -> String;
}

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_prepare_stats(&self, stats: &PrepareStats) -> String {
        let mut output = String::new();
        writeln!(output, "Upload Complete").unwrap();
        writeln!(output, "---------------").unwrap();
        writeln!(output, "Documents:       {}", stats.documents).unwrap();
        writeln!(output, "Chunks created:  {}", stats.chunks_created).unwrap();
        writeln!(output, "Batches:         {}", stats.batches).unwrap();
        writeln!(output, "Chunks uploaded: {}", stats.chunks_uploaded).unwrap();
        writeln!(output, "Backend:         {}", stats.backend).unwrap();
        writeln!(output, "Duration:        {}ms", stats.duration_ms).unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "{} Successfully processed and uploaded {} document chunks!",
            style("✓").green(),
            stats.chunks_uploaded
        )
        .unwrap();
        output
    }

    fn format_samples(&self, report: &SamplesReport) -> String {
        let mut output = String::new();
        let config_status = if report.config_created {
            "created"
        } else {
            "already exists"
        };
        writeln!(
            output,
            "Config:    {} ({})",
            report.config_path.display(),
            config_status
        )
        .unwrap();
        writeln!(
            output,
            "Documents: {} ({} created)",
            report.docs_path.display(),
            report.documents_created.len()
        )
        .unwrap();
        for filename in &report.documents_created {
            writeln!(output, "  {} {}", style("✓").green(), filename).unwrap();
        }
        writeln!(output).unwrap();
        writeln!(output, "Next steps:").unwrap();
        writeln!(
            output,
            "1. Update {} with your API keys",
            report.config_path.display()
        )
        .unwrap();
        writeln!(
            output,
            "2. Add your documents to the {} directory",
            report.docs_path.display()
        )
        .unwrap();
        writeln!(output, "3. Run: vecprep").unwrap();
        output
    }

    fn format_error(&self, error: &str, hint: Option<&str>) -> String {
        let mut output = format!("{} {}\n", style("Error:").red().bold(), error);
        if let Some(hint) = hint {
            writeln!(output, "{}", style(hint).dim()).unwrap();
        }
        output
    }
}

pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render(&self, value: &serde_json::Value) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)) + "\n"
    }
}

impl Formatter for JsonFormatter {
    fn format_prepare_stats(&self, stats: &PrepareStats) -> String {
        let json = serde_json::json!({
            "documents": stats.documents,
            "chunks_created": stats.chunks_created,
            "batches": stats.batches,
            "chunks_uploaded": stats.chunks_uploaded,
            "backend": stats.backend,
            "duration_ms": stats.duration_ms,
        });
        self.render(&json)
    }

    fn format_samples(&self, report: &SamplesReport) -> String {
        let json = serde_json::json!({
            "config": {
                "path": report.config_path.display().to_string(),
                "created": report.config_created,
            },
            "documents": {
                "path": report.docs_path.display().to_string(),
                "created": report.documents_created,
            }
        });
        self.render(&json)
    }

    fn format_error(&self, error: &str, hint: Option<&str>) -> String {
        self.render(&serde_json::json!({"error": error, "hint": hint}))
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
