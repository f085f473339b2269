use crate::error::TriageError;
use crate::record::LogRecord;
use crate::report::{AnalysisReport, RecordFilter, Summary};
use std::fmt::Write;
use std::str::FromStr;

/// Which part of the report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    All,
    Logs,
    Summary,
    Error,
}

impl FromStr for Section {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Section::All),
            "logs" => Ok(Section::Logs),
            "summary" => Ok(Section::Summary),
            "error" => Ok(Section::Error),
            other => Err(TriageError::UnknownSection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(TriageError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub section: Section,
    pub format: OutputFormat,
    /// Narrows the `logs` list; summary and error context always cover
    /// every record.
    pub filter: RecordFilter,
}

/// Render a report section as pretty JSON or fixed-width columns.
pub fn render(report: &AnalysisReport, opts: &RenderOptions) -> Result<String, TriageError> {
    let logs = opts.filter.apply(&report.logs);
    let table = opts.format == OutputFormat::Table;
    let out = match opts.section {
        Section::All if table => {
            let mut out = summary_table(&report.summary);
            out.push('\n');
            out.push_str(&error_table(report));
            out
        }
        Section::All => {
            let section = serde_json::json!({
                "logs": logs,
                "summary": report.summary,
                "firstError": report.first_error,
                "preErrorContext": report.pre_error_context,
            });
            serde_json::to_string_pretty(&section)?
        }
        Section::Logs if table => records_table(logs),
        Section::Logs => serde_json::to_string_pretty(&logs)?,
        Section::Summary if table => summary_table(&report.summary),
        Section::Summary => serde_json::to_string_pretty(&report.summary)?,
        Section::Error if table => error_table(report),
        Section::Error => {
            let section = serde_json::json!({
                "firstError": report.first_error,
                "preErrorContext": report.pre_error_context,
            });
            serde_json::to_string_pretty(&section)?
        }
    };
    Ok(out)
}

fn records_table<'a>(records: impl IntoIterator<Item = &'a LogRecord>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<34} {:<8} {:<20} {}",
        "Id", "Timestamp", "Severity", "Component", "Message"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<6} {:<34} {:<8} {:<20} {}",
            r.id, r.timestamp, r.severity, r.component, r.message
        );
    }
    out
}

fn summary_table(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {}", "Severity", "Count");
    for (severity, count) in &summary.by_severity {
        let _ = writeln!(out, "{:<10} {}", severity, count);
    }
    let _ = writeln!(out, "{:<10} {}", "total", summary.total);
    out
}

fn error_table(report: &AnalysisReport) -> String {
    match &report.first_error {
        Some(first) => records_table(report.pre_error_context.iter().chain(Some(first))),
        None => "no ERROR or FATAL entries\n".to_string(),
    }
}
