use liberty_triage::render::{render, OutputFormat, RenderOptions, Section};
use liberty_triage::report::{analyze, RecordFilter};
use liberty_triage::TriageError;

const SAMPLE: &str = "[11/7/25 10:30:01:000000 EST] 1 com.ibm.ws.A I app started
[11/7/25 10:30:02:000000 EST] 1 com.ibm.ws.B W slow response
[11/7/25 10:30:03:000000 EST] 1 com.ibm.ws.C E request failed
[11/7/25 10:30:04:000000 EST] 1 com.ibm.ws.D I recovered";

fn opts(section: Section, format: OutputFormat) -> RenderOptions {
    RenderOptions { section, format, ..Default::default() }
}

#[test]
fn section_and_format_names_parse() {
    assert_eq!("all".parse::<Section>().unwrap(), Section::All);
    assert_eq!("logs".parse::<Section>().unwrap(), Section::Logs);
    assert_eq!("summary".parse::<Section>().unwrap(), Section::Summary);
    assert_eq!("error".parse::<Section>().unwrap(), Section::Error);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
}

#[test]
fn unknown_section_and_format_are_errors() {
    let err = "patterns".parse::<Section>().unwrap_err();
    assert!(matches!(err, TriageError::UnknownSection(ref s) if s == "patterns"));
    let err = "yaml".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err.to_string(), "unknown format 'yaml' (expected json or table)");
}

#[test]
fn full_json_report_has_viewer_keys() {
    let report = analyze(SAMPLE, 3);
    let text = render(&report, &RenderOptions::default()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["logs"].as_array().unwrap().len(), 4);
    assert_eq!(v["summary"]["total"], 4);
    assert_eq!(v["firstError"]["id"], 3);
    assert_eq!(v["preErrorContext"].as_array().unwrap().len(), 2);
}

#[test]
fn logs_section_applies_filter_but_summary_does_not() {
    let report = analyze(SAMPLE, 3);
    let filter = RecordFilter::new().with_levels(["I"]);
    let logs = RenderOptions {
        section: Section::Logs,
        filter: filter.clone(),
        ..Default::default()
    };
    let v: serde_json::Value = serde_json::from_str(&render(&report, &logs).unwrap()).unwrap();
    let ids: Vec<u64> = v.as_array().unwrap().iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 4]);

    let summary = RenderOptions { section: Section::Summary, filter, ..Default::default() };
    let v: serde_json::Value = serde_json::from_str(&render(&report, &summary).unwrap()).unwrap();
    assert_eq!(v["total"], 4);
}

#[test]
fn error_section_json_without_error_is_null() {
    let report = analyze("[11/7/25 10:30:01:000000 EST] 1 a.B I fine", 3);
    let text = render(&report, &opts(Section::Error, OutputFormat::Json)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(v["firstError"].is_null());
    assert!(v["preErrorContext"].as_array().unwrap().is_empty());
}

#[test]
fn logs_table_has_header_and_one_row_per_record() {
    let report = analyze(SAMPLE, 3);
    let text = render(&report, &opts(Section::Logs, OutputFormat::Table)).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Id"));
    assert!(lines[0].contains("Severity"));
    assert!(lines[3].starts_with("3 "));
    assert!(lines[3].contains("ERROR"));
    assert!(lines[3].ends_with("request failed"));
}

#[test]
fn summary_table_lists_counts_and_total() {
    let report = analyze(SAMPLE, 3);
    let text = render(&report, &opts(Section::Summary, OutputFormat::Table)).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["Severity   Count", "ERROR      1", "INFO       2", "WARN       1", "total      4"]
    );
}

#[test]
fn error_table_lists_context_then_error() {
    let report = analyze(SAMPLE, 1);
    let text = render(&report, &opts(Section::Error, OutputFormat::Table)).unwrap();
    let ids: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(ids, vec!["2", "3"]);

    let clean = analyze("[11/7/25 10:30:01:000000 EST] 1 a.B I fine", 3);
    let text = render(&clean, &opts(Section::Error, OutputFormat::Table)).unwrap();
    assert_eq!(text.trim_end(), "no ERROR or FATAL entries");
}

#[test]
fn full_table_is_summary_then_error_rows() {
    let report = analyze(SAMPLE, 3);
    let text = render(&report, &opts(Section::All, OutputFormat::Table)).unwrap();
    assert!(text.starts_with("Severity   Count\n"));
    assert!(text.contains("\n\nId "));
    assert!(text.trim_end().ends_with("request failed"));
}
