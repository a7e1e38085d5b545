use std::io::Write;
use std::time::Duration;
use studioscope::commands::command_argument_builder;
use studioscope::handlers::{expand_path, handle_enrich, parse_delay_window, summarize};
use studioscope_core::record::{Category, EnrichmentRecord, RowStatus};
use tempfile::tempdir;

#[test]
fn test_expand_path_plain() {
    assert_eq!(expand_path("out.csv"), std::path::PathBuf::from("out.csv"));
}

#[test]
fn test_expand_path_tilde() {
    let expanded = expand_path("~/out.csv");
    assert!(!expanded.to_string_lossy().starts_with('~'));
    assert!(expanded.to_string_lossy().ends_with("out.csv"));
}

#[test]
fn test_parse_delay_window_valid() {
    let (min, max) = parse_delay_window(1.0, 2.0).unwrap();
    assert_eq!(min, Duration::from_secs(1));
    assert_eq!(max, Duration::from_secs(2));
}

#[test]
fn test_parse_delay_window_zero_is_allowed() {
    let (min, max) = parse_delay_window(0.0, 0.0).unwrap();
    assert_eq!(min, Duration::ZERO);
    assert_eq!(max, Duration::ZERO);
}

#[test]
fn test_parse_delay_window_inverted() {
    assert!(parse_delay_window(2.0, 1.0).is_err());
}

#[test]
fn test_parse_delay_window_negative() {
    assert!(parse_delay_window(-1.0, 2.0).is_err());
}

#[test]
fn test_summarize_counts_by_category() {
    let mut a = EnrichmentRecord::unprocessed("A", "", RowStatus::Ok);
    a.category = Category::Interdisciplinary;
    let b = EnrichmentRecord::unprocessed("B", "", RowStatus::MissingUrl);
    let mut c = EnrichmentRecord::unprocessed("C", "", RowStatus::Ok);
    c.category = Category::Interdisciplinary;

    let summary = summarize(&[a, b, c]);
    assert_eq!(summary[0], (Category::Interdisciplinary, 2));
    assert_eq!(summary[1], (Category::GraphicOnly, 0));
    assert_eq!(summary[2], (Category::UnclearMissing, 1));
}

#[tokio::test]
async fn test_enrich_end_to_end_without_network() {
    // A single missing-url row exercises the whole handler path (input,
    // pipeline, export, run log) without touching the network.
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("out.csv");
    let log = dir.path().join("run_log.csv");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "name,url").unwrap();
    writeln!(file, "Ghost Studio,").unwrap();
    drop(file);

    let matches = command_argument_builder().get_matches_from([
        "studioscope",
        "--quiet",
        "enrich",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--log",
        log.to_str().unwrap(),
    ]);
    let (_, sub) = matches.subcommand().unwrap();

    handle_enrich(sub, true).await.unwrap();

    let unclear =
        std::fs::read_to_string(dir.path().join("out_Unclear_missing.csv")).unwrap();
    assert!(unclear.contains("Ghost Studio"));
    assert!(unclear.contains("missing_url"));

    let log_content = std::fs::read_to_string(&log).unwrap();
    assert!(log_content.starts_with("timestamp,name,input_url"));
    assert!(log_content.contains("row,missing_url"));
}

#[tokio::test]
async fn test_unknown_format_is_rejected_before_any_work() {
    let matches = command_argument_builder().get_matches_from([
        "studioscope",
        "enrich",
        "--format",
        "xlsx",
    ]);
    let (_, sub) = matches.subcommand().unwrap();

    let err = handle_enrich(sub, true).await.unwrap_err();
    assert!(err.to_string().contains("xlsx"));
}
