use anyhow::{Context, Result};
use chrono::Utc;
use csv::Writer;
use std::fs::{File, OpenOptions};
use std::path::Path;

const HEADER: [&str; 9] = [
    "timestamp",
    "name",
    "input_url",
    "action",
    "status",
    "page_url",
    "http_status",
    "bytes",
    "detail",
];

const MAX_DETAIL_CHARS: usize = 1000;

/// What kind of step a log row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    FetchHomepage,
    FetchAbout,
    Classify,
    Row,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::FetchHomepage => "fetch_homepage",
            LogAction::FetchAbout => "fetch_about",
            LogAction::Classify => "classify",
            LogAction::Row => "row",
        }
    }
}

/// How a logged step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Start,
    Ok,
    Error,
    MissingUrl,
    Exception,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Start => "start",
            LogStatus::Ok => "ok",
            LogStatus::Error => "error",
            LogStatus::MissingUrl => "missing_url",
            LogStatus::Exception => "exception",
        }
    }
}

/// Append-only CSV audit trail of every network action and terminal row
/// outcome. Rows are flushed as they are written so a partial run stays
/// inspectable. An existing log file is appended to, never truncated, so
/// consecutive runs accumulate history.
pub struct RunLogger {
    writer: Writer<File>,
}

impl RunLogger {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let needs_header = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open run log {}", path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
            writer.flush()?;
        }
        Ok(Self { writer })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn log(
        &mut self,
        name: &str,
        input_url: &str,
        action: LogAction,
        status: LogStatus,
        page_url: Option<&str>,
        http_status: Option<u16>,
        byte_size: Option<usize>,
        detail: Option<&str>,
    ) -> Result<()> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let detail: String = detail
            .unwrap_or_default()
            .chars()
            .take(MAX_DETAIL_CHARS)
            .collect();
        let http_status = http_status.map(|s| s.to_string()).unwrap_or_default();
        let byte_size = byte_size.map(|b| b.to_string()).unwrap_or_default();
        self.writer.write_record([
            timestamp.as_str(),
            name,
            input_url,
            action.as_str(),
            status.as_str(),
            page_url.unwrap_or_default(),
            http_status.as_str(),
            byte_size.as_str(),
            detail.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn read(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn header_is_written_once_on_creation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_log.csv");

        let mut logger = RunLogger::open(&path).unwrap();
        logger
            .log(
                "Studio X",
                "http://x.example",
                LogAction::FetchHomepage,
                LogStatus::Start,
                Some("http://x.example"),
                None,
                None,
                None,
            )
            .unwrap();
        drop(logger);

        let rows = read(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], HEADER.map(|h| h.to_string()).to_vec());
        assert_eq!(rows[1][1], "Studio X");
        assert_eq!(rows[1][3], "fetch_homepage");
        assert_eq!(rows[1][4], "start");
    }

    #[test]
    fn existing_log_is_appended_not_truncated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_log.csv");

        let mut first = RunLogger::open(&path).unwrap();
        first
            .log("A", "", LogAction::Row, LogStatus::MissingUrl, None, None, None, None)
            .unwrap();
        drop(first);

        let mut second = RunLogger::open(&path).unwrap();
        second
            .log("B", "", LogAction::Row, LogStatus::MissingUrl, None, None, None, None)
            .unwrap();
        drop(second);

        let rows = read(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "timestamp");
        assert_eq!(rows[1][1], "A");
        assert_eq!(rows[2][1], "B");
    }

    #[test]
    fn numeric_fields_and_detail_are_recorded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_log.csv");

        let mut logger = RunLogger::open(&path).unwrap();
        logger
            .log(
                "Studio X",
                "http://x.example",
                LogAction::FetchAbout,
                LogStatus::Error,
                Some("http://x.example/about"),
                Some(404),
                Some(512),
                Some("not found"),
            )
            .unwrap();
        drop(logger);

        let rows = read(&path);
        assert_eq!(rows[1][5], "http://x.example/about");
        assert_eq!(rows[1][6], "404");
        assert_eq!(rows[1][7], "512");
        assert_eq!(rows[1][8], "not found");
    }

    #[test]
    fn absent_optionals_are_empty_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_log.csv");

        let mut logger = RunLogger::open(&path).unwrap();
        logger
            .log(
                "Studio X",
                "",
                LogAction::Row,
                LogStatus::MissingUrl,
                None,
                None,
                None,
                None,
            )
            .unwrap();
        drop(logger);

        let rows = read(&path);
        assert_eq!(rows[1][5], "");
        assert_eq!(rows[1][6], "");
        assert_eq!(rows[1][7], "");
        assert_eq!(rows[1][8], "");
    }

    #[test]
    fn detail_is_truncated_to_a_thousand_chars() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_log.csv");

        let long = "d".repeat(1500);
        let mut logger = RunLogger::open(&path).unwrap();
        logger
            .log(
                "Studio X",
                "",
                LogAction::Classify,
                LogStatus::Ok,
                None,
                None,
                None,
                Some(&long),
            )
            .unwrap();
        drop(logger);

        let rows = read(&path);
        assert_eq!(rows[1][8].len(), 1000);
    }

    #[test]
    fn timestamps_are_utc_second_precision_zulu() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_log.csv");

        let mut logger = RunLogger::open(&path).unwrap();
        logger
            .log("A", "", LogAction::Row, LogStatus::MissingUrl, None, None, None, None)
            .unwrap();
        drop(logger);

        let rows = read(&path);
        let stamp = &rows[1][0];
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2026-01-01T00:00:00Z".len());
        assert!(!stamp.contains('.'));
    }
}
