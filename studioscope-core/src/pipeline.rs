use crate::classify::{classify, confidence_score};
use crate::record::{Entity, EnrichmentRecord, PageRecord, RowStatus};
use crate::runlog::{LogAction, LogStatus, RunLogger};
use crate::signals;
use anyhow::Result;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use studioscope_crawler::{Fetcher, clean_text, discover_about_links};
use tracing::{info, warn};

/// Reporting cap on the combined-text excerpt; classification always sees
/// the full text.
pub const MAX_EXCERPT_CHARS: usize = 1500;

/// Sequences the crawl-and-classify steps for each entity: normalize →
/// homepage → about discovery → about fetches → signals → verdict, with
/// every network action mirrored into the run log.
pub struct Pipeline {
    fetcher: Fetcher,
    logger: RunLogger,
}

impl Pipeline {
    pub fn new(fetcher: Fetcher, logger: RunLogger) -> Self {
        Self { fetcher, logger }
    }

    /// Process every entity in input order. One entity's panic is caught,
    /// logged with status `exception`, and turned into a default verdict;
    /// it never aborts the batch. Failure to append to the run log is
    /// fatal — the audit trail is not optional.
    pub async fn run_batch<F>(
        &mut self,
        entities: &[Entity],
        mut progress: F,
    ) -> Result<Vec<EnrichmentRecord>>
    where
        F: FnMut(usize, &Entity),
    {
        let mut records = Vec::with_capacity(entities.len());
        for (idx, entity) in entities.iter().enumerate() {
            progress(idx, entity);
            let outcome = AssertUnwindSafe(self.process_entity(entity))
                .catch_unwind()
                .await;
            match outcome {
                Ok(record) => records.push(record?),
                Err(payload) => {
                    let detail = panic_detail(payload.as_ref());
                    warn!("processing {} panicked: {}", entity.name, detail);
                    let raw_url = entity.url.as_deref().unwrap_or_default();
                    self.logger.log(
                        &entity.name,
                        raw_url,
                        LogAction::Row,
                        LogStatus::Exception,
                        None,
                        None,
                        None,
                        Some(&detail),
                    )?;
                    let mut record =
                        EnrichmentRecord::unprocessed(&entity.name, raw_url, RowStatus::Exception);
                    record.category_reason = "Processing error".to_string();
                    records.push(record);
                }
            }
        }
        info!("processed {} entities", records.len());
        Ok(records)
    }

    /// One entity, start to verdict. Expected failures (missing url,
    /// unreachable homepage, failed about pages) degrade the result; only
    /// log I/O can error out.
    pub async fn process_entity(&mut self, entity: &Entity) -> Result<EnrichmentRecord> {
        let name = entity.name.as_str();
        let raw_url = entity.url.as_deref().unwrap_or_default();

        let Some(input_url) = normalize_url(raw_url) else {
            self.logger.log(
                name,
                raw_url,
                LogAction::Row,
                LogStatus::MissingUrl,
                None,
                None,
                None,
                None,
            )?;
            return Ok(EnrichmentRecord::unprocessed(
                name,
                raw_url,
                RowStatus::MissingUrl,
            ));
        };

        self.logger.log(
            name,
            raw_url,
            LogAction::FetchHomepage,
            LogStatus::Start,
            Some(&input_url),
            None,
            None,
            None,
        )?;
        let home = self.fetcher.fetch(&input_url).await;

        let mut record = EnrichmentRecord::unprocessed(name, raw_url, RowStatus::FetchError);
        if let Some(resolved) = &home.resolved_url {
            record.resolved_url = resolved.clone();
        }
        if !home.is_success() {
            self.logger.log(
                name,
                raw_url,
                LogAction::FetchHomepage,
                LogStatus::Error,
                Some(&input_url),
                home.http_status,
                Some(home.byte_size),
                None,
            )?;
            return Ok(record);
        }
        let resolved = home
            .resolved_url
            .clone()
            .unwrap_or_else(|| input_url.clone());
        self.logger.log(
            name,
            raw_url,
            LogAction::FetchHomepage,
            LogStatus::Ok,
            Some(&resolved),
            home.http_status,
            Some(home.byte_size),
            None,
        )?;

        let body = home.body.as_deref().unwrap_or_default();
        let home_text = clean_text(body);
        let about_links = discover_about_links(body, &input_url, home.resolved_url.as_deref());

        let mut pages: Vec<PageRecord> = Vec::new();
        if !home_text.is_empty() {
            pages.push(PageRecord {
                url: resolved.clone(),
                clean_text: home_text,
            });
        }

        for link in &about_links {
            self.logger.log(
                name,
                raw_url,
                LogAction::FetchAbout,
                LogStatus::Start,
                Some(link),
                None,
                None,
                None,
            )?;
            let outcome = self.fetcher.fetch(link).await;
            if !outcome.is_success() {
                self.logger.log(
                    name,
                    raw_url,
                    LogAction::FetchAbout,
                    LogStatus::Error,
                    Some(link),
                    outcome.http_status,
                    Some(outcome.byte_size),
                    None,
                )?;
                continue;
            }
            let page_url = outcome.resolved_url.clone().unwrap_or_else(|| link.clone());
            self.logger.log(
                name,
                raw_url,
                LogAction::FetchAbout,
                LogStatus::Ok,
                Some(&page_url),
                outcome.http_status,
                Some(outcome.byte_size),
                None,
            )?;
            let text = clean_text(outcome.body.as_deref().unwrap_or_default());
            if !text.is_empty() {
                pages.push(PageRecord {
                    url: page_url,
                    clean_text: text,
                });
            }
        }

        let combined = pages
            .iter()
            .map(|page| page.clean_text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let text_length = combined.chars().count();

        let signal_set = signals::extract_signals(&combined);
        let (category, reason) = classify(
            signal_set.mentions_design,
            signal_set.mentions_art,
            &signal_set.keywords,
            text_length,
            pages.len(),
        );
        let confidence = confidence_score(
            text_length,
            pages.len(),
            !signal_set.education_excerpt.is_empty(),
        );

        record.status = if text_length > 0 {
            RowStatus::Ok
        } else {
            RowStatus::NoText
        };
        record.source_pages = pages
            .iter()
            .map(|page| page.url.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        record.about_text_excerpt = combined.chars().take(MAX_EXCERPT_CHARS).collect();
        record.text_length = text_length;
        record.education_excerpt = signal_set.education_excerpt;
        record.mentions_design = signal_set.mentions_design;
        record.mentions_art = signal_set.mentions_art;
        record.self_keywords = signal_set.keywords.join(", ");
        record.category = category;
        record.category_reason = reason.to_string();
        record.confidence_score = confidence;

        self.logger.log(
            name,
            raw_url,
            LogAction::Classify,
            LogStatus::Ok,
            None,
            None,
            None,
            Some(&format!("{}: {}", category.as_str(), reason)),
        )?;

        Ok(record)
    }
}

/// Trim and, when schemeless, prefix `http://`. Blank input means the
/// entity has no URL at all.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("http://{}", trimmed))
    }
}

fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected panic".to_string()
    }
}
