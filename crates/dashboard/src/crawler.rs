// File: crates/dashboard/src/crawler.rs
// Summary: Scraper for the campus police crime-log pages; turns paired table rows into log records.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::{CrawlError, NetworkError};

/// Criminal log listing; pages are selected with `?offset=N`.
pub const CRIMINAL_LOGS_URL: &str = "http://www.police.gatech.edu/crimeinfo/crimelogs/crimelog.php";

/// Rows of the log table, header rows included.
pub const ROWS_SELECTOR: &str = "form > table tr";

/// Leading rows of the log table that hold column headings.
pub const HEADER_ROWS: usize = 4;

const DATE_FORMAT: &str = "%m %d %Y %H %M";

/// One crime-log entry, spread over two table rows on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub case_number: String,
    pub date_reported: String,
    pub date_started: NaiveDateTime,
    pub date_ended: Option<NaiveDateTime>,
    pub disposition: String,
    pub status: String,
    pub location: String,
    pub nature: String,
}

/// Collapse every run of non-word characters to one space and trim.
pub fn clean(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut gap = false;
    for c in s.chars() {
        if c.is_alphanumeric() || c == '_' {
            if gap && !out.is_empty() {
                out.push(' ');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }
    out
}

/// Parse `mm/dd/yyyy [hh:mm]` in whatever punctuation the page uses.
/// A date without a time is midnight of that day.
pub fn to_date(s: &str) -> Result<NaiveDateTime, CrawlError> {
    let mut cleaned = clean(s);
    if cleaned.split(' ').count() == 3 {
        cleaned.push_str(" 00 00");
    }
    NaiveDateTime::parse_from_str(&cleaned, DATE_FORMAT)
        .map_err(|source| CrawlError::BadDate { input: s.trim().to_string(), source })
}

/// `start [- end]` from the "occurred" cell.
pub fn parse_occurred_info(info: &str) -> Result<(NaiveDateTime, Option<NaiveDateTime>), CrawlError> {
    let mut parts = info.split('-');
    let start = to_date(parts.next().unwrap_or_default())?;
    let end = parts.next().map(to_date).transpose()?;
    Ok((start, end))
}

fn selector(css: &str) -> Result<Selector, CrawlError> {
    Selector::parse(css).map_err(|e| CrawlError::Selector(e.to_string()))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Build a record from its two rows: the first holds the cells
/// (case, reported, occurred, disposition, status), the second a single
/// `Location: ... Nature: ...` cell.
pub fn parse_record(row_1: ElementRef<'_>, row_2: ElementRef<'_>) -> Result<LogRecord, CrawlError> {
    let td = selector("td")?;
    let cells: Vec<String> = row_1.select(&td).map(text_of).collect();
    if cells.len() < 5 {
        return Err(CrawlError::MissingCells { found: cells.len() });
    }
    let (date_started, date_ended) = parse_occurred_info(&cells[2])?;

    let detail = text_of(row_2);
    let (location, nature) = detail.split_once("Nature:").ok_or(CrawlError::MissingMarker("Nature:"))?;
    let location = location.split("Location:").nth(1).ok_or(CrawlError::MissingMarker("Location:"))?;

    Ok(LogRecord {
        case_number: clean(&cells[0]),
        date_reported: clean(&cells[1]),
        date_started,
        date_ended,
        disposition: clean(&cells[3]),
        status: clean(&cells[4]),
        location: clean(location),
        nature: clean(nature),
    })
}

/// Every record on one log page. Criminal and non-criminal pages share the layout.
pub fn scrape_page(html: &str) -> Result<Vec<LogRecord>, CrawlError> {
    let doc = Html::parse_document(html);
    let rows_sel = selector(ROWS_SELECTOR)?;
    let rows: Vec<ElementRef<'_>> = doc.select(&rows_sel).skip(HEADER_ROWS).collect();

    let mut records = Vec::with_capacity(rows.len() / 2);
    for pair in rows.chunks(2) {
        match pair {
            [row_1, row_2] => records.push(parse_record(*row_1, *row_2)?),
            _ => warn!("trailing table row without a partner, skipped"),
        }
    }
    debug!(rows = rows.len(), records = records.len(), "page scraped");
    Ok(records)
}

/// Downloads log pages by offset.
#[derive(Clone, Debug)]
pub struct LogCrawler {
    base_url: String,
    client: reqwest::Client,
}

impl LogCrawler {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self { base_url: base_url.into(), client }
    }

    pub fn page_url(&self, offset: u32) -> String {
        format!("{}?offset={offset}", self.base_url)
    }

    /// Raw HTML of the page at `offset`. Only `200 OK` counts as success.
    pub async fn fetch_page(&self, offset: u32) -> Result<String, CrawlError> {
        let url = self.page_url(offset);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| NetworkError::Transport { url: url.clone(), source })?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(%url, %status, "unexpected status");
            return Err(NetworkError::Status { url, status }.into());
        }
        let body = response
            .text()
            .await
            .map_err(|source| NetworkError::Transport { url: url.clone(), source })?;
        Ok(body)
    }

    #[instrument(skip(self))]
    pub async fn crawl_page(&self, offset: u32) -> Result<Vec<LogRecord>, CrawlError> {
        let html = self.fetch_page(offset).await?;
        scrape_page(&html)
    }
}

/// Write `records` as pretty JSON, creating the parent directory.
pub fn save_records(path: &Path, records: &[LogRecord]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .with_context(|| format!("write {}", path.display()))
}
