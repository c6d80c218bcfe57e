//! Page extractors and the mode dispatcher
//!
//! Each mode fetches one page (or an index page plus the pages it links to)
//! and turns it into a `ResultTable`. Requests are issued one at a time, in the
//! order pages are discovered.

mod download;
mod latest_versions;
mod pep;
mod whats_new;

pub use download::{archive_filename, download, PDF_A4_PATTERN};
pub use latest_versions::{latest_versions, parse_version_link, LATEST_VERSIONS_HEADER};
pub use pep::{pep, pep_report, status_abbreviation, Mismatch, PepReport, PEP_HEADER};
pub use whats_new::{whats_new, WHATS_NEW_HEADER};

use crate::config::Config;
use crate::html::parse_document;
use crate::http::{get_response, Session};
use crate::output::ResultTable;
use crate::progress::Progress;
use crate::{Result, ScraperError};
use scraper::{ElementRef, Html};
use std::fmt;

/// Scraping mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// "What's new" articles with their editors and authors
    WhatsNew,
    /// Documentation versions and their status
    LatestVersions,
    /// Download the A4 PDF documentation archive
    Download,
    /// Tally PEP statuses and report index/page mismatches
    Pep,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::WhatsNew,
        Mode::LatestVersions,
        Mode::Download,
        Mode::Pep,
    ];

    /// The name used on the command line and in result file names
    pub fn name(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the extractor for `mode`
///
/// # Returns
///
/// * `Ok(Some(table))` - The extracted table
/// * `Ok(None)` - The mode has nothing to print (download)
/// * `Err(ScraperError)` - The run was aborted; no partial results
pub async fn run_mode(
    mode: Mode,
    session: &mut Session,
    config: &Config,
    progress: &mut dyn Progress,
) -> Result<Option<ResultTable>> {
    match mode {
        Mode::WhatsNew => whats_new(session, &config.urls, progress).await.map(Some),
        Mode::LatestVersions => latest_versions(session, &config.urls).await.map(Some),
        Mode::Download => {
            download(session, &config.urls, &config.downloads_dir()).await?;
            Ok(None)
        }
        Mode::Pep => pep(session, &config.urls, &config.expected_status, progress)
            .await
            .map(Some),
    }
}

/// Fetches and parses a page; a missing response aborts the extractor
async fn load_page(session: &mut Session, url: &str) -> Result<Html> {
    let response = get_response(session, url)
        .await
        .ok_or_else(|| ScraperError::EmptyResponse {
            url: url.to_string(),
        })?;
    Ok(parse_document(&response.text()))
}

/// Reads an attribute that the page structure guarantees
fn required_attr<'a>(element: ElementRef<'a>, attr: &str) -> Result<&'a str> {
    element.value().attr(attr).ok_or_else(|| {
        tracing::error!("Tag {} has no '{}' attribute", element.value().name(), attr);
        ScraperError::MissingAttribute {
            tag: element.value().name().to_string(),
            attr: attr.to_string(),
        }
    })
}
