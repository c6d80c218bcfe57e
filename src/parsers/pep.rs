//! PEP status aggregator
//!
//! Walks the numerical index of peps.python.org, opens every PEP page and
//! counts the status each page declares. The index row also carries a one
//! letter status abbreviation; when the page disagrees with it, the PEP is
//! recorded as a mismatch and reported in the log.

use crate::config::UrlsConfig;
use crate::html::{element_text, find_all, find_tag, next_element_sibling, TagQuery};
use crate::http::Session;
use crate::output::{ResultTable, StatusTally};
use crate::parsers::{load_page, required_attr};
use crate::progress::Progress;
use crate::{Result, ScraperError};
use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use url::Url;

pub const PEP_HEADER: [&str; 2] = ["Status", "Count"];

const STATUS_TERM: &str = "Status:";

/// A PEP whose page status is not one the index abbreviation allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub link: String,
    pub expected: Vec<String>,
    pub actual: String,
}

/// Everything collected during one walk of the index
#[derive(Debug, Clone, Default)]
pub struct PepReport {
    pub tally: StatusTally,
    /// Rows enumerated from the index
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl PepReport {
    /// Status counts, a blank separator row, then the total row count
    pub fn to_table(&self) -> ResultTable {
        let mut results = ResultTable::new(&PEP_HEADER);
        for (status, count) in self.tally.iter() {
            results.push([status.to_string(), count.to_string()]);
        }
        results.push(["", ""]);
        results.push(["Total".to_string(), self.total.to_string()]);
        results
    }

    /// Multi-line description of every mismatch, `None` when there are none
    pub fn mismatch_report(&self) -> Option<String> {
        if self.mismatches.is_empty() {
            return None;
        }

        let mut text = String::from("Mismatched statuses:\n");
        for mismatch in &self.mismatches {
            text.push_str(&format!(
                "{}\nStatus on page: {}\nExpected statuses: {}\n",
                mismatch.link,
                mismatch.actual,
                mismatch.expected.join(", ")
            ));
        }
        Some(text)
    }
}

/// One row of the numerical index
struct IndexRow {
    link: Url,
    expected: Vec<String>,
}

/// Builds the status tally table and logs any mismatches
pub async fn pep(
    session: &mut Session,
    urls: &UrlsConfig,
    expected_status: &BTreeMap<String, Vec<String>>,
    progress: &mut dyn Progress,
) -> Result<ResultTable> {
    let report = pep_report(session, urls, expected_status, progress).await?;

    if let Some(text) = report.mismatch_report() {
        tracing::info!("{}", text);
    }

    Ok(report.to_table())
}

/// Walks the index and every PEP page it links to
pub async fn pep_report(
    session: &mut Session,
    urls: &UrlsConfig,
    expected_status: &BTreeMap<String, Vec<String>>,
    progress: &mut dyn Progress,
) -> Result<PepReport> {
    let index_url = Url::parse(&urls.main_pep_url)?;

    let rows = {
        let document = load_page(session, index_url.as_str()).await?;
        index_rows(&document, &index_url, expected_status)?
    };

    let mut report = PepReport {
        total: rows.len(),
        ..PepReport::default()
    };

    progress.begin(rows.len());
    for row in rows {
        let status = {
            let page = load_page(session, row.link.as_str()).await?;
            page_status(&page)?
        };

        match status {
            Some(status) => {
                if !row.expected.contains(&status) {
                    report.mismatches.push(Mismatch {
                        link: row.link.to_string(),
                        expected: row.expected,
                        actual: status.clone(),
                    });
                }
                report.tally.increment(&status);
            }
            None => tracing::warn!("No status field on {}", row.link),
        }
        progress.advance(row.link.as_str());
    }
    progress.finish();

    Ok(report)
}

/// Rows of the numerical index with their links and expected statuses
fn index_rows(
    document: &Html,
    base: &Url,
    expected_status: &BTreeMap<String, Vec<String>>,
) -> Result<Vec<IndexRow>> {
    let section = find_tag(
        document.root_element(),
        &TagQuery::new("section").attr("id", "numerical-index"),
    )?;
    let tbody = find_tag(section, &TagQuery::new("tbody"))?;

    find_all(tbody, &TagQuery::new("tr"))
        .into_iter()
        .map(|tr| index_row(tr, base, expected_status))
        .collect()
}

fn index_row(
    tr: ElementRef,
    base: &Url,
    expected_status: &BTreeMap<String, Vec<String>>,
) -> Result<IndexRow> {
    let first_cell = find_tag(tr, &TagQuery::new("td"))?;
    let abbreviation = status_abbreviation(&element_text(first_cell));

    let link = find_tag(
        tr,
        &TagQuery::new("a").attr("class", "pep reference internal"),
    )?;
    let link = base.join(required_attr(link, "href")?)?;

    let expected = expected_status.get(&abbreviation).cloned().ok_or_else(|| {
        tracing::error!(
            "Unknown status abbreviation '{}' for {}",
            abbreviation,
            link
        );
        ScraperError::UnknownStatusAbbreviation {
            abbreviation,
            row: link.to_string(),
        }
    })?;

    Ok(IndexRow { link, expected })
}

/// Status letter from a type+status cell such as `SF`; empty for `I`
pub fn status_abbreviation(cell_text: &str) -> String {
    cell_text.trim().chars().skip(1).collect()
}

/// The value of the "Status:" field of a PEP page's header list
fn page_status(page: &Html) -> Result<Option<String>> {
    let dl = find_tag(page.root_element(), &TagQuery::new("dl"))?;
    let status = find_all(dl, &TagQuery::new("dt"))
        .into_iter()
        .find(|dt| element_text(*dt) == STATUS_TERM)
        .and_then(next_element_sibling)
        .map(element_text);
    Ok(status)
}
