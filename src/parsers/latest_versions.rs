//! Documentation version list

use crate::config::UrlsConfig;
use crate::html::{element_text, find_all, find_tag, TagQuery};
use crate::http::Session;
use crate::output::ResultTable;
use crate::parsers::{load_page, required_attr};
use crate::{Result, ScraperError};
use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

pub const LATEST_VERSIONS_HEADER: [&str; 3] = ["Ссылка на документацию", "Версия", "Статус"];

const VERSIONS_MARKER: &str = "All versions";

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)")
        .expect("version pattern is a valid regex")
});

/// Builds the table of (docs link, version, status) from the sidebar
pub async fn latest_versions(session: &mut Session, urls: &UrlsConfig) -> Result<ResultTable> {
    let document = load_page(session, &urls.main_doc_url).await?;
    versions_table(&document)
}

fn versions_table(document: &Html) -> Result<ResultTable> {
    let sidebar = find_tag(
        document.root_element(),
        &TagQuery::new("div").attr("class", "sphinxsidebarwrapper"),
    )?;
    let versions_list = find_versions_list(sidebar)?;

    let mut results = ResultTable::new(&LATEST_VERSIONS_HEADER);
    for link in find_all(versions_list, &TagQuery::new("a")) {
        let href = required_attr(link, "href")?;
        let (version, status) = parse_version_link(&element_text(link));
        results.push([href.to_string(), version, status]);
    }
    Ok(results)
}

/// The sidebar list whose text mentions "All versions"
fn find_versions_list(sidebar: ElementRef<'_>) -> Result<ElementRef<'_>> {
    find_all(sidebar, &TagQuery::new("ul"))
        .into_iter()
        .find(|ul| element_text(*ul).contains(VERSIONS_MARKER))
        .ok_or_else(|| {
            tracing::error!("Python versions list not found");
            ScraperError::PythonVersionsNotFound
        })
}

/// Splits `Python 3.11 (stable)` into `("3.11", "stable")`
///
/// Text that does not follow that shape is returned whole as the version,
/// with an empty status.
pub fn parse_version_link(text: &str) -> (String, String) {
    match VERSION_PATTERN.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}
