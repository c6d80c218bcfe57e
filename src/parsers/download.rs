//! PDF (A4) documentation archive downloader

use crate::config::UrlsConfig;
use crate::html::{find_tag, TagQuery};
use crate::http::Session;
use crate::parsers::{load_page, required_attr};
use crate::{Result, ScraperError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use url::Url;

/// Archive links accepted on the downloads page
pub const PDF_A4_PATTERN: &str = r".+pdf-a4\.zip$";

static PDF_A4_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PDF_A4_PATTERN).expect("archive pattern is a valid regex"));

/// Downloads the A4 PDF archive into `downloads_dir`
///
/// The archive itself is fetched without the response cache.
///
/// # Returns
///
/// The path the archive was written to
pub async fn download(
    session: &mut Session,
    urls: &UrlsConfig,
    downloads_dir: &Path,
) -> Result<PathBuf> {
    let downloads_url = Url::parse(&urls.main_doc_url)?.join("download.html")?;

    let archive_url = {
        let document = load_page(session, downloads_url.as_str()).await?;
        let main = find_tag(
            document.root_element(),
            &TagQuery::new("div").attr("role", "main"),
        )?;
        let table = find_tag(main, &TagQuery::new("table").attr("class", "docutils"))?;
        let pdf_a4_link = find_tag(
            table,
            &TagQuery::new("a").attr_matching("href", PDF_A4_LINK.clone()),
        )?;
        downloads_url.join(required_attr(pdf_a4_link, "href")?)?
    };

    let filename = archive_filename(archive_url.as_str());
    tokio::fs::create_dir_all(downloads_dir).await?;
    let archive_path = downloads_dir.join(filename);

    tracing::debug!("Downloading {}", archive_url);
    let content = session
        .get_uncached(archive_url.as_str())
        .await
        .map_err(|source| {
            tracing::error!("Failed to download {}: {}", archive_url, source);
            ScraperError::Transport {
                url: archive_url.to_string(),
                source,
            }
        })?;
    tokio::fs::write(&archive_path, &content).await?;

    tracing::info!("Archive downloaded and saved: {}", archive_path.display());
    Ok(archive_path)
}

/// Final path segment of an archive URL
pub fn archive_filename(archive_url: &str) -> &str {
    archive_url.rsplit('/').next().unwrap_or(archive_url)
}
