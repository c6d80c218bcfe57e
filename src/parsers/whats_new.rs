//! "What's new" walker
//!
//! Reads the table of contents of the what's-new index, then visits every
//! linked article for its title and editor/author block.

use crate::config::UrlsConfig;
use crate::html::{element_text, find_all, find_tag, TagQuery};
use crate::http::Session;
use crate::output::ResultTable;
use crate::parsers::{load_page, required_attr};
use crate::progress::Progress;
use crate::Result;
use scraper::Html;
use url::Url;

pub const WHATS_NEW_HEADER: [&str; 3] = ["Ссылка на статью", "Заголовок", "Редактор, Автор"];

/// Builds the table of (article link, title, editors/authors)
///
/// One malformed article aborts the whole walk.
pub async fn whats_new(
    session: &mut Session,
    urls: &UrlsConfig,
    progress: &mut dyn Progress,
) -> Result<ResultTable> {
    let whats_new_url = Url::parse(&urls.main_doc_url)?.join("whatsnew/")?;

    let hrefs = {
        let document = load_page(session, whats_new_url.as_str()).await?;
        article_hrefs(&document)?
    };

    let mut results = ResultTable::new(&WHATS_NEW_HEADER);
    progress.begin(hrefs.len());
    for href in hrefs {
        let version_link = whats_new_url.join(&href)?;
        let (title, editors) = {
            let page = load_page(session, version_link.as_str()).await?;
            article_summary(&page)?
        };
        progress.advance(version_link.as_str());
        results.push([version_link.to_string(), title, editors]);
    }
    progress.finish();

    Ok(results)
}

/// Relative links of the table-of-contents entries, in page order
fn article_hrefs(document: &Html) -> Result<Vec<String>> {
    let main_section = find_tag(
        document.root_element(),
        &TagQuery::new("section").attr("id", "what-s-new-in-python"),
    )?;
    let toc = find_tag(
        main_section,
        &TagQuery::new("div").attr("class", "toctree-wrapper"),
    )?;

    find_all(toc, &TagQuery::new("li").attr("class", "toctree-l1"))
        .into_iter()
        .map(|item| {
            let link = find_tag(item, &TagQuery::new("a"))?;
            required_attr(link, "href").map(str::to_string)
        })
        .collect()
}

/// Title heading and the first definition list with newlines flattened
fn article_summary(page: &Html) -> Result<(String, String)> {
    let h1 = find_tag(page.root_element(), &TagQuery::new("h1"))?;
    let dl = find_tag(page.root_element(), &TagQuery::new("dl"))?;
    Ok((element_text(h1), element_text(dl).replace('\n', " ")))
}
