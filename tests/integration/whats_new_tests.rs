use crate::common::{cached_session, mount_page, test_config, RecordingProgress};
use pydoc_scraper::parsers::WHATS_NEW_HEADER;
use pydoc_scraper::{run_mode, Mode, ScraperError};
use wiremock::MockServer;

const INDEX: &str = r#"<html><body>
<section id="what-s-new-in-python">
  <h1>What's New in Python</h1>
  <div class="toctree-wrapper compound">
    <ul>
      <li class="toctree-l1"><a class="reference internal" href="3.12.html">What's New In Python 3.12</a>
        <ul><li class="toctree-l2"><a href="3.12.html#summary">Summary</a></li></ul>
      </li>
      <li class="toctree-l1"><a class="reference internal" href="3.11.html">What's New In Python 3.11</a></li>
    </ul>
  </div>
</section>
</body></html>"#;

const ARTICLE_312: &str = r#"<html><body>
<h1>What's New In Python 3.12</h1>
<dl class="field-list simple">
<dt class="field-odd">Editor</dt>
<dd class="field-odd"><p>Adam Turner</p></dd>
</dl>
<dl><dt>ignored</dt></dl>
</body></html>"#;

const ARTICLE_311: &str = r#"<html><body>
<h1>What's New In Python 3.11</h1>
<dl class="field-list simple"><dt>Editor</dt><dd>Pablo Galindo Salgado</dd></dl>
</body></html>"#;

#[tokio::test]
async fn test_whats_new_walks_every_article() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/whatsnew/", INDEX).await;
    mount_page(&server, "/3/whatsnew/3.12.html", ARTICLE_312).await;
    mount_page(&server, "/3/whatsnew/3.11.html", ARTICLE_311).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let table = run_mode(Mode::WhatsNew, &mut session, &config, &mut progress)
        .await
        .expect("whats-new failed")
        .expect("whats-new returns a table");

    let link_312 = format!("{}/3/whatsnew/3.12.html", server.uri());
    let link_311 = format!("{}/3/whatsnew/3.11.html", server.uri());

    assert_eq!(table.header(), WHATS_NEW_HEADER);
    assert_eq!(table.len(), 2);
    assert_eq!(table.body()[0][0], link_312);
    assert_eq!(table.body()[0][1], "What's New In Python 3.12");
    assert_eq!(table.body()[0][2], " Editor Adam Turner ");
    assert_eq!(table.body()[1][0], link_311);
    assert_eq!(table.body()[1][2], "EditorPablo Galindo Salgado");

    assert_eq!(progress.total, Some(2));
    assert_eq!(progress.labels, vec![link_312, link_311]);
    assert!(progress.finished);
}

#[tokio::test]
async fn test_whats_new_aborts_on_malformed_article() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/whatsnew/", INDEX).await;
    mount_page(&server, "/3/whatsnew/3.12.html", ARTICLE_312).await;
    mount_page(
        &server,
        "/3/whatsnew/3.11.html",
        "<html><body><h1>No editors here</h1></body></html>",
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let result = run_mode(Mode::WhatsNew, &mut session, &config, &mut progress).await;

    match result {
        Err(ScraperError::TagNotFound { tag, .. }) => assert_eq!(tag, "dl"),
        other => panic!("expected TagNotFound, got {:?}", other),
    }
    assert!(!progress.finished);
}

#[tokio::test]
async fn test_whats_new_missing_index_section() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/whatsnew/", "<html><body><p>moved</p></body></html>").await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let result = run_mode(Mode::WhatsNew, &mut session, &config, &mut progress).await;
    assert!(matches!(result, Err(ScraperError::TagNotFound { .. })));
    assert_eq!(progress.total, None);
}
