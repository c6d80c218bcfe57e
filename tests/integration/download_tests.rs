use crate::common::{cached_session, mount_page, test_config};
use pydoc_scraper::parsers::download;
use pydoc_scraper::progress::NullProgress;
use pydoc_scraper::{run_mode, Mode, ScraperError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOWNLOAD_PAGE: &str = r#"<html><body>
<div class="document"><div role="main">
  <h1>Download Python documentation</h1>
  <table class="docutils align-default">
    <tr><th>Format</th><th>Packed as .zip</th></tr>
    <tr><td>PDF (US-Letter paper size)</td>
        <td><a class="reference external" href="archives/python-3.11-docs-pdf-letter.zip">Download</a></td></tr>
    <tr><td>PDF (A4 paper size)</td>
        <td><a class="reference external" href="archives/python-3.11-docs-pdf-a4.zip">Download</a></td></tr>
  </table>
</div></div>
</body></html>"#;

const ARCHIVE: &[u8] = b"PK\x03\x04 fake zip bytes \xff\x00";

#[tokio::test]
async fn test_download_saves_archive() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/download.html", DOWNLOAD_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/3/archives/python-3.11-docs-pdf-a4.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(ARCHIVE))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();

    let result = run_mode(Mode::Download, &mut session, &config, &mut NullProgress)
        .await
        .unwrap();
    assert!(result.is_none());

    let saved = dir
        .path()
        .join("downloads")
        .join("python-3.11-docs-pdf-a4.zip");
    assert_eq!(std::fs::read(&saved).unwrap(), ARCHIVE);
}

#[tokio::test]
async fn test_download_returns_saved_path() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/download.html", DOWNLOAD_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/3/archives/python-3.11-docs-pdf-a4.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(ARCHIVE))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let target = dir.path().join("elsewhere");

    let saved = download(&mut session, &config.urls, &target).await.unwrap();
    assert_eq!(saved, target.join("python-3.11-docs-pdf-a4.zip"));
    assert!(saved.exists());
}

#[tokio::test]
async fn test_download_without_a4_link() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/3/download.html",
        r#"<div role="main"><table class="docutils">
            <tr><td><a href="archives/python-3.11-docs-pdf-letter.zip">Download</a></td></tr>
        </table></div>"#,
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();

    let result = run_mode(Mode::Download, &mut session, &config, &mut NullProgress).await;
    match result {
        Err(ScraperError::TagNotFound { tag, attrs }) => {
            assert_eq!(tag, "a");
            assert!(attrs.contains("pdf-a4"));
        }
        other => panic!("expected TagNotFound, got {:?}", other),
    }
    assert!(!dir.path().join("downloads").exists());
}

#[tokio::test]
async fn test_download_archive_missing_on_server() {
    let server = MockServer::start().await;
    mount_page(&server, "/3/download.html", DOWNLOAD_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/3/archives/python-3.11-docs-pdf-a4.zip"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();

    let result = run_mode(Mode::Download, &mut session, &config, &mut NullProgress).await;
    assert!(matches!(result, Err(ScraperError::Transport { .. })));
    assert!(!dir
        .path()
        .join("downloads")
        .join("python-3.11-docs-pdf-a4.zip")
        .exists());
}
