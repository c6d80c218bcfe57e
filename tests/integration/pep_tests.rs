use crate::common::{cached_session, mount_page, test_config, RecordingProgress};
use pydoc_scraper::parsers::{pep_report, Mismatch, PEP_HEADER};
use pydoc_scraper::{run_mode, Mode, ScraperError};
use std::collections::BTreeMap;
use wiremock::MockServer;

fn index_page(rows: &[(&str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(cell, href)| {
            format!(
                r#"<tr class="row-odd"><td><abbr>{}</abbr></td><td><a class="pep reference internal" href="{}">PEP</a></td><td>Title</td></tr>"#,
                cell, href
            )
        })
        .collect();
    format!(
        r#"<html><body>
        <section id="index-by-category"><table><tbody><tr><td>ignored</td></tr></tbody></table></section>
        <section id="numerical-index"><table class="pep-zero-table">
          <thead><tr><th>Type/Status</th><th>PEP</th><th>Title</th></tr></thead>
          <tbody>{}</tbody>
        </table></section>
        </body></html>"#,
        body
    )
}

fn pep_page(status: &str) -> String {
    format!(
        r#"<html><body><section>
        <dl class="rfc2822 field-list simple">
          <dt class="field-odd">Author<span class="colon">:</span></dt>
          <dd class="field-odd">Someone</dd>
          <dt class="field-even">Status<span class="colon">:</span></dt>
          <dd class="field-even"><abbr title="">{}</abbr></dd>
        </dl></section></body></html>"#,
        status
    )
}

fn synthetic_table() -> BTreeMap<String, Vec<String>> {
    let mut table = BTreeMap::new();
    table.insert("A".to_string(), vec!["Active".to_string()]);
    table.insert(
        "B".to_string(),
        vec!["Draft".to_string(), "Accepted".to_string()],
    );
    table
}

async fn mount_three_peps(server: &MockServer) {
    let index = index_page(&[("PA", "pep-0001/"), ("SB", "pep-0002/"), ("SB", "pep-0003/")]);
    mount_page(server, "/peps/", &index).await;
    mount_page(server, "/peps/pep-0001/", &pep_page("Active")).await;
    mount_page(server, "/peps/pep-0002/", &pep_page("Draft")).await;
    mount_page(server, "/peps/pep-0003/", &pep_page("Final")).await;
}

#[tokio::test]
async fn test_pep_table_with_synthetic_statuses() {
    let server = MockServer::start().await;
    mount_three_peps(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server, dir.path());
    config.expected_status = synthetic_table();
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let table = run_mode(Mode::Pep, &mut session, &config, &mut progress)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(table.header(), PEP_HEADER);
    assert_eq!(table.len(), 5);
    assert_eq!(table.body()[0], ["Active", "1"]);
    assert_eq!(table.body()[1], ["Draft", "1"]);
    assert_eq!(table.body()[2], ["Final", "1"]);
    assert_eq!(table.body()[3], ["", ""]);
    assert_eq!(table.body()[4], ["Total", "3"]);

    assert_eq!(progress.total, Some(3));
    assert_eq!(progress.labels.len(), 3);
}

#[tokio::test]
async fn test_pep_mismatch_recorded_once_per_row() {
    let server = MockServer::start().await;
    mount_three_peps(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let report = pep_report(&mut session, &config.urls, &synthetic_table(), &mut progress)
        .await
        .unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.tally.total(), 3);
    assert_eq!(
        report.mismatches,
        vec![Mismatch {
            link: format!("{}/peps/pep-0003/", server.uri()),
            expected: vec!["Draft".to_string(), "Accepted".to_string()],
            actual: "Final".to_string(),
        }]
    );
    assert!(report
        .mismatch_report()
        .unwrap()
        .contains("Status on page: Final"));
}

#[tokio::test]
async fn test_pep_total_counts_rows_without_status_field() {
    let server = MockServer::start().await;
    let index = index_page(&[("PA", "pep-0001/"), ("PA", "pep-0002/")]);
    mount_page(&server, "/peps/", &index).await;
    mount_page(&server, "/peps/pep-0001/", &pep_page("Active")).await;
    mount_page(
        &server,
        "/peps/pep-0002/",
        "<html><body><dl><dt>Author:</dt><dd>Someone</dd></dl></body></html>",
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let report = pep_report(&mut session, &config.urls, &synthetic_table(), &mut progress)
        .await
        .unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.tally.total(), 1);
    assert!(report.mismatches.is_empty());
    assert_eq!(report.to_table().body().last().unwrap(), &["Total", "2"]);
}

#[tokio::test]
async fn test_pep_default_table_matches_real_abbreviations() {
    let server = MockServer::start().await;
    let index = index_page(&[("IF", "pep-0008/"), ("S", "pep-0999/")]);
    mount_page(&server, "/peps/", &index).await;
    mount_page(&server, "/peps/pep-0008/", &pep_page("Final")).await;
    mount_page(&server, "/peps/pep-0999/", &pep_page("Draft")).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let report = pep_report(
        &mut session,
        &config.urls,
        &config.expected_status,
        &mut progress,
    )
    .await
    .unwrap();

    assert!(report.mismatches.is_empty());
    assert_eq!(report.tally.get("Final"), 1);
    assert_eq!(report.tally.get("Draft"), 1);
}

#[tokio::test]
async fn test_pep_unknown_abbreviation_aborts() {
    let server = MockServer::start().await;
    let index = index_page(&[("PA", "pep-0001/"), ("PZ", "pep-0002/")]);
    mount_page(&server, "/peps/", &index).await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server, dir.path());
    config.expected_status = synthetic_table();
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let result = run_mode(Mode::Pep, &mut session, &config, &mut progress).await;
    match result {
        Err(ScraperError::UnknownStatusAbbreviation { abbreviation, .. }) => {
            assert_eq!(abbreviation, "Z")
        }
        other => panic!("expected UnknownStatusAbbreviation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_pep_missing_numerical_index() {
    let server = MockServer::start().await;
    mount_page(&server, "/peps/", "<html><body><table><tbody></tbody></table></body></html>").await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());
    let mut session = cached_session();
    let mut progress = RecordingProgress::default();

    let result = run_mode(Mode::Pep, &mut session, &config, &mut progress).await;
    assert!(matches!(result, Err(ScraperError::TagNotFound { .. })));
}
