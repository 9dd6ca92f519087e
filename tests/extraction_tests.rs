use std::fs;

use cave_scraper::fetch;
use cave_scraper::fetch_cave_info;
use cave_scraper::parser::markers::MarkerRule;
use cave_scraper::parser::{extract_record, parse_document};
use cave_scraper::record::{CaveRecord, Field};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
}

#[test]
fn subheaders_fixture_full_record() {
    let doc = parse_document(&fixture("ogof_gofan"));
    let record = extract_record(&doc, MarkerRule::ClassExact);

    assert_eq!(record.name, "Ogof Gofan");
    assert!(record.overview.contains("sea cliff cave"));
    assert!(record.history.contains("entered by climbers in 1966"));
    assert!(record.location.contains("St Govan's Head"));
    assert!(record
        .access
        .contains("Cavers should now contact the Cambrian Caving Council"));
    assert!(record
        .description
        .contains("The cave consists of a series of low crawls"));
    assert!(record.tackle.contains("30m rope"));
    assert_eq!(record.video, "https://www.youtube.com/watch?v=gofan1966");
    assert!(record.references.contains("Caves of South Wales, Tim Stratford."));
    assert!(record
        .references
        .contains("Link: http://example.org/swcc-newsletter-12"));
    assert!(record
        .warnings
        .contains("The cave is located on the Castlemartin Firing Range"));
    assert!(record.disclaimer.contains("hazardous activity"));
}

#[test]
fn sections_do_not_bleed_across_boundaries() {
    let doc = parse_document(&fixture("ogof_gofan"));
    let record = extract_record(&doc, MarkerRule::ClassExact);

    // Neither the next marker's label nor its body leaks backwards.
    assert!(!record.overview.contains("History"));
    assert!(!record.overview.contains("1966"));
    assert!(!record.warnings.contains("Disclaimer"));
    assert!(!record.warnings.contains("hazardous activity"));
}

#[test]
fn description_joins_paragraphs_with_newlines() {
    let doc = parse_document(&fixture("ogof_gofan"));
    let record = extract_record(&doc, MarkerRule::ClassExact);

    let lines: Vec<&str> = record.description.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("The cave consists"));
    assert!(lines[1].starts_with("A 12m pitch"));
}

#[test]
fn legacy_fixture_with_heading_rule() {
    let doc = parse_document(&fixture("legacy"));
    let record = extract_record(&doc, MarkerRule::HeadingSubstring);

    assert_eq!(record.name, "Ogof Pen Eryr");
    assert!(record.description.contains("short resurgence cave"));
    assert!(!record.description.contains("Goodwill"));
    assert!(record.access.contains("call at the farm"));
    assert!(record.warnings.contains("floods quickly"));
    // Sections that page never had stay empty.
    assert_eq!(record.overview, "");
    assert_eq!(record.tackle, "");
    assert_eq!(record.video, "");
}

#[test]
fn missing_video_marker_leaves_video_empty() {
    let doc = parse_document(
        r#"<body><div id="content">
            <h1>Ogof Gofan</h1>
            <div class="subheaders">Overview</div>
            <p>A short sporting trip.</p>
            <div class="subheaders">Warnings</div>
            <p>The cave is located on the Castlemartin Firing Range.</p>
        </div></body>"#,
    );
    let record = extract_record(&doc, MarkerRule::ClassExact);

    assert!(record
        .warnings
        .contains("The cave is located on the Castlemartin Firing Range"));
    assert_eq!(record.video, "");
}

#[test]
fn nameless_page_gets_sentinel_name() {
    let doc = parse_document("<body><p>nothing here</p></body>");
    let record = extract_record(&doc, MarkerRule::ClassExact);

    assert_eq!(record.name, "Unknown Cave");
    assert!(Field::ALL.iter().all(|f| record.get(*f).is_empty()));
}

#[tokio::test]
async fn failed_fetch_yields_all_empty_record() {
    let client = fetch::build_client().unwrap();
    let data_dir = tempfile::tempdir().unwrap();

    // Port 9 (discard) is not listening; connection is refused immediately.
    let record = fetch_cave_info(
        &client,
        "http://127.0.0.1:9/ogof-gofan.html",
        MarkerRule::ClassExact,
        data_dir.path(),
    )
    .await;

    assert_eq!(record, CaveRecord::default());
    assert_eq!(record.name, "");
}
