pub mod archive;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod record;

use std::path::Path;

use tracing::{error, warn};

use archive::SnapshotKind;
use parser::markers::MarkerRule;
use record::CaveRecord;

/// Fetch one cave page and extract its sections. A failed fetch is logged
/// and yields the all-empty record; snapshot failures are logged and never
/// block extraction.
pub async fn fetch_cave_info(
    client: &reqwest::Client,
    url: &str,
    rule: MarkerRule,
    data_dir: &Path,
) -> CaveRecord {
    let body = match fetch::fetch(client, url).await {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to fetch {url}: {e}");
            return CaveRecord::default();
        }
    };

    if let Err(e) = archive::archive_snapshot(data_dir, url, &body, SnapshotKind::Html) {
        warn!("Could not archive raw HTML for {url}: {e}");
    }

    let html = String::from_utf8_lossy(&body);
    let doc = parser::parse_document(&html);

    let text = parser::document_text(&doc);
    if let Err(e) = archive::archive_snapshot(data_dir, url, text.as_bytes(), SnapshotKind::Text) {
        warn!("Could not archive raw text for {url}: {e}");
    }

    parser::extract_record(&doc, rule)
}
