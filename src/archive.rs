use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::Local;
use regex::Regex;
use url::Url;

use crate::record::{CaveRecord, Field};

static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/*?:"<>|]"#).unwrap());

/// What kind of raw snapshot is being archived; picks the subdirectory
/// and extension.
#[derive(Debug, Clone, Copy)]
pub enum SnapshotKind {
    Html,
    Text,
}

impl SnapshotKind {
    fn dir(self) -> &'static str {
        match self {
            SnapshotKind::Html => "raw_html",
            SnapshotKind::Text => "raw_text",
        }
    }

    fn ext(self) -> &'static str {
        match self {
            SnapshotKind::Html => "html",
            SnapshotKind::Text => "txt",
        }
    }
}

/// Strip filesystem-illegal characters, trim, and turn internal spaces into
/// underscores. Applied identically to snapshot names and to the
/// cave-name-derived dump filename.
pub fn sanitize_filename(name: &str) -> String {
    ILLEGAL_CHARS.replace_all(name, "").trim().replace(' ', "_")
}

/// Persist a raw snapshot under `<data_dir>/raw_html|raw_text/`, named by
/// today's date plus the URL's host and path. Callers log failures and
/// carry on; a lost snapshot never affects extraction.
pub fn archive_snapshot(
    data_dir: &Path,
    url: &str,
    content: &[u8],
    kind: SnapshotKind,
) -> io::Result<PathBuf> {
    let today = Local::now().format("%Y-%m-%d");
    let filename = sanitize_filename(&format!("{}_{}.{}", today, url_slug(url), kind.ext()));

    let dir = data_dir.join(kind.dir());
    fs::create_dir_all(&dir)?;

    let path = dir.join(filename);
    fs::write(&path, content)?;
    Ok(path)
}

/// Write the labeled per-field text dump for one record and return its path.
pub fn write_parsed_dump(data_dir: &Path, record: &CaveRecord) -> io::Result<PathBuf> {
    let today = Local::now().format("%Y-%m-%d");
    let filename = format!("{}_{}_info.txt", today, sanitize_filename(&record.name));

    let dir = data_dir.join("parsed_cave_info_texts");
    fs::create_dir_all(&dir)?;

    let mut blocks = vec![format!("Cave Name: {}", record.name)];
    for field in Field::ALL {
        blocks.push(format!("{}:\n{}", field.label(), record.get(field)));
    }

    let path = dir.join(filename);
    fs::write(&path, blocks.join("\n\n") + "\n")?;
    Ok(path)
}

fn url_slug(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => format!(
            "{}_{}",
            parsed.host_str().unwrap_or(""),
            parsed.path().trim_matches('/').replace('/', "_"),
        ),
        Err(_) => url.to_string(),
    }
}
