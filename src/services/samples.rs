use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Number, Value};

use crate::models::Side;

/// Book depth shown when pretty-printing order books.
pub const DISPLAY_DEPTH: usize = 5;

/// Write `data` as 4-space indented JSON to `dir/filename`, creating `dir`
/// if needed. Returns the written path.
pub async fn save_json_sample<T: Serialize>(
    dir: &Path,
    filename: &str,
    data: &T,
) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating sample dir {}", dir.display()))?;

    let path = dir.join(filename);
    tokio::fs::write(&path, to_pretty_json(data)?)
        .await
        .with_context(|| format!("writing sample {}", path.display()))?;

    tracing::info!(path = %path.display(), "Sample saved");
    Ok(path)
}

fn to_pretty_json<T: Serialize>(data: &T) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut ser)?;
    Ok(buf)
}

/// Copy of `data` with any top-level `bids`/`asks` arrays cut to `depth` levels.
pub fn truncate_book_levels(data: &Value, depth: usize) -> Value {
    let mut clean = data.clone();
    if let Some(obj) = clean.as_object_mut() {
        for side in ["bids", "asks"] {
            if let Some(Value::Array(levels)) = obj.get_mut(side) {
                levels.truncate(depth);
            }
        }
    }
    clean
}

/// Print a titled, book-truncated rendering of `data` to stdout.
pub fn print_pretty_json(title: &str, data: &Value) {
    let clean = truncate_book_levels(data, DISPLAY_DEPTH);
    let rendered = to_pretty_json(&clean)
        .map(|b| String::from_utf8_lossy(&b).into_owned())
        .unwrap_or_else(|_| clean.to_string());
    println!("\n--- {title} ---");
    println!("{rendered}");
}

pub fn orderbook_filename(asset_id: &str) -> String {
    let prefix: String = asset_id.chars().take(8).collect();
    format!("orderbook_{prefix}.json")
}

pub fn simulation_filename(side: Side, timestamp: &Number) -> String {
    format!("{side}_sim_{timestamp}.json")
}

pub fn event_filename(slug: &str, at: DateTime<Utc>) -> String {
    format!("event_{}_{}.json", slug, at.format("%Y%m%d%H%M%S"))
}
