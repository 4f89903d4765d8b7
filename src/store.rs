//! Output files: writing a page's records and finding where the last run stopped.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use regex::Regex;
use tokio::fs;

use crate::config::page_path;
use crate::{warn_time, Error, Record, Result, FILE_PREFIX, FILE_SUFFIX};

const HEADER: [&str; 3] = ["num", "word", "summary"];

/// Writes `records` to `<dir>/words-<page_num>.csv`, replacing any previous file.
/// The header row is always written, even for an empty page.
pub async fn write_page(
    dir: &Path,
    page_num: usize,
    fill: usize,
    records: &[Record],
) -> Result<PathBuf> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr.into_inner().map_err(|err| Error::Io(err.into_error()))?;

    let path = page_path(dir, page_num, fill);
    fs::write(&path, bytes).await?;
    Ok(path)
}

/// Page to continue from: one past the highest page file in `dir`, or 1.
///
/// Never fails. A directory that can't be read or a file name that can't be
/// parsed is reported and treated as no progress.
pub async fn next_page(dir: &Path) -> usize {
    match last_page(dir).await {
        Ok(Some(last)) => last.checked_add(1).unwrap_or_else(|| {
            warn_time!("page {last} in {} has no successor, starting over", dir.display());
            1
        }),
        Ok(None) => 1,
        Err(err) => {
            warn_time!("couldn't resume from {}: {err}", dir.display());
            1
        }
    }
}

/// Highest page number among the page files in `dir`.
/// Picks the lexicographically greatest name, which is the greatest page while padding is fixed.
async fn last_page(dir: &Path) -> Result<Option<usize>> {
    let pattern = Regex::new(&format!(
        r"^{}([0-9]+){}$",
        regex::escape(FILE_PREFIX),
        regex::escape(FILE_SUFFIX)
    ))?;

    let mut latest: Option<String> = None;
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !pattern.is_match(&name) {
            continue;
        }
        if latest.as_ref().map_or(true, |l| name > *l) {
            latest = Some(name);
        }
    }

    let Some(name) = latest else {
        return Ok(None);
    };
    let digits = pattern
        .captures(&name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or_default();
    let num = digits.parse::<usize>().map_err(|err| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("bad page number in {name}: {err}"),
        ))
    })?;
    Ok(Some(num))
}
