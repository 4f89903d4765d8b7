use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::text::flatten_text;
use crate::{Error, Record, Result};

const TABLE_SELECTOR: &str = "table.table";
const BODY_SELECTOR: &str = "tbody";
const LINK_SELECTOR: &str = "a";
const CELLS_PER_ROW: usize = 3;

/// Parses a fetched listing page into its records.
/// `Html` isn't `Send`, so the whole parse runs on the blocking pool and is awaited here.
pub async fn parse_page(html: String) -> Result<Vec<Record>> {
    spawn_blocking(move || -> Result<Vec<Record>> {
        let doc = Html::parse_document(&html);
        let rows = find_rows(&doc)?;
        extract_records(&rows)
    })
    .await?
}

/// Returns the `<tr>` children of the word table's `<tbody>`, in document order.
pub fn find_rows(doc: &Html) -> Result<Vec<ElementRef<'_>>> {
    let table_selector = create_selector(TABLE_SELECTOR)?;
    let body_selector = create_selector(BODY_SELECTOR)?;

    let table = doc
        .select(&table_selector)
        .next()
        .ok_or_else(|| Error::StructureNotFound(TABLE_SELECTOR.into()))?;
    let body = table
        .select(&body_selector)
        .next()
        .ok_or_else(|| Error::StructureNotFound(BODY_SELECTOR.into()))?;

    Ok(child_elements(body, "tr").collect())
}

/// Turns table rows into records, one per row and in the same order.
/// Any malformed row fails the whole page.
pub fn extract_records(rows: &[ElementRef<'_>]) -> Result<Vec<Record>> {
    let link_selector = create_selector(LINK_SELECTOR)?;

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx + 1;
        let cells = child_elements(*row, "td").collect::<Vec<_>>();
        let [num_cell, word_cell, summary_cell] = cells.as_slice() else {
            return Err(Error::FieldParse {
                row: row_num,
                field: "cells",
                reason: format!("expected {CELLS_PER_ROW} cells, found {}", cells.len()),
            });
        };

        let num = parse_num(*num_cell).map_err(|reason| Error::FieldParse {
            row: row_num,
            field: "num",
            reason,
        })?;
        let link = word_cell
            .select(&link_selector)
            .next()
            .ok_or_else(|| Error::FieldParse {
                row: row_num,
                field: "word",
                reason: "no link in the word cell".into(),
            })?;

        records.push(Record {
            num,
            word: flatten_text(link),
            summary: flatten_text(*summary_cell),
        });
    }
    Ok(records)
}

/// The index is the first child of the cell and has to be a bare text node.
fn parse_num(cell: ElementRef<'_>) -> core::result::Result<u64, String> {
    let text = cell
        .children()
        .next()
        .and_then(|node| node.value().as_text())
        .ok_or("cell doesn't start with text")?;
    let text = text.trim();
    text.parse()
        .map_err(|err| format!("`{text}` is not an integer: {err}"))
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}
