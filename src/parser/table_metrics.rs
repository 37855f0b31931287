//! Approximate structural statistics of a single table.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::html_tag::{HtmlTag, TABLE_TAG};
use crate::error::{Error, Result};

/// Rough size indicators of a table, meant for quick heuristics such as
/// telling a small disclosure table from a full financial statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApproxTableMetrics {
    /// Rows whose first data cell is non-blank
    pub rows: usize,

    /// Non-blank data cells containing at least one digit
    pub numbers: usize,
}

fn digit_regex() -> &'static Regex {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    DIGIT.get_or_init(|| Regex::new(r"\d").unwrap())
}

/// Get the one table in the subtree (the tag itself included).
pub fn single_table<'a>(tag: &HtmlTag<'a>) -> Result<HtmlTag<'a>> {
    let mut tables = tag.find_all(TABLE_TAG);
    match tables.len() {
        0 => Err(Error::NoTableFound {
            tag: tag.name().to_string(),
        }),
        1 => Ok(tables.remove(0)),
        count => Err(Error::AmbiguousTable {
            tag: tag.name().to_string(),
            count,
        }),
    }
}

/// Compute approximate metrics of the single table inside `tag`.
///
/// Fails with [`Error::NoTableFound`] or [`Error::AmbiguousTable`] unless the
/// subtree holds exactly one table.
///
/// A row counts only when its first `td` is non-blank; rows made of `th`
/// cells only are not counted.
pub fn approx_table_metrics(tag: &HtmlTag<'_>) -> Result<ApproxTableMetrics> {
    let table = single_table(tag)?;

    let rows = table
        .find_all("tr")
        .iter()
        .filter(|row| {
            row.find_first("td")
                .is_some_and(|cell| !cell.text().trim().is_empty())
        })
        .count();

    let digit = digit_regex();
    let numbers = table
        .find_all("td")
        .iter()
        .map(|cell| cell.text())
        .filter(|text| !text.trim().is_empty() && digit.is_match(text))
        .count();

    log::trace!("Table metrics: {} rows, {} numbers", rows, numbers);
    Ok(ApproxTableMetrics { rows, numbers })
}
