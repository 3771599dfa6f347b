//! Pattern catalogue - run-length encoded seeds for the grid
//!
//! The host ships a JSON list of `{ name, code, column, row }` entries where
//! `code` is an RLE body (`bo$2bo$3o!`) and `column`/`row` its bounding box.
//! Bounding boxes arrive as numbers or numeric strings depending on who wrote
//! the list, so both are accepted.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::PatternError;
use crate::spatial::grid::{CellState, DEAD};

#[derive(Deserialize)]
#[serde(untagged)]
enum Dimension {
    Number(u32),
    Text(String),
}

fn dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Dimension::deserialize(deserializer)? {
        Dimension::Number(n) => Some(n),
        Dimension::Text(s) => s.trim().parse::<u32>().ok(),
    };
    parsed
        .filter(|&n| n > 0)
        .ok_or_else(|| serde::de::Error::custom("pattern dimension must be a positive integer"))
}

/// One catalogue entry, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    pub code: String,
    #[serde(deserialize_with = "dimension")]
    pub column: u32,
    #[serde(deserialize_with = "dimension")]
    pub row: u32,
}

impl PatternSpec {
    pub fn decode(&self) -> Result<Pattern, PatternError> {
        Pattern::parse_rle(&self.code, self.column as usize, self.row as usize)
    }
}

pub fn load_pattern_library(json: &str) -> Result<Vec<PatternSpec>, PatternError> {
    serde_json::from_str(json).map_err(|e| PatternError::InvalidJson(e.to_string()))
}

/// Catalogue entries short enough to place on a grid with `rows` rows.
pub fn filter_fitting(specs: &[PatternSpec], rows: u32) -> Vec<&PatternSpec> {
    specs.iter().filter(|spec| spec.row < rows).collect()
}

/// Decoded pattern: row-major cell states, 1 = alive.
/// Largest pattern box accepted by `parse_rle`.
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    columns: usize,
    rows: usize,
    cells: Vec<CellState>,
}

impl Pattern {
    pub fn columns(&self) -> usize { self.columns }

    pub fn rows(&self) -> usize { self.rows }

    pub fn cells(&self) -> &[CellState] { &self.cells }

    #[inline]
    pub fn get(&self, column: usize, row: usize) -> CellState {
        self.cells[row * self.columns + column]
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c > DEAD).count()
    }

    /// Decode an RLE body into a `columns` x `rows` box.
    ///
    /// `<n>o` / `<n>b` write n alive / dead cells, `<n>$` ends n rows,
    /// `!` stops. Whitespace is skipped and cells never written stay dead.
    pub fn parse_rle(code: &str, columns: usize, rows: usize) -> Result<Self, PatternError> {
        let len = columns
            .checked_mul(rows)
            .filter(|&len| len <= MAX_PATTERN_CELLS)
            .ok_or(PatternError::TooLarge { columns, rows, max: MAX_PATTERN_CELLS })?;
        let mut cells = vec![DEAD; len];
        let mut row = 0usize;
        let mut column = 0usize;
        let mut count: Option<usize> = None;

        for (offset, ch) in code.char_indices() {
            if let Some(digit) = ch.to_digit(10) {
                let n = count.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize);
                count = Some(n);
                continue;
            }
            if ch.is_whitespace() {
                continue;
            }

            let run = count.take().unwrap_or(1);
            match ch {
                '$' => {
                    row = row
                        .checked_add(run)
                        .ok_or(PatternError::OutOfBounds { column, row, columns, rows })?;
                    column = 0;
                }
                '!' => break,
                'o' | 'b' => {
                    let state = if ch == 'o' { 1 } else { DEAD };
                    for _ in 0..run {
                        if column >= columns || row >= rows {
                            return Err(PatternError::OutOfBounds { column, row, columns, rows });
                        }
                        cells[row * columns + column] = state;
                        column += 1;
                    }
                }
                tag => return Err(PatternError::UnexpectedTag { tag, offset }),
            }
        }

        Ok(Self { columns, rows, cells })
    }
}
