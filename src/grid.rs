use crate::consts::{MAIN_GRID_KEYS, MAX_BINDINGS, ROW_COUNT, ROW_WIDTH};
use serde::{Deserialize, Serialize};

pub type Row = [String; ROW_WIDTH];

/// Symbols packed into the physical board: three main rows plus an optional
/// thumb cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub rows: [Row; ROW_COUNT],
    pub thumb_row: Option<Vec<String>>,
    /// Bindings past the last thumb key that had nowhere to go.
    pub discarded: usize,
}

impl Grid {
    /// Packs bindings in order: index `k` goes to row `k / 10`, column
    /// `k % 10` while `k < 30`, then to thumb slot `k - 30` while `k < 40`.
    /// Cells with no binding get `placeholder`. A thumb row exists only when
    /// there are more than 30 bindings.
    pub fn assemble(symbols: &[String], placeholder: &str) -> Self {
        let rows: [Row; ROW_COUNT] = std::array::from_fn(|r| {
            std::array::from_fn(|c| {
                symbols
                    .get(r * ROW_WIDTH + c)
                    .cloned()
                    .unwrap_or_else(|| placeholder.to_string())
            })
        });

        let thumb_row = (symbols.len() > MAIN_GRID_KEYS).then(|| {
            symbols[MAIN_GRID_KEYS..symbols.len().min(MAX_BINDINGS)].to_vec()
        });

        Self {
            rows,
            thumb_row,
            discarded: symbols.len().saturating_sub(MAX_BINDINGS),
        }
    }

    /// Every cell in reading order: main rows, then the thumb row.
    pub fn cells(&self) -> impl Iterator<Item = &String> {
        self.rows
            .iter()
            .flatten()
            .chain(self.thumb_row.iter().flatten())
    }

    pub fn left_half(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(|r| &r[..ROW_WIDTH / 2])
    }

    pub fn right_half(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(|r| &r[ROW_WIDTH / 2..])
    }
}
