//! Page geometry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// Cards per row on a page.
pub const GRID_COLUMNS: u32 = 3;

/// Card rows on a page.
pub const GRID_ROWS: u32 = 3;

/// Cards per page.
pub const CARDS_PER_PAGE: usize = (GRID_COLUMNS * GRID_ROWS) as usize;

/// Page dimensions in pixels. Card size is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

impl PageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of one grid cell: a third of the page in each direction.
    pub fn card_size(self) -> (u32, u32) {
        (self.width / GRID_COLUMNS, self.height / GRID_ROWS)
    }

    /// Top-left pixel of the card at `index` (row-major).
    pub fn cell_origin(self, index: usize) -> (u32, u32) {
        let (w, h) = self.card_size();
        let index = index as u32;
        ((index % GRID_COLUMNS) * w, (index / GRID_COLUMNS) * h)
    }

    /// Reject pages too small to hold a 3x3 grid of non-empty cards.
    pub fn validate(self) -> Result<()> {
        let (w, h) = self.card_size();
        if w == 0 || h == 0 {
            return Err(CardError::Config {
                message: format!("Page size {} is too small for a 3x3 grid", self),
                help: Some("Width and height must each be at least 3 pixels".to_string()),
            });
        }
        Ok(())
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::new(900, 1200)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for PageSize {
    type Err = CardError;

    /// Parse `WIDTHxHEIGHT`, e.g. `1800x2400`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CardError::Config {
            message: format!("Invalid page size: {}", s),
            help: Some("Use WIDTHxHEIGHT, e.g. 900x1200".to_string()),
        };

        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;

        let size = Self::new(width, height);
        size.validate()?;
        Ok(size)
    }
}
