//! Page manifest.
//!
//! Lists every written page and the frame of each card on it, plus a
//! `meta` block describing the run.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{CardError, Result};
use crate::types::{GRID_COLUMNS, GRID_ROWS};

use super::PageImage;

/// Manifest metadata.
pub struct ManifestMeta {
    pub theme: String,
    pub page_size: (u32, u32),
    pub card_size: (u32, u32),
}

/// Write the manifest for `pages` as pretty JSON.
pub fn write_manifest(pages: &[ManifestPage], meta: &ManifestMeta, path: &Path) -> Result<()> {
    let output = ManifestJson::new(pages, meta);
    let json = serde_json::to_string_pretty(&output).map_err(|e| CardError::Build {
        message: format!("Failed to serialize page manifest: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| CardError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write page manifest: {}", e),
    })?;
    Ok(())
}

/// Manifest entry for one page, without pixel data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestPage {
    pub file: String,
    pub cards: Vec<ManifestCard>,
}

impl ManifestPage {
    pub fn new(file: impl Into<String>, page: &PageImage) -> Self {
        let card_size = (
            page.image.width() / GRID_COLUMNS,
            page.image.height() / GRID_ROWS,
        );

        Self {
            file: file.into(),
            cards: page
                .cells
                .iter()
                .map(|cell| ManifestCard {
                    title: cell.title.clone(),
                    line: cell.line,
                    column: cell.column,
                    row: cell.row,
                    frame: Rect {
                        x: cell.x,
                        y: cell.y,
                        w: card_size.0,
                        h: card_size.1,
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestCard {
    pub title: String,
    pub line: u64,
    pub column: u32,
    pub row: u32,
    pub frame: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct ManifestJson<'a> {
    pages: &'a [ManifestPage],
    meta: MetaJson<'a>,
}

#[derive(Serialize)]
struct MetaJson<'a> {
    app: &'static str,
    version: &'static str,
    theme: &'a str,
    #[serde(rename = "pageSize")]
    page_size: Size,
    #[serde(rename = "cardSize")]
    card_size: Size,
    cards: usize,
}

impl<'a> ManifestJson<'a> {
    fn new(pages: &'a [ManifestPage], meta: &'a ManifestMeta) -> Self {
        Self {
            pages,
            meta: MetaJson {
                app: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                theme: &meta.theme,
                page_size: Size {
                    w: meta.page_size.0,
                    h: meta.page_size.1,
                },
                card_size: Size {
                    w: meta.card_size.0,
                    h: meta.card_size.1,
                },
                cards: pages.iter().map(|p| p.cards.len()).sum(),
            },
        }
    }
}
