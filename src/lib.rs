//! cardpress - Trading card renderer and print sheet composer
//!
//! A library for rendering trading-card images from CSV rows and tiling
//! them nine to a page for printing.

pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod font;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod validation;

pub use config::{Config, Overrides, CONFIG_FILENAME};
pub use deck::{load_deck, read_deck};
pub use error::{CardError, Result};
pub use font::{Face, FontCache, FontSource};
pub use pipeline::{BatchReport, CardFailure, FailurePolicy, Pipeline};
pub use render::{
    write_manifest, write_png, CardImage, CardLayout, CardRenderer, Cell, GridComposer, PageImage,
};
pub use types::{
    CardRecord, CardStyle, Colour, LayoutSpec, PageSize, Theme, ThemeColours, CARDS_PER_PAGE,
};
pub use validation::{validate_deck, Diagnostic, Severity, ValidationResult};
