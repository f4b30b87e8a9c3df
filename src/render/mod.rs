//! Rendering module for cardpress.
//!
//! This module turns card records into card images and tiles those images
//! onto pages.

mod background;
mod card;
mod grid;
mod layout;
mod png;
mod shapes;
mod sheet;
mod text;

pub use background::{contain, contain_size, cover, cover_crop_rect, load_artwork, overlay, tint};
pub use card::{CardImage, CardRenderer};
pub use grid::{Cell, GridComposer, PageImage};
pub use layout::{CardLayout, Region};
pub use png::{page_file_name, write_png};
pub use sheet::{write_manifest, ManifestCard, ManifestMeta, ManifestPage, Rect};
pub use text::wrap_to_width;
