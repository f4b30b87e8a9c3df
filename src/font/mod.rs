//! Font loading for card text.
//!
//! A single font file is resolved once per run from an ordered candidate
//! list; sized faces are memoised in a [`FontCache`]. When no file loads,
//! text falls back to a builtin bitmap font.

mod bitmap;
mod cache;
mod face;
mod source;

pub use cache::FontCache;
pub use face::Face;
pub use source::{default_candidates, scan_font_dirs, FontSource};
