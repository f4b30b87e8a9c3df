//! Core domain types for cardpress.
//!
//! - `Colour` - RGBA colour values
//! - `CardRecord` - one row of card attributes
//! - `Theme` - colours, layout fractions and style
//! - `PageSize` - page geometry and the 3x3 grid

mod colour;
mod page;
mod record;
mod theme;

pub use colour::{blend_over, Colour};
pub use page::{PageSize, CARDS_PER_PAGE, GRID_COLUMNS, GRID_ROWS};
pub use record::CardRecord;
pub use theme::{CardStyle, LayoutSpec, Theme, ThemeColours};
