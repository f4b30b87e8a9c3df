//! Grid composer - tiles up to nine cards onto one page.

use image::RgbaImage;

use crate::error::{CardError, Result};
use crate::types::{Colour, PageSize, Theme, CARDS_PER_PAGE, GRID_COLUMNS};

use super::background::overlay;
use super::card::CardImage;

/// Where one card landed on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub title: String,
    pub line: u64,
    pub column: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
}

/// A composed page.
#[derive(Debug, Clone)]
pub struct PageImage {
    pub image: RgbaImage,
    /// Populated cells in row-major order.
    pub cells: Vec<Cell>,
}

impl PageImage {
    pub fn card_count(&self) -> usize {
        self.cells.len()
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Pastes cards into a 3x3 grid on an opaque page.
#[derive(Debug, Clone)]
pub struct GridComposer {
    page: PageSize,
    background: Colour,
}

impl GridComposer {
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            background: Colour::WHITE,
        }
    }

    /// Composer for the page size and grid background of `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        Self::new(theme.page).with_background(theme.colours.grid_background)
    }

    /// Set the colour of empty cells. Forced opaque.
    pub fn with_background(mut self, colour: Colour) -> Self {
        self.background = colour.with_alpha(255);
        self
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    /// Compose one page from at most nine cards.
    ///
    /// Cards are blended onto the opaque background, so the page is opaque
    /// even when a card is not.
    pub fn compose(&self, cards: &[CardImage]) -> Result<PageImage> {
        if cards.len() > CARDS_PER_PAGE {
            return Err(CardError::Build {
                message: format!(
                    "{} cards given for one page, at most {} fit",
                    cards.len(),
                    CARDS_PER_PAGE
                ),
                help: Some("Use paginate() to split cards across pages".to_string()),
            });
        }

        let card_size = self.page.card_size();
        let mut image = RgbaImage::from_pixel(
            self.page.width,
            self.page.height,
            self.background.to_pixel(),
        );
        let mut cells = Vec::with_capacity(cards.len());

        for (index, card) in cards.iter().enumerate() {
            if card.size() != card_size {
                return Err(CardError::Build {
                    message: format!(
                        "card `{}` is {}x{}, expected {}x{}",
                        card.title,
                        card.width(),
                        card.height(),
                        card_size.0,
                        card_size.1
                    ),
                    help: None,
                });
            }

            let (x, y) = self.page.cell_origin(index);
            overlay(&mut image, &card.image, x as i64, y as i64);
            cells.push(Cell {
                title: card.title.clone(),
                line: card.line,
                column: index as u32 % GRID_COLUMNS,
                row: index as u32 / GRID_COLUMNS,
                x,
                y,
            });
        }

        Ok(PageImage { image, cells })
    }

    /// Split any number of cards into pages of nine.
    pub fn paginate(&self, cards: &[CardImage]) -> Result<Vec<PageImage>> {
        cards
            .chunks(CARDS_PER_PAGE)
            .map(|chunk| self.compose(chunk))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    const PAGE: PageSize = PageSize::new(90, 120);

    fn card(i: u8) -> CardImage {
        CardImage::new(
            format!("card {}", i),
            i as u64 + 2,
            RgbaImage::from_pixel(30, 40, Rgba([i * 20, 100, 200, 255])),
        )
    }

    fn cards(n: u8) -> Vec<CardImage> {
        (0..n).map(card).collect()
    }

    #[test]
    fn test_full_page_placement() {
        let page = GridComposer::new(PAGE).compose(&cards(9)).unwrap();
        assert_eq!(page.size(), (90, 120));
        for i in 0..9u32 {
            let (x, y) = ((i % 3) * 30, (i / 3) * 40);
            assert_eq!(page.image.get_pixel(x, y).0, [i as u8 * 20, 100, 200, 255]);
            assert_eq!(page.image.get_pixel(x + 29, y + 39).0, [i as u8 * 20, 100, 200, 255]);
            assert_eq!((page.cells[i as usize].x, page.cells[i as usize].y), (x, y));
        }
    }

    #[test]
    fn test_partial_page_leaves_background() {
        let composer = GridComposer::new(PAGE).with_background(Colour::rgb(1, 2, 3));
        let page = composer.compose(&cards(5)).unwrap();
        assert_eq!(page.card_count(), 5);

        for i in 5..9u32 {
            let (x, y) = ((i % 3) * 30, (i / 3) * 40);
            assert_eq!(page.image.get_pixel(x + 15, y + 20).0, [1, 2, 3, 255]);
        }
        assert_eq!(page.image.get_pixel(45, 60).0, [80, 100, 200, 255]);
    }

    #[test]
    fn test_cell_metadata() {
        let page = GridComposer::new(PAGE).compose(&cards(5)).unwrap();
        assert_eq!(
            page.cells[4],
            Cell {
                title: "card 4".to_string(),
                line: 6,
                column: 1,
                row: 1,
                x: 30,
                y: 40,
            }
        );
    }

    #[test]
    fn test_empty_page_is_all_background() {
        let page = GridComposer::new(PAGE).compose(&[]).unwrap();
        assert!(page.image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_translucent_card_gives_opaque_page() {
        let ghost = CardImage::new("ghost", 2, RgbaImage::from_pixel(30, 40, Rgba([0, 0, 0, 128])));
        let page = GridComposer::new(PAGE).compose(&[ghost]).unwrap();

        assert!(page.image.pixels().all(|p| p[3] == 255));
        assert_eq!(page.image.get_pixel(10, 10).0, [127, 127, 127, 255]);
    }

    #[test]
    fn test_too_many_cards_rejected() {
        let err = GridComposer::new(PAGE).compose(&cards(10)).unwrap_err();
        assert!(matches!(err, CardError::Build { .. }));
    }

    #[test]
    fn test_wrong_card_size_rejected() {
        let odd = CardImage::new("odd", 0, RgbaImage::new(31, 40));
        assert!(GridComposer::new(PAGE).compose(&[odd]).is_err());
    }

    #[test]
    fn test_paginate_eleven_cards() {
        let pages = GridComposer::new(PAGE).paginate(&cards(11)).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].card_count(), 9);
        assert_eq!(pages[1].card_count(), 2);
        assert_eq!(pages[1].cells[1].title, "card 10");
    }

    #[test]
    fn test_paginate_nothing() {
        assert!(GridComposer::new(PAGE).paginate(&[]).unwrap().is_empty());
    }
}
