//! Colours: [`Color`] and the cell-state palette.

use pathviz_core::CellState;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const PURPLE: Color = Color::from_rgb(255, 0, 255);
pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
pub const GREY: Color = Color::from_rgb(128, 128, 128);
pub const TURQUOISE: Color = Color::from_rgb(64, 224, 208);

/// Fill colour of a cell.
pub const fn state_color(state: CellState) -> Color {
    match state {
        CellState::Free => WHITE,
        CellState::Barrier => BLACK,
        CellState::Start => ORANGE,
        CellState::End => TURQUOISE,
        CellState::Visited => RED,
        CellState::Frontier => GREEN,
        CellState::Path => PURPLE,
    }
}

/// Colour of the lines separating cells.
pub const GRID_LINE: Color = GREY;
