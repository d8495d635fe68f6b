use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Derives the playable grid from window geometry.
    ///
    /// The header strip is reserved above the board and never holds cells.
    #[must_use]
    pub const fn from_window(width_px: u16, height_px: u16, tile_px: u16, header_px: u16) -> Self {
        Self {
            width: width_px / tile_px,
            height: (height_px - header_px) / tile_px,
        }
    }
}

/// Window width in pixels.
pub const WINDOW_WIDTH_PX: u16 = 600;

/// Window height in pixels, header included.
pub const WINDOW_HEIGHT_PX: u16 = 650;

/// Edge length of one square tile in pixels.
pub const TILE_SIZE_PX: u16 = 25;

/// Height of the scoreboard strip in pixels.
pub const HEADER_HEIGHT_PX: u16 = 50;

/// Playable grid: 24x24 cells.
pub const GRID: GridSize =
    GridSize::from_window(WINDOW_WIDTH_PX, WINDOW_HEIGHT_PX, TILE_SIZE_PX, HEADER_HEIGHT_PX);

/// Terminal columns used to draw one tile, keeping tiles roughly square.
pub const TILE_COLUMNS: u16 = 2;

/// Terminal rows used by the header strip.
pub const HEADER_ROWS: u16 = 2;

/// Cell the snake starts from after every (re)start.
pub const START_CELL: (i32, i32) = (5, 5);

/// Default fast tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Lowest accepted fast tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Interval of the redraw-only clock refresh in milliseconds.
pub const DEFAULT_CLOCK_INTERVAL_MS: u64 = 1000;

/// Tile glyph pair: half blocks leave a gap column between neighbours.
pub const GLYPH_TILE: &str = "▐▌";

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake: Color,
    pub food_normal: Color,
    pub food_gold: Color,
    pub food_bad: Color,
    pub play_bg: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    pub popup_title: Color,
    pub popup_footer: Color,
}

/// Green snake on black, white scoreboard.
pub const THEME: Theme = Theme {
    snake: Color::Green,
    food_normal: Color::Red,
    food_gold: Color::Yellow,
    food_bad: Color::Rgb(128, 0, 128),
    play_bg: Color::Black,
    header_fg: Color::Black,
    header_bg: Color::White,
    popup_title: Color::Red,
    popup_footer: Color::DarkGray,
};

#[cfg(test)]
mod tests {
    use super::{GRID, GridSize};

    #[test]
    fn default_window_yields_square_board() {
        assert_eq!(
            GRID,
            GridSize {
                width: 24,
                height: 24
            }
        );
    }

    #[test]
    fn header_strip_is_excluded_from_rows() {
        let grid = GridSize::from_window(100, 120, 10, 20);

        assert_eq!(grid.width, 10);
        assert_eq!(grid.height, 10);
    }
}
