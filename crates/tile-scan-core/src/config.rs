//! Board geometry, tile palette and scan timing

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of cells along each side of the board
pub const GRID_SIZE: usize = 4;

/// A screen coordinate visited by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: i32,
    pub y: i32,
}

impl SamplePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One known tile color and the value it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Exact RGB color of the tile background
    pub color: [u8; 3],
    /// Tile value, 0 for an empty cell
    pub value: u32,
}

impl PaletteEntry {
    pub const fn new(r: u8, g: u8, b: u8, value: u32) -> Self {
        Self {
            color: [r, g, b],
            value,
        }
    }

    /// Whether a sampled pixel is exactly this tile's color
    pub fn matches(&self, pixel: Rgb<u8>) -> bool {
        pixel.0 == self.color
    }
}

/// Tile colors of the classic 2048 theme, checked in this order
const DEFAULT_PALETTE: [PaletteEntry; 9] = [
    PaletteEntry::new(193, 179, 163, 0),
    PaletteEntry::new(234, 222, 209, 2),
    PaletteEntry::new(233, 218, 187, 4),
    PaletteEntry::new(239, 162, 98, 8),
    PaletteEntry::new(243, 129, 76, 16),
    PaletteEntry::new(244, 101, 72, 32),
    PaletteEntry::new(244, 69, 38, 64),
    PaletteEntry::new(233, 200, 89, 128),
    PaletteEntry::new(233, 196, 70, 256),
];

/// Ordered color to tile value lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Palette {
    /// Build a palette from entries in priority order
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Value of the first entry whose color matches exactly
    pub fn classify(&self, pixel: Rgb<u8>) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.matches(pixel))
            .map(|entry| entry.value)
    }

    /// Like [`Palette::classify`], but an unknown color reads as an empty cell
    pub fn tile_value(&self, pixel: Rgb<u8>) -> u32 {
        self.classify(pixel).unwrap_or(0)
    }

    /// All values a classified cell can take
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|entry| entry.value)
    }
}

/// Everything the scanner needs to know about where and how to sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Screen x of the top-left cell's sample point
    pub origin_x: i32,
    /// Screen y of the top-left cell's sample point
    pub origin_y: i32,
    /// Horizontal distance between neighbouring sample points
    pub cell_width: i32,
    /// Vertical distance between neighbouring sample points
    pub cell_height: i32,
    /// Tile colors
    pub palette: Palette,
    /// Pause before touching the screen, so the game window can be focused
    pub warmup: Duration,
    /// Pause before each sample
    pub settle: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            origin_x: 490,
            origin_y: 380,
            cell_width: 120,
            cell_height: 120,
            palette: Palette::default(),
            warmup: Duration::from_millis(2000),
            settle: Duration::from_millis(10),
        }
    }
}

impl ScanConfig {
    /// Default geometry and palette without any delays
    pub fn without_delays() -> Self {
        Self {
            warmup: Duration::ZERO,
            settle: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Screen position sampled for the cell at `col`, `row`
    pub fn sample_point(&self, col: usize, row: usize) -> SamplePoint {
        SamplePoint {
            x: self.origin_x + self.cell_width * col as i32,
            y: self.origin_y + self.cell_height * row as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_point_geometry() {
        let config = ScanConfig::default();
        for col in 0..GRID_SIZE {
            for row in 0..GRID_SIZE {
                let point = config.sample_point(col, row);
                assert_eq!(point.x, 490 + 120 * col as i32);
                assert_eq!(point.y, 380 + 120 * row as i32);
            }
        }
        assert_eq!(config.sample_point(3, 3), SamplePoint::new(850, 740));
    }

    #[test]
    fn test_default_delays() {
        let config = ScanConfig::default();
        assert_eq!(config.warmup, Duration::from_millis(2000));
        assert_eq!(config.settle, Duration::from_millis(10));

        let fast = ScanConfig::without_delays();
        assert_eq!(fast.warmup, Duration::ZERO);
        assert_eq!(fast.settle, Duration::ZERO);
        assert_eq!(fast.origin_x, config.origin_x);
        assert_eq!(fast.palette, config.palette);
    }

    #[test]
    fn test_classify_every_known_color() {
        let palette = Palette::default();
        let cases = [
            ([193, 179, 163], 0),
            ([234, 222, 209], 2),
            ([233, 218, 187], 4),
            ([239, 162, 98], 8),
            ([243, 129, 76], 16),
            ([244, 101, 72], 32),
            ([244, 69, 38], 64),
            ([233, 200, 89], 128),
            ([233, 196, 70], 256),
        ];

        for (color, value) in cases {
            assert_eq!(palette.classify(Rgb(color)), Some(value), "{color:?}");
            assert_eq!(palette.tile_value(Rgb(color)), value);
        }
    }

    #[test]
    fn test_unknown_color_reads_as_empty() {
        let palette = Palette::default();
        assert_eq!(palette.classify(Rgb([0, 0, 0])), None);
        assert_eq!(palette.tile_value(Rgb([0, 0, 0])), 0);
        // One channel off is still unknown
        assert_eq!(palette.classify(Rgb([244, 69, 39])), None);
    }

    #[test]
    fn test_first_match_wins() {
        let palette = Palette::from_entries(vec![
            PaletteEntry::new(1, 2, 3, 8),
            PaletteEntry::new(1, 2, 3, 16),
        ]);
        assert_eq!(palette.classify(Rgb([1, 2, 3])), Some(8));
    }

    #[test]
    fn test_palette_values_in_order() {
        let values: Vec<u32> = Palette::default().values().collect();
        assert_eq!(values, vec![0, 2, 4, 8, 16, 32, 64, 128, 256]);
    }

    #[test]
    fn test_config_serializes() {
        let config = ScanConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
