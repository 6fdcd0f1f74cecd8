//! Color representation for records
//!
//! DXF writes colors as an AutoCAD Color Index (ACI) under group code 62:
//! 0 means ByBlock, 256 means ByLayer, 1-255 are palette indices.

use std::fmt;

/// A record color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256), the DXF default
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Create a color from a raw ACI value.
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ => Color::WHITE,
        }
    }

    /// The integer written under group code 62.
    pub fn aci(&self) -> i64 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i64,
        }
    }

    /// ByLayer carries no information of its own and is omitted from
    /// entity output.
    pub fn is_by_layer(&self) -> bool {
        matches!(self, Color::ByLayer)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => f.write_str("ByLayer"),
            Color::ByBlock => f.write_str("ByBlock"),
            Color::Index(i) => write!(f, "{}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aci_values() {
        assert_eq!(Color::ByBlock.aci(), 0);
        assert_eq!(Color::ByLayer.aci(), 256);
        assert_eq!(Color::RED.aci(), 1);
        assert_eq!(Color::Index(42).aci(), 42);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(7), Color::WHITE);
        assert_eq!(Color::from_index(-5), Color::WHITE);
    }
}
