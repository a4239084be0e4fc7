use crate::utils::error::SwapError;
use std::fmt;
use std::str::FromStr;

/// Fixed set of color names the backend accepts. Unknown names are rejected
/// at the API boundary, so a persisted color string always resolves here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Black,
    White,
    Gray,
    Brown,
    Cyan,
    Magenta,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 13] = [
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Orange,
        PaletteColor::Purple,
        PaletteColor::Pink,
        PaletteColor::Black,
        PaletteColor::White,
        PaletteColor::Gray,
        PaletteColor::Brown,
        PaletteColor::Cyan,
        PaletteColor::Magenta,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Orange => "orange",
            PaletteColor::Purple => "purple",
            PaletteColor::Pink => "pink",
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
            PaletteColor::Gray => "gray",
            PaletteColor::Brown => "brown",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Magenta => "magenta",
        }
    }
}

impl FromStr for PaletteColor {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "red" => Ok(PaletteColor::Red),
            "blue" => Ok(PaletteColor::Blue),
            "green" => Ok(PaletteColor::Green),
            "yellow" => Ok(PaletteColor::Yellow),
            "orange" => Ok(PaletteColor::Orange),
            "purple" => Ok(PaletteColor::Purple),
            "pink" => Ok(PaletteColor::Pink),
            "black" => Ok(PaletteColor::Black),
            "white" => Ok(PaletteColor::White),
            // "grey" is accepted as a spelling variant, canonical form is "gray"
            "gray" | "grey" => Ok(PaletteColor::Gray),
            "brown" => Ok(PaletteColor::Brown),
            "cyan" => Ok(PaletteColor::Cyan),
            "magenta" => Ok(PaletteColor::Magenta),
            _ => Err(SwapError::UnknownColor {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed color value as the repository sees it. `Named` values map straight
/// back to their palette string; `Custom` values only map back when their RGB
/// components land close enough to one of a few well-known colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Named(PaletteColor),
    Custom { r: u8, g: u8, b: u8 },
}

impl Color {
    pub fn parse(name: &str) -> Option<Color> {
        PaletteColor::from_str(name).ok().map(Color::Named)
    }

    /// Canonical palette string for this color, or `None` when the color
    /// cannot be expressed as a palette entry.
    pub fn palette_name(&self) -> Option<&'static str> {
        match *self {
            Color::Named(palette) => Some(palette.name()),
            Color::Custom { r, g, b } => {
                if r > 200 && g < 50 && b < 50 {
                    Some("red")
                } else if r < 50 && g < 50 && b > 200 {
                    Some("blue")
                } else if r < 50 && g > 200 && b < 50 {
                    Some("green")
                } else if r > 200 && g > 200 && b < 50 {
                    Some("yellow")
                } else if r > 200 && g < 50 && b > 200 {
                    Some("magenta")
                } else {
                    None
                }
            }
        }
    }
}

impl From<PaletteColor> for Color {
    fn from(palette: PaletteColor) -> Self {
        Color::Named(palette)
    }
}
