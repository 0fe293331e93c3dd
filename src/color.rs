// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Color definitions and the stroke palette.

use std::fmt;
use std::str::FromStr;

/// Color type for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// White color, used as the surface background.
    pub const WHITE: Color = Color(255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);
    /// Fixed joint marker color (warning red), independent of the stroke color.
    pub const MARKER: Color = Color(255, 0, 0);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Convert to an [`image::Rgb`] pixel.
    #[must_use]
    pub const fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.0, self.1, self.2])
    }
}

/// Stroke colors selectable from the editor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrokeColor {
    /// Black (the initial stroke color).
    #[default]
    Black,
    /// Grey.
    Grey,
    /// Orange.
    Orange,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
}

impl StrokeColor {
    /// All palette entries in toolbar order.
    pub const ALL: [StrokeColor; 7] = [
        Self::Black,
        Self::Grey,
        Self::Orange,
        Self::Green,
        Self::Red,
        Self::Blue,
        Self::Purple,
    ];

    /// Returns the string representation of the palette entry.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Grey => "grey",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// RGB value of the palette entry (CSS named-color values).
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Black => Color(0, 0, 0),
            Self::Grey => Color(128, 128, 128),
            Self::Orange => Color(255, 165, 0),
            Self::Green => Color(0, 128, 0),
            Self::Red => Color(255, 0, 0),
            Self::Blue => Color(0, 0, 255),
            Self::Purple => Color(128, 0, 128),
        }
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrokeColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "grey" | "gray" => Ok(Self::Grey),
            "orange" => Ok(Self::Orange),
            "green" => Ok(Self::Green),
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid color name.
#[derive(Debug, Clone)]
pub struct ColorParseError(String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color '{}', expected one of: black, grey, orange, green, red, blue, purple",
            self.0
        )
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_color_from_str() {
        assert_eq!("black".parse::<StrokeColor>().unwrap(), StrokeColor::Black);
        assert_eq!("Red".parse::<StrokeColor>().unwrap(), StrokeColor::Red);
        assert_eq!("gray".parse::<StrokeColor>().unwrap(), StrokeColor::Grey);
        assert!("magenta".parse::<StrokeColor>().is_err());
    }

    #[test]
    fn test_stroke_color_display() {
        assert_eq!(StrokeColor::Purple.to_string(), "purple");
        assert_eq!(StrokeColor::Grey.to_string(), "grey");
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(StrokeColor::Black.color(), Color(0, 0, 0));
        assert_eq!(StrokeColor::Orange.color(), Color(255, 165, 0));
        assert_eq!(StrokeColor::default(), StrokeColor::Black);
        assert_eq!(StrokeColor::ALL.len(), 7);
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(Color::MARKER.to_rgb(), image::Rgb([255, 0, 0]));
    }
}
