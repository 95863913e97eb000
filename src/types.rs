//! Type definitions shared by layout and rendering

use serde::{Deserialize, Serialize};

/// Size with width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A4 in PDF points.
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }
}

/// Margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Page size plus margins; everything the layout engine needs to know about
/// the paper it is writing on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub size: Size,
    pub margins: Margins,
    /// Space kept free above the bottom margin for the page-number footer.
    pub footer_reserve: f64,
}

impl PageGeometry {
    pub fn content_width(&self) -> f64 {
        self.size.width - self.margins.left - self.margins.right
    }

    /// Cursor position at the top of a fresh page.
    pub fn top(&self) -> f64 {
        self.size.height - self.margins.top
    }

    /// Lowest y a line may occupy before the page is considered full.
    pub fn floor(&self) -> f64 {
        self.margins.bottom + self.footer_reserve
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            size: Size::a4(),
            margins: Margins::uniform(50.0),
            footer_reserve: 20.0,
        }
    }
}

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

/// Brand palette used by the brief.
pub mod palette {
    use super::Color;

    /// Deep navy for titles and headings.
    pub const INK: Color = Color::rgb(0.063, 0.149, 0.259);
    /// Body text.
    pub const TEXT: Color = Color::rgb(0.18, 0.2, 0.23);
    /// Metadata, footer and disclaimer text.
    pub const MUTED: Color = Color::rgb(0.45, 0.47, 0.5);
    /// Gold accent under the header.
    pub const ACCENT: Color = Color::rgb(0.769, 0.624, 0.302);
}

/// Font weight of a text run. The brief only uses the Helvetica family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Style for one kind of text in the brief.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub font_size: f64,
    /// Vertical space consumed by one line of this style.
    pub line_height: f64,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(weight: FontWeight, font_size: f64, line_height: f64, color: Color) -> Self {
        Self {
            weight,
            font_size,
            line_height,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_matches_a4_with_50pt_margins() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.size, Size::new(595.0, 842.0));
        assert_eq!(geometry.content_width(), 495.0);
        assert_eq!(geometry.top(), 792.0);
        assert_eq!(geometry.floor(), 70.0);
    }
}
