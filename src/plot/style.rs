//! Look of the runtime charts, shared by every output format.

pub const X_LABEL: &str = "Target";
pub const Y_LABEL: &str = "1-Penalized Runtime";

/// Opacity of the interquartile band.
pub const BAND_OPACITY: f64 = 0.2;

/// ColorBrewer "Dark2".
pub const PALETTE: [(u8, u8, u8); 8] = [
    (0x1b, 0x9e, 0x77),
    (0xd9, 0x5f, 0x02),
    (0x75, 0x70, 0xb3),
    (0xe7, 0x29, 0x8a),
    (0x66, 0xa6, 0x1e),
    (0xe6, 0xab, 0x02),
    (0xa6, 0x76, 0x1d),
    (0x66, 0x66, 0x66),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Cross,
    Square,
    Plus,
    Diamond,
    Triangle,
}

const MARKERS: [MarkerShape; 6] = [
    MarkerShape::Circle,
    MarkerShape::Cross,
    MarkerShape::Square,
    MarkerShape::Plus,
    MarkerShape::Diamond,
    MarkerShape::Triangle,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl DashStyle {
    /// Alternating on/off segment lengths in pixels; empty for a solid line.
    pub fn pattern(&self) -> &'static [u32] {
        match self {
            DashStyle::Solid => &[],
            DashStyle::Dashed => &[4, 2],
            DashStyle::Dotted => &[1, 2],
            DashStyle::DashDot => &[4, 2, 1, 2],
        }
    }
}

const DASHES: [DashStyle; 4] = [DashStyle::Solid, DashStyle::Dashed, DashStyle::Dotted, DashStyle::DashDot];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: (u8, u8, u8),
    pub marker: MarkerShape,
    pub dash: DashStyle,
}

impl SeriesStyle {
    /// Style of the `index`-th algorithm; each attribute cycles on its own.
    pub fn nth(index: usize) -> Self {
        Self {
            color: PALETTE[index % PALETTE.len()],
            marker: MARKERS[index % MARKERS.len()],
            dash: DASHES[index % DASHES.len()],
        }
    }

    pub fn css_color(&self, alpha: f64) -> String {
        let (r, g, b) = self.color;
        format!("rgba({},{},{},{})", r, g, b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_series_are_distinct() {
        let a = SeriesStyle::nth(0);
        let b = SeriesStyle::nth(1);
        assert_ne!(a.color, b.color);
        assert_ne!(a.marker, b.marker);
        assert_ne!(a.dash, b.dash);
        assert_eq!(a.dash, DashStyle::Solid);
    }

    #[test]
    fn css_color_includes_alpha() {
        assert_eq!(SeriesStyle::nth(0).css_color(0.2), "rgba(27,158,119,0.2)");
    }
}
