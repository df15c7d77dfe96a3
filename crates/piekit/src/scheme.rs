use crate::color::{Color, NamedColor};
use crate::gradient::GradientGenerator;
use crate::multi_gradient::MultiGradientGenerator;

/// Brightening range used when a chart is configured with a single color.
pub const SINGLE_COLOR_MAX_PERCENTAGE: f64 = 0.8;

pub const FALLBACK_PALETTE: [NamedColor; 6] = [
    NamedColor::Blue,
    NamedColor::Orange,
    NamedColor::Green,
    NamedColor::Purple,
    NamedColor::Red,
    NamedColor::Cyan,
];

/// How a chart turns its configured colors into one color per slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScheme {
    Single(GradientGenerator),
    Multi(MultiGradientGenerator),
}

impl ColorScheme {
    /// One configured color brightens toward white; anything else is used as
    /// control points of a multi-color gradient.
    pub fn from_colors(colors: &[Color]) -> Self {
        match colors {
            [single] => Self::Single(GradientGenerator::brighten(*single)),
            _ => Self::Multi(MultiGradientGenerator::new(colors.to_vec())),
        }
    }

    /// Raw generator output; empty when the colors could not be generated.
    pub fn generate(&self, count: usize) -> Vec<Color> {
        match self {
            Self::Single(generator) => {
                generator.generate_with_max(count, SINGLE_COLOR_MAX_PERCENTAGE)
            }
            Self::Multi(generator) => generator.generate(count),
        }
    }

    /// Always `count` colors: the generated gradient, or the fallback palette
    /// when generation failed.
    pub fn colors_for(&self, count: usize) -> Vec<Color> {
        let colors = self.generate(count);
        if colors.len() == count {
            return colors;
        }

        log::warn!("Falling back to default palette for {} slices", count);
        fallback_palette(count)
    }
}

pub fn fallback_palette(count: usize) -> Vec<Color> {
    FALLBACK_PALETTE
        .iter()
        .cycle()
        .take(count)
        .map(|named| named.color())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgba;

    #[test]
    fn test_single_color_uses_brighten() {
        let c = Srgba::new(0.0, 0.0, 0.0, 1.0);
        let scheme = ColorScheme::from_colors(&[c]);
        assert!(matches!(scheme, ColorScheme::Single(_)));

        let colors = scheme.generate(4);
        assert_eq!(colors.len(), 4);
        let (r, _, _, _) = colors[3].into_components();
        assert!((r - SINGLE_COLOR_MAX_PERCENTAGE).abs() < 1e-9);
    }

    #[test]
    fn test_several_colors_use_multi() {
        let colors = [NamedColor::Red.color(), NamedColor::Blue.color()];
        let scheme = ColorScheme::from_colors(&colors);
        assert!(matches!(scheme, ColorScheme::Multi(_)));
        assert_eq!(scheme.generate(2), colors.to_vec());
    }

    #[test]
    fn test_empty_colors_fall_back() {
        let scheme = ColorScheme::from_colors(&[]);
        assert!(scheme.generate(3).is_empty());

        let colors = scheme.colors_for(8);
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[0], NamedColor::Blue.color());
        assert_eq!(colors[6], NamedColor::Blue.color());
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let scheme = ColorScheme::from_colors(&[Srgba::new(f64::INFINITY, 0.0, 0.0, 1.0)]);
        assert_eq!(scheme.colors_for(2), fallback_palette(2));
    }
}
