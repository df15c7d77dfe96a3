use crate::color::{self, Color, MalformedColor};
use thiserror::Error;

pub const DEFAULT_MAX_PERCENTAGE: f64 = 1.0;

/// Below this many colors the auto-fraction heuristic caps the interpolation
/// range so sparse charts stay close to the start color.
pub const AUTO_FRACTION_THRESHOLD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GradientError {
    #[error("color cannot be interpolated: {0}")]
    UngenerableColor(#[from] MalformedColor),
    #[error("no colors configured")]
    EmptyPalette,
    #[error("max percentage must be a finite number, got {0}")]
    InvalidMaxPercentage(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gradient {
    /// Progressively whiter versions of the start color.
    SingleColorBrighten(Color),
    /// Progressive blend from the start color toward the end color.
    TwoColorBlend(Color, Color),
}

impl Gradient {
    pub fn start(&self) -> Color {
        match *self {
            Self::SingleColorBrighten(start) | Self::TwoColorBlend(start, _) => start,
        }
    }

    pub fn end(&self) -> Option<Color> {
        match *self {
            Self::SingleColorBrighten(_) => None,
            Self::TwoColorBlend(_, end) => Some(end),
        }
    }

    fn validate(&self) -> Result<(), MalformedColor> {
        color::components(&self.start())?;
        if let Some(end) = self.end() {
            color::components(&end)?;
        }
        Ok(())
    }

    fn sample(&self, amount: f64) -> Color {
        match *self {
            Self::SingleColorBrighten(start) => color::brighten(start, amount),
            Self::TwoColorBlend(start, end) => color::blend(start, end, amount),
        }
    }
}

/// Produces `count` colors stepping away from a start color.
///
/// Element `i` (1-based) sits at `i / count` of the way to the cap, so the
/// first color is already slightly shifted and the last one reaches the cap
/// exactly. The cap is `max_percentage`, unless auto-fraction is on and the
/// count is small, in which case a fixed cap keeps the result cohesive:
///
/// | count | cap                                          |
/// |-------|----------------------------------------------|
/// | 1     | `1.0` for a two-color blend, `0.0` otherwise |
/// | 2     | `0.25`                                       |
/// | 3     | `0.3`                                        |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientGenerator {
    gradient: Gradient,
    auto_fraction: bool,
}

impl GradientGenerator {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            gradient,
            auto_fraction: true,
        }
    }

    pub fn brighten(start: Color) -> Self {
        Self::new(Gradient::SingleColorBrighten(start))
    }

    pub fn blend(start: Color, end: Color) -> Self {
        Self::new(Gradient::TwoColorBlend(start, end))
    }

    pub fn with_auto_fraction(mut self, auto_fraction: bool) -> Self {
        self.auto_fraction = auto_fraction;
        self
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn auto_fraction(&self) -> bool {
        self.auto_fraction
    }

    pub fn override_cap(&self, count: usize) -> Option<f64> {
        if !self.auto_fraction || count >= AUTO_FRACTION_THRESHOLD {
            return None;
        }

        match count {
            1 => match self.gradient {
                Gradient::TwoColorBlend(..) => Some(1.0),
                Gradient::SingleColorBrighten(_) => Some(0.0),
            },
            2 => Some(0.25),
            3 => Some(0.3),
            _ => None,
        }
    }

    /// Shorthand for [`Self::generate_with_max`] with the full range.
    pub fn generate(&self, count: usize) -> Vec<Color> {
        self.generate_with_max(count, DEFAULT_MAX_PERCENTAGE)
    }

    /// Returns exactly `count` colors, or an empty vector if they cannot be
    /// generated.
    pub fn generate_with_max(&self, count: usize, max_percentage: f64) -> Vec<Color> {
        self.try_generate(count, max_percentage).unwrap_or_else(|e| {
            log::warn!("Gradient generation failed: {}", e);
            Vec::new()
        })
    }

    pub fn try_generate(
        &self,
        count: usize,
        max_percentage: f64,
    ) -> Result<Vec<Color>, GradientError> {
        if !max_percentage.is_finite() {
            return Err(GradientError::InvalidMaxPercentage(max_percentage));
        }
        self.gradient.validate()?;

        let cap = self
            .override_cap(count)
            .unwrap_or_else(|| max_percentage.clamp(0.0, 1.0));

        Ok((1..=count)
            .map(|i| {
                let fraction = i as f64 / count as f64;
                self.gradient.sample(cap * fraction)
            })
            .collect())
    }
}
