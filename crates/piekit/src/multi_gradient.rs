use crate::color::{self, Color};
use crate::gradient::GradientError;

/// Piecewise-linear gradient through a fixed list of control colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiGradientGenerator {
    colors: Vec<Color>,
}

impl MultiGradientGenerator {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn generate(&self, count: usize) -> Vec<Color> {
        self.try_generate(count).unwrap_or_else(|e| {
            log::warn!("Multi-color gradient generation failed: {}", e);
            Vec::new()
        })
    }

    /// When `count` exceeds the number of control colors, the controls are
    /// spread evenly over the output: output `i` sits at control position
    /// `i * (k - 1) / (count - 1)` and blends the two controls around it. The
    /// first and last outputs are the first and last controls, untouched.
    pub fn try_generate(&self, count: usize) -> Result<Vec<Color>, GradientError> {
        if self.colors.is_empty() {
            return Err(GradientError::EmptyPalette);
        }
        for c in &self.colors {
            color::components(c)?;
        }

        let k = self.colors.len();
        if count <= k {
            return Ok(self.colors[..count].to_vec());
        }

        let first = std::iter::once(self.colors[0]);
        let rest = (1..count).map(|i| {
            // integer numerator keeps the final position exactly k - 1
            let position = (i * (k - 1)) as f64 / (count - 1) as f64;
            let lower = position.floor() as usize;
            let upper = position.ceil() as usize;
            if lower == upper {
                self.colors[lower]
            } else {
                color::blend(self.colors[lower], self.colors[upper], position - lower as f64)
            }
        });

        Ok(first.chain(rest).collect())
    }
}

impl From<Vec<Color>> for MultiGradientGenerator {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}
