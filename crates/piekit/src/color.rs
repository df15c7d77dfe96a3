use palette::{Mix, Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Working color type. Channels are expected in `[0, 1]`.
pub type Color = Srgba<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("malformed color components: ({red}, {green}, {blue}, {alpha})")]
pub struct MalformedColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("invalid color '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Extracts the `(r, g, b, a)` components of a color, refusing anything that is
/// not a finite value inside `[0, 1]`.
pub fn components(color: &Color) -> Result<(f64, f64, f64, f64), MalformedColor> {
    let (red, green, blue, alpha) = color.into_components();
    let valid = [red, green, blue, alpha]
        .iter()
        .all(|c| c.is_finite() && (0.0..=1.0).contains(c));

    if valid {
        Ok((red, green, blue, alpha))
    } else {
        Err(MalformedColor {
            red,
            green,
            blue,
            alpha,
        })
    }
}

/// Per-channel linear blend (alpha included). `amount` is clamped to `[0, 1]`.
pub fn blend(from: Color, to: Color, amount: f64) -> Color {
    from.mix(to, amount.clamp(0.0, 1.0))
}

/// Moves red, green and blue toward white by `amount`, keeping alpha.
pub fn brighten(color: Color, amount: f64) -> Color {
    let white = Srgba::new(1.0, 1.0, 1.0, color.alpha);
    blend(color, white, amount)
}

pub fn to_hex(color: &Color) -> String {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (r, g, b, a) = color.into_components();
    if a >= 1.0 {
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel(r),
            channel(g),
            channel(b),
            channel(a)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    #[strum(to_string = "gray", serialize = "grey")]
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
    Magenta,
    Brown,
    Clear,
}

impl NamedColor {
    pub fn color(self) -> Color {
        match self {
            Self::Black => Srgba::new(0.0, 0.0, 0.0, 1.0),
            Self::White => Srgba::new(1.0, 1.0, 1.0, 1.0),
            Self::Gray => Srgba::new(0.5, 0.5, 0.5, 1.0),
            Self::Red => Srgba::new(1.0, 0.0, 0.0, 1.0),
            Self::Green => Srgba::new(0.0, 1.0, 0.0, 1.0),
            Self::Blue => Srgba::new(0.0, 0.0, 1.0, 1.0),
            Self::Yellow => Srgba::new(1.0, 1.0, 0.0, 1.0),
            Self::Orange => Srgba::new(1.0, 0.5, 0.0, 1.0),
            Self::Purple => Srgba::new(0.5, 0.0, 0.5, 1.0),
            Self::Cyan => Srgba::new(0.0, 1.0, 1.0, 1.0),
            Self::Magenta => Srgba::new(1.0, 0.0, 1.0, 1.0),
            Self::Brown => Srgba::new(0.6, 0.4, 0.2, 1.0),
            Self::Clear => Srgba::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

/// A color as written in a chart description: a name (`"blue"`) or hex
/// (`"#e1614c"`, `"#fff"`, `"e1614c"`).
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub enum ColorSpec {
    Named(NamedColor),
    Hex(Srgb<u8>),
}

impl ColorSpec {
    pub fn color(&self) -> Color {
        match *self {
            Self::Named(named) => named.color(),
            Self::Hex(rgb) => {
                let rgb: Srgb<f64> = rgb.into_format();
                Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0)
            }
        }
    }
}

impl From<NamedColor> for ColorSpec {
    fn from(named: NamedColor) -> Self {
        Self::Named(named)
    }
}

impl FromStr for ColorSpec {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Ok(named) = NamedColor::from_str(s) {
            return Ok(Self::Named(named));
        }

        Srgb::<u8>::from_str(s)
            .map(Self::Hex)
            .map_err(|e| ColorParseError::Invalid {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{named}"),
            Self::Hex(rgb) => write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue),
        }
    }
}
