use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A CSS paint value usable as an SVG `fill` or `stroke`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Paint {
    /// Inherit the ambient text color.
    #[default]
    CurrentColor,
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// `#rgb` or `#rrggbb`, stored lowercase without the leading `#`.
    Hex(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ParsePaintError {
    #[error("empty paint value")]
    Empty,
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("rgba() expects 4 components, got {0}")]
    WrongArity(usize),
    #[error("invalid rgba component: {0}")]
    InvalidComponent(String),
    #[error("unsupported paint value: {0}")]
    Unsupported(String),
}

fn clamp_alpha(a: f32) -> f32 {
    if a.is_nan() {
        0.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

impl Paint {
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Paint::Rgba {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    pub fn white(a: f32) -> Self {
        Self::rgba(255, 255, 255, a)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::CurrentColor => write!(f, "currentColor"),
            // the variant is public, so alpha may not have gone through `rgba()`
            Paint::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{})", clamp_alpha(*a)),
            Paint::Hex(hex) => write!(f, "#{hex}"),
        }
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}

impl FromStr for Paint {
    type Err = ParsePaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePaintError::Empty);
        }

        if s.eq_ignore_ascii_case("currentcolor") {
            return Ok(Paint::CurrentColor);
        }

        if let Some(hex) = s.strip_prefix('#') {
            let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(ParsePaintError::InvalidHex(s.to_string()));
            }
            return Ok(Paint::Hex(hex.to_ascii_lowercase()));
        }

        if let Some(body) = s
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            if parts.len() != 4 {
                return Err(ParsePaintError::WrongArity(parts.len()));
            }

            let channel = |part: &str| {
                part.parse::<u8>()
                    .map_err(|_| ParsePaintError::InvalidComponent(part.to_string()))
            };
            let r = channel(parts[0])?;
            let g = channel(parts[1])?;
            let b = channel(parts[2])?;
            let a = parts[3]
                .parse::<f32>()
                .map_err(|_| ParsePaintError::InvalidComponent(parts[3].to_string()))?;

            return Ok(Paint::rgba(r, g, b, a));
        }

        Err(ParsePaintError::Unsupported(s.to_string()))
    }
}
