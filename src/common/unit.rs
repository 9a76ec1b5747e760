//! Unit conversion utilities.
//!
//! Page geometry is authored in inches (the unit slide tools think in) and
//! serialized in EMU (English Metric Units), the integer unit of DrawingML.
//! Background-style fills may also be expressed as a percentage of the page.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const POINTS_PER_INCH: f64 = 72.0;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// DrawingML font sizes and spacing are expressed in hundredths of a point.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}

/// A length along one page axis.
///
/// # Examples
///
/// ```
/// use deckwright::common::unit::{Length, EMUS_PER_INCH};
///
/// let half = "50%".parse::<Length>().unwrap();
/// assert_eq!(half.resolve(10 * EMUS_PER_INCH).unwrap(), 5 * EMUS_PER_INCH);
///
/// let bar = Length::In(0.15);
/// assert_eq!(bar.to_string(), "0.15in");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Length {
    /// Absolute inches
    In(f64),
    /// Absolute points (1/72 inch)
    Pt(f64),
    /// Percentage of the page extent on the same axis
    Pct(f64),
}

impl Length {
    /// Resolve to EMU against the page extent of the axis this length lives on.
    pub fn resolve(self, extent_emu: i64) -> Result<i64> {
        match self {
            Length::In(v) if v.is_finite() => Ok(inches_to_emu(v)),
            Length::Pt(v) if v.is_finite() => Ok(pt_to_emu_f64(v)),
            Length::Pct(p) if p.is_finite() && (0.0..=100.0).contains(&p) => {
                Ok((extent_emu as f64 * p / 100.0).round() as i64)
            },
            other => Err(Error::layout(format!("length {} out of range", other))),
        }
    }

    /// Shift an absolute length; percentages cannot be mixed with offsets.
    pub(crate) fn offset(self, inches: f64) -> Result<Self> {
        match self {
            Length::In(v) => Ok(Length::In(v + inches)),
            Length::Pt(v) => Ok(Length::Pt(v + inches * POINTS_PER_INCH)),
            Length::Pct(_) => Err(Error::layout(format!(
                "cannot offset relative length {} by {}in",
                self, inches
            ))),
        }
    }
}

impl From<f64> for Length {
    fn from(inches: f64) -> Self {
        Length::In(inches)
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (number, ctor): (&str, fn(f64) -> Length) = if let Some(v) = s.strip_suffix('%') {
            (v, Length::Pct)
        } else if let Some(v) = s.strip_suffix("pt") {
            (v, Length::Pt)
        } else if let Some(v) = s.strip_suffix("in") {
            (v, Length::In)
        } else {
            (s, Length::In)
        };

        number
            .trim()
            .parse::<f64>()
            .map(ctor)
            .map_err(|_| Error::Config(format!("Invalid length '{}'", s)))
    }
}

impl TryFrom<String> for Length {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::In(v) => write!(f, "{}in", v),
            Length::Pt(v) => write!(f, "{}pt", v),
            Length::Pct(v) => write!(f, "{}%", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversion() {
        assert_eq!(inches_to_emu(1.0), EMUS_PER_INCH);
        assert_eq!(inches_to_emu(0.15), 137_160);
        assert_eq!(emu_to_inches(9_144_000), 10.0);
    }

    #[test]
    fn test_point_conversion() {
        assert_eq!(pt_to_emu_f64(1.0), EMUS_PER_PT);
        assert_eq!(pt_to_centipoints(28.0), 2800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
    }

    #[test]
    fn test_parse_lengths() {
        assert_eq!("100%".parse::<Length>().unwrap(), Length::Pct(100.0));
        assert_eq!("12pt".parse::<Length>().unwrap(), Length::Pt(12.0));
        assert_eq!("0.4in".parse::<Length>().unwrap(), Length::In(0.4));
        assert_eq!("2.5".parse::<Length>().unwrap(), Length::In(2.5));
        assert!("wide".parse::<Length>().is_err());
    }

    #[test]
    fn test_resolve_percent() {
        let width = 10 * EMUS_PER_INCH;
        assert_eq!(Length::Pct(100.0).resolve(width).unwrap(), width);
        assert_eq!(Length::Pct(25.0).resolve(width).unwrap(), width / 4);
        assert!(Length::Pct(120.0).resolve(width).is_err());
        assert!(Length::In(f64::NAN).resolve(width).is_err());
    }

    #[test]
    fn test_points_and_inches_agree() {
        let extent = 10 * EMUS_PER_INCH;
        assert_eq!(
            Length::Pt(72.0).resolve(extent).unwrap(),
            Length::In(1.0).resolve(extent).unwrap()
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(Length::In(1.0).offset(0.15).unwrap(), Length::In(1.15));
        assert!(Length::Pct(10.0).offset(0.1).is_err());
    }
}
