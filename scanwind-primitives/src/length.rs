//! CSS length values.
//!
//! Only used for advisory checks: the descriptor stores lengths as the raw
//! strings the author wrote, and a consumer may ask whether one of them would
//! parse as a CSS `<length>` or `<percentage>`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Units accepted by [`CssLength::parse`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[allow(missing_docs)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Ex,
    Ch,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Svh,
    Lvh,
    Dvh,
    Cm,
    Mm,
    Q,
    In,
    Pt,
    Pc,
    Percent,
}

impl LengthUnit {
    const ALL: [Self; 19] = [
        Self::Px,
        Self::Em,
        Self::Rem,
        Self::Ex,
        Self::Ch,
        Self::Vw,
        Self::Vh,
        Self::Vmin,
        Self::Vmax,
        Self::Svh,
        Self::Lvh,
        Self::Dvh,
        Self::Cm,
        Self::Mm,
        Self::Q,
        Self::In,
        Self::Pt,
        Self::Pc,
        Self::Percent,
    ];

    /// Returns the unit suffix as written in CSS.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Ex => "ex",
            Self::Ch => "ch",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Svh => "svh",
            Self::Lvh => "lvh",
            Self::Dvh => "dvh",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::Q => "q",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Percent => "%",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        // CSS units are ASCII case-insensitive.
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }
}

/// A parsed CSS length such as `4px`, `-0.5rem` or `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssLength {
    magnitude: f64,
    unit: Option<LengthUnit>,
}

impl CssLength {
    /// Parses a CSS length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCssLength`] if the input is empty, has no
    /// numeric part, uses an unknown unit, or omits the unit on a non-zero value.
    pub fn parse(input: &str) -> Result<Self> {
        let value = input.trim();
        if value.is_empty() {
            return Err(invalid(input, "value cannot be empty"));
        }

        let split = value
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(value.len());
        let (number, suffix) = value.split_at(split);

        let digits = number.strip_prefix(['+', '-']).unwrap_or(number);
        if digits.is_empty()
            || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            || digits.matches('.').count() > 1
            || !digits.chars().any(|c| c.is_ascii_digit())
        {
            return Err(invalid(input, "expected a number before the unit"));
        }

        let magnitude: f64 = number
            .parse()
            .map_err(|_| invalid(input, "number is out of range"))?;

        if suffix.is_empty() {
            if magnitude == 0.0 {
                return Ok(Self {
                    magnitude,
                    unit: None,
                });
            }
            return Err(invalid(input, "non-zero lengths require a unit"));
        }

        let unit = LengthUnit::from_suffix(suffix)
            .ok_or_else(|| invalid(input, &format!("unknown unit `{suffix}`")))?;

        Ok(Self {
            magnitude,
            unit: Some(unit),
        })
    }

    /// Returns the numeric part.
    #[must_use]
    pub const fn magnitude(self) -> f64 {
        self.magnitude
    }

    /// Returns the unit, or `None` for a unitless zero.
    #[must_use]
    pub const fn unit(self) -> Option<LengthUnit> {
        self.unit
    }
}

fn invalid(value: &str, reason: &str) -> Error {
    Error::InvalidCssLength {
        value: value.into(),
        reason: reason.into(),
    }
}

impl FromStr for CssLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for CssLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.magnitude)?;
        if let Some(unit) = self.unit {
            f.write_str(unit.suffix())?;
        }
        Ok(())
    }
}
