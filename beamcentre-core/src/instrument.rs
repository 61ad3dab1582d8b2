//! Instrument identifiers and their default overrides.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SANS instruments known to the beam centre search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Instrument {
    /// ISIS LOQ.
    Loq,
    /// ISIS LARMOR.
    Larmor,
    /// ISIS SANS2D.
    Sans2d,
    /// ISIS ZOOM.
    Zoom,
}

/// Fields an instrument profile replaces after the generic defaults are set.
///
/// `None` means the generic default stands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InstrumentOverrides {
    /// Outer search radius.
    pub r_max: Option<f64>,
    /// Scale factor for the first detector axis.
    pub scale_1: Option<f64>,
}

impl Instrument {
    /// All known instruments, in display order.
    pub const ALL: [Instrument; 4] = [
        Instrument::Loq,
        Instrument::Larmor,
        Instrument::Sans2d,
        Instrument::Zoom,
    ];

    /// Canonical upper-case instrument name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Instrument::Loq => "LOQ",
            Instrument::Larmor => "LARMOR",
            Instrument::Sans2d => "SANS2D",
            Instrument::Zoom => "ZOOM",
        }
    }

    /// Override record applied on top of the generic search defaults.
    #[must_use]
    pub fn overrides(self) -> InstrumentOverrides {
        match self {
            Instrument::Loq => InstrumentOverrides {
                r_max: Some(200.0),
                ..InstrumentOverrides::default()
            },
            Instrument::Larmor => InstrumentOverrides {
                scale_1: Some(1.0),
                ..InstrumentOverrides::default()
            },
            Instrument::Sans2d | Instrument::Zoom => InstrumentOverrides::default(),
        }
    }

    /// Override record for an optional instrument; unspecified means none.
    #[must_use]
    pub fn overrides_for(instrument: Option<Instrument>) -> InstrumentOverrides {
        instrument.map(Instrument::overrides).unwrap_or_default()
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Instrument::ALL
            .into_iter()
            .find(|instrument| instrument.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownInstrument(trimmed.to_string()))
    }
}
