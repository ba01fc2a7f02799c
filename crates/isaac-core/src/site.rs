use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The two brand variants the platform ships as.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    /// The science variant (physics, maths, chemistry, biology).
    Phy,
    /// The computer-science variant.
    Ada,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phy => "phy",
            Self::Ada => "ada",
        }
    }

    /// Pick a value per site, mirroring how site-specific configuration is
    /// selected throughout the platform.
    pub fn specific<T>(&self, phy: T, ada: T) -> T {
        match self {
            Self::Phy => phy,
            Self::Ada => ada,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phy" => Ok(Self::Phy),
            "ada" => Ok(Self::Ada),
            _ => Err(ParseError::Site(s.to_owned())),
        }
    }
}
