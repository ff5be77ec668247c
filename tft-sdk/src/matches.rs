use std::fmt::Display;
use std::str::FromStr;

use crate::{Error, ServiceUrl};

/// Regional routing value. Match endpoints are served per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    AMERICAS,
    ASIA,
    EUROPE,
    SEA,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::AMERICAS => "americas",
            Region::ASIA => "asia",
            Region::EUROPE => "europe",
            Region::SEA => "sea",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "americas" => Ok(Region::AMERICAS),
            "asia" => Ok(Region::ASIA),
            "europe" => Ok(Region::EUROPE),
            "sea" => Ok(Region::SEA),
            _ => Err(Error::UnknownRoute(s.to_string())),
        }
    }
}

impl ServiceUrl for Region {}
