use std::fmt::Display;
use std::str::FromStr;

use crate::matches::Region;
use crate::{Error, ServiceUrl};

/// A platform is the server cluster an account lives on.
///
/// Summoner and league endpoints are served per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    EUN1,
    EUW1,
    JP1,
    KR,
    LA1,
    LA2,
    NA1,
    OC1,
    PH2,
    RU,
    SG2,
    TH2,
    TR1,
    TW2,
    VN2,
}

impl Platform {
    pub const ALL: [Platform; 16] = [
        Platform::BR1,
        Platform::EUN1,
        Platform::EUW1,
        Platform::JP1,
        Platform::KR,
        Platform::LA1,
        Platform::LA2,
        Platform::NA1,
        Platform::OC1,
        Platform::PH2,
        Platform::RU,
        Platform::SG2,
        Platform::TH2,
        Platform::TR1,
        Platform::TW2,
        Platform::VN2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::BR1 => "br1",
            Platform::EUN1 => "eun1",
            Platform::EUW1 => "euw1",
            Platform::JP1 => "jp1",
            Platform::KR => "kr",
            Platform::LA1 => "la1",
            Platform::LA2 => "la2",
            Platform::NA1 => "na1",
            Platform::OC1 => "oc1",
            Platform::PH2 => "ph2",
            Platform::RU => "ru",
            Platform::SG2 => "sg2",
            Platform::TH2 => "th2",
            Platform::TR1 => "tr1",
            Platform::TW2 => "tw2",
            Platform::VN2 => "vn2",
        }
    }

    /// The regional routing value that serves match data for this platform.
    pub fn region(&self) -> Region {
        match self {
            Platform::BR1 | Platform::LA1 | Platform::LA2 | Platform::NA1 => Region::AMERICAS,
            Platform::EUN1 | Platform::EUW1 | Platform::RU | Platform::TR1 => Region::EUROPE,
            Platform::JP1 | Platform::KR => Region::ASIA,
            Platform::OC1
            | Platform::PH2
            | Platform::SG2
            | Platform::TH2
            | Platform::TW2
            | Platform::VN2 => Region::SEA,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == code)
            .ok_or_else(|| Error::UnknownRoute(s.to_string()))
    }
}

impl ServiceUrl for Platform {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_codes_parse_back() {
        for platform in Platform::ALL {
            let parsed: Platform = platform.to_string().parse().unwrap();
            assert_eq!(parsed, platform);
        }
        assert_eq!("NA1".parse::<Platform>().unwrap(), Platform::NA1);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = "na2".parse::<Platform>().unwrap_err();
        assert!(matches!(err, Error::UnknownRoute(code) if code == "na2"));
    }

    #[test]
    fn platforms_route_to_their_region() {
        assert_eq!(Platform::NA1.region(), Region::AMERICAS);
        assert_eq!(Platform::BR1.region(), Region::AMERICAS);
        assert_eq!(Platform::EUW1.region(), Region::EUROPE);
        assert_eq!(Platform::TR1.region(), Region::EUROPE);
        assert_eq!(Platform::KR.region(), Region::ASIA);
        assert_eq!(Platform::OC1.region(), Region::SEA);
        assert_eq!(Platform::VN2.region(), Region::SEA);
    }

    #[test]
    fn platform_base_url() {
        assert_eq!(Platform::EUN1.base_url(), "https://eun1.api.riotgames.com");
    }
}
