//! Zones and rack identifiers
//!
//! The exhibition floor is divided into lettered zones, each with a fixed
//! contiguous booth number interval. A rack is one booth slot, written as
//! zone letter + booth number (`E15`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Zone letter with a fixed booth interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    C,
    D,
    E,
    F,
    G,
    H,
}

/// All zones, in floor order
pub const ZONES: [Zone; 6] = [Zone::C, Zone::D, Zone::E, Zone::F, Zone::G, Zone::H];

impl Zone {
    /// Closed booth number interval `[start, end]` for this zone
    pub fn booth_range(&self) -> std::ops::RangeInclusive<u8> {
        match self {
            Zone::C => 3..=7,
            Zone::D => 1..=10,
            Zone::E => 12..=21,
            Zone::F => 28..=51,
            Zone::G => 57..=80,
            Zone::H => 86..=109,
        }
    }

    /// Whether `booth` falls inside this zone's interval
    pub fn contains_booth(&self, booth: u8) -> bool {
        self.booth_range().contains(&booth)
    }

    /// Booth numbers of this zone, ascending
    pub fn booth_numbers(&self) -> impl Iterator<Item = u8> {
        self.booth_range()
    }

    pub fn letter(&self) -> char {
        match self {
            Zone::C => 'C',
            Zone::D => 'D',
            Zone::E => 'E',
            Zone::F => 'F',
            Zone::G => 'G',
            Zone::H => 'H',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Zone::C),
            'D' => Some(Zone::D),
            'E' => Some(Zone::E),
            'F' => Some(Zone::F),
            'G' => Some(Zone::G),
            'H' => Some(Zone::H),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rack identifier: zone letter + booth number inside that zone's interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rack {
    zone: Zone,
    booth: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RackError {
    #[error("unknown zone letter: {0}")]
    UnknownZone(char),

    #[error("booth {booth} is outside zone {zone} ({start}-{end})")]
    BoothOutOfRange { zone: Zone, booth: u8, start: u8, end: u8 },

    #[error("malformed rack identifier: {0}")]
    Malformed(String),
}

impl Rack {
    /// Build a rack, rejecting booth numbers outside the zone interval
    pub fn new(zone: Zone, booth: u8) -> Result<Self, RackError> {
        if !zone.contains_booth(booth) {
            let range = zone.booth_range();
            return Err(RackError::BoothOutOfRange {
                zone,
                booth,
                start: *range.start(),
                end: *range.end(),
            });
        }
        Ok(Self { zone, booth })
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn booth(&self) -> u8 {
        self.booth
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.zone, self.booth)
    }
}

impl FromStr for Rack {
    type Err = RackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(|| RackError::Malformed(s.to_string()))?;
        let zone = Zone::from_letter(letter).ok_or(RackError::UnknownZone(letter))?;
        let booth: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| RackError::Malformed(s.to_string()))?;
        Rack::new(zone, booth)
    }
}

impl Serialize for Rack {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rack {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booth_range_boundaries() {
        // Zone G covers 57-80 inclusive
        assert!(Rack::new(Zone::G, 57).is_ok());
        assert!(Rack::new(Zone::G, 80).is_ok());
        assert!(matches!(
            Rack::new(Zone::G, 56),
            Err(RackError::BoothOutOfRange { .. })
        ));
        assert!(matches!(
            Rack::new(Zone::G, 81),
            Err(RackError::BoothOutOfRange { .. })
        ));
    }

    #[test]
    fn rack_display_and_parse_round_trip() {
        let rack = Rack::new(Zone::E, 15).unwrap();
        assert_eq!(rack.to_string(), "E15");
        assert_eq!("E15".parse::<Rack>().unwrap(), rack);
    }

    #[test]
    fn rack_parse_rejects_garbage() {
        assert_eq!("A5".parse::<Rack>(), Err(RackError::UnknownZone('A')));
        assert!(matches!("E".parse::<Rack>(), Err(RackError::Malformed(_))));
        assert!(matches!("E1x".parse::<Rack>(), Err(RackError::Malformed(_))));
        // 22 is just past zone E's interval
        assert!(matches!(
            "E22".parse::<Rack>(),
            Err(RackError::BoothOutOfRange { .. })
        ));
    }

    #[test]
    fn rack_serde_uses_string_form() {
        let rack = Rack::new(Zone::D, 7).unwrap();
        let json = serde_json::to_string(&rack).unwrap();
        assert_eq!(json, "\"D7\"");
        let back: Rack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rack);
    }
}
