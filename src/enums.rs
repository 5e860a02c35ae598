use serde::{Deserialize, Serialize};
use std::fmt;

/// Army types printed on territory cards and stacked on territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Army {
    Infantry,
    Cavalry,
    Artillery,
}

/// Order in which army types are handed out to territory cards.
pub const ARMIES: [Army; 3] = [Army::Infantry, Army::Cavalry, Army::Artillery];

impl Army {
    /// How many infantry units one piece of this type is worth.
    pub fn value(self) -> u32 {
        match self {
            Army::Infantry => 1,
            Army::Cavalry => 5,
            Army::Artillery => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Army::Infantry => "Infantry",
            Army::Cavalry => "Cavalry",
            Army::Artillery => "Artillery",
        }
    }
}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Africa,
    Europe,
    Asia,
    Australia,
}

pub const CONTINENTS: [Continent; 6] = [
    Continent::NorthAmerica,
    Continent::SouthAmerica,
    Continent::Africa,
    Continent::Europe,
    Continent::Asia,
    Continent::Australia,
];

impl Continent {
    pub fn name(self) -> &'static str {
        match self {
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Africa => "Africa",
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Australia => "Australia",
        }
    }

    /// Number of territories on the standard world map belonging to this continent.
    pub fn territory_count(self) -> usize {
        match self {
            Continent::NorthAmerica => 9,
            Continent::SouthAmerica => 4,
            Continent::Africa => 6,
            Continent::Europe => 7,
            Continent::Asia => 12,
            Continent::Australia => 4,
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
