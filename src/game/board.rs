// src/game/board.rs
use std::collections::{HashMap, HashSet, VecDeque};

use super::types::*;
use crate::enums::{Continent, CONTINENTS};
use crate::errors::{GraphError, GraphResult};

pub const TERRITORY_COUNT: usize = 42;

/// One row of the world map: a territory, its continent and the territories it borders.
#[derive(Debug, Clone, Copy)]
pub struct TerritorySpec {
    pub name: &'static str,
    pub continent: Continent,
    pub links: &'static [&'static str],
}

const fn spec(
    name: &'static str,
    continent: Continent,
    links: &'static [&'static str],
) -> TerritorySpec {
    TerritorySpec {
        name,
        continent,
        links,
    }
}

use Continent::*;

pub static TERRITORY_TABLE: [TerritorySpec; TERRITORY_COUNT] = [
    // North America
    spec("Alaska", NorthAmerica, &["Alberta", "Northwest Territory", "Kamchatka"]),
    spec(
        "Alberta",
        NorthAmerica,
        &["Alaska", "Northwest Territory", "Ontario", "Western United States"],
    ),
    spec(
        "Western United States",
        NorthAmerica,
        &["Alberta", "Ontario", "Eastern United States", "Central America"],
    ),
    spec(
        "Central America",
        NorthAmerica,
        &["Western United States", "Eastern United States", "Venezuela"],
    ),
    spec(
        "Northwest Territory",
        NorthAmerica,
        &["Alaska", "Alberta", "Ontario", "Greenland"],
    ),
    spec(
        "Ontario",
        NorthAmerica,
        &[
            "Northwest Territory",
            "Alberta",
            "Western United States",
            "Eastern United States",
            "Quebec",
            "Greenland",
        ],
    ),
    spec(
        "Eastern United States",
        NorthAmerica,
        &["Ontario", "Western United States", "Central America", "Quebec"],
    ),
    spec(
        "Greenland",
        NorthAmerica,
        &["Northwest Territory", "Ontario", "Quebec", "Iceland"],
    ),
    spec("Quebec", NorthAmerica, &["Greenland", "Ontario", "Eastern United States"]),
    // South America
    spec("Venezuela", SouthAmerica, &["Central America", "Peru", "Brazil"]),
    spec("Peru", SouthAmerica, &["Venezuela", "Argentina", "Brazil"]),
    spec("Argentina", SouthAmerica, &["Peru", "Brazil"]),
    spec(
        "Brazil",
        SouthAmerica,
        &["Venezuela", "Peru", "Argentina", "North Africa"],
    ),
    // Africa
    spec(
        "North Africa",
        Africa,
        &[
            "Brazil",
            "Congo",
            "East Africa",
            "Egypt",
            "Southern Europe",
            "Western Europe",
        ],
    ),
    spec(
        "Egypt",
        Africa,
        &["Southern Europe", "North Africa", "East Africa", "Middle East"],
    ),
    spec("Congo", Africa, &["North Africa", "South Africa", "East Africa"]),
    spec("South Africa", Africa, &["Congo", "East Africa", "Madagascar"]),
    spec("Madagascar", Africa, &["South Africa", "East Africa"]),
    spec(
        "East Africa",
        Africa,
        &[
            "Egypt",
            "North Africa",
            "Congo",
            "South Africa",
            "Madagascar",
            "Middle East",
        ],
    ),
    // Europe
    spec("Iceland", Europe, &["Greenland", "Great Britain", "Scandinavia"]),
    spec(
        "Great Britain",
        Europe,
        &["Iceland", "Western Europe", "Scandinavia", "Northern Europe"],
    ),
    spec(
        "Western Europe",
        Europe,
        &["Great Britain", "North Africa", "Southern Europe", "Northern Europe"],
    ),
    spec(
        "Southern Europe",
        Europe,
        &[
            "Western Europe",
            "North Africa",
            "Egypt",
            "Middle East",
            "Ukraine",
            "Northern Europe",
        ],
    ),
    spec(
        "Northern Europe",
        Europe,
        &[
            "Southern Europe",
            "Western Europe",
            "Great Britain",
            "Scandinavia",
            "Ukraine",
        ],
    ),
    spec(
        "Scandinavia",
        Europe,
        &["Iceland", "Great Britain", "Northern Europe", "Ukraine"],
    ),
    spec(
        "Ukraine",
        Europe,
        &[
            "Scandinavia",
            "Northern Europe",
            "Southern Europe",
            "Middle East",
            "Afghanistan",
            "Ural",
        ],
    ),
    // Asia
    spec("Ural", Asia, &["Ukraine", "Afghanistan", "China", "Siberia"]),
    spec(
        "Afghanistan",
        Asia,
        &["Ukraine", "Middle East", "India", "China", "Ural"],
    ),
    spec(
        "Middle East",
        Asia,
        &[
            "Ukraine",
            "Southern Europe",
            "Egypt",
            "East Africa",
            "India",
            "Afghanistan",
        ],
    ),
    spec(
        "Siberia",
        Asia,
        &["Ural", "China", "Mongolia", "Irkutsk", "Yakutsk"],
    ),
    spec(
        "China",
        Asia,
        &["Siberia", "Ural", "Afghanistan", "India", "Siam", "Mongolia"],
    ),
    spec("India", Asia, &["China", "Afghanistan", "Middle East", "Siam"]),
    spec("Yakutsk", Asia, &["Kamchatka", "Irkutsk", "Siberia"]),
    spec(
        "Irkutsk",
        Asia,
        &["Yakutsk", "Siberia", "Mongolia", "Japan", "Kamchatka"],
    ),
    spec("Mongolia", Asia, &["Irkutsk", "Siberia", "China", "Japan"]),
    spec("Kamchatka", Asia, &["Yakutsk", "Irkutsk", "Japan", "Alaska"]),
    spec("Japan", Asia, &["Kamchatka", "Irkutsk", "Mongolia"]),
    spec("Siam", Asia, &["China", "India", "Indonesia"]),
    // Australia
    spec(
        "Indonesia",
        Australia,
        &["Siam", "New Guinea", "Western Australia"],
    ),
    spec(
        "New Guinea",
        Australia,
        &["Indonesia", "Western Australia", "Eastern Australia"],
    ),
    spec(
        "Western Australia",
        Australia,
        &["Indonesia", "New Guinea", "Eastern Australia"],
    ),
    spec(
        "Eastern Australia",
        Australia,
        &["Western Australia", "New Guinea"],
    ),
];

pub struct BoardGenerator;

impl BoardGenerator {
    /// Materialises a fresh set of territories from the map table.
    /// Nothing is shared with territories produced by earlier calls.
    pub fn generate_territories() -> Territories {
        let mut territories = Territories::with_capacity(TERRITORY_TABLE.len());
        for row in TERRITORY_TABLE.iter() {
            territories.insert(
                row.name.to_string(),
                Territory::new(row.name, row.continent, row.links),
            );
        }
        territories
    }

    /// Checks the territory graph: size, continent partition, link targets,
    /// link symmetry and connectivity. Returns the first problem found.
    pub fn validate(territories: &Territories) -> GraphResult<()> {
        if territories.len() != TERRITORY_COUNT {
            return Err(GraphError::TerritoryCount {
                expected: TERRITORY_COUNT,
                actual: territories.len(),
            });
        }

        let mut per_continent: HashMap<Continent, usize> = HashMap::new();
        for territory in territories.values() {
            *per_continent.entry(territory.continent).or_default() += 1;
        }

        for continent in CONTINENTS {
            let actual = per_continent.get(&continent).copied().unwrap_or(0);
            if actual != continent.territory_count() {
                return Err(GraphError::ContinentSize {
                    continent,
                    expected: continent.territory_count(),
                    actual,
                });
            }
        }

        for territory in territories.values() {
            for link in &territory.links {
                let neighbor = territories
                    .get(link.as_str())
                    .ok_or_else(|| GraphError::unknown_neighbor(&territory.name, link))?;
                if !neighbor.is_adjacent(&territory.name) {
                    return Err(GraphError::asymmetric(&territory.name, link));
                }
            }
        }

        let reached = Self::reachable_from_first(territories);
        if reached != territories.len() {
            return Err(GraphError::Disconnected {
                reached,
                total: territories.len(),
            });
        }

        Ok(())
    }

    /// Breadth-first walk from the first territory; returns how many were reached.
    fn reachable_from_first(territories: &Territories) -> usize {
        let Some(start) = territories.keys().next() else {
            return 0;
        };

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue = VecDeque::from([start.as_str()]);
        visited.insert(start.as_str());

        while let Some(name) = queue.pop_front() {
            let Some(territory) = territories.get(name) else {
                continue;
            };
            for link in &territory.links {
                if visited.insert(link.as_str()) {
                    queue.push_back(link.as_str());
                }
            }
        }

        visited.len()
    }
}
