//! Romania: the classic road-map route-finding world.
//!
//! Twenty cities, undirected roads with kilometre distances, and the
//! straight-line distance to Bucharest as an admissible and consistent
//! heuristic. Arad to Bucharest costs 418 on the optimal route
//! (Arad, Sibiu, Rimnicu Vilcea, Pitesti, Bucharest).
//!
//! Actions are destination cities, listed in road-table order so runs are
//! reproducible.

use std::fmt;
use std::str::FromStr;

use lodestar_search::Problem;

/// A city on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Arad,
    Bucharest,
    Craiova,
    Drobeta,
    Eforie,
    Fagaras,
    Giurgiu,
    Hirsova,
    Iasi,
    Lugoj,
    Mehadia,
    Neamt,
    Oradea,
    Pitesti,
    RimnicuVilcea,
    Sibiu,
    Timisoara,
    Urziceni,
    Vaslui,
    Zerind,
}

impl City {
    pub const ALL: [City; 20] = [
        City::Arad,
        City::Bucharest,
        City::Craiova,
        City::Drobeta,
        City::Eforie,
        City::Fagaras,
        City::Giurgiu,
        City::Hirsova,
        City::Iasi,
        City::Lugoj,
        City::Mehadia,
        City::Neamt,
        City::Oradea,
        City::Pitesti,
        City::RimnicuVilcea,
        City::Sibiu,
        City::Timisoara,
        City::Urziceni,
        City::Vaslui,
        City::Zerind,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            City::Arad => "Arad",
            City::Bucharest => "Bucharest",
            City::Craiova => "Craiova",
            City::Drobeta => "Drobeta",
            City::Eforie => "Eforie",
            City::Fagaras => "Fagaras",
            City::Giurgiu => "Giurgiu",
            City::Hirsova => "Hirsova",
            City::Iasi => "Iasi",
            City::Lugoj => "Lugoj",
            City::Mehadia => "Mehadia",
            City::Neamt => "Neamt",
            City::Oradea => "Oradea",
            City::Pitesti => "Pitesti",
            City::RimnicuVilcea => "Rimnicu Vilcea",
            City::Sibiu => "Sibiu",
            City::Timisoara => "Timisoara",
            City::Urziceni => "Urziceni",
            City::Vaslui => "Vaslui",
            City::Zerind => "Zerind",
        }
    }

    /// Straight-line distance to Bucharest in kilometres.
    #[must_use]
    pub fn sld_to_bucharest(self) -> u32 {
        match self {
            City::Arad => 366,
            City::Bucharest => 0,
            City::Craiova => 160,
            City::Drobeta => 242,
            City::Eforie => 161,
            City::Fagaras => 176,
            City::Giurgiu => 77,
            City::Hirsova => 151,
            City::Iasi => 226,
            City::Lugoj => 244,
            City::Mehadia => 241,
            City::Neamt => 234,
            City::Oradea => 380,
            City::Pitesti => 100,
            City::RimnicuVilcea => 193,
            City::Sibiu => 253,
            City::Timisoara => 329,
            City::Urziceni => 80,
            City::Vaslui => 199,
            City::Zerind => 374,
        }
    }

    /// Cities one road away, in road-table order.
    #[must_use]
    pub fn neighbours(self) -> Vec<(City, u32)> {
        ROADS
            .iter()
            .filter_map(|&(a, b, km)| {
                if a == self {
                    Some((b, km))
                } else if b == self {
                    Some((a, km))
                } else {
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown city: {0}")]
pub struct UnknownCity(pub String);

impl FromStr for City {
    type Err = UnknownCity;

    /// Case-insensitive; spaces, dashes and underscores are ignored, so
    /// `rimnicu-vilcea`, `Rimnicu Vilcea` and `RimnicuVilcea` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        City::ALL
            .into_iter()
            .find(|city| {
                let name: String = city
                    .name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .flat_map(char::to_lowercase)
                    .collect();
                name == wanted
            })
            .ok_or_else(|| UnknownCity(s.to_string()))
    }
}

/// Undirected roads with distances in kilometres.
pub const ROADS: [(City, City, u32); 23] = [
    (City::Arad, City::Zerind, 75),
    (City::Arad, City::Sibiu, 140),
    (City::Arad, City::Timisoara, 118),
    (City::Zerind, City::Oradea, 71),
    (City::Oradea, City::Sibiu, 151),
    (City::Timisoara, City::Lugoj, 111),
    (City::Lugoj, City::Mehadia, 70),
    (City::Mehadia, City::Drobeta, 75),
    (City::Drobeta, City::Craiova, 120),
    (City::Craiova, City::RimnicuVilcea, 146),
    (City::Craiova, City::Pitesti, 138),
    (City::Sibiu, City::Fagaras, 99),
    (City::Sibiu, City::RimnicuVilcea, 80),
    (City::RimnicuVilcea, City::Pitesti, 97),
    (City::Fagaras, City::Bucharest, 211),
    (City::Pitesti, City::Bucharest, 101),
    (City::Bucharest, City::Giurgiu, 90),
    (City::Bucharest, City::Urziceni, 85),
    (City::Urziceni, City::Hirsova, 98),
    (City::Hirsova, City::Eforie, 86),
    (City::Urziceni, City::Vaslui, 142),
    (City::Vaslui, City::Iasi, 92),
    (City::Iasi, City::Neamt, 87),
];

/// Route finding between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Romania {
    pub from: City,
    pub to: City,
}

impl Romania {
    #[must_use]
    pub fn new(from: City, to: City) -> Self {
        Self { from, to }
    }

    /// The textbook instance: Arad to Bucharest.
    #[must_use]
    pub fn arad_to_bucharest() -> Self {
        Self::new(City::Arad, City::Bucharest)
    }

    /// Whether the straight-line-distance heuristic applies (it is only
    /// defined towards Bucharest).
    #[must_use]
    pub fn has_sld_heuristic(&self) -> bool {
        self.to == City::Bucharest
    }
}

impl Problem for Romania {
    type State = City;
    type Action = City;
    type Cost = u32;

    fn initial(&self) -> City {
        self.from
    }

    fn goal_test(&self, state: &City) -> bool {
        *state == self.to
    }

    fn actions(&self, state: &City) -> Vec<City> {
        state.neighbours().into_iter().map(|(city, _)| city).collect()
    }

    fn result(&self, _state: &City, action: &City) -> City {
        *action
    }

    fn step_cost(&self, state: &City, _action: &City, successor: &City) -> u32 {
        state
            .neighbours()
            .into_iter()
            .find_map(|(city, km)| (city == *successor).then_some(km))
            .unwrap_or(u32::MAX)
    }
}

/// Straight-line distance to Bucharest, as a plain function for
/// [`HeuristicFn`](lodestar_search::HeuristicFn).
#[must_use]
pub fn sld(city: &City) -> u32 {
    city.sld_to_bucharest()
}
