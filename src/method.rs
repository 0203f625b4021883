use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{northwest, russell, vogel, Problem, Solution, Unit};

/// Heuristic used to build an initial allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[serde(alias = "nwc")]
    #[cfg_attr(feature = "cli", value(alias = "nwc"))]
    NorthWestCorner,
    #[serde(alias = "vam")]
    #[cfg_attr(feature = "cli", value(alias = "vam"))]
    Vogel,
    #[serde(alias = "ram")]
    #[cfg_attr(feature = "cli", value(alias = "ram"))]
    Russell,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::NorthWestCorner, Method::Vogel, Method::Russell];

    pub fn solve<T: Unit>(self, problem: &Problem<T>) -> Solution<T> {
        match self {
            Method::NorthWestCorner => northwest::solve(problem),
            Method::Vogel => vogel::solve(problem),
            Method::Russell => russell::solve(problem),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::NorthWestCorner => "North-West Corner method",
            Method::Vogel => "Vogel's approximation",
            Method::Russell => "Russell's approximation",
        })
    }
}
