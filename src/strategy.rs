use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The algorithm used to place the queens.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Depth-first search over a fixed-size board.
    #[default]
    Backtracking,
    /// Depth-first constraint search over a growable list of placements.
    Csp,
    /// Evolutionary search, which may give up on solvable boards.
    Genetic,
}

impl Strategy {
    /// All strategies, in the order they are presented to users.
    pub const ALL: [Strategy; 3] = [Strategy::Backtracking, Strategy::Csp, Strategy::Genetic];

    /// Return the name used to select this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Backtracking => "backtracking",
            Strategy::Csp => "csp",
            Strategy::Genetic => "genetic",
        }
    }

    /// Return true if the strategy always finds a solution when one exists.
    pub fn is_complete(self) -> bool {
        !matches!(self, Strategy::Genetic)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("backtracking".parse::<Strategy>().unwrap(), Strategy::Backtracking);
        assert_eq!("CSP".parse::<Strategy>().unwrap(), Strategy::Csp);
        assert_eq!(" genetic ".parse::<Strategy>().unwrap(), Strategy::Genetic);
    }

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn only_genetic_search_is_incomplete() {
        assert!(Strategy::Backtracking.is_complete());
        assert!(Strategy::Csp.is_complete());
        assert!(!Strategy::Genetic.is_complete());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "simulated-annealing".parse::<Strategy>().unwrap_err();

        assert!(matches!(err, Error::UnknownStrategy(ref name) if name == "simulated-annealing"));
        assert_eq!(
            err.to_string(),
            "unknown strategy `simulated-annealing`, expected one of: backtracking, csp, genetic"
        );
    }
}
