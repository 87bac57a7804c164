//! Run configuration: which strategy to run and how to break ties.
//!
//! Every option parses from the lowercase names the CLI accepts, so the same
//! strings work on the command line, in tests and in reports.

use std::fmt;
use std::str::FromStr;

/// Search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Best-first with closed set and decrease-key.
    #[default]
    Graph,
    /// Best-first without duplicate detection.
    Tree,
    /// Recursive best-first search.
    Rbfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Graph, Algorithm::Tree, Algorithm::Rbfs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Graph => "graph",
            Algorithm::Tree => "tree",
            Algorithm::Rbfs => "rbfs",
        }
    }
}

/// Tie policy applied between frontier entries with equal `f`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Generation order only.
    #[default]
    None,
    /// Lower heuristic value first.
    LowH,
    /// Lower heuristic value, then lower state.
    LowHTotal,
}

impl TieBreak {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::None => "none",
            TieBreak::LowH => "low-h",
            TieBreak::LowHTotal => "low-h-total",
        }
    }
}

/// Heuristic selection for worlds that offer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    /// `h = 0` (uniform-cost search).
    Zero,
    /// The world's own admissible estimate.
    #[default]
    Native,
}

impl HeuristicKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::Native => "native",
        }
    }
}

/// Unrecognised option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ConfigError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graph" | "graph-search" => Ok(Algorithm::Graph),
            "tree" | "tree-search" => Ok(Algorithm::Tree),
            "rbfs" => Ok(Algorithm::Rbfs),
            _ => Err(ConfigError {
                kind: "algorithm",
                value: s.to_string(),
                expected: "graph, tree, rbfs",
            }),
        }
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "none" => Ok(TieBreak::None),
            "low-h" | "lowh" => Ok(TieBreak::LowH),
            "low-h-total" | "lowhtotal" => Ok(TieBreak::LowHTotal),
            _ => Err(ConfigError {
                kind: "tie-break",
                value: s.to_string(),
                expected: "none, low-h, low-h-total",
            }),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(HeuristicKind::Zero),
            "native" | "sld" => Ok(HeuristicKind::Native),
            _ => Err(ConfigError {
                kind: "heuristic",
                value: s.to_string(),
                expected: "zero, native (sld)",
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the runner needs besides the problem and heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub tie_break: TieBreak,
    /// Record a full event trace and report its digest.
    pub trace: bool,
}

impl RunConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "tie_break": self.tie_break.as_str(),
            "trace": self.trace,
        })
    }
}
