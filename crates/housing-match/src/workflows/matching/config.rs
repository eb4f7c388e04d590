use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: usize = 3;

/// Ranking knobs shared by the CLI and the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub top_n: usize,
}

impl MatchingConfig {
    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}
