//! Per-cell instructions for the base generator

use std::fmt;

/// How the base generator decides a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellPolicy {
    /// Cell is always `true`
    AlwaysFilled,
    /// Cell is always `false`
    AlwaysEmpty,
    /// Cell is decided by one Bernoulli draw from the seeded stream
    #[default]
    Varied,
}

impl CellPolicy {
    /// Whether deciding this cell consumes a draw from the random stream
    pub const fn is_varied(self) -> bool {
        matches!(self, Self::Varied)
    }
}

impl fmt::Display for CellPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AlwaysFilled => "always filled",
            Self::AlwaysEmpty => "always empty",
            Self::Varied => "varied",
        };
        f.write_str(name)
    }
}
