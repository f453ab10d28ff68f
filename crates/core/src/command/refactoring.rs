use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Alias refactorings understood by the refactoring tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refactoring {
    ConsolidateAliases,
    ExpandAliases,
    SortAliases,
}

impl Refactoring {
    pub const ALL: [Refactoring; 3] = [
        Refactoring::ConsolidateAliases,
        Refactoring::ExpandAliases,
        Refactoring::SortAliases,
    ];

    /// The subcommand name passed to the refactoring tool.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Refactoring::ConsolidateAliases => "consolidate_aliases",
            Refactoring::ExpandAliases => "expand_aliases",
            Refactoring::SortAliases => "sort_aliases",
        }
    }
}

impl fmt::Display for Refactoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

impl FromStr for Refactoring {
    type Err = Error;

    /// Accepts both `sort_aliases` and `sort-aliases`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('-', "_");
        Refactoring::ALL
            .into_iter()
            .find(|r| r.tool_name() == normalized)
            .ok_or_else(|| Error::UnknownRefactoring(s.to_string()))
    }
}
