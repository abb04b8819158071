//! # Choice
//!
//! The two fixed answers a prompt can produce.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

/// One of the two selectable answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    /// Both choices in display order.
    pub const ALL: [Self; 2] = [Self::Yes, Self::No];

    /// Title shown as the list entry.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// One-line description shown under the title and in the help line.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Yes => "Approve the process",
            Self::No => "Reject the process",
        }
    }

    /// Machine-readable answer printed to stdout.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Checks whether the title or description contains `query` (case-insensitive).
    pub fn matches(self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title().to_lowercase().contains(&query)
            || self.description().to_lowercase().contains(&query)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_yes_then_no() {
        assert_eq!(Choice::ALL, [Choice::Yes, Choice::No]);
        assert_eq!(Choice::ALL[0].title(), "Yes");
        assert_eq!(Choice::ALL[1].title(), "No");
    }

    #[test]
    fn test_matches_title_and_description() {
        assert!(Choice::Yes.matches("ye"));
        assert!(Choice::Yes.matches("APPROVE"));
        assert!(Choice::No.matches("reject"));
        assert!(!Choice::No.matches("approve"));
        assert!(Choice::No.matches(""));
    }

    #[test]
    fn test_display_is_lowercase_answer() {
        assert_eq!(Choice::Yes.to_string(), "yes");
        assert_eq!(Choice::No.to_string(), "no");
    }
}
