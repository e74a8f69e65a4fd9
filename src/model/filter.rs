use std::fmt;

use serde::{Deserialize, Serialize};

use super::todo::Todo;

/// Which subset of todos is displayed. Addressed by a route fragment
/// (`#/`, `#/active`, `#/completed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a route fragment. Anything unrecognized selects `All`.
    pub fn from_fragment(fragment: &str) -> Filter {
        let name = fragment.trim();
        let name = name.strip_prefix('#').unwrap_or(name);
        let name = name.strip_prefix('/').unwrap_or(name);
        match name {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// The canonical fragment for this filter
    pub fn fragment(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    /// Next filter in display order (wraps)
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Previous filter in display order (wraps)
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fragments() {
        assert_eq!(Filter::from_fragment("#/active"), Filter::Active);
        assert_eq!(Filter::from_fragment("#/completed"), Filter::Completed);
        assert_eq!(Filter::from_fragment("#/"), Filter::All);
        assert_eq!(Filter::from_fragment(""), Filter::All);
    }

    #[test]
    fn parses_short_forms() {
        assert_eq!(Filter::from_fragment("active"), Filter::Active);
        assert_eq!(Filter::from_fragment("/completed"), Filter::Completed);
    }

    #[test]
    fn unknown_fragment_is_all() {
        assert_eq!(Filter::from_fragment("#/bogus"), Filter::All);
        assert_eq!(Filter::from_fragment("#/Active"), Filter::All);
    }

    #[test]
    fn fragment_round_trips() {
        for f in Filter::ALL {
            assert_eq!(Filter::from_fragment(f.fragment()), f);
        }
    }

    #[test]
    fn next_and_prev_cycle() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Completed.next(), Filter::All);
        assert_eq!(Filter::All.prev(), Filter::Completed);
        for f in Filter::ALL {
            assert_eq!(f.next().prev(), f);
        }
    }

    #[test]
    fn matches_by_completion() {
        let mut todo = Todo::new("a".into(), "t".into());
        assert!(Filter::All.matches(&todo));
        assert!(Filter::Active.matches(&todo));
        assert!(!Filter::Completed.matches(&todo));
        todo.completed = true;
        assert!(!Filter::Active.matches(&todo));
        assert!(Filter::Completed.matches(&todo));
    }
}
