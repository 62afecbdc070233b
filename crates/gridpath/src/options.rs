use crate::movement::Movement;

/// Per-query search settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Movement model used to enumerate neighbours.
    pub movement: Movement,
    /// Maximum number of cells to expand before giving up.
    /// `None` lets the search run until the open set is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchOptions {
    /// Options for the given "allow diagonals" flag, with no expansion ceiling.
    pub fn new(allow_diagonals: bool) -> Self {
        Self {
            movement: Movement::from_diagonals(allow_diagonals),
            max_expansions: None,
        }
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_diagonals(self, allow_diagonals: bool) -> Self {
        self.with_movement(Movement::from_diagonals(allow_diagonals))
    }

    /// Cap the number of expanded cells.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = SearchOptions::default();
        assert_eq!(o.movement, Movement::Octile);
        assert_eq!(o.max_expansions, None);
        assert_eq!(SearchOptions::new(true), o);
    }

    #[test]
    fn builders() {
        let o = SearchOptions::new(true)
            .with_diagonals(false)
            .with_max_expansions(10);
        assert_eq!(o.movement, Movement::Cardinal);
        assert_eq!(o.max_expansions, Some(10));
        assert_eq!(
            o.with_movement(Movement::Octile).movement,
            Movement::Octile
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let o: SearchOptions = serde_json::from_str(r#"{"movement":"cardinal"}"#).unwrap();
        assert_eq!(o.movement, Movement::Cardinal);
        assert_eq!(o.max_expansions, None);

        let o: SearchOptions = serde_json::from_str(r#"{"max_expansions":64}"#).unwrap();
        assert_eq!(o.movement, Movement::Octile);
        assert_eq!(o.max_expansions, Some(64));
    }

    #[test]
    fn round_trip() {
        let o = SearchOptions::new(false).with_max_expansions(3);
        let json = serde_json::to_string(&o).unwrap();
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }
}
