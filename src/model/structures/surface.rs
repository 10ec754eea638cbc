use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The fixed surface vocabulary used at the serving boundary.
///
/// Training-time ingestion keeps surfaces as free-form labels (with the
/// engine's unknown-surface sentinel for missing ones); prediction requests
/// instead normalize case-insensitively into this vocabulary, falling back
/// to [`Surface::Hard`] for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Surface {
    Hard,
    Clay,
    Grass
}

impl Surface {
    /// Case-insensitive normalization with the documented Hard fallback.
    pub fn normalize(input: &str) -> Surface {
        match input.trim().to_lowercase().as_str() {
            "clay" => Surface::Clay,
            "grass" => Surface::Grass,
            _ => Surface::Hard
        }
    }

    /// The label used in the match history for this surface.
    pub fn label(&self) -> &'static str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass"
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_normalize_hard() {
        assert_eq!(Surface::normalize("hard"), Surface::Hard);
        assert_eq!(Surface::normalize("HARD"), Surface::Hard);
    }

    #[test]
    fn test_normalize_clay() {
        assert_eq!(Surface::normalize("Clay"), Surface::Clay);
        assert_eq!(Surface::normalize(" clay "), Surface::Clay);
    }

    #[test]
    fn test_normalize_grass() {
        assert_eq!(Surface::normalize("gRaSs"), Surface::Grass);
    }

    #[test]
    fn test_normalize_unrecognized_falls_back_to_hard() {
        assert_eq!(Surface::normalize("carpet"), Surface::Hard);
        assert_eq!(Surface::normalize(""), Surface::Hard);
    }

    #[test]
    fn test_enumerate() {
        let surfaces = Surface::iter().collect::<Vec<_>>();
        assert_eq!(surfaces, vec![Surface::Hard, Surface::Clay, Surface::Grass]);
    }

    #[test]
    fn test_label_round_trip() {
        for surface in Surface::iter() {
            assert_eq!(Surface::normalize(surface.label()), surface);
        }
    }
}
