use std::collections::HashMap;

/// Canonical form of a competitor name: surrounding whitespace trimmed and
/// internal runs of whitespace collapsed to single spaces.
///
/// Every public entry point of the store and engine goes through this, so the
/// same player under slightly different string forms never splits into two
/// rating rows.
pub fn canonical_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Owns all mutable rating state: one global rating per player and one
/// rating per (player, surface) pair.
///
/// Both maps only grow. Absent keys read as `init_rating`, which is the
/// cold-start policy for players and surfaces never seen before.
pub struct RatingStore {
    init_rating: f64,
    global: HashMap<String, f64>,
    surface: HashMap<(String, String), f64>
}

impl RatingStore {
    pub fn new(init_rating: f64) -> RatingStore {
        RatingStore {
            init_rating,
            global: HashMap::new(),
            surface: HashMap::new()
        }
    }

    /// Returns the current (global, surface) ratings for the player.
    /// Pure lookup, unseen keys fall back to the initial rating.
    pub fn get(&self, player: &str, surface: &str) -> (f64, f64) {
        let player = canonical_name(player);
        let g = self.global.get(&player).copied().unwrap_or(self.init_rating);
        let s = self
            .surface
            .get(&(player, surface.to_string()))
            .copied()
            .unwrap_or(self.init_rating);

        (g, s)
    }

    /// Overwrites both rating cells for the player on the given surface.
    pub fn set(&mut self, player: &str, surface: &str, global: f64, surface_rating: f64) {
        let player = canonical_name(player);
        self.global.insert(player.clone(), global);
        self.surface.insert((player, surface.to_string()), surface_rating);
    }

    /// True if the player has at least one processed match on any surface.
    pub fn contains(&self, player: &str) -> bool {
        self.global.contains_key(&canonical_name(player))
    }

    /// Number of players with at least one processed match.
    pub fn player_count(&self) -> usize {
        self.global.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unseen_player_reads_init_rating() {
        let store = RatingStore::new(1500.0);
        let (g, s) = store.get("Nobody Yet", "Clay");

        assert_abs_diff_eq!(g, 1500.0);
        assert_abs_diff_eq!(s, 1500.0);
        assert!(!store.contains("Nobody Yet"));
    }

    #[test]
    fn test_set_then_get() {
        let mut store = RatingStore::new(1500.0);
        store.set("Ann Kim", "Hard", 1520.0, 1510.0);

        let (g, s) = store.get("Ann Kim", "Hard");
        assert_abs_diff_eq!(g, 1520.0);
        assert_abs_diff_eq!(s, 1510.0);

        // Same player, different surface: global carries over, surface is fresh
        let (g, s) = store.get("Ann Kim", "Grass");
        assert_abs_diff_eq!(g, 1520.0);
        assert_abs_diff_eq!(s, 1500.0);
    }

    #[test]
    fn test_name_forms_share_one_entry() {
        let mut store = RatingStore::new(1500.0);
        store.set("  Ann   Kim ", "Hard", 1520.0, 1510.0);

        let (g, s) = store.get("Ann Kim", "Hard");
        assert_abs_diff_eq!(g, 1520.0);
        assert_abs_diff_eq!(s, 1510.0);
        assert_eq!(store.player_count(), 1);
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name(" Ann  Kim "), "Ann Kim");
        assert_eq!(canonical_name("Ann Kim"), "Ann Kim");
        assert_eq!(canonical_name(""), "");
    }
}
