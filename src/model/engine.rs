use crate::model::{
    config::EloConfig,
    rating_store::RatingStore
};

/// A surface-aware Elo engine.
///
/// Each player carries a global rating plus one rating per surface. The
/// effective strength on a given surface is the blend
/// `surface_rating + surface_weight * global_rating`, and the gap between
/// two players' blends drives a logistic win probability.
pub struct SurfaceElo {
    pub config: EloConfig,
    store: RatingStore
}

impl SurfaceElo {
    pub fn new(config: EloConfig) -> SurfaceElo {
        let store = RatingStore::new(config.init_rating);
        SurfaceElo { config, store }
    }

    /// Current (global, surface) ratings for a player. Unseen players and
    /// surfaces read as the initial rating; no state is touched.
    pub fn get_ratings(&self, player: &str, surface: &str) -> (f64, f64) {
        self.store.get(player, surface)
    }

    /// True if the player has any processed match history.
    pub fn knows_player(&self, player: &str) -> bool {
        self.store.contains(player)
    }

    pub fn player_count(&self) -> usize {
        self.store.player_count()
    }

    /// Probability that `player_a` beats `player_b` on `surface`, from the
    /// current ratings. Read-only. Symmetric by construction:
    /// `predict_probability(a, b, s) + predict_probability(b, a, s) == 1`.
    pub fn predict_probability(&self, player_a: &str, player_b: &str, surface: &str) -> f64 {
        self.probability_from_delta(self.blend_delta(player_a, player_b, surface))
    }

    /// # Match processing
    ///
    /// The heart of the model. For one match, in order:
    /// 1. Substitute the configured unknown-surface label if the record has
    ///    no usable surface.
    /// 2. Compute the blended rating gap and win probability from the
    ///    current (pre-update) ratings.
    /// 3. Move all four touched rating cells by the outcome surprise:
    ///    `update_gain * (outcome - probability)` for the winner's side,
    ///    mirrored for the loser's.
    ///
    /// A player's global and surface ratings receive the same adjustment on
    /// any single match; surface-specific skill only emerges from an uneven
    /// distribution of matches across surfaces, not from a per-surface
    /// learning rate. That coupling is a deliberate modeling choice to
    /// revisit together with the tuned hyperparameters.
    ///
    /// Returns the pre-update `(delta, probability)` for annotation and
    /// evaluation.
    pub fn process_match(&mut self, player_a: &str, player_b: &str, surface: &str, outcome: u8) -> (f64, f64) {
        let surface = self.resolve_surface(surface);

        let (global_a, surface_a) = self.store.get(player_a, &surface);
        let (global_b, surface_b) = self.store.get(player_b, &surface);

        let blend_a = surface_a + self.config.surface_weight * global_a;
        let blend_b = surface_b + self.config.surface_weight * global_b;
        let delta = blend_a - blend_b;

        let probability = self.probability_from_delta(delta);

        let y = outcome as f64;
        let adjustment = self.config.update_gain * (y - probability);

        self.store
            .set(player_a, &surface, global_a + adjustment, surface_a + adjustment);
        self.store
            .set(player_b, &surface, global_b - adjustment, surface_b - adjustment);

        (delta, probability)
    }

    fn blend_delta(&self, player_a: &str, player_b: &str, surface: &str) -> f64 {
        let (global_a, surface_a) = self.store.get(player_a, surface);
        let (global_b, surface_b) = self.store.get(player_b, surface);

        (surface_a + self.config.surface_weight * global_a) - (surface_b + self.config.surface_weight * global_b)
    }

    /// Logistic curve `1 / (1 + exp(-slope * delta))`, branched on the sign
    /// of the exponent so the exponential never overflows for extreme gaps.
    fn probability_from_delta(&self, delta: f64) -> f64 {
        let x = self.config.slope * delta;
        if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        }
    }

    fn resolve_surface(&self, surface: &str) -> String {
        if surface.trim().is_empty() {
            self.config.unknown_surface.clone()
        } else {
            surface.to_string()
        }
    }
}
