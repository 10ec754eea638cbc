use serde::{Deserialize, Serialize};

use crate::model::{engine::SurfaceElo, structures::surface::Surface};

/// Serving-side answer for a pairwise prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub winner: String,
    /// `max(p, 1 - p)`, always in (0.5, 1.0]
    pub confidence: f64,
    pub surface_used: Surface,
    /// True when neither player has any processed history, i.e. the engine
    /// had no information and the answer is the cold-start prior. Callers
    /// can surface this instead of presenting a coin flip as a verdict.
    pub cold_start: bool
}

/// Predicts the winner of `player_a` vs `player_b` on the given surface
/// from the engine's current rating state.
///
/// The winner is whichever side the blended-rating probability favors; an
/// exact 0.5 tie goes to `player_a`. Unknown players are rated at the
/// initial rating rather than rejected, with `cold_start` flagging the
/// no-information case.
pub fn predict_match(engine: &SurfaceElo, player_a: &str, player_b: &str, surface: Surface) -> Prediction {
    let cold_start = !engine.knows_player(player_a) && !engine.knows_player(player_b);
    let p = engine.predict_probability(player_a, player_b, surface.label());

    let (winner, confidence) = if p >= 0.5 {
        (player_a.to_string(), p)
    } else {
        (player_b.to_string(), 1.0 - p)
    };

    Prediction {
        winner,
        confidence,
        surface_used: surface,
        cold_start
    }
}
