use serde::{Deserialize, Serialize};

use crate::{
    model::{engine::SurfaceElo, structures::match_record::MatchRecord},
    utils::progress_utils::progress_bar
};

/// Per-match engine output collected during a replay: the blended rating
/// gap and the win probability as they stood before the match updated any
/// ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub delta: f64,
    pub probability: f64
}

/// Replays a chronologically sorted match table through the engine,
/// producing one [`Annotation`] per record.
///
/// This is a strict left fold: records are processed one at a time in table
/// order, because every update feeds the ratings read by the next record.
/// Output length always equals input length.
pub fn annotate(engine: &mut SurfaceElo, records: &[MatchRecord]) -> Vec<Annotation> {
    annotate_inner(engine, records, true)
}

/// Same replay without a progress bar, for tuning runs where one bar per
/// grid point would be noise.
pub fn annotate_quiet(engine: &mut SurfaceElo, records: &[MatchRecord]) -> Vec<Annotation> {
    annotate_inner(engine, records, false)
}

fn annotate_inner(engine: &mut SurfaceElo, records: &[MatchRecord], with_progress: bool) -> Vec<Annotation> {
    let bar = with_progress.then(|| progress_bar(records.len() as u64, "Replaying match history".to_string()));
    let mut annotations = Vec::with_capacity(records.len());

    for record in records {
        let (delta, probability) =
            engine.process_match(&record.player_a, &record.player_b, record.surface_label(), record.outcome);

        annotations.push(Annotation { delta, probability });

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish();
    }

    annotations
}
