use chrono::Datelike;
use itertools::iproduct;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    model::{
        annotate::annotate_quiet,
        config::EloConfig,
        constants::{GRID_SLOPE, GRID_SURFACE_WEIGHT, GRID_UPDATE_GAIN},
        engine::SurfaceElo,
        evaluate::{evaluate, EvaluateError},
        structures::match_record::{sort_chronologically, MatchRecord}
    },
    utils::progress_utils::progress_bar
};

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("Hyperparameter grid is empty")]
    EmptyGrid,

    #[error("No matches fall inside the validation window {from}..={to}")]
    EmptyValidationWindow { from: i32, to: i32 },

    #[error(transparent)]
    Evaluate(#[from] EvaluateError)
}

/// Hyperparameter grids searched exhaustively by [`tune`].
#[derive(Debug, Clone)]
pub struct TuningGrid {
    pub update_gain: Vec<f64>,
    pub slope: Vec<f64>,
    pub surface_weight: Vec<f64>
}

impl Default for TuningGrid {
    fn default() -> Self {
        TuningGrid {
            update_gain: GRID_UPDATE_GAIN.to_vec(),
            slope: GRID_SLOPE.to_vec(),
            surface_weight: GRID_SURFACE_WEIGHT.to_vec()
        }
    }
}

/// Best configuration found by a tuning run and its validation score.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningResult {
    pub config: EloConfig,
    pub val_logloss: f64
}

impl TuningResult {
    /// Single-line serialization with the validation score appended for
    /// provenance; parseable back via [`EloConfig::from_line`].
    pub fn to_line(&self) -> String {
        format!("{}, val_logloss={:.6}", self.config.to_line(), self.val_logloss)
    }
}

/// Exhaustive grid search over the Cartesian product of the three grids.
///
/// Every combination gets a fresh engine and a replay of the ENTIRE
/// chronologically sorted history (ratings must reflect all prior matches,
/// not just the validation window); only records whose match year falls in
/// the inclusive `year_from..=year_to` window are scored, with the
/// label-balanced log-loss from [`evaluate`].
///
/// Grid points are independent, so they are evaluated in parallel. The
/// winner is the minimum log-loss; ties keep the first combination in
/// enumeration order (update gain outermost, then slope, then surface
/// weight), which the sequential scan over the ordered score vector
/// guarantees regardless of thread scheduling.
pub fn tune(
    records: &[MatchRecord],
    grid: &TuningGrid,
    year_from: i32,
    year_to: i32
) -> Result<TuningResult, TuningError> {
    if grid.update_gain.is_empty() || grid.slope.is_empty() || grid.surface_weight.is_empty() {
        return Err(TuningError::EmptyGrid);
    }

    let mut history = records.to_vec();
    sort_chronologically(&mut history);

    let validation_indices: Vec<usize> = history
        .iter()
        .enumerate()
        .filter(|(_, r)| r.date.year() >= year_from && r.date.year() <= year_to)
        .map(|(i, _)| i)
        .collect();

    if validation_indices.is_empty() {
        return Err(TuningError::EmptyValidationWindow {
            from: year_from,
            to: year_to
        });
    }

    let validation_outcomes: Vec<u8> = validation_indices.iter().map(|&i| history[i].outcome).collect();

    let combinations: Vec<(f64, f64, f64)> = iproduct!(
        grid.update_gain.iter().copied(),
        grid.slope.iter().copied(),
        grid.surface_weight.iter().copied()
    )
    .collect();

    let bar = progress_bar(combinations.len() as u64, "Tuning hyperparameters".to_string());

    let scores: Result<Vec<f64>, TuningError> = combinations
        .par_iter()
        .map(|&(update_gain, slope, surface_weight)| {
            let mut engine = SurfaceElo::new(EloConfig::new(update_gain, slope, surface_weight));
            let annotations = annotate_quiet(&mut engine, &history);

            let validation_probabilities: Vec<f64> =
                validation_indices.iter().map(|&i| annotations[i].probability).collect();

            let report = evaluate(&validation_outcomes, &validation_probabilities)?;

            debug!(
                update_gain,
                slope,
                surface_weight,
                log_loss = report.log_loss,
                "Scored grid point"
            );
            bar.inc(1);

            Ok(report.log_loss)
        })
        .collect();
    let scores = scores?;
    bar.finish();

    // Sequential scan keeps the first-seen combination on ties
    let mut best_index = 0;
    for (index, &score) in scores.iter().enumerate() {
        if score < scores[best_index] {
            best_index = index;
        }
    }

    let (update_gain, slope, surface_weight) = combinations[best_index];
    let result = TuningResult {
        config: EloConfig::new(update_gain, slope, surface_weight),
        val_logloss: scores[best_index]
    };

    info!(
        update_gain,
        slope,
        surface_weight,
        val_logloss = result.val_logloss,
        "Best configuration"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::constants::{VALIDATION_YEAR_FROM, VALIDATION_YEAR_TO},
        utils::test_utils::generate_match_history
    };
    use approx::assert_abs_diff_eq;

    fn small_grid() -> TuningGrid {
        TuningGrid {
            update_gain: vec![16.0, 32.0],
            slope: vec![0.003, 0.005],
            surface_weight: vec![0.2, 0.4]
        }
    }

    #[test]
    fn test_tune_is_deterministic() {
        let records = generate_match_history(20, 6, VALIDATION_YEAR_FROM);
        let grid = small_grid();

        let first = tune(&records, &grid, VALIDATION_YEAR_FROM, VALIDATION_YEAR_TO).unwrap();
        let second = tune(&records, &grid, VALIDATION_YEAR_FROM, VALIDATION_YEAR_TO).unwrap();

        assert_abs_diff_eq!(first.config.update_gain, second.config.update_gain);
        assert_abs_diff_eq!(first.config.slope, second.config.slope);
        assert_abs_diff_eq!(first.config.surface_weight, second.config.surface_weight);
        assert_eq!(first.val_logloss.to_bits(), second.val_logloss.to_bits());
    }

    #[test]
    fn test_tune_unsorted_input_matches_sorted() {
        let records = generate_match_history(20, 6, VALIDATION_YEAR_FROM);
        let mut shuffled = records.clone();
        shuffled.reverse();

        let grid = small_grid();
        let from_sorted = tune(&records, &grid, VALIDATION_YEAR_FROM, VALIDATION_YEAR_TO).unwrap();
        let from_shuffled = tune(&shuffled, &grid, VALIDATION_YEAR_FROM, VALIDATION_YEAR_TO).unwrap();

        assert_eq!(from_sorted.val_logloss.to_bits(), from_shuffled.val_logloss.to_bits());
    }

    #[test]
    fn test_empty_validation_window_is_an_error() {
        let records = generate_match_history(10, 4, 2015);
        let result = tune(&records, &small_grid(), 2021, 2023);

        assert_eq!(result, Err(TuningError::EmptyValidationWindow { from: 2021, to: 2023 }));
    }

    #[test]
    fn test_empty_grid_is_an_error() {
        let records = generate_match_history(10, 4, VALIDATION_YEAR_FROM);
        let grid = TuningGrid {
            update_gain: vec![],
            ..small_grid()
        };

        assert_eq!(
            tune(&records, &grid, VALIDATION_YEAR_FROM, VALIDATION_YEAR_TO),
            Err(TuningError::EmptyGrid)
        );
    }

    #[test]
    fn test_result_line_is_parseable() {
        let records = generate_match_history(20, 6, VALIDATION_YEAR_FROM);
        let result = tune(&records, &small_grid(), VALIDATION_YEAR_FROM, VALIDATION_YEAR_TO).unwrap();

        let parsed = EloConfig::from_line(&result.to_line()).unwrap();
        assert_abs_diff_eq!(parsed.update_gain, result.config.update_gain);
        assert_abs_diff_eq!(parsed.slope, result.config.slope);
        assert_abs_diff_eq!(parsed.surface_weight, result.config.surface_weight);
    }
}
