use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::constants::PROBABILITY_EPSILON;

#[derive(Debug, Error, PartialEq)]
pub enum EvaluateError {
    #[error("Outcome and probability sequences differ in length ({outcomes} vs {probabilities})")]
    LengthMismatch { outcomes: usize, probabilities: usize },

    #[error("Nothing to evaluate")]
    Empty
}

/// Prediction-quality metrics over a label-balanced match table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub log_loss: f64,
    pub brier: f64,
    pub accuracy: f64,
    /// Number of scored rows after mirroring (twice the input length)
    pub n: usize
}

/// Scores predicted win probabilities against true outcomes.
///
/// Every stored match has the winner on the A side, so the raw table is all
/// `y = 1` and scoring it directly yields a biased metric. Each record is
/// therefore mirrored (players swapped, outcome flipped, probability
/// complemented) before computing log-loss, Brier score, and accuracy, so
/// the scored set is label-balanced by construction.
pub fn evaluate(outcomes: &[u8], probabilities: &[f64]) -> Result<EvalReport, EvaluateError> {
    if outcomes.len() != probabilities.len() {
        return Err(EvaluateError::LengthMismatch {
            outcomes: outcomes.len(),
            probabilities: probabilities.len()
        });
    }
    if outcomes.is_empty() {
        return Err(EvaluateError::Empty);
    }

    let mut log_loss_sum = 0.0;
    let mut brier_sum = 0.0;
    let mut correct = 0usize;

    let mut score = |y: f64, p: f64| {
        let p_clamped = p.clamp(PROBABILITY_EPSILON, 1.0 - PROBABILITY_EPSILON);
        log_loss_sum -= y * p_clamped.ln() + (1.0 - y) * (1.0 - p_clamped).ln();
        brier_sum += (p - y) * (p - y);
        if (p > 0.5) == (y == 1.0) {
            correct += 1;
        }
    };

    for (&outcome, &p) in outcomes.iter().zip(probabilities) {
        let y = outcome as f64;
        score(y, p);
        // Mirrored record: perspective swapped
        score(1.0 - y, 1.0 - p);
    }

    let n = outcomes.len() * 2;
    Ok(EvalReport {
        log_loss: log_loss_sum / n as f64,
        brier: brier_sum / n as f64,
        accuracy: correct as f64 / n as f64,
        n
    })
}
