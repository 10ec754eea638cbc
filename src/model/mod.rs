//! The surface-aware Elo rating model.
//!
//! A match history flows through here in chronological order:
//! [`config::EloConfig`] parameterizes a [`engine::SurfaceElo`] (which owns
//! a [`rating_store::RatingStore`]), [`annotate`] replays the history
//! through it, and [`evaluate`] / [`tuning`] score the result and pick the
//! best configuration. [`predict`] serves pairwise predictions from the
//! final rating state.

pub mod annotate;
pub mod config;
pub mod constants;
pub mod engine;
pub mod evaluate;
pub mod predict;
pub mod rating_store;
pub mod structures;
pub mod tuning;
