// Model constants
pub const DEFAULT_UPDATE_GAIN: f64 = 32.0;
pub const DEFAULT_SLOPE: f64 = 0.004;
pub const DEFAULT_SURFACE_WEIGHT: f64 = 0.40;
pub const DEFAULT_INIT_RATING: f64 = 1500.0;
pub const UNKNOWN_SURFACE: &str = "Unknown";
// Clamp applied to probabilities before taking logs
pub const PROBABILITY_EPSILON: f64 = 1e-6;
// Inclusive year bounds of the default tuning validation window
pub const VALIDATION_YEAR_FROM: i32 = 2021;
pub const VALIDATION_YEAR_TO: i32 = 2023;
// Default tuning grids
pub const GRID_UPDATE_GAIN: [f64; 4] = [16.0, 24.0, 32.0, 48.0];
pub const GRID_SLOPE: [f64; 4] = [0.003, 0.004, 0.005, 0.006];
pub const GRID_SURFACE_WEIGHT: [f64; 4] = [0.1, 0.2, 0.3, 0.4];
