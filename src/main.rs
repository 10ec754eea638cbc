use std::{error::Error, fs, path::Path};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ter_processor::{
    args::{Args, Command},
    model::{
        annotate::annotate,
        config::EloConfig,
        engine::SurfaceElo,
        evaluate::evaluate,
        predict::predict_match,
        structures::{
            match_record::{sort_chronologically, MatchRecord},
            surface::Surface
        },
        tuning::{tune, TuningGrid}
    }
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    match args.command {
        Command::Annotate { matches, out, config } => {
            let records = load_matches(&matches)?;
            let mut engine = SurfaceElo::new(load_config(config.as_deref())?);

            let annotations = annotate(&mut engine, &records);

            let mut lines = String::new();
            for annotation in &annotations {
                lines.push_str(&serde_json::to_string(annotation)?);
                lines.push('\n');
            }
            fs::write(&out, lines)?;

            info!(
                matches = records.len(),
                players = engine.player_count(),
                out = %out.display(),
                "Annotated match history"
            );
        }
        Command::Evaluate { matches, config } => {
            let records = load_matches(&matches)?;
            let mut engine = SurfaceElo::new(load_config(config.as_deref())?);

            let annotations = annotate(&mut engine, &records);
            let outcomes: Vec<u8> = records.iter().map(|r| r.outcome).collect();
            let probabilities: Vec<f64> = annotations.iter().map(|a| a.probability).collect();

            let report = evaluate(&outcomes, &probabilities)?;
            println!(
                "log_loss={:.6} brier={:.6} accuracy={:.4} n={}",
                report.log_loss, report.brier, report.accuracy, report.n
            );
        }
        Command::Tune {
            matches,
            out,
            from_year,
            to_year
        } => {
            let records = load_matches(&matches)?;
            let result = tune(&records, &TuningGrid::default(), from_year, to_year)?;

            fs::write(&out, format!("{}\n", result.to_line()))?;
            println!("{}", result.to_line());
        }
        Command::Predict {
            matches,
            config,
            player_a,
            player_b,
            surface
        } => {
            let records = load_matches(&matches)?;
            let mut engine = SurfaceElo::new(load_config(Some(config.as_path()))?);

            // Current ratings are the state after the full history
            annotate(&mut engine, &records);

            let prediction = predict_match(&engine, &player_a, &player_b, Surface::normalize(&surface));
            println!(
                "{} wins with confidence {:.3} on {}{}",
                prediction.winner,
                prediction.confidence,
                prediction.surface_used,
                if prediction.cold_start { " (cold start)" } else { "" }
            );
        }
    }

    Ok(())
}

/// Loads the JSONL match history and sorts it chronologically.
fn load_matches(path: &Path) -> Result<Vec<MatchRecord>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;

    let mut records = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: MatchRecord = serde_json::from_str(line)
            .map_err(|e| format!("{}:{}: {}", path.display(), number + 1, e))?;
        records.push(record);
    }

    sort_chronologically(&mut records);
    info!(matches = records.len(), path = %path.display(), "Loaded match history");

    Ok(records)
}

/// Reads a configuration line from disk, or falls back to defaults when no
/// path was given. A present-but-malformed file is always an error.
fn load_config(path: Option<&Path>) -> Result<EloConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let line = fs::read_to_string(path)?;
            Ok(EloConfig::from_line(&line)?)
        }
        None => Ok(EloConfig::default())
    }
}
