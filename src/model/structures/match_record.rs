use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the normalized match history produced by the upstream ETL.
///
/// `player_a` is always the historical winner (`outcome` is 1 on every
/// stored row); evaluation undoes that asymmetry by mirroring records.
/// Rows must already be restricted to the desired competitive tiers;
/// records missing a date or a player name fail deserialization outright,
/// since skipping a row mid-sequence would desynchronize the chronology.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub player_a: String,
    pub player_b: String,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(rename = "y")]
    pub outcome: u8
}

impl MatchRecord {
    /// Surface label as fed to the engine; absent surfaces become the empty
    /// string so the engine applies its unknown-surface substitution.
    pub fn surface_label(&self) -> &str {
        self.surface.as_deref().unwrap_or("")
    }
}

/// Sorts a match table chronologically in place. The rating update rule is
/// order-dependent, so every consumer replays the table in this order.
pub fn sort_chronologically(records: &mut [MatchRecord]) {
    records.sort_by_key(|r| r.date);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_row() {
        let row = r#"{"date":"2023-06-11","playerA":"Ann Kim","playerB":"Bea Cruz","surface":"Clay","y":1}"#;
        let record: MatchRecord = serde_json::from_str(row).unwrap();

        assert_eq!(record.player_a, "Ann Kim");
        assert_eq!(record.player_b, "Bea Cruz");
        assert_eq!(record.surface_label(), "Clay");
        assert_eq!(record.outcome, 1);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 6, 11).unwrap());
    }

    #[test]
    fn test_deserialize_missing_surface() {
        let row = r#"{"date":"2023-06-11","playerA":"Ann Kim","playerB":"Bea Cruz","y":1}"#;
        let record: MatchRecord = serde_json::from_str(row).unwrap();

        assert_eq!(record.surface, None);
        assert_eq!(record.surface_label(), "");
    }

    #[test]
    fn test_deserialize_missing_player_fails() {
        let row = r#"{"date":"2023-06-11","playerA":"Ann Kim","y":1}"#;
        assert!(serde_json::from_str::<MatchRecord>(row).is_err());
    }

    #[test]
    fn test_sort_chronologically() {
        let mut records: Vec<MatchRecord> = [
            ("2023-06-11", "A", "B"),
            ("2021-01-02", "C", "D"),
            ("2022-09-30", "E", "F"),
        ]
        .iter()
        .map(|(date, a, b)| MatchRecord {
            date: date.parse().unwrap(),
            player_a: a.to_string(),
            player_b: b.to_string(),
            surface: None,
            outcome: 1
        })
        .collect();

        sort_chronologically(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.player_a.as_str()).collect();
        assert_eq!(order, vec!["C", "E", "A"]);
    }
}
