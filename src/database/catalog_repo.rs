use std::collections::HashSet;
use std::path::Path;

use crate::errors::CatalogError;
use crate::models::ActivitySeedRow;

const EMBEDDED_CATALOG: &str = include_str!("../../seed/activities.json");

/// The catalog compiled into the binary.
pub fn embedded_catalog() -> Result<Vec<ActivitySeedRow>, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Loads the seed catalog from `path`, or the embedded one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<ActivitySeedRow>, CatalogError> {
    let Some(path) = path else {
        return embedded_catalog();
    };
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&raw)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<ActivitySeedRow>, CatalogError> {
    let rows: Vec<ActivitySeedRow> = serde_json::from_str(raw)?;
    validate_catalog(&rows)?;
    Ok(rows)
}

pub fn validate_catalog(rows: &[ActivitySeedRow]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    for row in rows {
        if row.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !names.insert(row.name.as_str()) {
            return Err(CatalogError::DuplicateActivity(row.name.clone()));
        }
        if row.record.max_participants == 0 {
            return Err(CatalogError::ZeroCapacity(row.name.clone()));
        }

        let mut seen = HashSet::new();
        for email in &row.record.participants {
            if !seen.insert(email.as_str()) {
                return Err(CatalogError::DuplicateParticipant {
                    activity: row.name.clone(),
                    email: email.clone(),
                });
            }
        }

        if row.record.participants.len() > row.record.max_participants {
            return Err(CatalogError::OverCapacity {
                activity: row.name.clone(),
                count: row.record.participants.len(),
                max: row.record.max_participants,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, max: usize, participants: &[&str]) -> String {
        serde_json::json!({
            "name": name,
            "description": "d",
            "schedule": "s",
            "max_participants": max,
            "participants": participants,
        })
        .to_string()
    }

    #[test]
    fn embedded_catalog_has_nine_activities_in_order() {
        let rows = embedded_catalog().unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Chess Club",
                "Programming Class",
                "Gym Class",
                "Soccer Club",
                "Basketball Team",
                "Art Club",
                "Drama Club",
                "Debate Team",
                "Science Club",
            ]
        );

        let chess = &rows[0].record;
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            ["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    }

    #[test]
    fn rejects_duplicate_activity_names() {
        let raw = format!("[{},{}]", row("A", 2, &[]), row("A", 3, &[]));
        assert!(matches!(
            parse_catalog(&raw),
            Err(CatalogError::DuplicateActivity(name)) if name == "A"
        ));
    }

    #[test]
    fn rejects_duplicate_participants() {
        let raw = format!("[{}]", row("A", 5, &["x@y", "x@y"]));
        assert!(matches!(
            parse_catalog(&raw),
            Err(CatalogError::DuplicateParticipant { email, .. }) if email == "x@y"
        ));
    }

    #[test]
    fn rejects_zero_capacity_and_overfull_rosters() {
        let zero = format!("[{}]", row("A", 0, &[]));
        assert!(matches!(parse_catalog(&zero), Err(CatalogError::ZeroCapacity(_))));

        let overfull = format!("[{}]", row("A", 1, &["a@x", "b@x"]));
        assert!(matches!(
            parse_catalog(&overfull),
            Err(CatalogError::OverCapacity { count: 2, max: 1, .. })
        ));
    }

    #[test]
    fn rejects_blank_names_and_bad_json() {
        let blank = format!("[{}]", row("  ", 1, &[]));
        assert!(matches!(parse_catalog(&blank), Err(CatalogError::EmptyName)));
        assert!(matches!(parse_catalog("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn missing_seed_file_reports_path() {
        let err = load_catalog(Some(Path::new("/nonexistent/activities.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/activities.json"));
    }
}
