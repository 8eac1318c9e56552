// Column projection from typed rows into chart series
use crate::domain::records::{ClickRecord, SignatureHitRecord, ThreatCountRecord};
use crate::domain::series::{AttackPath, GeoPoint, Series};

/// Project one numeric column against a shared axis, keeping row order.
fn project<R>(
    rows: &[R],
    name: &str,
    axis: impl Fn(&R) -> &str,
    value: impl Fn(&R) -> Option<f64>,
) -> Series {
    Series::new(
        name,
        rows.iter().map(|r| axis(r).to_string()).collect(),
        rows.iter().map(value).collect(),
    )
}

/// "Clicks Permitted" and "Clicks Blocked" per user
pub fn click_series(rows: &[ClickRecord]) -> Vec<Series> {
    vec![
        project(rows, "Clicks Permitted", |r| r.user.as_str(), |r| r.clicks_permitted),
        project(rows, "Clicks Blocked", |r| r.user.as_str(), |r| r.clicks_blocked),
    ]
}

/// "Spam", "Malware" and "Phishing" per user
pub fn threat_series(rows: &[ThreatCountRecord]) -> Vec<Series> {
    vec![
        project(rows, "Spam", |r| r.user.as_str(), |r| r.spam),
        project(rows, "Malware", |r| r.user.as_str(), |r| r.malware),
        project(rows, "Phishing", |r| r.user.as_str(), |r| r.phish),
    ]
}

/// One path per hit, from its source to `home`. No deduplication.
pub fn attack_paths(rows: &[SignatureHitRecord], home: GeoPoint) -> Vec<AttackPath> {
    rows.iter()
        .map(|r| AttackPath::new(r.longitude, r.latitude, home))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::HOME;

    fn click(user: &str, permitted: f64, blocked: f64) -> ClickRecord {
        ClickRecord {
            user: user.to_string(),
            clicks_permitted: Some(permitted),
            clicks_blocked: Some(blocked),
        }
    }

    fn hit(lon: Option<f64>, lat: Option<f64>) -> SignatureHitRecord {
        SignatureHitRecord {
            longitude: lon,
            latitude: lat,
            policy_name: "ET SCAN".to_string(),
        }
    }

    #[test]
    fn test_click_series_stack_heights() {
        let rows = vec![click("alice", 3.0, 1.0), click("bob", 0.0, 7.0), click("carol", 2.0, 2.0)];

        let series = click_series(&rows);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Clicks Permitted");
        assert_eq!(series[1].name, "Clicks Blocked");

        for s in &series {
            assert_eq!(s.values.len(), rows.len());
            assert_eq!(s.axis, vec!["alice", "bob", "carol"]);
        }
        for (i, row) in rows.iter().enumerate() {
            let stacked = series[0].values[i].unwrap() + series[1].values[i].unwrap();
            let expected = row.clicks_permitted.unwrap() + row.clicks_blocked.unwrap();
            assert_eq!(stacked, expected);
        }
    }

    #[test]
    fn test_threat_series_names_and_order() {
        let rows = vec![ThreatCountRecord {
            user: "alice".to_string(),
            spam: Some(5.0),
            malware: Some(1.0),
            phish: Some(2.0),
        }];

        let series = threat_series(&rows);
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Spam", "Malware", "Phishing"]);
        assert_eq!(series[2].values, vec![Some(2.0)]);
        assert!(series.iter().all(|s| s.values.len() == 1));
    }

    #[test]
    fn test_repeated_users_are_not_merged() {
        let rows = vec![click("bob", 1.0, 1.0), click("alice", 2.0, 0.0), click("bob", 4.0, 0.0)];

        let series = click_series(&rows);
        assert_eq!(series[0].axis, vec!["bob", "alice", "bob"]);
        assert_eq!(series[0].values, vec![Some(1.0), Some(2.0), Some(4.0)]);
    }

    #[test]
    fn test_blank_value_keeps_its_row() {
        let mut rows = vec![click("alice", 3.0, 1.0), click("bob", 1.0, 2.0)];
        rows[0].clicks_blocked = None;

        let series = click_series(&rows);
        assert_eq!(series[1].axis, vec!["alice", "bob"]);
        assert_eq!(series[1].values, vec![None, Some(2.0)]);
        assert_eq!(series[0].values, vec![Some(3.0), Some(1.0)]);
    }

    #[test]
    fn test_attack_paths_end_at_home() {
        let rows = vec![hit(Some(37.6), Some(55.7)), hit(Some(37.6), Some(55.7)), hit(None, Some(1.0))];

        let paths = attack_paths(&rows, HOME);
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.to == HOME));
        assert_eq!(paths[0].source_lon, Some(37.6));
        assert_eq!(paths[0].source_lat, Some(55.7));
        assert_eq!(paths[2].source_lon, None);
    }

    #[test]
    fn test_empty_rows() {
        assert!(click_series(&[]).iter().all(|s| s.values.is_empty()));
        assert!(attack_paths(&[], HOME).is_empty());
    }
}
