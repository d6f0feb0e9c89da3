//! Grids built from JSON days, classified week by week.

use skyline_core::{
    classify, classify_week, parse_year_range_at, ContributionDay, ContributionGrid, ErrorKind,
    HeightLevel, SkylineConfig, StackRole, Week,
};

fn days(json: &str) -> Vec<ContributionDay> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_json_days_into_grid() {
    let week = days(
        r#"[
            {"contributionCount": 0, "date": "2024-03-03"},
            {"contributionCount": 4, "date": "2024-03-04"},
            {"contributionCount": 0, "date": "2024-03-05"},
            {"contributionCount": 9, "date": "2024-03-06"},
            {"contributionCount": 1, "date": "2024-03-07"},
            {"contributionCount": 0, "date": "2024-03-08"},
            {"contributionCount": 0, "date": "2024-03-09"}
        ]"#,
    );
    assert_eq!(week[0].weekday_row(), 0);
    assert_eq!(week[6].weekday_row(), 6);

    let grid = ContributionGrid::from_days(vec![week]).unwrap();
    assert_eq!(grid.max_count(), 9);
    assert_eq!(grid.total_count(), 14);

    let classes = classify_week(&grid.weeks()[0], grid.max_count());
    let roles: Vec<Option<StackRole>> = classes.iter().map(|c| c.role).collect();
    assert_eq!(
        roles,
        [
            None,
            Some(StackRole::Foundation),
            None,
            Some(StackRole::Middle),
            Some(StackRole::Top),
            None,
            None
        ]
    );
    assert_eq!(classes[1].level, HeightLevel::Medium);
    assert_eq!(classes[3].level, HeightLevel::High);
    assert_eq!(classes[4].level, HeightLevel::Low);
}

#[test]
fn test_week_length_bounds() {
    assert_eq!(Week::new(Vec::new()).unwrap_err().kind(), ErrorKind::Validation);
    let eight = days(
        r#"[
            {"contributionCount": 0, "date": "2024-03-03"},
            {"contributionCount": 0, "date": "2024-03-04"},
            {"contributionCount": 0, "date": "2024-03-05"},
            {"contributionCount": 0, "date": "2024-03-06"},
            {"contributionCount": 0, "date": "2024-03-07"},
            {"contributionCount": 0, "date": "2024-03-08"},
            {"contributionCount": 0, "date": "2024-03-09"},
            {"contributionCount": 0, "date": "2024-03-10"}
        ]"#,
    );
    assert!(Week::new(eight).is_err());
}

#[test]
fn test_classification_is_monotonic() {
    for max in [1_u32, 3, 10, 97] {
        let mut previous = HeightLevel::Sky;
        for count in 0..=max + 5 {
            let level = classify(count, max, 0, 1).level;
            assert!(level >= previous, "count {count} max {max}");
            previous = level;
        }
    }
}

#[test]
fn test_zero_max_never_panics() {
    assert_eq!(classify(0, 0, 0, 0).level, HeightLevel::Sky);
    assert_eq!(classify(5, 0, 0, 1).level, HeightLevel::High);
}

#[test]
fn test_year_range_and_config_together() {
    let (start, end) = parse_year_range_at("2014-2024", 2026).unwrap();
    assert_eq!((start, end), (2014, 2024));
    let config = SkylineConfig::from_toml_str("[layout]\nyear_spacing = 0.0\n").unwrap();
    assert!(config.layout.year_spacing.abs() < f64::EPSILON);
    assert!(SkylineConfig::from_toml_str("[layout]\nyear_spacing = -1.0\n").is_err());
}
