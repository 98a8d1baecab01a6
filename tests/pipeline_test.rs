use csgo_explorer::chart_series::series_formatter::to_pie_series;
use csgo_explorer::stat_aggregation::entity_catalog::EntityCatalog;
use csgo_explorer::stat_aggregation::stat_layout::{TOTAL_KILLS, WEAPON_NAME};
use csgo_explorer::{
    aggregate, compute_ratio, decode, format_timestamp_in, persona_status, DerivedMetric,
    PersonaStatus, RatioKind, StatField, StatLayout, StatValue,
};
use chrono::Utc;
use serde_json::json;

#[test]
fn weapon_round_trip_from_raw_payload_to_pie() {
    let payload = json!({
        "playerstats": {
            "steamID": "76561198000000000",
            "stats": [
                {"name": "total_kills_ak47", "value": "120"},
                {"name": "total_shots_ak47", "value": "800"},
                {"name": "total_hits_ak47", "value": "400"}
            ]
        }
    });

    let entries = decode(&payload).unwrap();
    let rows = aggregate(&entries, &["ak47", "awp"], &StatLayout::weapons());

    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            {"weaponName": "ak47", "totalKills": "120", "totalShots": "800", "totalHits": "400"},
            {"weaponName": "awp", "totalKills": "", "totalShots": "", "totalHits": ""}
        ])
    );
    assert_eq!(DerivedMetric::HitRate.for_row(&rows[0]), Some(50.0));
    assert_eq!(DerivedMetric::HitRate.for_row(&rows[1]), None);

    let pie = to_pie_series(
        &rows,
        WEAPON_NAME,
        TOTAL_KILLS,
        &EntityCatalog::weapons().color_map(),
    );
    let ids: Vec<&str> = pie.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, ["ak47"]);
}

#[test]
fn row_count_matches_key_count_whatever_the_input() {
    let catalog = EntityCatalog::maps();
    let keys = catalog.keys();
    let payload = json!({"playerstats": {"stats": [
        {"name": "total_wins_map_de_train", "value": 3},
        {"name": "total_rounds_map_unknown", "value": 9},
        {"name": "unrelated", "value": 1}
    ]}});

    let rows = aggregate(&decode(&payload).unwrap(), &keys, &StatLayout::maps());

    assert_eq!(rows.len(), keys.len());
    for (row, key) in rows.iter().zip(&keys) {
        assert_eq!(row.entity_key(), *key);
    }
}

#[test]
fn ratio_edge_cases() {
    let x = StatField::Reported(StatValue::from(12u64));
    let zero = StatField::Reported(StatValue::from(0u64));

    assert_eq!(compute_ratio(&x, &StatField::Missing, RatioKind::Percentage), None);
    assert_eq!(compute_ratio(&StatField::Missing, &x, RatioKind::Percentage), None);
    assert_eq!(compute_ratio(&x, &zero, RatioKind::Percentage), None);
    assert_eq!(
        compute_ratio(
            &StatField::Reported(StatValue::from(50u64)),
            &StatField::Reported(StatValue::from(200u64)),
            RatioKind::Percentage
        ),
        Some(25.0)
    );
}

#[test]
fn status_and_timestamp_formatting() {
    assert_eq!(persona_status(1, 3), PersonaStatus::Online);
    assert_eq!(persona_status(1, 1), PersonaStatus::Private);
    assert_eq!(persona_status(99, 3), PersonaStatus::Offline);
    assert_eq!(format_timestamp_in(0, &Utc), "1/1/1970 - 0:00:00");
}

#[test]
fn missing_player_stats_is_distinguishable() {
    let err = decode(&json!({"response": {}})).unwrap_err();
    assert!(err.is_missing_stats());
}
