use crate::stat_aggregation::aggregated_stat_row::AggregatedStatRow;
use crate::stat_aggregation::stat_field::StatField;
use crate::stat_aggregation::stat_layout::StatLayout;
use crate::stats_decoding::raw_stat_entry::RawStatEntry;

use tracing::debug;

/// Groups flat stat records into one row per entity key.
///
/// Each record is attributed by substring search: the record is skipped unless its name
/// contains one of the layout's fragments, then the first key of `entity_keys` contained in
/// the name receives the value. Records matching no key are dropped. A later record for the
/// same row and field overwrites an earlier one.
///
/// First-match attribution means a short key can capture a stat meant for a longer one, and
/// names such as `total_kills_knife_fight` land on `knife`. Order `entity_keys` from most to
/// least specific, and see [`find_key_collisions`] and [`find_ambiguous_entries`].
///
/// # Arguments
///
/// * `entries` - The decoded stat records.
/// * `entity_keys` - The fixed key enumeration, in display order.
/// * `layout` - The key field name and the field/fragment associations.
///
/// # Returns
///
/// Exactly one `AggregatedStatRow` per entry of `entity_keys`, in the same order.
pub fn aggregate<K: AsRef<str>>(
    entries: &[RawStatEntry],
    entity_keys: &[K],
    layout: &StatLayout,
) -> Vec<AggregatedStatRow> {
    let mut rows: Vec<AggregatedStatRow> = entity_keys
        .iter()
        .map(|key| AggregatedStatRow::empty(key.as_ref(), layout))
        .collect();

    for entry in entries {
        update_rows_from_entry(entry, entity_keys, layout, &mut rows);
    }

    rows
}

/// Attributes a single record to its row, if any.
///
/// # Arguments
///
/// * `entry` - The record to attribute.
/// * `entity_keys` - The key enumeration the rows were built from.
/// * `layout` - The field/fragment associations.
/// * `rows` - The rows being filled, parallel to `entity_keys`.
fn update_rows_from_entry<K: AsRef<str>>(
    entry: &RawStatEntry,
    entity_keys: &[K],
    layout: &StatLayout,
    rows: &mut [AggregatedStatRow],
) {
    let Some(field) = layout.field_for(&entry.name) else {
        return;
    };

    let Some(index) = entity_keys
        .iter()
        .position(|key| entry.name.contains(key.as_ref()))
    else {
        debug!("No entity key matches stat {}", entry.name);
        return;
    };

    if matching_keys(&entry.name, entity_keys).nth(1).is_some() {
        debug!(
            "Stat {} matches several entity keys, attributing it to {}",
            entry.name,
            rows[index].entity_key()
        );
    }

    rows[index].set(field, StatField::Reported(entry.value.clone()));
}

fn matching_keys<'a, K: AsRef<str>>(
    name: &'a str,
    entity_keys: &'a [K],
) -> impl Iterator<Item = &'a str> + 'a {
    entity_keys
        .iter()
        .map(|key| key.as_ref())
        .filter(move |key| name.contains(key))
}

/// Lists key pairs where the first key is a substring of the second.
///
/// Any pair returned here can make first-match attribution pick the wrong row.
///
/// # Returns
///
/// `(shorter, longer)` pairs, in enumeration order.
pub fn find_key_collisions<K: AsRef<str>>(entity_keys: &[K]) -> Vec<(String, String)> {
    let mut collisions = Vec::new();
    for (i, short) in entity_keys.iter().enumerate() {
        for (j, long) in entity_keys.iter().enumerate() {
            if i != j && long.as_ref().contains(short.as_ref()) {
                collisions.push((short.as_ref().to_owned(), long.as_ref().to_owned()));
            }
        }
    }
    collisions
}

/// Lists records whose name contains more than one entity key.
///
/// # Returns
///
/// For each ambiguous record, its name and every key it contains in enumeration order.
/// The first key is the one [`aggregate`] attributes the record to.
pub fn find_ambiguous_entries<K: AsRef<str>>(
    entries: &[RawStatEntry],
    entity_keys: &[K],
) -> Vec<(String, Vec<String>)> {
    entries
        .iter()
        .filter_map(|entry| {
            let keys: Vec<String> = matching_keys(&entry.name, entity_keys)
                .map(str::to_owned)
                .collect();
            (keys.len() > 1).then(|| (entry.name.clone(), keys))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_aggregation::stat_layout::{TOTAL_HITS, TOTAL_KILLS, TOTAL_SHOTS};
    use crate::stats_decoding::stat_value::StatValue;
    use serde_json::json;

    fn entry(name: &str, value: u64) -> RawStatEntry {
        RawStatEntry::new(name, value)
    }

    #[test]
    fn one_row_per_key_in_key_order() {
        let keys = ["xm1014", "ak47", "awp"];
        let entries = vec![entry("total_kills_awp", 3), entry("total_kills_ak47", 9)];

        let rows = aggregate(&entries, &keys, &StatLayout::weapons());

        let row_keys: Vec<&str> = rows.iter().map(AggregatedStatRow::entity_key).collect();
        assert_eq!(row_keys, keys);
    }

    #[test]
    fn no_entries_gives_all_missing_rows() {
        let rows = aggregate(&[], &["dust2", "nuke"], &StatLayout::maps());

        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|row| row.fields().all(|(_, field)| field.is_missing())));
    }

    #[test]
    fn fields_are_filled_by_fragment() {
        let entries = vec![
            RawStatEntry::new("total_kills_ak47", "120"),
            RawStatEntry::new("total_shots_ak47", "800"),
            RawStatEntry::new("total_hits_ak47", "400"),
        ];

        let rows = aggregate(&entries, &["ak47", "awp"], &StatLayout::weapons());

        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            json!([
                {"weaponName": "ak47", "totalKills": "120", "totalShots": "800", "totalHits": "400"},
                {"weaponName": "awp", "totalKills": "", "totalShots": "", "totalHits": ""}
            ])
        );
    }

    #[test]
    fn unrelated_and_unmatched_entries_are_dropped() {
        let entries = vec![
            entry("total_damage_done", 99),
            entry("total_kills_famas", 4),
            entry("total_shots_awp", 10),
        ];

        let rows = aggregate(&entries, &["awp"], &StatLayout::weapons());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(TOTAL_SHOTS).and_then(StatField::as_f64), Some(10.0));
        assert!(rows[0].get(TOTAL_KILLS).is_some_and(StatField::is_missing));
        assert!(rows[0].get(TOTAL_HITS).is_some_and(StatField::is_missing));
    }

    #[test]
    fn reported_zero_is_not_missing() {
        let rows = aggregate(&[entry("total_hits_awp", 0)], &["awp"], &StatLayout::weapons());

        let hits = rows[0].get(TOTAL_HITS).unwrap();
        assert!(!hits.is_missing());
        assert_eq!(hits.as_f64(), Some(0.0));
    }

    #[test]
    fn first_listed_key_wins_on_overlap() {
        let entries = vec![entry("total_kills_m4a1_silencer", 7)];

        let short_first = aggregate(&entries, &["m4a1", "m4a1_silencer"], &StatLayout::weapons());
        assert_eq!(short_first[0].get(TOTAL_KILLS).and_then(StatField::as_f64), Some(7.0));
        assert!(short_first[1].get(TOTAL_KILLS).is_some_and(StatField::is_missing));

        let long_first = aggregate(&entries, &["m4a1_silencer", "m4a1"], &StatLayout::weapons());
        assert_eq!(long_first[0].get(TOTAL_KILLS).and_then(StatField::as_f64), Some(7.0));
        assert!(long_first[1].get(TOTAL_KILLS).is_some_and(StatField::is_missing));
    }

    #[test]
    fn later_entries_overwrite_earlier_ones() {
        let entries = vec![
            entry("total_kills_knife", 50),
            entry("total_kills_knife_fight", 2),
        ];

        let rows = aggregate(&entries, &["knife"], &StatLayout::weapons());

        assert_eq!(rows[0].get(TOTAL_KILLS).and_then(StatField::as_f64), Some(2.0));
    }

    #[test]
    fn non_numeric_values_are_kept() {
        let entries = vec![RawStatEntry::new("total_kills_awp", "n/a")];

        let rows = aggregate(&entries, &["awp"], &StatLayout::weapons());

        let kills = rows[0].get(TOTAL_KILLS).unwrap();
        assert_eq!(kills.value(), Some(&StatValue::from("n/a")));
        assert_eq!(kills.as_f64(), None);
    }

    #[test]
    fn detects_key_collisions() {
        let collisions = find_key_collisions(&["p2000", "hkp2000", "awp"]);
        assert_eq!(collisions, vec![("p2000".to_owned(), "hkp2000".to_owned())]);
    }

    #[test]
    fn detects_ambiguous_entries() {
        let entries = vec![entry("total_kills_hkp2000", 1), entry("total_kills_awp", 1)];

        let ambiguous = find_ambiguous_entries(&entries, &["p2000", "hkp2000", "awp"]);

        assert_eq!(
            ambiguous,
            vec![(
                "total_kills_hkp2000".to_owned(),
                vec!["p2000".to_owned(), "hkp2000".to_owned()]
            )]
        );
    }
}
