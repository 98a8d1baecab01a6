use crate::chart_series::color_map::ColorMap;

/// Weapons tracked by the weapon tables: key, display name, chart color.
const WEAPONS: [(&str, &str, &str); 33] = [
    ("ak47", "AK-47", "#C0392B"),
    ("aug", "AUG", "#E74C3C"),
    ("awp", "AWP", "#9B59B6"),
    ("bizon", "PP-Bizon", "#8E44AD"),
    ("deagle", "Deagle", "#2980B9"),
    ("elite", "Berettas", "#3498DB"),
    ("famas", "FAMAS", "#1ABC9C"),
    ("fiveseven", "Five-seveN", "#16A085"),
    ("g3sg1", "G3SG1", "#27AE60"),
    ("galilar", "Galil AR", "#2ECC71"),
    ("glock", "Glock-18", "#F1C40F"),
    ("hegrenade", "Grenade", "#F39C12"),
    ("hkp2000", "HK P2000", "#D35400"),
    ("knife", "Knife", "#ECF0F1"),
    ("m4a1", "M4A1-S", "#CACFD2"),
    ("m249", "M249", "#95A5A6"),
    ("mac10", "MAC-10", "#7F8C8D"),
    ("mag7", "MAG-7", "#A93226"),
    ("molotov", "Molotov", "#2C3E50"),
    ("mp7", "MP7", "#CB4335"),
    ("mp9", "MP9", "#884EA0"),
    ("negev", "Negev", "#7D3C98"),
    ("nova", "Nova", "#2471A3"),
    ("p90", "P90", "#2E86C1"),
    ("p250", "P250", "#17A589"),
    ("sawedoff", "Sawed-Off", "#138D75"),
    ("scar20", "SCAR-20", "#229954"),
    ("sg556", "SG 556", "#28B463"),
    ("ssg08", "SSG 08", "#D4AC0D"),
    ("taser", "Zeus x27", "#D68910"),
    ("tec9", "Tec-9", "#CA6F1E"),
    ("ump45", "UMP-45", "#BA4A00"),
    ("xm1014", "XM1014", "#D0D3D4"),
];

/// Maps tracked by the map tables: key, display name, chart color.
const MAPS: [(&str, &str, &str); 14] = [
    ("dust2", "Dust II", "#C0392B"),
    ("inferno", "Inferno", "#E74C3C"),
    ("nuke", "Nuke", "#9B59B6"),
    ("vertigo", "Vertigo", "#8E44AD"),
    ("office", "Office", "#2980B9"),
    ("train", "Train", "#3498DB"),
    ("lake", "Lake", "#1ABC9C"),
    ("assault", "Assault", "#16A085"),
    ("cbble", "Cobblestone", "#27AE60"),
    ("italy", "Italy", "#2ECC71"),
    ("monastery", "Monastery", "#F1C40F"),
    ("safehouse", "Safehouse", "#F39C12"),
    ("shoots", "Shoots", "#D35400"),
    ("stmarc", "St. Marc", "#ECF0F1"),
];

/// Account-wide stats shown on the profile page, looked up by exact name.
pub const GENERAL_STATS_KEYS: [&str; 37] = [
    "total_kills",
    "total_deaths",
    "total_time_played",
    "total_planted_bombs",
    "total_defused_bombs",
    "total_wins",
    "total_damage_done",
    "total_money_earned",
    "total_weapons_donated",
    "total_broken_windows",
    "total_kills_enemy_blinded",
    "total_kills_knife_fight",
    "total_kills_against_zoomed_sniper",
    "total_dominations",
    "total_domination_overkills",
    "total_revenges",
    "total_rounds_played",
    "last_match_t_wins",
    "last_match_ct_wins",
    "last_match_wins",
    "last_match_max_players",
    "last_match_kills",
    "last_match_deaths",
    "last_match_mvps",
    "last_match_favweapon_id",
    "last_match_favweapon_shots",
    "last_match_favweapon_hits",
    "last_match_favweapon_kills",
    "last_match_damage",
    "last_match_money_spent",
    "last_match_dominations",
    "last_match_revenges",
    "total_mvps",
    "total_matches_won",
    "total_matches_played",
    "last_match_contribution_score",
    "last_match_rounds",
];

/// A fixed enumeration of entity keys with their display names and chart colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCatalog {
    entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CatalogEntry {
    key: String,
    display_name: String,
    color: String,
}

impl EntityCatalog {
    fn from_table(table: &[(&str, &str, &str)]) -> Self {
        Self {
            entries: table
                .iter()
                .map(|(key, display_name, color)| CatalogEntry {
                    key: (*key).to_owned(),
                    display_name: (*display_name).to_owned(),
                    color: (*color).to_owned(),
                })
                .collect(),
        }
    }

    pub fn weapons() -> Self {
        Self::from_table(&WEAPONS)
    }

    pub fn maps() -> Self {
        Self::from_table(&MAPS)
    }

    /// Entity keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.key.as_str()).collect()
    }

    /// Human-readable name of `key`, falling back to the key itself.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map_or(key, |entry| entry.display_name.as_str())
    }

    pub fn color_map(&self) -> ColorMap {
        self.entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.color.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_aggregation::stat_aggregator::find_key_collisions;

    #[test]
    fn builtin_key_lists_have_no_substring_collisions() {
        assert!(find_key_collisions(&EntityCatalog::weapons().keys()).is_empty());
        assert!(find_key_collisions(&EntityCatalog::maps().keys()).is_empty());
    }

    #[test]
    fn exposes_display_names_and_colors() {
        let weapons = EntityCatalog::weapons();

        assert_eq!(weapons.len(), 33);
        assert_eq!(weapons.keys()[0], "ak47");
        assert_eq!(weapons.display_name("taser"), "Zeus x27");
        assert_eq!(weapons.display_name("cz75a"), "cz75a");
        assert_eq!(weapons.color_map().color_for("awp"), "#9B59B6");

        let maps = EntityCatalog::maps();
        assert_eq!(maps.len(), 14);
        assert_eq!(maps.display_name("cbble"), "Cobblestone");
    }
}
