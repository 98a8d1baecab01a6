use serde::Serialize;
use std::fmt;

/// Community visibility code of a public profile.
pub const PUBLIC_VISIBILITY: i64 = 3;

/// Online status of a Steam account as shown in the friend list.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaStatus {
    Offline,
    Online,
    Busy,
    Away,
    Snoozing,
    LookingToTrade,
    LookingToPlay,
    Private,
}

impl PersonaStatus {
    /// Maps the raw `(personastate, communityvisibilitystate)` codes to a status.
    ///
    /// Non-public profiles are always `Private`. On public profiles, codes 0 to 6 map in order
    /// to `Offline`, `Online`, `Busy`, `Away`, `Snoozing`, `LookingToTrade` and
    /// `LookingToPlay`, any other code is `Offline`.
    pub fn from_codes(state_code: i64, visibility_code: i64) -> Self {
        if visibility_code != PUBLIC_VISIBILITY {
            return PersonaStatus::Private;
        }
        match state_code {
            1 => PersonaStatus::Online,
            2 => PersonaStatus::Busy,
            3 => PersonaStatus::Away,
            4 => PersonaStatus::Snoozing,
            5 => PersonaStatus::LookingToTrade,
            6 => PersonaStatus::LookingToPlay,
            _ => PersonaStatus::Offline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PersonaStatus::Offline => "Offline",
            PersonaStatus::Online => "Online",
            PersonaStatus::Busy => "Busy",
            PersonaStatus::Away => "Away",
            PersonaStatus::Snoozing => "Snooze",
            PersonaStatus::LookingToTrade => "Looking to trade",
            PersonaStatus::LookingToPlay => "Looking to play",
            PersonaStatus::Private => "Private",
        }
    }
}

/// Shorthand for [`PersonaStatus::from_codes`].
pub fn persona_status(state_code: i64, visibility_code: i64) -> PersonaStatus {
    PersonaStatus::from_codes(state_code, visibility_code)
}

impl fmt::Display for PersonaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
