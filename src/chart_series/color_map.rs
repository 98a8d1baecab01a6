use std::collections::HashMap;

/// Saturation and lightness shared by every generated fallback color.
const FALLBACK_SATURATION: u32 = 70;
const FALLBACK_LIGHTNESS: u32 = 50;

/// Palette of chart colors keyed by entity key.
///
/// Lookups never fail: keys without an explicit color get an `hsl(...)` color whose hue is
/// derived from a hash of the key, so the same key always gets the same color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<String, String>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(key.into(), color.into());
    }

    /// Returns the color assigned to `key`, or its deterministic fallback.
    pub fn color_for(&self, key: &str) -> String {
        match self.colors.get(key) {
            Some(color) => color.clone(),
            None => fallback_color(key),
        }
    }
}

impl<K: Into<String>, C: Into<String>> FromIterator<(K, C)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .map(|(key, color)| (key.into(), color.into()))
                .collect(),
        }
    }
}

/// Derives a stable color from the key's FNV-1a hash.
pub fn fallback_color(key: &str) -> String {
    let hue = fnv1a(key.as_bytes()) % 360;
    format!(
        "hsl({}, {}%, {}%)",
        hue, FALLBACK_SATURATION, FALLBACK_LIGHTNESS
    )
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}
