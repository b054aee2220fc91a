use serde::{Deserialize, Serialize};

pub const MIN_TRAVELERS: u32 = 1;
pub const COUPLE_SIZE: u32 = 2;
/// Count a group selection falls back to when the previous count was not a group.
pub const DEFAULT_GROUP_SIZE: u32 = 4;

pub const ATTR_NAME: &str = "data-name";
pub const ATTR_DESCRIPTION: &str = "data-desc";
pub const ATTR_ADDRESS: &str = "data-address";
pub const ATTR_MAP: &str = "data-map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelerType {
    Solo,
    Couple,
    Family,
    Friends,
}

impl TravelerType {
    /// Parses the selector's option value. Unknown values yield `None`, which
    /// callers treat the same as `Solo`.
    pub fn from_selector_value(value: &str) -> Option<Self> {
        match value.trim() {
            "Solo" => Some(Self::Solo),
            "Couple" => Some(Self::Couple),
            "Family" => Some(Self::Family),
            "Friends" => Some(Self::Friends),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Couple => "Couple",
            Self::Family => "Family",
            Self::Friends => "Friends",
        }
    }

    pub fn is_group(self) -> bool {
        matches!(self, Self::Family | Self::Friends)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLayout {
    pub count_visible: bool,
    pub count: u32,
}

/// Applies the selector rule to the count the page currently shows.
/// `current` is `None` when the count field does not hold a number.
pub fn layout_for(kind: Option<TravelerType>, current: Option<i64>) -> CountLayout {
    match kind {
        Some(kind) if kind.is_group() => {
            let count = match current {
                Some(count) if count >= i64::from(COUPLE_SIZE) => {
                    u32::try_from(count).unwrap_or(u32::MAX)
                }
                _ => DEFAULT_GROUP_SIZE,
            };
            CountLayout {
                count_visible: true,
                count,
            }
        }
        Some(TravelerType::Couple) => CountLayout {
            count_visible: false,
            count: COUPLE_SIZE,
        },
        _ => CountLayout {
            count_visible: false,
            count: MIN_TRAVELERS,
        },
    }
}

pub fn adjusted_count(current: Option<i64>, delta: i64) -> u32 {
    let current = current.unwrap_or(i64::from(MIN_TRAVELERS));
    let next = current.saturating_add(delta).max(i64::from(MIN_TRAVELERS));
    u32::try_from(next).unwrap_or(u32::MAX)
}

/// Reads a count the way a number input reports it: leading digits count,
/// anything else is not a number.
pub fn parse_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '+' || *c == '-'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse::<i64>().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerSelection {
    pub kind: TravelerType,
    pub count: u32,
}

impl TravelerSelection {
    /// Traveler phrase used when composing an itinerary request.
    pub fn describe(&self) -> String {
        match self.kind {
            TravelerType::Solo => "Solo Traveler".to_string(),
            TravelerType::Couple => "Couple".to_string(),
            TravelerType::Family | TravelerType::Friends => {
                format!("{} group of {}", self.kind.as_str(), self.count)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    pub description: String,
    pub address: String,
    pub map_link: String,
}

impl PlaceDetails {
    /// Missing attributes read as empty strings.
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: attribute(ATTR_NAME).unwrap_or_default(),
            description: attribute(ATTR_DESCRIPTION).unwrap_or_default(),
            address: attribute(ATTR_ADDRESS).unwrap_or_default(),
            map_link: attribute(ATTR_MAP).unwrap_or_default(),
        }
    }

    pub fn address_line(&self) -> String {
        format!("Address: {}", self.address)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
