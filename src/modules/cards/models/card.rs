use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single catalog record.
///
/// Serialized field-for-field in camelCase; nullable columns render as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u64,
    pub uuid: String,
    pub name: String,
    pub set_code: String,
    pub number: String,
    pub mana_cost: Option<String>,
    pub mana_value: Option<f64>,
    #[serde(rename = "type")]
    pub type_line: Option<String>,
    pub text: Option<String>,
    pub rarity: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub artist: Option<String>,
}

impl Card {
    /// Create a card with only the required columns set
    pub fn new(
        id: u64,
        uuid: impl Into<String>,
        name: impl Into<String>,
        set_code: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            uuid: uuid.into(),
            name: name.into(),
            set_code: set_code.into(),
            number: number.into(),
            mana_cost: None,
            mana_value: None,
            type_line: None,
            text: None,
            rarity: None,
            power: None,
            toughness: None,
            artist: None,
        }
    }

    /// Case-insensitive substring match on the card name
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// Optional equality filters shared by listing queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub set_code: Option<String>,
}

impl CardFilter {
    /// Build a filter from a raw `setCode` parameter; blank values mean no filter
    pub fn by_set_code(set_code: Option<&str>) -> Self {
        Self {
            set_code: set_code
                .filter(|code| !code.is_empty())
                .map(str::to_string),
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        match &self.set_code {
            Some(code) => card.set_code == *code,
            None => true,
        }
    }
}
