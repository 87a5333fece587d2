use serde::{Deserialize, Serialize};

pub use bingo_core::{Card, CardPool, Color};

/// One card as written in a pool file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDef {
    pub name: String,
    /// Hex notation, `#rrggbb` or `#rgb`.
    pub color: String,
    pub numbers: Vec<u32>,
}

impl From<&Card> for CardDef {
    fn from(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            color: card.color.to_string(),
            numbers: card.numbers.clone(),
        }
    }
}
