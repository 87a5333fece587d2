use crate::{Deck, InvalidColor};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(value: &str) -> Result<Self, InvalidColor> {
        let invalid = || InvalidColor(value.to_string());
        let hex = value.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |digit: &str| channel(digit).map(|v| v * 0x11);
                Ok(Self::rgb(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub color: Color,
    pub numbers: Vec<u32>,
}

impl Card {
    pub fn new(name: impl Into<String>, color: Color, numbers: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            color,
            numbers,
        }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }

    /// Draw count of this card against a drawn-in-order deck.
    ///
    /// The deck is scanned from the front and the first number on this card
    /// counts; its position is reported from the far end, so a hit near the
    /// start yields a large count and a hit near the end a small one. The
    /// result lies in `1..=deck.len()`, or is 0 if nothing matches.
    pub fn draws_to_complete(&self, deck: &[u32]) -> usize {
        deck.iter()
            .position(|number| self.contains(*number))
            .map(|index| deck.len() - index)
            .unwrap_or(0)
    }
}

/// Ordered, immutable set of cards. Combinations refer to cards by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn deck(&self) -> Deck {
        Deck::from_pool(self)
    }
}

impl<'a> IntoIterator for &'a CardPool {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
