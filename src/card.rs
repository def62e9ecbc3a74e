use std::fmt;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use crate::error::InvalidCardValueError;

/// Lowest card value (Ace).
pub const MIN_VALUE: u8 = 1;
/// Highest card value (King).
pub const MAX_VALUE: u8 = 13;

/// Suits are cosmetic: they pick a card face, they never decide a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits, in bridge order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-character symbol used on card faces.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    /// Lower-case plural name, as used in asset file names.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// A card value in `1..=13`. Ace is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardValue(u8);

impl CardValue {
    pub fn new(value: u8) -> Result<Self, InvalidCardValueError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(CardValue(value))
        } else {
            Err(InvalidCardValueError(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Display name: "Ace", "2" … "10", "Jack", "Queen", "King".
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
        ];
        LABELS[usize::from(self.0 - MIN_VALUE)]
    }

    /// Short corner index: "A", "2" … "10", "J", "Q", "K".
    pub fn rank_char(self) -> &'static str {
        match self.0 {
            1 => "A",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => self.label(),
        }
    }

    /// Every card value, Ace to King.
    #[allow(dead_code)]
    pub fn all() -> impl Iterator<Item = CardValue> {
        (MIN_VALUE..=MAX_VALUE).map(CardValue)
    }
}

impl TryFrom<u8> for CardValue {
    type Error = InvalidCardValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CardValue::new(value)
    }
}

impl From<CardValue> for u8 {
    fn from(value: CardValue) -> u8 {
        value.0
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = card_label(self.0).map_err(|_| fmt::Error)?;
        f.write_str(label)
    }
}

/// Uniform over Ace..=King, so `rng.random::<CardValue>()` is a fair draw.
impl Distribution<CardValue> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CardValue {
        CardValue(rng.random_range(MIN_VALUE..=MAX_VALUE))
    }
}

/// Name a raw card value. Out-of-range input is a caller bug and is
/// rejected, never clamped.
pub fn card_label(value: u8) -> Result<&'static str, InvalidCardValueError> {
    CardValue::new(value).map(CardValue::label)
}
