use rand::seq::IndexedRandom;

use crate::card::{CardValue, Suit};

/// Height of a drawn card, in terminal rows.
pub const FACE_HEIGHT: usize = 7;
/// Width of a drawn card, in terminal columns.
pub const FACE_WIDTH: usize = 11;

/// How the display picks a suit for each drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitChoice {
    Fixed(Suit),
    Random,
}

impl Default for SuitChoice {
    fn default() -> Self {
        SuitChoice::Fixed(Suit::Clubs)
    }
}

impl SuitChoice {
    pub fn pick(self) -> Suit {
        match self {
            SuitChoice::Fixed(suit) => suit,
            SuitChoice::Random => *Suit::ALL
                .choose(&mut rand::rng())
                .unwrap_or(&Suit::Clubs),
        }
    }
}

/// Asset stem for a card face, e.g. `ace_of_clubs` or `10_of_hearts`.
pub fn image_key(value: CardValue, suit: Suit) -> String {
    format!("{}_of_{}", value.label().to_lowercase(), suit.name())
}

/// Text-art face of a card, `FACE_HEIGHT` lines of `FACE_WIDTH` chars.
pub fn face_lines(value: CardValue, suit: Suit) -> [String; FACE_HEIGHT] {
    let rank = value.rank_char();
    let inner = FACE_WIDTH - 2;
    let blank = format!("│{}│", " ".repeat(inner));
    [
        format!("┌{}┐", "─".repeat(inner)),
        format!("│{:<inner$}│", rank),
        blank.clone(),
        format!("│{:^inner$}│", suit.symbol()),
        blank,
        format!("│{:>inner$}│", rank),
        format!("└{}┘", "─".repeat(inner)),
    ]
}

/// The face-down card shown before the first draw.
pub fn back_lines() -> [String; FACE_HEIGHT] {
    let inner = FACE_WIDTH - 2;
    let hatch = format!("│{}│", "░".repeat(inner));
    [
        format!("┌{}┐", "─".repeat(inner)),
        hatch.clone(),
        hatch.clone(),
        hatch.clone(),
        hatch.clone(),
        hatch,
        format!("└{}┘", "─".repeat(inner)),
    ]
}
