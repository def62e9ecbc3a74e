use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Suit;
use crate::engine::{Outcome, RoundOutcome, play_round};
use crate::error::RandomSourceError;
use crate::face::{image_key, SuitChoice};
use crate::source::CardSource;

/// Running tally for the current process.  Ties are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

impl Score {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins = self.wins.saturating_add(1),
            Outcome::Lose => self.losses = self.losses.saturating_add(1),
            Outcome::Tie => {}
        }
    }

    /// Rounds that ended in a win or a loss.
    pub fn rounds_decided(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wins: {}  Losses: {}", self.wins, self.losses)
    }
}

/// A round as it is laid out on the table, with the suits picked for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dealt {
    pub round: RoundOutcome,
    pub player_suit: Suit,
    pub house_suit: Suit,
}

impl Dealt {
    /// Asset stem of the player's card face.
    pub fn player_image(&self) -> String {
        image_key(self.round.player_card, self.player_suit)
    }

    /// Asset stem of the house's card face.
    pub fn house_image(&self) -> String {
        image_key(self.round.house_card, self.house_suit)
    }
}

/// Shown before the first round, by both front ends.
pub const IDLE_PROMPT: &str = "Press d to generate a card";

/// Everything a shell shows: the score, the last round, and how suits are
/// chosen for the card faces.
#[derive(Debug, Clone)]
pub struct Table {
    score: Score,
    last: Option<Dealt>,
    suits: SuitChoice,
}

impl Table {
    pub fn new(suits: SuitChoice) -> Self {
        Table {
            score: Score::default(),
            last: None,
            suits,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// The most recent successful round, if any.
    pub fn last(&self) -> Option<&Dealt> {
        self.last.as_ref()
    }

    /// Play one round and fold it into the score.  On error nothing on the
    /// table changes.
    pub fn play<S>(&mut self, source: &mut S) -> Result<&Dealt, RandomSourceError>
    where
        S: CardSource + ?Sized,
    {
        let round = match play_round(source) {
            Ok(round) => round,
            Err(e) => {
                tracing::warn!(error = %e, "round discarded");
                return Err(e);
            }
        };
        self.score.record(round.result);
        tracing::info!(
            result = ?round.result,
            wins = self.score.wins,
            losses = self.score.losses,
            "score updated"
        );
        let dealt = Dealt {
            round,
            player_suit: self.suits.pick(),
            house_suit: self.suits.pick(),
        };
        tracing::debug!(
            player = %dealt.player_image(),
            house = %dealt.house_image(),
            "cards laid out"
        );
        Ok(&*self.last.insert(dealt))
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new(SuitChoice::default())
    }
}
