use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::card::CardValue;
use crate::error::RandomSourceError;
use crate::source::CardSource;

/// How a round went, from the player's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Higher card wins; equal cards tie.  Suits never matter.
    pub fn compare(player: CardValue, house: CardValue) -> Self {
        match player.cmp(&house) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Lose,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The line shown under the cards once a round is over.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose.",
            Outcome::Tie => "It's a tie.",
        }
    }
}

/// One finished round.  Created fresh per draw and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_card: CardValue,
    pub house_card: CardValue,
    pub result: Outcome,
}

impl RoundOutcome {
    pub fn new(player_card: CardValue, house_card: CardValue) -> Self {
        RoundOutcome {
            player_card,
            house_card,
            result: Outcome::compare(player_card, house_card),
        }
    }

    /// "Your card is X, the computer's card is Y"
    pub fn describe(&self) -> String {
        format!(
            "Your card is {}, the computer's card is {}",
            self.player_card, self.house_card
        )
    }
}

/// Play one round: the player's card is drawn first, then the house's.
///
/// Either draw failing discards the round; the error comes back untouched.
/// The score is the caller's business.
pub fn play_round<S>(source: &mut S) -> Result<RoundOutcome, RandomSourceError>
where
    S: CardSource + ?Sized,
{
    let player_card = source.draw()?;
    let house_card = source.draw()?;
    let round = RoundOutcome::new(player_card, house_card);
    tracing::debug!(
        player = player_card.get(),
        house = house_card.get(),
        result = ?round.result,
        "round played"
    );
    Ok(round)
}
