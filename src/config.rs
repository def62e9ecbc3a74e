use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::card::Suit;
use crate::face::SuitChoice;
use crate::source::{CardSource, RngSource, ScriptedSource};

/// Draw a card against the computer; the higher card wins.
#[derive(Debug, Parser)]
#[command(name = "high-card", version, about)]
pub struct Args {
    /// Which front end to run.
    #[arg(long, value_enum, default_value_t = Ui::Console)]
    pub ui: Ui,

    /// Seed for reproducible rounds.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play a fixed list of card values (player, computer, player, …)
    /// instead of random draws, e.g. `--cards 5,9,13,2`.
    #[arg(long, value_delimiter = ',', conflicts_with = "seed")]
    pub cards: Option<Vec<u8>>,

    /// Suit shown on the card faces.
    #[arg(long, value_enum, default_value_t = SuitArg::Clubs)]
    pub suit: SuitArg,

    /// Console output without colors.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Ui {
    /// Line-by-line prompt.
    #[default]
    Console,
    /// Full-screen terminal interface.
    Tui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SuitArg {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    /// A fresh suit for every card.
    Random,
}

impl From<SuitArg> for SuitChoice {
    fn from(arg: SuitArg) -> Self {
        match arg {
            SuitArg::Clubs => SuitChoice::Fixed(Suit::Clubs),
            SuitArg::Diamonds => SuitChoice::Fixed(Suit::Diamonds),
            SuitArg::Hearts => SuitChoice::Fixed(Suit::Hearts),
            SuitArg::Spades => SuitChoice::Fixed(Suit::Spades),
            SuitArg::Random => SuitChoice::Random,
        }
    }
}

impl Args {
    /// Build the card source the options ask for: scripted, seeded, or
    /// seeded from the operating system.
    pub fn card_source(&self) -> anyhow::Result<Box<dyn CardSource>> {
        if let Some(cards) = &self.cards {
            let script = ScriptedSource::new(cards.iter().copied())
                .context("invalid --cards list")?;
            tracing::info!(cards = script.remaining(), "playing a scripted game");
            return Ok(Box::new(script));
        }
        if let Some(seed) = self.seed {
            tracing::info!(seed, "playing a seeded game");
            return Ok(Box::new(RngSource::seeded(seed)));
        }
        let source = RngSource::from_entropy().context("no entropy for the card source")?;
        Ok(Box::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["high-card"]).unwrap();
        assert_eq!(args.ui, Ui::Console);
        assert_eq!(args.seed, None);
        assert_eq!(args.cards, None);
        assert!(!args.no_color);
        assert_eq!(SuitChoice::from(args.suit), SuitChoice::Fixed(Suit::Clubs));
        assert!(args.card_source().is_ok());
    }

    #[test]
    fn scripted_cards_become_the_source() {
        let args =
            Args::try_parse_from(["high-card", "--cards", "5,9,13", "--ui", "tui"]).unwrap();
        assert_eq!(args.ui, Ui::Tui);
        assert_eq!(args.cards, Some(vec![5, 9, 13]));
        let mut source = args.card_source().unwrap();
        assert_eq!(source.draw().unwrap().get(), 5);
    }

    #[test]
    fn bad_script_is_rejected_at_startup() {
        let args = Args::try_parse_from(["high-card", "--cards", "5,14"]).unwrap();
        let err = args.card_source().err().unwrap();
        assert!(format!("{:#}", err).contains("14 is not a card value"));
    }

    #[test]
    fn seed_and_cards_conflict() {
        assert!(Args::try_parse_from(["high-card", "--seed", "1", "--cards", "2"]).is_err());
    }

    #[test]
    fn random_suit_option() {
        let args = Args::try_parse_from(["high-card", "--suit", "random"]).unwrap();
        assert_eq!(SuitChoice::from(args.suit), SuitChoice::Random);
    }
}
