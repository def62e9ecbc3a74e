use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::card::CardValue;
use crate::error::{InvalidCardValueError, RandomSourceError};

/// Where card values come from.  Every draw is independent and uniform over
/// `1..=13`; there is no deck, so the same value can come up any number of
/// times in a row.
pub trait CardSource {
    fn draw(&mut self) -> Result<CardValue, RandomSourceError>;
}

impl<S: CardSource + ?Sized> CardSource for Box<S> {
    fn draw(&mut self) -> Result<CardValue, RandomSourceError> {
        (**self).draw()
    }
}

/// Uniform draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<SmallRng> {
    /// Reproducible source (the same seed always plays the same rounds).
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Result<Self, RandomSourceError> {
        SmallRng::try_from_os_rng()
            .map(Self::new)
            .map_err(|e| RandomSourceError::Entropy(e.to_string()))
    }
}

impl<R: Rng> CardSource for RngSource<R> {
    fn draw(&mut self) -> Result<CardValue, RandomSourceError> {
        Ok(self.rng.random())
    }
}

/// Replays a fixed list of values, then reports `Exhausted` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<CardValue>,
}

impl ScriptedSource {
    /// Build a script, rejecting the first value outside `1..=13`.
    pub fn new<I>(values: I) -> Result<Self, InvalidCardValueError>
    where
        I: IntoIterator<Item = u8>,
    {
        let values = values
            .into_iter()
            .map(CardValue::new)
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(ScriptedSource { values })
    }

    /// Values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl CardSource for ScriptedSource {
    fn draw(&mut self) -> Result<CardValue, RandomSourceError> {
        self.values.pop_front().ok_or(RandomSourceError::Exhausted)
    }
}
