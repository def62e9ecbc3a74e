use std::fmt;

/// The randomness provider could not produce a card value.
///
/// A round that hits this error is discarded; the score is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomSourceError {
    /// A scripted source has no values left.
    Exhausted,
    /// The operating system refused to hand out entropy.
    Entropy(String),
}

impl fmt::Display for RandomSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomSourceError::Exhausted => write!(f, "the card source has run out of cards"),
            RandomSourceError::Entropy(reason) => {
                write!(f, "could not seed the card source: {}", reason)
            }
        }
    }
}

impl std::error::Error for RandomSourceError {}

/// A value outside `1..=13` was used where a card value was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCardValueError(pub u8);

impl fmt::Display for InvalidCardValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a card value (expected 1–13)", self.0)
    }
}

impl std::error::Error for InvalidCardValueError {}
