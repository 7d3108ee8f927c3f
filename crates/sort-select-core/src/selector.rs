use crate::error::{SelectError, SelectResult};
use crate::strategy::Strategy;

/// Maps the text of a commit event to a strategy.
///
/// Only the first character is considered and matching is case-sensitive.
pub fn parse_selector(input: &str) -> SelectResult<Strategy> {
    match input.chars().next() {
        Some(c) => Strategy::try_from(c),
        None => Err(SelectError::InvalidSelection { input: None }),
    }
}

impl TryFrom<char> for Strategy {
    type Error = SelectError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'B' => Ok(Strategy::Bubble),
            'S' => Ok(Strategy::Selection),
            other => Err(SelectError::InvalidSelection { input: Some(other) }),
        }
    }
}
