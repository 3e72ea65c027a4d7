use std::collections::VecDeque;
use std::convert::Infallible;

use thiserror::Error;

use crate::SquareInput;
use crate::coord::Coord;

/// Error when parsing an activation script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseError(String);

/// A scriptable activation source for tests and development.
///
/// Scripts are whitespace-separated algebraic squares; each square is one
/// activation signal. Raw signals, including the multi-square hit sets a
/// broken input layer might produce, can be queued directly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<Vec<Coord>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and queues a script of activations, e.g. `"e2 e4"`.
    ///
    /// A parse failure queues nothing.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let signals = script
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<Coord>()
                    .map(|coord| vec![coord])
                    .map_err(|_| ParseError(token.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.pending.extend(signals);
        Ok(())
    }

    /// Queues one raw signal, bypassing the script format.
    pub fn push_signal(&mut self, hits: Vec<Coord>) {
        self.pending.push_back(hits);
    }

    /// Hands every pending signal to `on_signal`, in order.
    pub fn drain<F>(&mut self, mut on_signal: F)
    where
        F: FnMut(Vec<Coord>),
    {
        while let Some(hits) = self.pending.pop_front() {
            on_signal(hits);
        }
    }
}

impl SquareInput for ScriptedInput {
    type Error = Infallible;

    fn next_signal(&mut self) -> Result<Option<Vec<Coord>>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}
