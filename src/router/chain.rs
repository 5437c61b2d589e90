//! Ordered handler chain with an explicit cursor.
//!
//! The handler list is built once per dispatch and never mutated; advancing
//! only moves the cursor. Once the cursor passes the end, advancing yields
//! nothing, which is what makes repeated `next()` calls harmless.

use super::handler::BoxedHandler;
use std::fmt;
use std::sync::Arc;

/// The not-yet-invoked remainder of a dispatch's handlers.
pub struct Chain<C> {
    handlers: Arc<[BoxedHandler<C>]>,
    cursor: usize,
}

impl<C> Chain<C> {
    /// Build a chain positioned before its first handler.
    pub fn new(handlers: Vec<BoxedHandler<C>>) -> Self {
        Self {
            handlers: handlers.into(),
            cursor: 0,
        }
    }

    /// Take the next handler, moving the cursor past it.
    pub(crate) fn advance(&mut self) -> Option<BoxedHandler<C>> {
        let handler = self.handlers.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(handler)
    }

    /// Number of handlers not yet invoked.
    pub fn remaining(&self) -> usize {
        self.handlers.len() - self.cursor
    }

    /// Total number of handlers, invoked or not.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the chain has no handlers at all.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Whether every handler has been invoked.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.handlers.len()
    }
}

impl<C> fmt::Debug for Chain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("len", &self.handlers.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
