//! Latest-wins coordination for overlapping searches.
//!
//! Searches overlap freely: the UI fires one per keystroke and never waits.
//! Only the most recently issued, non-cancelled request may reach the view
//! state, so each new request cancels its predecessor's token and carries a
//! monotonically increasing generation the single writer context checks
//! before applying a result.

use tokio_util::sync::CancellationToken;

/// Monotonically increasing id for one issued search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

#[derive(Debug, Default)]
pub struct SearchSession {
    next: u64,
    current: Option<(Generation, CancellationToken)>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request generation, cancelling the previous one.
    ///
    /// The returned token must be passed to the client call it was issued
    /// for; results from any older generation are stale by definition.
    pub fn begin(&mut self) -> (Generation, CancellationToken) {
        if let Some((_, token)) = self.current.take() {
            token.cancel();
        }
        self.next += 1;
        let generation = Generation(self.next);
        let token = CancellationToken::new();
        self.current = Some((generation, token.clone()));
        (generation, token)
    }

    /// Whether `generation` is still the newest issued request.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.as_ref().map(|(g, _)| *g) == Some(generation)
    }

    /// Cancels the in-flight request, if any, without starting a new one.
    pub fn cancel(&mut self) {
        if let Some((_, token)) = self.current.take() {
            token.cancel();
        }
    }
}
