//! Calculator session.
//!
//! Owns one [`CalculatorState`] and one [`HistoryStore`], feeding keypad
//! symbols through the pure reducer and recording finished computations.
//! Persistence is best effort: write failures are logged and otherwise
//! ignored, so a broken disk never blocks arithmetic.

use crate::config::Settings;
use crate::core::{reduce, CalculatorState, History, Symbol};
use crate::storage::KeyValueStore;
use crate::store::HistoryStore;
use tracing::{debug, warn};

/// A running calculator bound to a history store.
///
/// # Example
///
/// ```rust
/// use tally::calculator::Calculator;
/// use tally::config::Settings;
/// use tally::storage::MemoryStore;
///
/// let mut calc = Calculator::open(MemoryStore::new(), &Settings::default());
/// for tap in ["7", "×", "6", "="] {
///     calc.tap(tap);
/// }
///
/// assert_eq!(calc.display(), "42");
/// assert_eq!(calc.history().items()[0].expression, "7 × 6");
/// ```
#[derive(Debug)]
pub struct Calculator<S: KeyValueStore> {
    state: CalculatorState,
    store: HistoryStore<S>,
}

impl<S: KeyValueStore> Calculator<S> {
    /// Open a session over `storage`, loading history per `settings`.
    pub fn open(storage: S, settings: &Settings) -> Self {
        Self::with_store(HistoryStore::open(
            storage,
            settings.history_key.clone(),
            settings.encoding,
        ))
    }

    /// Start a session around an already opened history store.
    pub fn with_store(store: HistoryStore<S>) -> Self {
        Self {
            state: CalculatorState::default(),
            store,
        }
    }

    /// Handle a keypad label. Unknown labels are ignored.
    pub fn tap(&mut self, label: &str) {
        match label.parse::<Symbol>() {
            Ok(symbol) => self.press(symbol),
            Err(e) => debug!(error = %e, "ignoring tap"),
        }
    }

    /// Apply one symbol and record the computation `=` may have finished.
    pub fn press(&mut self, symbol: Symbol) {
        let step = reduce(&self.state, symbol);
        debug!(%symbol, display = %step.state.display, "reduced");
        self.state = step.state;

        if let Some(computation) = step.completed {
            if let Err(e) = self.store.append(computation) {
                warn!(error = %e, "history not saved");
            }
        }
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Past computations, newest first.
    pub fn history(&self) -> &History {
        self.store.history()
    }

    /// Remove every history entry.
    pub fn clear_history(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "cleared history not saved");
        }
    }

    /// Remove the history entries at the given positions.
    pub fn delete_history(&mut self, offsets: &[usize]) {
        if let Err(e) = self.store.delete(offsets) {
            warn!(error = %e, "history deletion not saved");
        }
    }

    /// End the session, returning the storage backend.
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
