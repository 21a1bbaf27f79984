//! Background loading into a [`CollectionStore`].
//!
//! The fetch runs on a worker thread and sends `(ticket, result)` back over a
//! channel. The owning flow redeems it with [`PendingLoad::finish`], which goes
//! through [`CollectionStore::finish_load`], so an older request that answers
//! late is discarded instead of overwriting newer data.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use board_model::Record;
use board_query::{CollectionStore, LoadOutcome, LoadTicket};
use tracing::{debug, warn};

use crate::error::{FetchError, Result};

/// A load in flight.
#[derive(Debug)]
pub struct PendingLoad<R> {
    ticket: LoadTicket,
    receiver: Receiver<(LoadTicket, Result<Vec<R>>)>,
}

/// Moves `store` to `Loading` and runs `fetch` on a worker thread.
pub fn spawn_load<R, F>(store: &mut CollectionStore<R>, fetch: F) -> PendingLoad<R>
where
    R: Record + Send + 'static,
    F: FnOnce() -> Result<Vec<R>> + Send + 'static,
{
    let ticket = store.begin_load();
    let (sender, receiver) = mpsc::channel();
    debug!(kind = R::KIND, generation = ticket.generation(), "load started");
    thread::spawn(move || {
        // the receiver may already be gone if the caller gave up
        let _ = sender.send((ticket, fetch()));
    });
    PendingLoad { ticket, receiver }
}

impl<R: Record> PendingLoad<R> {
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Blocks until the worker answers and returns its raw result.
    pub fn wait(self) -> (LoadTicket, Result<Vec<R>>) {
        match self.receiver.recv() {
            Ok(delivered) => delivered,
            Err(_) => (
                self.ticket,
                Err(FetchError::Network("load worker exited early".to_string())),
            ),
        }
    }

    /// Waits for the result and applies it to `store`. Failures are stored
    /// as display text, using `fallback` when the server sent no message.
    pub fn finish(self, store: &mut CollectionStore<R>, fallback: &str) -> LoadOutcome {
        let (ticket, result) = self.wait();
        let result = result.map_err(|err| {
            warn!(kind = R::KIND, error = %err, "load failed");
            err.display_message(fallback)
        });
        store.finish_load(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use board_model::{Company, Industry, RecordId};
    use board_query::LoadState;

    use super::*;

    fn company(id: u64, name: &str) -> Company {
        Company {
            id: RecordId::new(id),
            name: name.to_string(),
            industry: Industry::Finance,
            website: String::new(),
            headquarters: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn successful_load_populates_the_store() {
        let mut store = CollectionStore::default();
        let pending = spawn_load(&mut store, || Ok(vec![company(1, "A"), company(1, "B")]));
        assert!(store.state().is_loading());

        assert_eq!(pending.finish(&mut store, "fallback"), LoadOutcome::Applied);
        assert_eq!(store.state(), &LoadState::Loaded);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "B");
    }

    #[test]
    fn failure_is_stored_as_display_text() {
        let mut store: CollectionStore<Company> = CollectionStore::default();
        let pending = spawn_load(&mut store, || {
            Err(FetchError::Server {
                status: 500,
                message: None,
            })
        });
        pending.finish(&mut store, "Unable to load companies. Please try again.");
        assert_eq!(
            store.state().error_message(),
            Some("Unable to load companies. Please try again.")
        );
    }

    #[test]
    fn slow_stale_response_does_not_overwrite_fresh_data() {
        let mut store = CollectionStore::default();
        let (release, gate) = mpsc::channel::<()>();

        let slow = spawn_load(&mut store, move || {
            let _ = gate.recv_timeout(Duration::from_secs(5));
            Ok(vec![company(1, "Slow")])
        });
        let fresh = spawn_load(&mut store, || Ok(vec![company(2, "Fresh")]));

        assert_eq!(fresh.finish(&mut store, "fallback"), LoadOutcome::Applied);
        let _ = release.send(());
        assert_eq!(slow.finish(&mut store, "fallback"), LoadOutcome::Stale);

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "Fresh");
    }
}
