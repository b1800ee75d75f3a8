//! Raffle controller: owns the active session and its store

use crate::session::{DrawSession, RevealOutcome, SessionError};
use crate::store::{SessionStore, StoreError};

/// Drives reveals for one session and snapshots it after each mutation.
///
/// Saves after a reveal are best effort: a failed write is logged and the
/// in-memory session carries on.
pub struct RaffleController<S: SessionStore> {
    session: DrawSession,
    store: S,
}

impl<S: SessionStore> RaffleController<S> {
    /// Take ownership of a freshly drawn session and write its first snapshot
    pub fn start(session: DrawSession, mut store: S) -> Result<Self, StoreError> {
        session.validate()?;
        store.save(&session)?;
        log::info!(
            "Started raffle session with {} winners across {} prize tiers",
            session.total(),
            session.prize_tiers.len()
        );
        Ok(Self { session, store })
    }

    /// Pick up the stored session, if any
    pub fn resume(store: S) -> Result<Option<Self>, StoreError> {
        Ok(store.load()?.map(|session| Self { session, store }))
    }

    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (DrawSession, S) {
        (self.session, self.store)
    }

    /// Reveal the next winner and persist the new state
    pub fn reveal_next(&mut self) -> RevealOutcome {
        let outcome = self.session.reveal();
        if let RevealOutcome::Revealed(_) = outcome {
            self.persist();
        }
        outcome
    }

    /// Toggle acknowledgement of a revealed winner and persist
    pub fn acknowledge(&mut self, index: usize) -> Result<bool, SessionError> {
        let acknowledged = self.session.acknowledge(index)?;
        self.persist();
        Ok(acknowledged)
    }

    /// Best-effort snapshot. Returns whether the write succeeded.
    pub fn persist(&mut self) -> bool {
        match self.store.save(&self.session) {
            Ok(()) => true,
            Err(e) => {
                log::error!(
                    "Failed to persist session at cursor {}: {}",
                    self.session.cursor,
                    e
                );
                false
            }
        }
    }
}
