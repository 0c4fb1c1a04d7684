use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::notify::{Notification, Notifier};
use crate::table::Row;

/// Simulated latency between the click and the result.
pub const LOAD_DELAY: Duration = Duration::from_secs(2);
/// Chance, in percent, that a load ends in a simulated network error.
pub const FAILURE_PERCENT: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("a load is already in progress")]
    Busy,
    #[error("load ticket does not belong to the pending load")]
    StaleTicket,
    #[error("Network error: could not load data. Please try again.")]
    Network,
}

/// Produces a roll in `0..100`; rolls below [`FAILURE_PERCENT`] fail the load.
pub trait FailureSource {
    fn roll(&mut self) -> u8;
}

impl<F: FnMut() -> u8> FailureSource for F {
    fn roll(&mut self) -> u8 {
        self()
    }
}

/// Draws the roll from the random bits of a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidFailureSource;

impl FailureSource for UuidFailureSource {
    fn roll(&mut self) -> u8 {
        (Uuid::new_v4().as_u128() % 100) as u8
    }
}

/// Proof that a load was started; consumed when it completes.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    id: u64,
}

/// Data-loading page: the trigger is disabled while a load is pending.
pub struct DataLoader<S> {
    source: S,
    dataset: Vec<Row>,
    pending: Option<u64>,
    issued: u64,
    loaded: Option<Vec<Row>>,
}

impl<S: FailureSource> DataLoader<S> {
    pub fn new(dataset: Vec<Row>, source: S) -> Self {
        Self {
            source,
            dataset,
            pending: None,
            issued: 0,
            loaded: None,
        }
    }

    pub fn control_enabled(&self) -> bool {
        self.pending.is_none()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Rows from the last successful load.
    pub fn loaded(&self) -> Option<&[Row]> {
        self.loaded.as_deref()
    }

    pub fn begin(&mut self) -> Result<LoadTicket, LoadError> {
        if self.pending.is_some() {
            debug!("load trigger ignored while pending");
            return Err(LoadError::Busy);
        }
        self.issued += 1;
        self.pending = Some(self.issued);
        info!(ticket = self.issued, "load started");
        Ok(LoadTicket { id: self.issued })
    }

    /// Resolves the pending load and re-enables the trigger. Failures are not retried.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        notifier: &dyn Notifier,
    ) -> Result<Vec<Row>, LoadError> {
        if self.pending != Some(ticket.id) {
            return Err(LoadError::StaleTicket);
        }
        self.pending = None;

        let roll = self.source.roll();
        if roll < FAILURE_PERCENT {
            warn!(ticket = ticket.id, roll, "simulated network failure");
            notifier.notify(Notification::error(LoadError::Network.to_string()));
            return Err(LoadError::Network);
        }

        let rows = self.dataset.clone();
        info!(ticket = ticket.id, rows = rows.len(), "load finished");
        notifier.notify(Notification::success(format!("Loaded {} records", rows.len())));
        self.loaded = Some(rows.clone());
        Ok(rows)
    }

    pub async fn load(&mut self, notifier: &dyn Notifier) -> Result<Vec<Row>, LoadError> {
        let ticket = self.begin()?;
        tokio::time::sleep(LOAD_DELAY).await;
        self.complete(ticket, notifier)
    }
}
