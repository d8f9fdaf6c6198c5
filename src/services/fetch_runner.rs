//! Background fetch runner
//!
//! Runs page requests as tasks on the (single-threaded) runtime and hands
//! the results back to the event loop through a channel, so the screen
//! keeps redrawing while a request is in flight.

use crate::controller::LoadTicket;
use crate::model::character::PageResult;
use crate::services::api::{CharacterSource, FetchError};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A finished request, tagged with the ticket it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    pub ticket: LoadTicket,
    pub result: Result<PageResult, FetchError>,
}

pub struct FetchRunner {
    source: Arc<dyn CharacterSource>,
    tx: UnboundedSender<FetchCompletion>,
    /// Taken once by the event loop
    rx: Option<UnboundedReceiver<FetchCompletion>>,
}

impl FetchRunner {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            tx,
            rx: Some(rx),
        }
    }

    /// Hand the completion receiver to the event loop
    pub fn take_receiver(&mut self) -> Option<UnboundedReceiver<FetchCompletion>> {
        self.rx.take()
    }

    /// Start fetching `ticket.page` in the background.
    ///
    /// Must be called from within the tokio runtime.
    pub fn spawn(&self, ticket: LoadTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_page(ticket.page).await;
            // The loop may already be gone on shutdown
            let _ = tx.send(FetchCompletion { ticket, result });
        });
    }
}
