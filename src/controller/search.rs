//! Search execution

use crate::model::{ActiveSection, AppModel, SearchTicket};
use super::AppController;

impl AppController {
    /// Run one search to completion.
    ///
    /// The model lock is released while the request is in flight so the UI
    /// keeps drawing and accepting keys. A result that arrives after a newer
    /// search started is dropped by the model.
    pub async fn perform_search(&self, query: &str) {
        let ticket = {
            let mut model = self.model.lock().await;
            match Self::begin(&mut model, query) {
                Some(ticket) => ticket,
                None => return,
            }
        };
        self.complete_search(ticket).await;
    }

    /// Start a search on the model the caller already holds and finish it on
    /// its own task.
    ///
    /// Loading and the sequence number are set before this returns, so
    /// searches submitted back to back are ordered by submission.
    pub fn submit_search(&self, model: &mut AppModel, query: &str) {
        let Some(ticket) = Self::begin(model, query) else {
            return;
        };
        let controller = self.clone();
        tokio::spawn(async move {
            controller.complete_search(ticket).await;
        });
    }

    fn begin(model: &mut AppModel, query: &str) -> Option<SearchTicket> {
        let ticket = model.begin_search(query);
        match &ticket {
            Some(ticket) => {
                tracing::debug!(term = ticket.term(), seq = ticket.seq(), "Performing search")
            }
            None => tracing::debug!("Ignoring blank search"),
        }
        ticket
    }

    /// Fetch the ticket's term and publish the outcome
    pub async fn complete_search(&self, ticket: SearchTicket) {
        let outcome = self.catalog.search(ticket.term()).await;

        let outcome = match outcome {
            Ok(records) => {
                tracing::info!(
                    term = ticket.term(),
                    results = records.len(),
                    "Search completed successfully"
                );
                Ok(records)
            }
            Err(e) => {
                tracing::error!(term = ticket.term(), error = %e, "Search failed");
                Err(e.failure())
            }
        };

        let mut model = self.model.lock().await;
        let has_results = matches!(&outcome, Ok(records) if !records.is_empty());
        if model.finish_search(&ticket, outcome)
            && has_results
            && model.active_section() == ActiveSection::SearchButton
        {
            model.set_active_section(ActiveSection::Results);
        }
    }
}
