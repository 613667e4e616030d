//! A storefront search session: results and suggestions with request state.

use std::sync::Arc;
use std::time::Duration;

use pricepal_catalog::mapper::ProductMapper;
use pricepal_catalog::product::Product;
use pricepal_catalog::suggestion::Suggestion;
use pricepal_data::{FetchError, ProductSource};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

use crate::debounce::debounce;
use crate::search::SearchService;
use crate::sequence::{RequestSequencer, RequestTicket};
use crate::state::RequestView;
use crate::suggest::SuggestionService;

/// Owns the request state for one search box and its results area.
///
/// Views are published over `watch` channels; subscribers always see the
/// outcome of the most recently issued request, never a stale one.
pub struct SearchSession<S> {
    search: SearchService<S>,
    suggestions: SuggestionService<S>,
    results_seq: RequestSequencer,
    suggestions_seq: RequestSequencer,
    results_tx: watch::Sender<RequestView<Product>>,
    suggestions_tx: watch::Sender<RequestView<Suggestion>>,
}

impl<S: ProductSource + Clone> SearchSession<S> {
    /// Create a session whose services share `source`.
    pub fn new(source: S, mapper: ProductMapper) -> Self {
        Self::from_services(
            SearchService::new(source.clone(), mapper),
            SuggestionService::new(source),
        )
    }
}

impl<S: ProductSource> SearchSession<S> {
    /// Create a session from configured services.
    pub fn from_services(search: SearchService<S>, suggestions: SuggestionService<S>) -> Self {
        let (results_tx, _) = watch::channel(RequestView::default());
        let (suggestions_tx, _) = watch::channel(RequestView::default());
        Self {
            search,
            suggestions,
            results_seq: RequestSequencer::new(),
            suggestions_seq: RequestSequencer::new(),
            results_tx,
            suggestions_tx,
        }
    }

    /// The search service.
    pub fn search_service(&self) -> &SearchService<S> {
        &self.search
    }

    /// The suggestion service.
    pub fn suggestion_service(&self) -> &SuggestionService<S> {
        &self.suggestions
    }

    /// Watch the results view.
    pub fn subscribe_results(&self) -> watch::Receiver<RequestView<Product>> {
        self.results_tx.subscribe()
    }

    /// Watch the suggestions view.
    pub fn subscribe_suggestions(&self) -> watch::Receiver<RequestView<Suggestion>> {
        self.suggestions_tx.subscribe()
    }

    /// Current results view.
    pub fn results(&self) -> RequestView<Product> {
        self.results_tx.borrow().clone()
    }

    /// Current suggestions view.
    pub fn suggestions(&self) -> RequestView<Suggestion> {
        self.suggestions_tx.borrow().clone()
    }

    /// Submit a search.
    ///
    /// A blank query resets the results to idle without a lookup. Returns
    /// the view as it stands afterwards, which belongs to a newer query if
    /// this one was overtaken.
    pub async fn submit(&self, query: &str) -> RequestView<Product> {
        let ticket = self.results_seq.issue();

        if query.trim().is_empty() {
            self.results_tx.send_if_modified(|view| view.reset(ticket));
            return self.results();
        }

        self.results_tx.send_if_modified(|view| view.begin(ticket, query));
        let outcome = self.search.try_search(query).await;
        settle(&self.results_seq, &self.results_tx, ticket, query, outcome);
        self.results()
    }

    /// Look up suggestions. A blank query settles on the popular list.
    pub async fn suggest(&self, query: &str) -> RequestView<Suggestion> {
        let ticket = self.suggestions_seq.issue();

        self.suggestions_tx.send_if_modified(|view| view.begin(ticket, query));
        let outcome = self.suggestions.try_suggest(query, false).await;
        settle(&self.suggestions_seq, &self.suggestions_tx, ticket, query, outcome);
        self.suggestions()
    }
}

impl<S: ProductSource + 'static> SearchSession<S> {
    /// Feed raw input values through a debounce and look up suggestions for
    /// each settled value.
    ///
    /// Lookups run concurrently; tickets keep the newest one visible. The
    /// returned task ends once `input` closes and every lookup has settled.
    pub fn drive_input(
        self: &Arc<Self>,
        input: mpsc::UnboundedReceiver<String>,
        delay: Duration,
    ) -> JoinHandle<()> {
        let session = Arc::clone(self);
        let mut settled = debounce(input, delay);

        tokio::spawn(async move {
            let mut lookups = JoinSet::new();

            while let Some(query) = settled.recv().await {
                tracing::debug!(%query, "input settled");
                let session = Arc::clone(&session);
                lookups.spawn(async move {
                    session.suggest(&query).await;
                });
                while lookups.try_join_next().is_some() {}
            }

            while lookups.join_next().await.is_some() {}
        })
    }
}

fn settle<T>(
    sequencer: &RequestSequencer,
    tx: &watch::Sender<RequestView<T>>,
    ticket: RequestTicket,
    query: &str,
    outcome: Result<Vec<T>, FetchError>,
) {
    if !sequencer.is_latest(ticket) {
        tracing::warn!(%ticket, query, "stale response dropped");
        return;
    }

    let outcome = outcome.map_err(|e| {
        tracing::error!(%ticket, query, kind = e.kind(), error = %e, "request failed");
        e.to_string()
    });
    tx.send_if_modified(|view| view.finish(ticket, outcome));
}
