use tracing::{debug, warn};

use crate::{
    error::FetchError, history::SearchHistory, model::WeatherReport, provider::WeatherProvider,
};

/// Where the most recently dispatched lookup stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Handle for one dispatched lookup.
///
/// Each dispatch stamps a fresh sequence number; resolving with a
/// ticket older than the latest dispatch is discarded, so a slow early
/// response can never overwrite a later one.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    seq: u64,
    city: String,
}

impl SearchTicket {
    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Orchestrates user input, lookups, display state, and the recent
/// history. All mutation goes through [`dispatch`](Self::dispatch) and
/// [`resolve`](Self::resolve); rendering reads the accessors.
#[derive(Debug, Default)]
pub struct SearchController {
    input: String,
    state: RequestState,
    report: Option<WeatherReport>,
    history: SearchHistory,
    last_seq: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    /// Message of the latest failed lookup, if the latest lookup failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Result of the latest successful lookup, kept across failures.
    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Search trigger for the input field. Returns `None` without
    /// touching any state when the trimmed input is empty.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        let city = self.input.trim();
        if city.is_empty() {
            return None;
        }
        let city = city.to_string();
        Some(self.dispatch(city))
    }

    /// Search trigger for a known city string (a recent-entry click);
    /// the input field does not have to hold it.
    pub fn dispatch(&mut self, city: impl Into<String>) -> SearchTicket {
        let city = city.into();
        self.last_seq += 1;
        self.state = RequestState::Loading;
        debug!(%city, seq = self.last_seq, "dispatching weather lookup");

        SearchTicket {
            seq: self.last_seq,
            city,
        }
    }

    /// Apply a lookup outcome.
    ///
    /// Success stores the report, clears any error and the input
    /// field, and records the city. Failure keeps the previous report
    /// and history and stores the message for display. Returns `false`
    /// without changing anything when the ticket is stale.
    pub fn resolve(
        &mut self,
        ticket: SearchTicket,
        result: Result<WeatherReport, FetchError>,
    ) -> bool {
        if ticket.seq != self.last_seq {
            warn!(
                seq = ticket.seq,
                latest = self.last_seq,
                "discarding stale lookup result"
            );
            return false;
        }

        match result {
            Ok(report) => {
                self.report = Some(report);
                self.state = RequestState::Idle;
                self.input.clear();
                self.history.record(&ticket.city);
            }
            Err(err) => {
                self.state = RequestState::Failed(err.to_string());
            }
        }

        true
    }

    /// Run one lookup end to end: ask the provider, then resolve.
    pub async fn run(&mut self, provider: &dyn WeatherProvider, ticket: SearchTicket) -> bool {
        let result = provider.current(ticket.city()).await;
        self.resolve(ticket, result)
    }
}
