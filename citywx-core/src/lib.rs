//! Core library for the `citywx` weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider client and its error taxonomy
//! - The search controller, recent-search history, and temperature
//!   unit preference
//!
//! It is used by `citywx-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod provider;
pub mod search;
pub mod units;

pub use config::Config;
pub use error::FetchError;
pub use history::SearchHistory;
pub use model::{Location, WeatherReport};
pub use provider::{WeatherApiProvider, WeatherProvider};
pub use search::{RequestState, SearchController, SearchTicket};
pub use units::TemperatureUnit;
