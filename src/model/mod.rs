//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (focus, song records, release dates)
//! - `grouping`: Genre bucketing of search results
//! - `status`: Search status and fixed status messages
//! - `catalog_client`: Song catalog HTTP client
//! - `app_model`: Main application model with state management methods

mod types;
mod grouping;
mod status;
mod catalog_client;
mod app_model;

pub use types::{parse_release_year, ActiveSection, SongRecord};

pub use grouping::{group_by_genre, GenreGrouping, GenreSection, FALLBACK_GENRE};

pub use status::{
    SearchFailure, SearchResults, SearchStatus,
    CONNECTION_MESSAGE, EMPTY_MESSAGE, LOADING_MESSAGE, PROMPT_MESSAGE,
    UNEXPECTED_RESPONSE_MESSAGE,
};

pub use catalog_client::{
    decode_results, search_url, CatalogEndpoint, CatalogError, CatalogSource, ItunesCatalog,
};

pub use app_model::{AppModel, SearchTicket};
