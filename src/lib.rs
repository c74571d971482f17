//! genre-grid: search a public song catalog from the terminal and browse
//! the results grouped by genre.
//!
//! - `config`: command-line and environment configuration
//! - `logging`: file-based tracing setup
//! - `model`: screen state, genre grouping and the catalog client
//! - `controller`: key handling and search execution
//! - `view`: ratatui rendering of the model

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;
