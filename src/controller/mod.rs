//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and runs searches against the catalog, writing outcomes into the model.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search execution and result publishing

mod input;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, CatalogSource};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) catalog: Arc<dyn CatalogSource>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self { model, catalog }
    }
}
