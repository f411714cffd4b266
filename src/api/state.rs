use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Favourite, Recipe};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
#[derive(Default)]
pub struct AppStateInner {
    pub recipes: HashMap<Uuid, Recipe>,
    /// Insertion-ordered; one entry per (user, recipe) pair
    pub favourites: Vec<Favourite>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new empty application state
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner::default())),
        }
    }
}
