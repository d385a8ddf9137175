use std::sync::Arc;

use axum::Router;

use crate::{
    config::AppConfig,
    db::{
        dao::{MemoryStore, TodoStore},
        entities::Todo,
    },
    routes::app,
    services::ServiceContext,
    state::AppState,
};

pub fn memory_store() -> TodoStore {
    Arc::new(MemoryStore::<Todo>::new())
}

pub fn test_state(store: TodoStore) -> Arc<AppState> {
    AppState::new(AppConfig::default(), ServiceContext::new(store))
}

/// Fully layered app over a fresh in-memory store.
pub fn test_router() -> Router {
    app(test_state(memory_store()))
}
