pub mod connection;
pub mod dao;
pub mod entities;

use std::sync::Arc;

use crate::config::DatabaseConfig;

use self::{
    dao::{DaoBase, MemoryStore, TodoDao, TodoStore},
    entities::Todo,
};

/// Picks the todo store: the configured database, or process memory when no
/// database is configured.
pub async fn open_todo_store(cfg: Option<&DatabaseConfig>) -> anyhow::Result<TodoStore> {
    match cfg {
        Some(cfg) => {
            let db = connection::connect(cfg).await?;
            tracing::info!("storing todos in the configured database");
            Ok(Arc::new(TodoDao::new(&db)))
        }
        None => {
            tracing::warn!("no database configured; todos are kept in memory only");
            Ok(Arc::new(MemoryStore::<Todo>::new()))
        }
    }
}
