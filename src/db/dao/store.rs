use std::sync::Arc;

use async_trait::async_trait;

use super::DaoResult;
use crate::db::entities::Todo;

/// Persistence capability over a single record type, keyed by integer id.
///
/// Lookups never fail for a missing record: `find_by_id` returns `None` and
/// `delete_by_id` is a no-op. Errors are reserved for the backing store
/// itself.
#[async_trait]
pub trait Store<M>: Send + Sync
where
    M: Send + 'static,
{
    async fn find_all(&self) -> DaoResult<Vec<M>>;

    async fn find_by_id(&self, id: i64) -> DaoResult<Option<M>>;

    /// Inserts when the record is new, otherwise replaces the row with the
    /// same id (inserting it under that id when absent).
    async fn save(&self, record: M) -> DaoResult<M>;

    async fn delete_by_id(&self, id: i64) -> DaoResult<()>;
}

pub type TodoStore = Arc<dyn Store<Todo>>;
