use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DaoResult, HasId, Store};

/// In-process store backed by an ordered map. Ids are handed out from a
/// counter that never goes backwards, so deleted ids are not reused.
pub struct MemoryStore<M> {
    state: RwLock<MemoryState<M>>,
}

struct MemoryState<M> {
    rows: BTreeMap<i64, M>,
    last_id: i64,
}

impl<M> MemoryStore<M> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<M> Default for MemoryStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<M> Store<M> for MemoryStore<M>
where
    M: HasId + Clone + Send + Sync + 'static,
{
    async fn find_all(&self) -> DaoResult<Vec<M>> {
        let state = self.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> DaoResult<Option<M>> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn save(&self, mut record: M) -> DaoResult<M> {
        let mut state = self.state.write().await;
        if record.is_new() {
            state.last_id += 1;
            record.set_id(state.last_id);
        } else {
            state.last_id = state.last_id.max(record.id());
        }
        state.rows.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> DaoResult<()> {
        self.state.write().await.rows.remove(&id);
        Ok(())
    }
}
