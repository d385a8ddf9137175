use crate::{
    db::{dao::TodoStore, entities::Todo},
    error::AppError,
};

pub const TODO_NOT_FOUND: &str = "Todo not found";

#[derive(Clone)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.store.find_all().await?)
    }

    /// Fails with [`AppError::NotFound`] when no todo has this id.
    pub async fn find_by_id(&self, id: i64) -> Result<Todo, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(TODO_NOT_FOUND))
    }

    pub async fn save(&self, todo: Todo) -> Result<Todo, AppError> {
        Ok(self.store.save(todo).await?)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        Ok(self.store.delete_by_id(id).await?)
    }
}
