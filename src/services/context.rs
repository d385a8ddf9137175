use crate::{db::dao::TodoStore, services::todo_service::TodoService, state::AppState};

#[derive(Clone)]
pub struct ServiceContext {
    todos: TodoStore,
}

impl ServiceContext {
    pub fn new(todos: TodoStore) -> Self {
        Self { todos }
    }

    pub fn from_state(state: &AppState) -> Self {
        state.services.clone()
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(self.todos.clone())
    }
}
