pub mod base;
pub mod base_traits;
pub mod error;
pub mod memory;
pub mod store;
pub mod todo_dao;

pub use base::DaoBase;
pub use base_traits::{HasId, HasIdColumn};
pub use error::{DaoLayerError, DaoResult};
pub use memory::MemoryStore;
pub use store::{Store, TodoStore};
pub use todo_dao::TodoDao;
