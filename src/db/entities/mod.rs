#[allow(unused_imports)]
pub mod prelude {
    pub use super::todo::Entity as Todos;
}

pub mod todo;

pub type Todo = todo::Model;
