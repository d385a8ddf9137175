use sea_orm::entity::prelude::*;

use crate::db::dao::{HasId, HasIdColumn};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(default_value = false)]
    pub completed: bool,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// An unsaved todo; storage assigns the id.
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: 0,
            title: title.into(),
            completed,
        }
    }
}

impl HasId for Model {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl HasIdColumn for Entity {
    fn id_column() -> Self::Column {
        Column::Id
    }
}
