use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, TransactionTrait,
    sea_query::OnConflict,
};

use super::{DaoBase, DaoLayerError, DaoResult, HasId, Store};
use crate::db::entities::{Todo, prelude::Todos, todo};

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoDao {
    type Entity = Todos;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoDao {
    async fn insert(&self, todo: Todo) -> DaoResult<Todo> {
        let model = todo::ActiveModel {
            id: NotSet,
            title: Set(todo.title),
            completed: Set(todo.completed),
        };
        self.create(model).await
    }

    /// Upserts under an explicit id. On Postgres the id sequence is moved past
    /// that id in the same transaction, so later inserts never collide with it.
    async fn replace(&self, todo: Todo) -> DaoResult<Todo> {
        let id = todo.id;
        let model = todo::ActiveModel {
            id: Set(todo.id),
            title: Set(todo.title),
            completed: Set(todo.completed),
        };

        let txn = self.db.begin().await?;
        let saved = Todos::insert(model)
            .on_conflict(
                OnConflict::column(todo::Column::Id)
                    .update_columns([todo::Column::Title, todo::Column::Completed])
                    .to_owned(),
            )
            .exec_with_returning(&txn)
            .await?;

        if txn.get_database_backend() == DatabaseBackend::Postgres {
            txn.execute_unprepared(&advance_id_sequence_sql(id)).await?;
        }
        txn.commit().await?;
        Ok(saved)
    }
}

/// Never moves the sequence backwards: `nextval` reserves the next value and
/// `setval` keeps whichever is larger, it or the explicit id.
fn advance_id_sequence_sql(id: i64) -> String {
    format!(
        "SELECT setval(pg_get_serial_sequence('todos', 'id'), \
         GREATEST(nextval(pg_get_serial_sequence('todos', 'id')) - 1, {id}, 1))"
    )
}

#[async_trait]
impl Store<Todo> for TodoDao {
    async fn find_all(&self) -> DaoResult<Vec<Todo>> {
        self.list().await
    }

    async fn find_by_id(&self, id: i64) -> DaoResult<Option<Todo>> {
        self.get(id).await
    }

    async fn save(&self, record: Todo) -> DaoResult<Todo> {
        if record.is_new() {
            self.insert(record).await
        } else {
            self.replace(record).await
        }
    }

    async fn delete_by_id(&self, id: i64) -> DaoResult<()> {
        let removed = self.remove(id).await?;
        tracing::debug!(id, removed, "deleted todo rows");
        Ok(())
    }
}
