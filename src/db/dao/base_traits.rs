/// Records keyed by a storage-assigned integer id. Zero marks a record that
/// has not been persisted yet.
pub trait HasId {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    fn is_new(&self) -> bool {
        self.id() <= 0
    }
}

pub trait HasIdColumn: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
}
