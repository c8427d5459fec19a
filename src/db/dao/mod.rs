use sea_orm::{ActiveValue, Value};

pub mod base_traits;
pub mod catalog_dao;
pub mod natural_key;
pub mod product_dao;
pub mod summary;

pub use base_traits::{IdentifiedModel, NaturalKeyEntity};
pub use product_dao::{NewAssignment, NewProduct};
pub use summary::TableCount;

/// A missing value is left out of the INSERT so the NOT NULL column rejects
/// the row instead of storing a placeholder.
pub(crate) fn required<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    value.map_or(ActiveValue::NotSet, ActiveValue::Set)
}
