use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, QueryFilter};

use super::base_traits::{IdentifiedModel, NaturalKeyEntity};

/// Resolves a name to the id of the row carrying it. An unknown name is
/// `Ok(None)`, not an error. When several rows share the name (product names
/// are not unique) the first stored row wins.
pub async fn find_id<E, C>(db: &C, key: &str) -> Result<Option<i32>, DbErr>
where
    E: NaturalKeyEntity,
    E::Model: IdentifiedModel,
    C: ConnectionTrait,
{
    let model = E::find()
        .filter(E::natural_key_column().eq(key))
        .one(db)
        .await?;
    Ok(model.map(|model| model.id()))
}
