use sea_orm::entity::prelude::*;

/// Generic document row backing the remote store
///
/// Every collection shares this table; records are addressed by
/// (collection, doc_id) and `payload` holds the serialized entity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub doc_id: String,
    pub payload: String,
    /// Per-key write counter; the store's authoritative ordering
    pub revision: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
