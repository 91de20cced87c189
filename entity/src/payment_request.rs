use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub store_item_id: i32,
    pub player_name: String,
    pub contact: String,
    pub note: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store_item::Entity",
        from = "Column::StoreItemId",
        to = "super::store_item::Column::Id"
    )]
    StoreItem,
}

impl Related<super::store_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoreItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
