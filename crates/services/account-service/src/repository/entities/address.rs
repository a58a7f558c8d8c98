//! Address database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Address;

/// One row per user; the owner's id is the primary key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub address_line: String,
    pub city: String,
    pub locality: String,
    pub administrative_area_level_1: String,
    pub country: String,
    pub postal_code: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Address {
    fn from(model: Model) -> Self {
        Address {
            user_id: model.user_id,
            address_line: model.address_line,
            city: model.city,
            locality: model.locality,
            administrative_area_level_1: model.administrative_area_level_1,
            country: model.country,
            postal_code: model.postal_code,
        }
    }
}
