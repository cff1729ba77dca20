use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub state: String,
    pub country: String,
    #[sea_orm(column_name = "tourist_rating")]
    pub tourist_rating: i32,
    /// Normalized `[-]YYYY-MM-DDTHH:MM:SS.mmmZ` text; SQLite has no date
    /// type that covers years before 0000.
    #[sea_orm(column_name = "date_established")]
    pub date_established: String,
    #[sea_orm(column_name = "estimated_population")]
    pub estimated_population: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
