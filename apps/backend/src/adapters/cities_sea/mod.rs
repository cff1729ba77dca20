//! SeaORM adapter for the cities table.

use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::cities;

pub mod dto;

pub use dto::{CityCreate, CityUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

fn active_from_create(dto: CityCreate) -> cities::ActiveModel {
    cities::ActiveModel {
        id: Set(dto.id),
        name: Set(dto.name),
        state: Set(dto.state),
        country: Set(dto.country),
        tourist_rating: Set(dto.tourist_rating),
        date_established: Set(dto.date_established),
        estimated_population: Set(dto.estimated_population),
        created_at: Set(dto.now),
        updated_at: Set(dto.now),
    }
}

pub async fn create_city<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CityCreate,
) -> Result<cities::Model, sea_orm::DbErr> {
    active_from_create(dto).insert(conn).await
}

pub async fn insert_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dtos: Vec<CityCreate>,
) -> Result<u64, sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(0);
    }
    let count = dtos.len() as u64;
    cities::Entity::insert_many(dtos.into_iter().map(active_from_create))
        .exec_without_returning(conn)
        .await?;
    Ok(count)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<cities::Model>, sea_orm::DbErr> {
    cities::Entity::find_by_id(id.to_string()).one(conn).await
}

/// Rows with id strictly greater than `after`, ascending, at most `fetch` rows.
pub async fn list_after<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    after: Option<&str>,
    fetch: u64,
) -> Result<Vec<cities::Model>, sea_orm::DbErr> {
    let mut query = cities::Entity::find();
    if let Some(cursor) = after {
        query = query.filter(cities::Column::Id.gt(cursor));
    }
    query
        .order_by_asc(cities::Column::Id)
        .limit(fetch)
        .all(conn)
        .await
}

/// Escape LIKE metacharacters so user input only matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Substring match on name. SQLite LIKE is case-insensitive for ASCII.
pub async fn search_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    needle: &str,
) -> Result<Vec<cities::Model>, sea_orm::DbErr> {
    let pattern = format!("%{}%", escape_like(needle));
    cities::Entity::find()
        .filter(cities::Column::Name.like(LikeExpr::new(pattern).escape('\\')))
        .order_by_asc(cities::Column::Id)
        .all(conn)
        .await
}

/// Apply `dto` to an existing row. Returns `None` when the row is gone.
pub async fn update_city<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    dto: CityUpdate,
    now: time::OffsetDateTime,
) -> Result<Option<cities::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active: cities::ActiveModel = existing.into();
    if let Some(rating) = dto.tourist_rating {
        active.tourist_rating = Set(rating);
    }
    if let Some(date) = dto.date_established {
        active.date_established = Set(date);
    }
    if let Some(population) = dto.estimated_population {
        active.estimated_population = Set(population);
    }
    active.updated_at = Set(now);

    active.update(conn).await.map(Some)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_city<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = cities::Entity::delete_by_id(id.to_string())
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Which of `names` already exist, compared exactly.
pub async fn existing_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    names: &[String],
) -> Result<Vec<String>, sea_orm::DbErr> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    cities::Entity::find()
        .select_only()
        .column(cities::Column::Name)
        .filter(cities::Column::Name.is_in(names.iter().cloned()))
        .into_tuple::<String>()
        .all(conn)
        .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::PaginatorTrait;
    cities::Entity::find().count(conn).await
}
