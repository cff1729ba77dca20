pub mod cities_create;
pub mod cities_list;
pub mod cities_search;
pub mod cities_update_delete;
pub mod error_shape;
