pub mod cities;

pub use cities::Entity as Cities;
pub use cities::Model as CityRow;
