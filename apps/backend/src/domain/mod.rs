//! Domain layer: city rules, dates and paging, free of HTTP and DB types.

pub mod city;
pub mod established;
pub mod pagination;

pub use city::{CityDraft, CityPatch, CityPatchDraft, NewCity};
pub use established::EstablishedDate;
pub use pagination::{Page, PageRequest};
