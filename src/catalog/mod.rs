pub mod storage;
pub mod types;

pub use storage::{default_catalog_path, load_catalog, CatalogError};
pub use types::{Bike, BikeSpecs, Measure, Rejection, DEFAULT_COMFORT_LEVEL};
