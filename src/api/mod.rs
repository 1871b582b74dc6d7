//! API service modules for BrickLink endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the BrickLink store API.

mod categories;
mod colors;
mod inventories;
mod items;

pub use categories::CategoriesService;
pub use colors::ColorsService;
pub use inventories::InventoriesService;
pub use items::ItemsService;
