//! Products, shelves and the shelf registry.

mod product;
mod registry;

pub use product::Product;
pub use registry::{Shelf, ShelfRegistry, Shelves};
