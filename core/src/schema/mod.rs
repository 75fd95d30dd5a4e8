//! Table and column descriptors.

mod column;
mod entity;
mod table;

pub use column::Column;
pub use entity::Entity;
pub use table::{Table, TableBuilder};
