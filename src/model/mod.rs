//! Pure data structures shared by the cart, catalog and checkout modules.

pub mod line_item;
pub mod money;
pub mod product;

pub use line_item::*;
pub use money::*;
pub use product::*;
