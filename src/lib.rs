#[macro_use]
mod logging;

mod iter;
mod rhombus;
mod traits;
mod vector;

pub use iter::{ArrayCursor, Iter};
pub use rhombus::{ParseShapeError, Point, Rhombus};
pub use traits::CollectArray;
pub use vector::{ArrayError, DynamicArray};

#[cfg(test)]
pub mod dropflag;
