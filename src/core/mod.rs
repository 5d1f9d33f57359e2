pub mod calendar;
pub mod catalog;
pub mod compute;
pub mod text;

pub use crate::domain::model::{Book, Product, Scalar, StaffRecord};
pub use crate::utils::error::Result;
