pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command};
pub use config::FileConfig;

pub use crate::core::calendar::{classify, DayKind};
pub use crate::core::catalog::{featured, merge, priciest};
pub use crate::core::compute::{measure, square_later};
pub use crate::core::text::{render, CaseMode};
pub use domain::model::{Book, Describe, Employee, Manager, Product, Scalar, StaffRecord};
pub use utils::error::{Result, ShopkitError};
