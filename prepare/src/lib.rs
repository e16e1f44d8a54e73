//! построение компактных таблиц свойств Unicode: категорий символов, преобразования регистра,
//! канонических декомпозиций / композиций и однобайтовых кодовых страниц

#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod encode;

pub mod config;
pub mod error;
pub mod output;
pub mod tables;

pub use config::{PrepareConfig, RangeConfig};
pub use error::{PrepareError, Result, TableKind};
pub use tables::{prepare, PreparedTables};
