//! чтение "запеченных" таблиц свойств Unicode: категории символов, преобразование регистра,
//! канонические декомпозиции / композиции, однобайтовые кодовые страницы
//!
//! таблицы - плоские массивы u8 / u32 / u64, поиск - бинарный

#![no_std]

pub use case::CaseMappingData;
pub use class::CharClassData;
pub use codepage::CodepageData;
pub use normalization::NormalizationData;

mod case;
mod class;
mod codepage;
mod normalization;
