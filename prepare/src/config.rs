use std::collections::BTreeSet;

use unicode_tables_source::properties::LAST_CODEPOINT;

lazy_static! {
    /// последние кодпоинты диапазонов, которые в UnicodeData.txt записаны только первой и последней
    /// строкой (<CJK Ideograph Extension A, First> .. <CJK Ideograph Extension A, Last> и т.п.).
    /// между ними нет записей, но кодпоинты диапазона назначены - поэтому разрыв перед ними
    /// разрывом не считается
    pub static ref KNOWN_RANGE_ENDS: BTreeSet<u32> = [
        0x4DB5, 0x9FCC, 0xD7A3, 0xDB7F, 0xDBFF, 0xDFFF, 0xF8FF, 0x2A6D6, 0x2B734, 0x2B81D,
        0xFFFFD, 0x10FFFD,
    ]
    .into_iter()
    .collect();
}

/// параметры построения таблицы диапазонов категорий
#[derive(Debug, Clone)]
pub struct RangeConfig
{
    /// последний кодпоинт, покрываемый таблицей
    pub limit: u32,
    /// концы диапазонов, перед которыми разрыв в записях считается непрерывностью
    pub known_range_ends: BTreeSet<u32>,
}

impl Default for RangeConfig
{
    fn default() -> Self
    {
        Self {
            limit: LAST_CODEPOINT,
            known_range_ends: KNOWN_RANGE_ENDS.clone(),
        }
    }
}

/// параметры построения всех таблиц
#[derive(Debug, Clone, Default)]
pub struct PrepareConfig
{
    pub ranges: RangeConfig,
}
