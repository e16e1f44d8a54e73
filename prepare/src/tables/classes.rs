use unicode_tables_source::properties::GeneralCategory;

use super::ranges::{category_of, ClosedRange, RangeTag};
use crate::encode::{pack32, CODEPOINT_BITS};
use crate::error::{PrepareError, Result, TableKind};

/// количество бит, отводимых под тег диапазона
pub const TAG_BITS: u32 = 11;
/// количество бит, отводимых под категорию
pub const CATEGORY_BITS: u32 = 5;
/// маркер диапазона с чередующимися прописными и строчными буквами
pub const MARKER_ALTERNATING: u64 = 1 << (CATEGORY_BITS * 2);
/// кодпоинты до этого значения (не включительно) записываются в отдельную таблицу, по байту на кодпоинт
pub const ASCII_LENGTH: u32 = 0x80;

/// упакованные таблицы категорий символов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClassTables
{
    /// категории кодпоинтов U+0000 ..= U+007F
    pub ascii: Vec<u8>,
    /// диапазоны, по возрастанию конечного кодпоинта
    pub ranges: Vec<u32>,
}

/// упаковать диапазоны:
///
///   xxxx xxxx  xxxx xxxx  xxxx xmuu  uuul llll
///
/// где:
///     xx.. - последний кодпоинт диапазона (21 бит)
///     m    - маркер чередования регистров
///     uu.. - категория всех кодпоинтов диапазона, кроме последнего (0 - нет)
///     ll.. - категория последнего кодпоинта диапазона
///
/// варианты:
///     простой тег     - 0 0000 lllll
///     составной тег   - 0 uuuuu 00000 (последний кодпоинт не назначен)
///     чередование     - 1 00000 lllll
pub fn encode_ranges(ranges: &[ClosedRange]) -> Result<CharClassTables>
{
    let table = TableKind::CharClasses;

    for pair in ranges.windows(2) {
        if pair[0].end >= pair[1].end {
            return Err(PrepareError::invariant(
                &table,
                pair[1].start,
                "range ends must be ascending",
            ));
        }
    }

    let packed = ranges
        .iter()
        .map(|range| {
            let tag = encode_tag(&table, range)?;

            pack32(
                &table,
                range.start,
                &[(range.end as u64, CODEPOINT_BITS), (tag, TAG_BITS)],
            )
        })
        .collect::<Result<Vec<u32>>>()?;

    let ascii = (0 .. ASCII_LENGTH)
        .map(|code| u8::from(category_of(ranges, code)))
        .collect();

    Ok(CharClassTables {
        ascii,
        ranges: packed,
    })
}

/// тег диапазона
fn encode_tag(table: &TableKind, range: &ClosedRange) -> Result<u64>
{
    let category = |category: GeneralCategory| category as u64;

    Ok(match range.tag {
        RangeTag::Single(gc) => category(gc),
        RangeTag::Compound(gc) => {
            // нулевая старшая категория означает простой тег
            if gc.is_unassigned() {
                return Err(PrepareError::invariant(
                    table,
                    range.start,
                    "compound range must start with an assigned category",
                ));
            }

            (category(gc) << CATEGORY_BITS) | category(GeneralCategory::Unassigned)
        }
        RangeTag::Alternating(gc) => {
            if gc.case_counterpart().is_none() {
                return Err(PrepareError::invariant(
                    table,
                    range.start,
                    format!("alternating range must consist of cased letters, not {}", gc),
                ));
            }

            MARKER_ALTERNATING | category(gc)
        }
    })
}
