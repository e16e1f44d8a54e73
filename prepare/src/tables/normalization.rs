use tracing::debug;
use unicode_tables_source::properties::{Codepoint, LAST_CODEPOINT};

use crate::encode::pack;
use crate::error::{PrepareError, Result, TableKind};

/// количество бит, отводимых под кодпоинт декомпозиции
pub const COMPONENT_BITS: u32 = 20;
/// количество бит ключа (кодпоинт в таблице декомпозиций, пара в таблице композиций)
pub const KEY_BITS: u32 = 40;
/// количество бит под кодпоинт в ключе таблицы декомпозиций
const SOURCE_KEY_BITS: u32 = 64 - KEY_BITS;

/// каноническая декомпозиция из двух кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompositionEntry
{
    pub code: u32,
    pub first: u32,
    pub second: u32,
}

/// "запеченные" декомпозиции и композиции
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationTables
{
    /// по возрастанию кодпоинта
    pub decomposed: Vec<u64>,
    /// по возрастанию пары (первый кодпоинт, второй кодпоинт)
    pub composed: Vec<u64>,
}

/// канонические декомпозиции из двух кодпоинтов. декомпозиции совместимости (с тегом)
/// и декомпозиции другой длины не учитываются
pub fn decomposition_entries(codepoints: &[Codepoint]) -> Vec<DecompositionEntry>
{
    codepoints
        .iter()
        .filter_map(|codepoint| {
            codepoint
                .canonical_pair()
                .map(|(first, second)| DecompositionEntry {
                    code: codepoint.code,
                    first,
                    second,
                })
        })
        .collect()
}

/// таблицы декомпозиций и композиций
///
/// формат записи в таблице декомпозиций:
///   cccc cccc  cccc cccc  cccc cccc    xxxx xxxx  xxxx xxxx  xxxx yyyy    yyyy yyyy  yyyy yyyy
///
/// формат записи в таблице композиций:
///   ____ xxxx  xxxx xxxx  xxxx xxxx    yyyy yyyy  yyyy yyyy  yyyy cccc    cccc cccc  cccc cccc
///
/// где:
///     cc.. - кодпоинт
///     xx.. - первый кодпоинт декомпозиции
///     yy.. - второй кодпоинт декомпозиции
pub fn prepare(entries: &[DecompositionEntry]) -> Result<NormalizationTables>
{
    let table = TableKind::Normalization;

    for entry in entries {
        if let Some(&outside) = [entry.code, entry.first, entry.second]
            .iter()
            .find(|&&code| code > LAST_CODEPOINT)
        {
            return Err(PrepareError::malformed(
                &table,
                entry.code,
                format!("0x{:X} is not a codepoint", outside),
            ));
        }
    }

    for pair in entries.windows(2) {
        if pair[0].code >= pair[1].code {
            return Err(PrepareError::malformed(
                &table,
                pair[1].code,
                "codepoints must be ascending and unique",
            ));
        }
    }

    let decomposed = entries
        .iter()
        .map(|entry| {
            pack(
                &table,
                entry.code,
                &[
                    (entry.code as u64, SOURCE_KEY_BITS),
                    (entry.first as u64, COMPONENT_BITS),
                    (entry.second as u64, COMPONENT_BITS),
                ],
            )
        })
        .collect::<Result<Vec<u64>>>()?;

    let mut by_pair: Vec<&DecompositionEntry> = entries.iter().collect();
    by_pair.sort_by_key(|entry| (entry.first, entry.second));

    for pair in by_pair.windows(2) {
        if (pair[0].first, pair[0].second) == (pair[1].first, pair[1].second) {
            return Err(PrepareError::malformed(
                &table,
                pair[1].code,
                format!("decomposes to the same pair as U+{:04X}", pair[0].code),
            ));
        }
    }

    let composed = by_pair
        .iter()
        .map(|entry| {
            pack(
                &table,
                entry.code,
                &[
                    (entry.first as u64, COMPONENT_BITS),
                    (entry.second as u64, COMPONENT_BITS),
                    (entry.code as u64, COMPONENT_BITS),
                ],
            )
        })
        .collect::<Result<Vec<u64>>>()?;

    debug!("{}: {} two-codepoint decompositions", table, entries.len());

    Ok(NormalizationTables {
        decomposed,
        composed,
    })
}
