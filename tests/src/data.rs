use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use unicode_tables_prepare::tables::DecompositionEntry;
use unicode_tables_prepare::RangeConfig;
use unicode_tables_source::properties::{Codepoint, GeneralCategory, LAST_CODEPOINT};

/// последний кодпоинт, который могут получить сгенерированные данные
pub const GENERATED_LIMIT: u32 = 0x3FFF;

/// без известных диапазонов - сгенерированные кодпоинты не должны их задевать
pub fn range_config() -> RangeConfig
{
    RangeConfig {
        limit: LAST_CODEPOINT,
        known_range_ends: BTreeSet::new(),
    }
}

/// категория; буквы в разных регистрах встречаются чаще, чтобы получались чередования
fn category() -> impl Strategy<Value = GeneralCategory>
{
    prop_oneof![
        3 => Just(GeneralCategory::UppercaseLetter),
        3 => Just(GeneralCategory::LowercaseLetter),
        1 => Just(GeneralCategory::Unassigned),
        2 => (0 .. GeneralCategory::ALL.len()).prop_map(|i| GeneralCategory::ALL[i]),
    ]
}

/// кодпоинты по возрастанию, с небольшими разрывами
pub fn codepoints() -> impl Strategy<Value = Vec<Codepoint>>
{
    prop::collection::vec((prop_oneof![4 => Just(1u32), 1 => 2u32 .. 40], category()), 0 .. 300)
        .prop_map(|entries| {
            let mut code = 0;

            entries
                .into_iter()
                .map(|(step, gc)| {
                    code += step;
                    Codepoint::new(code, gc)
                })
                .collect()
        })
}

/// пары (кодпоинт, связанный символ) по возрастанию кодпоинта
pub fn case_pairs() -> impl Strategy<Value = Vec<(u32, u32)>>
{
    let diff = prop_oneof![
        3 => Just(32i64),
        3 => Just(-32i64),
        2 => Just(1i64),
        2 => Just(-1i64),
        1 => -0x1000i64 .. 0x1000,
    ];

    let step = prop_oneof![3 => Just(1u32), 2 => Just(2u32), 1 => 3u32 .. 100];

    prop::collection::vec((step, diff), 0 .. 400).prop_map(|entries| {
        let mut code = 0x1000;

        entries
            .into_iter()
            .map(|(step, diff)| {
                code += step;
                (code, (code as i64 + diff) as u32)
            })
            .collect()
    })
}

/// канонические декомпозиции с уникальными парами
pub fn decomposition_entries() -> impl Strategy<Value = Vec<DecompositionEntry>>
{
    prop::collection::btree_map(0xC0u32 .. 0x20000, (0x20u32 .. 0x20000, 0x300u32 .. 0x370), 0 .. 300)
        .prop_map(|entries| {
            let mut pairs = HashSet::new();

            entries
                .into_iter()
                .filter(|&(_, pair)| pairs.insert(pair))
                .map(|(code, (first, second))| DecompositionEntry {
                    code,
                    first,
                    second,
                })
                .collect()
        })
}

/// отображения кодовой страницы: серии подряд идущих значений и одиночные значения
pub fn codepage_mappings() -> impl Strategy<Value = Vec<(u32, u32)>>
{
    prop::collection::vec((0u32 .. 0x100, 1u32 .. 0x20, 0u32 .. 0x10000), 0 .. 16).prop_map(|runs| {
        let mut values: Vec<Option<u32>> = vec![None; 0x100];

        for (start, length, value) in runs {
            for offset in 0 .. length {
                if let Some(slot) = values.get_mut((start + offset) as usize) {
                    *slot = Some(value + offset);
                }
            }
        }

        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| value.map(|value| (index as u32, value)))
            .collect()
    })
}
