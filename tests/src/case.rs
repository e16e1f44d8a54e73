use proptest::prelude::*;
use unicode_tables::CaseMappingData;
use unicode_tables_prepare::tables::compress;
use unicode_tables_source::properties::CaseDirection;

use crate::data::case_pairs;

proptest! {
    #[test]
    fn pairs_decode_exactly(pairs in case_pairs())
    {
        let tables = compress(&pairs, CaseDirection::Upper).unwrap();
        let blocks = tables.packed_blocks();
        let mappings = tables.packed_mappings();

        let data = CaseMappingData {
            blocks: &blocks,
            mappings: &mappings,
        };

        for &(code, mapped) in pairs.iter() {
            prop_assert_eq!(data.get(code), mapped);
        }

        // кодпоинты без пары отображаются сами в себя
        let last = pairs.last().map_or(0x1000, |&(code, _)| code);

        for code in 0xF00 ..= last + 0x40 {
            if pairs.binary_search_by_key(&code, |&(code, _)| code).is_err() {
                prop_assert_eq!(data.get(code), code);
                prop_assert_eq!(tables.get(code), code);
            }
        }
    }

    #[test]
    fn blocks_are_worth_it(pairs in case_pairs())
    {
        let tables = compress(&pairs, CaseDirection::Lower).unwrap();

        for block in tables.blocks.iter() {
            prop_assert!(block.present.count_ones() >= 3);
            prop_assert_eq!(block.present & block.absent, 0);
            prop_assert_eq!(block.base % 32, 0);
        }

        let described = tables
            .blocks
            .iter()
            .map(|block| block.present.count_ones() as usize)
            .sum::<usize>();

        prop_assert_eq!(described + tables.mappings.len(), pairs.len());
    }
}

#[test]
fn ascii_letters()
{
    let pairs: Vec<(u32, u32)> = (0x41 ..= 0x5A).map(|code| (code, code + 0x20)).collect();
    let tables = compress(&pairs, CaseDirection::Lower).unwrap();

    // A ..= Z целиком в блоке 0x40 ..= 0x5F
    assert_eq!(tables.blocks.len(), 1);
    assert!(tables.mappings.is_empty());

    let blocks = tables.packed_blocks();
    let mappings = tables.packed_mappings();
    let data = CaseMappingData {
        blocks: &blocks,
        mappings: &mappings,
    };

    assert_eq!(data.get(0x41), 0x61);
    assert_eq!(data.get(0x5A), 0x7A);
    assert_eq!(data.get(0x5B), 0x5B);
    assert_eq!(data.get(0x61), 0x61);
}
