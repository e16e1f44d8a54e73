use proptest::prelude::*;
use unicode_tables::CharClassData;
use unicode_tables_prepare::tables::{build_ranges, category_of, encode_ranges, fold_ranges, RangeTag};
use unicode_tables_source::properties::{Codepoint, GeneralCategory, LAST_CODEPOINT};

use crate::data::{codepoints, range_config, GENERATED_LIMIT};

/// категория по исходным данным
fn source_category(codepoints: &[Codepoint], code: u32) -> GeneralCategory
{
    match codepoints.binary_search_by_key(&code, |codepoint| codepoint.code) {
        Ok(index) => codepoints[index].gc,
        Err(_) => GeneralCategory::Unassigned,
    }
}

proptest! {
    #[test]
    fn ranges_partition_codepoints(codepoints in codepoints())
    {
        let ranges = build_ranges(&codepoints, &range_config()).unwrap();

        prop_assert_eq!(ranges[0].start, 0);
        prop_assert_eq!(ranges[ranges.len() - 1].end, LAST_CODEPOINT);

        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end + 1, pair[1].start);
        }
    }

    #[test]
    fn merged_ranges_decode_as_source(codepoints in codepoints())
    {
        let config = range_config();
        let source = fold_ranges(&codepoints, &config).unwrap();
        let merged = build_ranges(&codepoints, &config).unwrap();
        let tables = encode_ranges(&merged).unwrap();

        let data = CharClassData {
            ascii: &tables.ascii,
            ranges: &tables.ranges,
        };

        prop_assert!(merged.len() <= source.len());

        for code in (0 ..= GENERATED_LIMIT).chain([0x10000, LAST_CODEPOINT]) {
            let expected = source_category(&codepoints, code);

            prop_assert_eq!(category_of(&source, code), expected);
            prop_assert_eq!(category_of(&merged, code), expected);
            prop_assert_eq!(data.category(code), u8::from(expected));
        }
    }
}

#[test]
fn long_alternating_chain()
{
    let mut codepoints = vec![];

    for code in 0x100 ..= 0x107 {
        let gc = match code % 2 {
            0 => GeneralCategory::UppercaseLetter,
            _ => GeneralCategory::LowercaseLetter,
        };

        codepoints.push(Codepoint::new(code, gc));
    }

    codepoints.push(Codepoint::new(0x108, GeneralCategory::UppercaseLetter));

    let ranges = build_ranges(&codepoints, &range_config()).unwrap();

    assert_eq!(ranges.len(), 3);
    assert_eq!((ranges[1].start, ranges[1].end), (0x100, 0x108));
    assert_eq!(ranges[1].tag, RangeTag::Alternating(GeneralCategory::UppercaseLetter));

    let tables = encode_ranges(&ranges).unwrap();
    let data = CharClassData {
        ascii: &tables.ascii,
        ranges: &tables.ranges,
    };

    for codepoint in codepoints.iter() {
        assert_eq!(data.category(codepoint.code), u8::from(codepoint.gc));
    }

    assert_eq!(data.category(0xFF), 0);
    assert_eq!(data.category(0x109), 0);
}

#[test]
fn unassigned_tail()
{
    let codepoints = vec![
        Codepoint::new(0x2000, GeneralCategory::SpaceSeparator),
        Codepoint::new(0x2001, GeneralCategory::SpaceSeparator),
        Codepoint::new(0x2003, GeneralCategory::SpaceSeparator),
    ];

    let ranges = build_ranges(&codepoints, &range_config()).unwrap();

    assert_eq!(ranges[1].tag, RangeTag::Compound(GeneralCategory::SpaceSeparator));
    assert_eq!((ranges[1].start, ranges[1].end), (0x2000, 0x2002));

    let tables = encode_ranges(&ranges).unwrap();
    let data = CharClassData {
        ascii: &tables.ascii,
        ranges: &tables.ranges,
    };

    assert_eq!(data.category(0x2001), u8::from(GeneralCategory::SpaceSeparator));
    assert_eq!(data.category(0x2002), 0);
    assert_eq!(data.category(0x2003), u8::from(GeneralCategory::SpaceSeparator));
}
