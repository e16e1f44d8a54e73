use proptest::prelude::*;
use unicode_tables::NormalizationData;
use unicode_tables_prepare::tables::{decomposition_entries, prepare_normalization};
use unicode_tables_source::properties::{Codepoint, Decomposition, GeneralCategory};

use crate::data::decomposition_entries as entries;

proptest! {
    #[test]
    fn decompositions_round_trip(entries in entries())
    {
        let tables = prepare_normalization(&entries).unwrap();

        let data = NormalizationData {
            decomposed: &tables.decomposed,
            composed: &tables.composed,
        };

        prop_assert_eq!(tables.decomposed.len(), entries.len());
        prop_assert_eq!(tables.composed.len(), entries.len());

        for entry in entries.iter() {
            prop_assert_eq!(data.decompose(entry.code), Some((entry.first, entry.second)));
            prop_assert_eq!(data.compose(entry.first, entry.second), Some(entry.code));
        }

        prop_assert_eq!(data.decompose(0x10), None);
        prop_assert_eq!(data.compose(0x10, 0x20), None);
    }
}

#[test]
fn latin_with_grave()
{
    let codepoints = vec![
        Codepoint::new(0x41, GeneralCategory::UppercaseLetter),
        Codepoint::new(0xC0, GeneralCategory::UppercaseLetter)
            .with_decomposition(Decomposition::canonical(&[0x41, 0x300])),
        Codepoint::new(0xE0, GeneralCategory::LowercaseLetter)
            .with_decomposition(Decomposition::canonical(&[0x61, 0x300])),
    ];

    let tables = prepare_normalization(&decomposition_entries(&codepoints)).unwrap();
    let data = NormalizationData {
        decomposed: &tables.decomposed,
        composed: &tables.composed,
    };

    assert_eq!(data.decompose(0xC0), Some((0x41, 0x300)));
    assert_eq!(data.decompose(0xE0), Some((0x61, 0x300)));
    assert_eq!(data.decompose(0x41), None);
    assert_eq!(data.compose(0x41, 0x300), Some(0xC0));
    assert_eq!(data.compose(0x61, 0x300), Some(0xE0));
    assert_eq!(data.compose(0x300, 0x41), None);
}
