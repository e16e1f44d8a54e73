use unicode_tables::{CaseMappingData, CharClassData, CodepageData, NormalizationData};
use unicode_tables_prepare::{prepare, PrepareConfig, PrepareError, TableKind};
use unicode_tables_source::properties::{CaseDirection, Codepoint, Decomposition, GeneralCategory};
use unicode_tables_source::{Codepage, SourceData};

/// латиница, несколько букв с декомпозицией и одна кодовая страница
fn latin() -> SourceData
{
    let mut codepoints = vec![];

    for code in 0x20 ..= 0x40 {
        codepoints.push(Codepoint::new(code, GeneralCategory::OtherPunctuation));
    }

    for code in 0x41 ..= 0x5A {
        codepoints.push(
            Codepoint::new(code, GeneralCategory::UppercaseLetter)
                .with_case_mapping(CaseDirection::Lower, code + 0x20),
        );
    }

    for code in 0x61 ..= 0x7A {
        codepoints.push(
            Codepoint::new(code, GeneralCategory::LowercaseLetter)
                .with_case_mapping(CaseDirection::Upper, code - 0x20)
                .with_case_mapping(CaseDirection::Title, code - 0x20),
        );
    }

    for (code, base) in [(0xC0, 0x41), (0xC8, 0x45), (0xCC, 0x49)] {
        codepoints.push(
            Codepoint::new(code, GeneralCategory::UppercaseLetter)
                .with_case_mapping(CaseDirection::Lower, code + 0x20)
                .with_decomposition(Decomposition::canonical(&[base, 0x300])),
        );
    }

    SourceData {
        codepoints,
        codepages: vec![Codepage::new("CP1252", vec![(0x80, 0x20AC), (0x8A, 0x160)])],
    }
}

#[test]
fn latin_tables()
{
    let tables = prepare(&latin(), &PrepareConfig::default()).unwrap();

    let classes = CharClassData {
        ascii: &tables.classes.ascii,
        ranges: &tables.classes.ranges,
    };

    assert_eq!(classes.category(0x20), u8::from(GeneralCategory::OtherPunctuation));
    assert_eq!(classes.category(0x5B), u8::from(GeneralCategory::Unassigned));
    assert_eq!(classes.category(0xC8), u8::from(GeneralCategory::UppercaseLetter));
    assert_eq!(classes.category(0xC9), u8::from(GeneralCategory::Unassigned));

    let lower = tables.case(CaseDirection::Lower).unwrap();
    let blocks = lower.packed_blocks();
    let mappings = lower.packed_mappings();
    let lower = CaseMappingData {
        blocks: &blocks,
        mappings: &mappings,
    };

    assert_eq!(lower.get(0x41), 0x61);
    assert_eq!(lower.get(0xC8), 0xE8);
    assert_eq!(lower.get(0x61), 0x61);

    let normalization = NormalizationData {
        decomposed: &tables.normalization.decomposed,
        composed: &tables.normalization.composed,
    };

    assert_eq!(normalization.compose(0x45, 0x300), Some(0xC8));
    assert_eq!(normalization.decompose(0xCC), Some((0x49, 0x300)));

    let cp1252 = CodepageData {
        runs: &tables.codepage("CP1252").unwrap().packed,
    };

    assert_eq!(cp1252.get(0x80), 0x20AC);
    assert_eq!(cp1252.get(0x8A), 0x160);
    assert_eq!(cp1252.get(0x81), 0x81);

    let stats = unicode_tables_prepare::output::stats(&tables);

    assert_eq!(stats.len(), 1 + 3 + 1 + 1);
    assert_eq!(stats[0].lanes[0].size, 0x80);
}

#[test]
fn unordered_codepoints()
{
    let mut source = latin();
    source.codepoints.swap(0, 1);

    assert!(matches!(
        prepare(&source, &PrepareConfig::default()),
        Err(PrepareError::MalformedInput {
            table: TableKind::CharClasses,
            code: 0x20,
            ..
        })
    ));
}
