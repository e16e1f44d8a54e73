mod decomposition;
mod general_category;
mod simple_case_mapping;

pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use general_category::GeneralCategory;
pub use simple_case_mapping::CaseDirection;
pub use simple_case_mapping::SimpleCaseMapping;

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// Кодпоинт Unicode - свойства, необходимые для построения таблиц
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: SimpleCaseMapping,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: SimpleCaseMapping,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: SimpleCaseMapping,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция
    pub decomposition: Vec<u32>,
}

impl Codepoint
{
    /// кодпоинт без связанных символов и декомпозиции
    pub fn new(code: u32, gc: GeneralCategory) -> Self
    {
        Self {
            code,
            gc,
            simple_uppercase_mapping: SimpleCaseMapping::None,
            simple_lowercase_mapping: SimpleCaseMapping::None,
            simple_titlecase_mapping: SimpleCaseMapping::None,
            decomposition_tag: None,
            decomposition: vec![],
        }
    }

    /// связанный символ в другом регистре
    #[inline]
    pub fn case_mapping(&self, direction: CaseDirection) -> SimpleCaseMapping
    {
        match direction {
            CaseDirection::Upper => self.simple_uppercase_mapping,
            CaseDirection::Lower => self.simple_lowercase_mapping,
            CaseDirection::Title => self.simple_titlecase_mapping,
        }
    }

    /// задать связанный символ в другом регистре
    pub fn with_case_mapping(mut self, direction: CaseDirection, code: u32) -> Self
    {
        let mapping = SimpleCaseMapping::Some(code);

        match direction {
            CaseDirection::Upper => self.simple_uppercase_mapping = mapping,
            CaseDirection::Lower => self.simple_lowercase_mapping = mapping,
            CaseDirection::Title => self.simple_titlecase_mapping = mapping,
        }

        self
    }

    /// задать декомпозицию
    pub fn with_decomposition(mut self, decomposition: Decomposition) -> Self
    {
        self.decomposition_tag = decomposition.tag;
        self.decomposition = decomposition.codes;
        self
    }

    /// каноническая декомпозиция из двух кодпоинтов, если она есть
    #[inline]
    pub fn canonical_pair(&self) -> Option<(u32, u32)>
    {
        if self.decomposition.len() != 2 || self.decomposition_tag.is_some() {
            return None;
        }

        Some((self.decomposition[0], self.decomposition[1]))
    }
}

#[test]
fn canonical_pairs()
{
    let grave = Codepoint::new(0xC0, GeneralCategory::UppercaseLetter)
        .with_decomposition(Decomposition::canonical(&[0x41, 0x300]));
    let angstrom = Codepoint::new(0x212B, GeneralCategory::UppercaseLetter)
        .with_decomposition(Decomposition::canonical(&[0xC5]));
    let parenthesized = Codepoint::new(0x2474, GeneralCategory::OtherNumber).with_decomposition(
        Decomposition {
            codes: vec![0x28, 0x31],
            tag: Some(DecompositionTag::Compat),
        },
    );

    assert_eq!(grave.canonical_pair(), Some((0x41, 0x300)));
    assert_eq!(angstrom.canonical_pair(), None);
    assert_eq!(parenthesized.canonical_pair(), None);
    assert_eq!(Codepoint::new(0x41, GeneralCategory::UppercaseLetter).canonical_pair(), None);
}
