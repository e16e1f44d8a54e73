/// основная категория символа (General Category, GC)
/// всего 30 вариантов, значение каждого укладывается в 5 бит - именно столько отводится
/// под категорию в упакованной таблице диапазонов
///
/// Unassigned имеет значение 0: в таблице диапазонов нулевое поле означает "категория не задана",
/// что используется для различения форматов записи диапазона
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// дефолтный вариант при отсутствии записи о символе
    Unassigned = 0,

    /// Lu - прописная буква
    UppercaseLetter = 1,
    /// Ll - строчная буква
    LowercaseLetter = 2,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3,
    /// Lm - буква-модификатор
    ModifierLetter = 4,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8,

    /// Nd - десятичная цифра
    DecimalNumber = 9,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10,
    /// No - прочие числовые символы
    OtherNumber = 11,

    /// Zs - разделитель-пробел
    SpaceSeparator = 12,
    /// Zl - разделитель строки
    LineSeparator = 13,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 16,
    /// Cf - управляющий символ форматирования
    Format = 17,
    /// Cs - символ-суррогат
    Surrogate = 18,
    /// Co - символ для приватного использования
    PrivateUse = 19,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 20,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 21,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 22,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 23,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 24,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 25,
    /// Po - знак препинания другого типа
    OtherPunctuation = 26,

    /// Sm - математический символ
    MathSymbol = 28,
    /// Sc - символ валюты
    CurrencySymbol = 29,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 30,
    /// So - прочие символы
    OtherSymbol = 31,
}

impl GeneralCategory
{
    /// все категории в порядке возрастания значений
    pub const ALL: [GeneralCategory; 30] = [
        Self::Unassigned,
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
    ];

    /// категория не назначена (Cn)
    #[inline]
    pub fn is_unassigned(&self) -> bool
    {
        *self == Self::Unassigned
    }

    /// парная категория для чередующихся прописных и строчных букв (Lu <-> Ll)
    #[inline]
    pub fn case_counterpart(&self) -> Option<GeneralCategory>
    {
        match self {
            Self::UppercaseLetter => Some(Self::LowercaseLetter),
            Self::LowercaseLetter => Some(Self::UppercaseLetter),
            _ => None,
        }
    }

    /// сокращенное название категории
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
        }
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for GeneralCategory
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.abbr())
    }
}

#[test]
fn category_values()
{
    for (i, category) in GeneralCategory::ALL.iter().enumerate() {
        assert!(u8::from(*category) < 0x20);

        if i > 0 {
            assert!(GeneralCategory::ALL[i - 1] < *category);
        }
    }

    assert_eq!(u8::from(GeneralCategory::Unassigned), 0);
    assert_eq!(GeneralCategory::UppercaseLetter.abbr(), "Lu");
    assert_eq!(GeneralCategory::OtherSymbol.to_string(), "So");
    assert_eq!(
        GeneralCategory::LowercaseLetter.case_counterpart(),
        Some(GeneralCategory::UppercaseLetter)
    );
    assert_eq!(GeneralCategory::TitlecaseLetter.case_counterpart(), None);
}
