/// Simple Uppercase/Lowercase/Titlecase Mapping
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SimpleCaseMapping
{
    #[default]
    None,
    Some(u32),
}

impl SimpleCaseMapping
{
    /// кодпоинт, в который отображается символ
    #[inline]
    pub fn code(&self) -> Option<u32>
    {
        match self {
            Self::None => None,
            Self::Some(code) => Some(*code),
        }
    }
}

/// направление преобразования регистра - для каждого строится отдельная таблица
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CaseDirection
{
    Upper,
    Lower,
    Title,
}

impl CaseDirection
{
    pub const ALL: [CaseDirection; 3] = [Self::Upper, Self::Lower, Self::Title];
}

impl core::fmt::Display for CaseDirection
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Title => "title",
        };

        write!(f, "{}", value)
    }
}
