use thiserror::Error;
use unicode_tables_source::properties::CaseDirection;

/// таблица, при построении которой произошла ошибка
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableKind
{
    /// диапазоны категорий символов
    CharClasses,
    /// преобразование регистра
    CaseMapping(CaseDirection),
    /// канонические декомпозиции / композиции
    Normalization,
    /// однобайтовая кодовая страница
    Codepage(String),
}

impl core::fmt::Display for TableKind
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            Self::CharClasses => write!(f, "char classes"),
            Self::CaseMapping(direction) => write!(f, "{} case mapping", direction),
            Self::Normalization => write!(f, "normalization"),
            Self::Codepage(name) => write!(f, "code page {}", name),
        }
    }
}

/// ошибки построения таблиц. любая из них прерывает генерацию целиком -
/// частично построенная таблица не возвращается
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError
{
    /// записи не по возрастанию, повторяются или выходят за допустимую область значений
    #[error("{table}: malformed input at 0x{code:04X}: {detail}")]
    MalformedInput
    {
        table: TableKind,
        code: u32,
        detail: String,
    },

    /// значение не помещается в отведенное ему количество бит
    #[error("{table}: value 0x{value:X} at 0x{code:04X} does not fit into {bits} bits")]
    CapacityOverflow
    {
        table: TableKind,
        code: u32,
        value: u64,
        bits: u32,
    },

    /// проверка построенной таблицы не прошла
    #[error("{table}: invariant violated at 0x{code:04X}: {detail}")]
    InvariantViolation
    {
        table: TableKind,
        code: u32,
        detail: String,
    },
}

impl PrepareError
{
    pub fn malformed(table: &TableKind, code: u32, detail: impl Into<String>) -> Self
    {
        Self::MalformedInput {
            table: table.clone(),
            code,
            detail: detail.into(),
        }
    }

    pub fn invariant(table: &TableKind, code: u32, detail: impl Into<String>) -> Self
    {
        Self::InvariantViolation {
            table: table.clone(),
            code,
            detail: detail.into(),
        }
    }

    /// таблица, при построении которой произошла ошибка
    pub fn table(&self) -> &TableKind
    {
        match self {
            Self::MalformedInput { table, .. } => table,
            Self::CapacityOverflow { table, .. } => table,
            Self::InvariantViolation { table, .. } => table,
        }
    }

    /// кодпоинт или индекс, на котором произошла ошибка
    pub fn code(&self) -> u32
    {
        match self {
            Self::MalformedInput { code, .. } => *code,
            Self::CapacityOverflow { code, .. } => *code,
            Self::InvariantViolation { code, .. } => *code,
        }
    }
}

pub type Result<T> = core::result::Result<T, PrepareError>;

#[test]
fn error_messages()
{
    let error = PrepareError::CapacityOverflow {
        table: TableKind::Normalization,
        code: 0xC0,
        value: 0x1_00000,
        bits: 20,
    };

    assert_eq!(
        error.to_string(),
        "normalization: value 0x100000 at 0x00C0 does not fit into 20 bits"
    );

    let error = PrepareError::malformed(&TableKind::Codepage("CP1252".to_owned()), 0x100, "index");

    assert_eq!(error.table(), &TableKind::Codepage("CP1252".to_owned()));
    assert_eq!(error.code(), 0x100);
}
