/// декомпозиция символа
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition
{
    /// кодпоинты декомпозиции
    pub codes: Vec<u32>,
    /// тег декомпозиции, отсутствует у канонических декомпозиций
    pub tag: Option<DecompositionTag>,
}

impl Decomposition
{
    /// каноническая декомпозиция
    pub fn canonical(codes: &[u32]) -> Self
    {
        Self {
            codes: codes.to_vec(),
            tag: None,
        }
    }
}

/// тег декомпозиции совместимости
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font = 0,
    /// неразрывная версия пробела или дефиса
    NoBreak = 1,
    /// начальная форма представления (арабский)
    Initial = 2,
    /// средняя форма представления (арабский)
    Medial = 3,
    /// конечная форма представления (арабский)
    Final = 4,
    /// изолированная форма представления (арабский)
    Isolated = 5,
    /// окруженная форма
    Circle = 6,
    /// надстрочная форма
    Super = 7,
    /// подстрочная форма
    Sub = 8,
    /// вертикальная форма представления
    Vertical = 9,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide = 10,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow = 11,
    /// малая вариантная форма (совместимость CNS (Chinese National Standard))
    Small = 12,
    /// вариант шрифта в квадрате CJK
    Square = 13,
    /// форма обыкновенной дроби
    Fraction = 14,
    /// неопределенный символ для обеспечения совместимости
    Compat = 15,
}
