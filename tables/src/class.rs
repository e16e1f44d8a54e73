/// количество бит тега в записи диапазона
const TAG_BITS: u32 = 11;
/// маска категории
const CATEGORY_MASK: u32 = 0x1F;
/// маркер диапазона с чередующимися прописными и строчными буквами
const MARKER_ALTERNATING: u32 = 1 << 10;

/// Cn
pub const UNASSIGNED: u8 = 0;
/// Lu
pub const UPPERCASE_LETTER: u8 = 1;
/// Ll
pub const LOWERCASE_LETTER: u8 = 2;

/// таблицы категорий символов
#[derive(Debug, Clone, Copy)]
pub struct CharClassData<'a>
{
    /// категории U+0000 ..= U+007F
    pub ascii: &'a [u8],
    /// диапазоны: последний кодпоинт << 11 | тег, по возрастанию
    pub ranges: &'a [u32],
}

impl<'a> CharClassData<'a>
{
    /// категория кодпоинта (значение GeneralCategory)
    #[inline(always)]
    pub fn category(&self, code: u32) -> u8
    {
        match self.ascii.get(code as usize) {
            Some(&category) => category,
            None => self.category_by_ranges(code),
        }
    }

    /// категория кодпоинта по таблице диапазонов
    pub fn category_by_ranges(&self, code: u32) -> u8
    {
        let index = self.ranges.partition_point(|&entry| entry >> TAG_BITS < code);

        let entry = match self.ranges.get(index) {
            Some(&entry) => entry,
            None => return UNASSIGNED,
        };

        let end = entry >> TAG_BITS;
        let last = (entry & CATEGORY_MASK) as u8;

        // у кодпоинтов той же четности, что и последний - его категория, у остальных - парная
        if entry & MARKER_ALTERNATING != 0 {
            return match (code ^ end) & 1 == 0 {
                true => last,
                false => match last {
                    UPPERCASE_LETTER => LOWERCASE_LETTER,
                    LOWERCASE_LETTER => UPPERCASE_LETTER,
                    _ => last,
                },
            };
        }

        let leading = ((entry >> 5) & CATEGORY_MASK) as u8;

        match leading != UNASSIGNED && code != end {
            true => leading,
            false => last,
        }
    }
}
