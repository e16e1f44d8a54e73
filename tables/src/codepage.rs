/// сдвиг индекса в заголовке серии
const INDEX_SHIFT: u32 = 24;
const VALUE_MASK: u32 = (1 << INDEX_SHIFT) - 1;

/// однобайтовая кодовая страница
#[derive(Debug, Clone, Copy)]
pub struct CodepageData<'a>
{
    /// серии: заголовок (индекс << 24 | значение), за которым может следовать длина серии - 1
    pub runs: &'a [u32],
}

impl<'a> CodepageData<'a>
{
    /// кодпоинт для байта
    pub fn get(&self, index: u8) -> u32
    {
        let index = index as u32;
        let mut i = 0;

        while i < self.runs.len() {
            let header = self.runs[i];
            let start = header >> INDEX_SHIFT;

            // заголовки серий, кроме первой, не меньше 1 << 24, поэтому меньшее значение - длина
            let length = match self.runs.get(i + 1) {
                Some(&next) if next <= VALUE_MASK => {
                    i += 2;
                    next + 1
                }
                _ => {
                    i += 1;
                    1
                }
            };

            if start > index {
                break;
            }

            if index < start + length {
                return (header & VALUE_MASK) + (index - start);
            }
        }

        index
    }
}
