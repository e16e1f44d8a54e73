/// количество бит смещения кодпоинта внутри блока
const BLOCK_BITS: u32 = 5;
/// количество значений, описывающих блок
const BLOCK_LENGTH: usize = 4;

/// таблицы преобразования регистра (одно направление)
#[derive(Debug, Clone, Copy)]
pub struct CaseMappingData<'a>
{
    /// блоки по 4 значения: первый кодпоинт, разница, маска применения разницы, маска отсутствия
    pub blocks: &'a [u32],
    /// исключения: кодпоинт << 32 | связанный символ
    pub mappings: &'a [u64],
}

impl<'a> CaseMappingData<'a>
{
    /// связанный символ; если его нет - сам кодпоинт
    #[inline]
    pub fn get(&self, code: u32) -> u32
    {
        if let Some(block) = self.block(code) {
            let bit = 1u32 << (code & ((1 << BLOCK_BITS) - 1));

            if block[2] & bit != 0 {
                return code.wrapping_add(block[1]);
            }

            if block[3] & bit != 0 {
                return code;
            }
        }

        match self
            .mappings
            .binary_search_by_key(&code, |&entry| (entry >> 32) as u32)
        {
            Ok(index) => self.mappings[index] as u32,
            Err(_) => code,
        }
    }

    /// блок, содержащий кодпоинт
    #[inline(always)]
    fn block(&self, code: u32) -> Option<&'a [u32]>
    {
        let base = (code >> BLOCK_BITS) << BLOCK_BITS;

        let mut low = 0;
        let mut high = self.blocks.len() / BLOCK_LENGTH;

        while low < high {
            let middle = (low + high) / 2;
            let block = &self.blocks[middle * BLOCK_LENGTH .. (middle + 1) * BLOCK_LENGTH];

            match block[0].cmp(&base) {
                core::cmp::Ordering::Equal => return Some(block),
                core::cmp::Ordering::Less => low = middle + 1,
                core::cmp::Ordering::Greater => high = middle,
            }
        }

        None
    }
}
