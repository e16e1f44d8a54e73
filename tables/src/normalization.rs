/// количество бит кодпоинта декомпозиции
const COMPONENT_BITS: u32 = 20;
/// количество бит ключа
const KEY_BITS: u32 = 40;
const COMPONENT_MASK: u64 = (1 << COMPONENT_BITS) - 1;

/// канонические декомпозиции из двух кодпоинтов и обратные им композиции
#[derive(Debug, Clone, Copy)]
pub struct NormalizationData<'a>
{
    /// кодпоинт << 40 | первый << 20 | второй, по возрастанию кодпоинта
    pub decomposed: &'a [u64],
    /// первый << 40 | второй << 20 | кодпоинт, по возрастанию пары
    pub composed: &'a [u64],
}

impl<'a> NormalizationData<'a>
{
    /// декомпозиция кодпоинта
    #[inline]
    pub fn decompose(&self, code: u32) -> Option<(u32, u32)>
    {
        let index = self
            .decomposed
            .binary_search_by_key(&(code as u64), |&entry| entry >> KEY_BITS)
            .ok()?;

        let entry = self.decomposed[index];

        Some((
            ((entry >> COMPONENT_BITS) & COMPONENT_MASK) as u32,
            (entry & COMPONENT_MASK) as u32,
        ))
    }

    /// скомбинировать два кодпоинта
    #[inline]
    pub fn compose(&self, first: u32, second: u32) -> Option<u32>
    {
        let key = ((first as u64) << COMPONENT_BITS) | second as u64;

        let index = self
            .composed
            .binary_search_by_key(&key, |&entry| entry >> COMPONENT_BITS)
            .ok()?;

        Some((self.composed[index] & COMPONENT_MASK) as u32)
    }
}
