use tracing::debug;
use unicode_tables_source::properties::LAST_CODEPOINT;
use unicode_tables_source::Codepage;

use crate::encode::{checked, pack32};
use crate::error::{PrepareError, Result, TableKind};

/// количество позиций в однобайтовой кодовой странице
pub const CODEPAGE_LENGTH: u32 = 0x100;
/// количество бит, отводимых под индекс в заголовке серии
pub const INDEX_BITS: u32 = 8;
/// количество бит, отводимых под значение в заголовке серии
pub const VALUE_BITS: u32 = 24;

/// серия позиций, значения которых растут вместе с индексом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepageRun
{
    /// первый индекс серии
    pub index: u32,
    /// значение первого индекса
    pub value: u32,
    pub length: u32,
}

impl CodepageRun
{
    #[inline]
    pub fn is_identity(&self) -> bool
    {
        self.index == self.value
    }

    #[inline]
    pub fn contains(&self, index: u32) -> bool
    {
        index >= self.index && index < self.index + self.length
    }
}

/// закодированная кодовая страница
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepageTable
{
    pub name: String,
    /// серии, отличные от тождественного отображения, по возрастанию индекса
    pub runs: Vec<CodepageRun>,
    pub packed: Vec<u32>,
}

impl CodepageTable
{
    /// значение для индекса; позиции вне серий отображаются сами в себя
    pub fn get(&self, index: u32) -> u32
    {
        match self.runs.iter().find(|run| run.contains(index)) {
            Some(run) => run.value + (index - run.index),
            None => index,
        }
    }
}

/// кодируем кодовую страницу сериями:
///
///   iiii iiii  vvvv vvvv  vvvv vvvv  vvvv vvvv
///   ____ ____  llll llll  llll llll  llll llll    (только если длина серии больше 1)
///
/// где:
///     ii.. - первый индекс серии
///     vv.. - значение первого индекса
///     ll.. - длина серии - 1
///
/// заголовок любой серии, кроме начинающейся с 0, больше 1 << 24, поэтому слово длины
/// отличается от следующего заголовка
pub fn encode(codepage: &Codepage) -> Result<CodepageTable>
{
    let table = TableKind::Codepage(codepage.name.clone());

    let values = expand(&table, &codepage.mappings)?;

    let mut runs: Vec<CodepageRun> = vec![];
    let mut current = CodepageRun {
        index: 0,
        value: values[0],
        length: 1,
    };

    for index in 1 .. CODEPAGE_LENGTH {
        let value = values[index as usize];

        match value == current.value.wrapping_add(current.length) {
            true => current.length += 1,
            false => {
                runs.push(current);
                current = CodepageRun {
                    index,
                    value,
                    length: 1,
                };
            }
        }
    }

    runs.push(current);
    runs.retain(|run| !run.is_identity());

    let mut packed = vec![];

    for run in runs.iter() {
        packed.push(pack32(
            &table,
            run.index,
            &[(run.index as u64, INDEX_BITS), (run.value as u64, VALUE_BITS)],
        )?);

        if run.length > 1 {
            packed.push(run.length - 1);
        }
    }

    let encoded = CodepageTable {
        name: codepage.name.clone(),
        runs,
        packed,
    };

    for index in 0 .. CODEPAGE_LENGTH {
        let decoded = encoded.get(index);

        if decoded != values[index as usize] {
            return Err(PrepareError::invariant(
                &table,
                index,
                format!(
                    "decodes to 0x{:X} instead of 0x{:X}",
                    decoded, values[index as usize]
                ),
            ));
        }
    }

    debug!(
        "{}: {} mappings, {} runs, {} words",
        table,
        codepage.mappings.len(),
        encoded.runs.len(),
        encoded.packed.len()
    );

    Ok(encoded)
}

/// значения всех 256 позиций
fn expand(table: &TableKind, mappings: &[(u32, u32)]) -> Result<Vec<u32>>
{
    let mut values: Vec<u32> = (0 .. CODEPAGE_LENGTH).collect();
    let mut previous: Option<u32> = None;

    for &(index, value) in mappings {
        if index >= CODEPAGE_LENGTH {
            return Err(PrepareError::malformed(
                table,
                index,
                "index does not fit into a single byte",
            ));
        }

        if previous.map_or(false, |previous| previous >= index) {
            return Err(PrepareError::malformed(
                table,
                index,
                "indices must be ascending and unique",
            ));
        }

        if value > LAST_CODEPOINT {
            return Err(PrepareError::malformed(
                table,
                index,
                format!("0x{:X} is not a codepoint", value),
            ));
        }

        checked(table, index, value as u64, VALUE_BITS)?;

        values[index as usize] = value;
        previous = Some(index);
    }

    Ok(values)
}
