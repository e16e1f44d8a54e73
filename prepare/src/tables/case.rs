use tracing::debug;
use unicode_tables_source::properties::{CaseDirection, Codepoint, LAST_CODEPOINT};

use crate::error::{PrepareError, Result, TableKind};

/// количество бит смещения кодпоинта внутри блока (блок - 32 кодпоинта)
pub const CASE_BLOCK_BITS: u32 = 5;
/// минимальное количество пар с одинаковой разницей, при котором для блока записывается описание
pub const MIN_DIFF_COUNT: usize = 3;

/// блок из 32 кодпоинтов, большая часть которых преобразуется добавлением одной и той же разницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSetBlock
{
    /// первый кодпоинт блока
    pub base: u32,
    /// разница между связанным символом и кодпоинтом
    pub diff: i32,
    /// кодпоинты, к которым применяется разница
    pub present: u32,
    /// кодпоинты, у которых нет связанного символа
    pub absent: u32,
}

/// связанный символ, не описываемый блоком
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitMapping
{
    pub code: u32,
    pub mapped: u32,
}

/// таблицы преобразования регистра для одного направления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTables
{
    pub direction: CaseDirection,
    /// блоки по возрастанию первого кодпоинта
    pub blocks: Vec<DiffSetBlock>,
    /// исключения по возрастанию кодпоинта
    pub mappings: Vec<ExplicitMapping>,
}

impl CaseTables
{
    /// блоки, по 4 значения на блок: первый кодпоинт, разница (дополнительный код), маски
    pub fn packed_blocks(&self) -> Vec<u32>
    {
        self.blocks
            .iter()
            .flat_map(|block| [block.base, block.diff as u32, block.present, block.absent])
            .collect()
    }

    /// исключения: кодпоинт в старших 32 битах, связанный символ - в младших
    pub fn packed_mappings(&self) -> Vec<u64>
    {
        self.mappings
            .iter()
            .map(|mapping| ((mapping.code as u64) << 32) | mapping.mapped as u64)
            .collect()
    }

    /// связанный символ; если его нет - сам кодпоинт
    pub fn get(&self, code: u32) -> u32
    {
        let base = block_base!(code, CASE_BLOCK_BITS);

        if let Ok(index) = self.blocks.binary_search_by_key(&base, |block| block.base) {
            let block = &self.blocks[index];
            let bit = 1u32 << block_offset!(code, CASE_BLOCK_BITS);

            if block.present & bit != 0 {
                return code.wrapping_add_signed(block.diff);
            }

            if block.absent & bit != 0 {
                return code;
            }
        }

        match self.mappings.binary_search_by_key(&code, |mapping| mapping.code) {
            Ok(index) => self.mappings[index].mapped,
            Err(_) => code,
        }
    }
}

/// пары (кодпоинт, связанный символ) для направления преобразования
pub fn case_pairs(codepoints: &[Codepoint], direction: CaseDirection) -> Vec<(u32, u32)>
{
    codepoints
        .iter()
        .filter_map(|codepoint| {
            codepoint
                .case_mapping(direction)
                .code()
                .map(|mapped| (codepoint.code, mapped))
        })
        .collect()
}

/// сжимаем пары: для каждого блока из 32 кодпоинтов выбираем самую частую разницу.
/// если она встречается хотя бы MIN_DIFF_COUNT раз - записываем блок, остальные пары блока - исключения.
/// в противном случае все пары блока записываются как исключения
pub fn compress(pairs: &[(u32, u32)], direction: CaseDirection) -> Result<CaseTables>
{
    let table = TableKind::CaseMapping(direction);

    check_pairs(&table, pairs)?;

    let mut blocks = vec![];
    let mut mappings = vec![];

    let explicit = |pairs: &[(u32, u32)]| {
        pairs
            .iter()
            .map(|&(code, mapped)| ExplicitMapping { code, mapped })
            .collect::<Vec<_>>()
    };

    for block_pairs in pairs.chunk_by(|a, b| {
        block_base!(a.0, CASE_BLOCK_BITS) == block_base!(b.0, CASE_BLOCK_BITS)
    }) {
        let base = block_base!(block_pairs[0].0, CASE_BLOCK_BITS);

        let (diff, count) = match dominant_diff(block_pairs) {
            Some((diff, count)) if count >= MIN_DIFF_COUNT => (diff, count),
            _ => {
                mappings.extend(explicit(block_pairs));
                continue;
            }
        };

        let diff = i32::try_from(diff).map_err(|_| PrepareError::CapacityOverflow {
            table: table.clone(),
            code: base,
            value: diff as u64,
            bits: 32,
        })?;

        let mut block = DiffSetBlock {
            base,
            diff,
            present: 0,
            absent: u32::MAX,
        };

        for &(code, mapped) in block_pairs {
            let bit = 1u32 << block_offset!(code, CASE_BLOCK_BITS);

            match delta(code, mapped) == diff as i64 {
                true => block.present |= bit,
                false => mappings.push(ExplicitMapping { code, mapped }),
            }

            block.absent &= !bit;
        }

        debug_assert_eq!(block.present.count_ones() as usize, count);

        blocks.push(block);
    }

    let tables = CaseTables {
        direction,
        blocks,
        mappings,
    };

    for &(code, mapped) in pairs {
        let decoded = tables.get(code);

        if decoded != mapped {
            return Err(PrepareError::invariant(
                &table,
                code,
                format!("decodes to U+{:04X} instead of U+{:04X}", decoded, mapped),
            ));
        }
    }

    debug!(
        "{}: {} pairs, {} blocks, {} explicit mappings",
        table,
        pairs.len(),
        tables.blocks.len(),
        tables.mappings.len()
    );

    Ok(tables)
}

/// разница между связанным символом и кодпоинтом
#[inline]
fn delta(code: u32, mapped: u32) -> i64
{
    mapped as i64 - code as i64
}

/// самая частая разница в блоке и количество пар с ней. при равенстве побеждает встреченная первой
fn dominant_diff(pairs: &[(u32, u32)]) -> Option<(i64, usize)>
{
    let mut counts: Vec<(i64, usize)> = vec![];

    for &(code, mapped) in pairs {
        let diff = delta(code, mapped);

        match counts.iter_mut().find(|(d, _)| *d == diff) {
            Some((_, count)) => *count += 1,
            None => counts.push((diff, 1)),
        }
    }

    let mut best: Option<(i64, usize)> = None;

    for (diff, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((diff, count));
        }
    }

    best
}

/// пары по возрастанию кодпоинта, без повторов, в пределах Unicode
fn check_pairs(table: &TableKind, pairs: &[(u32, u32)]) -> Result<()>
{
    for (i, &(code, mapped)) in pairs.iter().enumerate() {
        if code > LAST_CODEPOINT || mapped > LAST_CODEPOINT {
            return Err(PrepareError::malformed(
                table,
                code,
                format!("mapping to U+{:04X} is outside of Unicode", mapped),
            ));
        }

        if i > 0 && pairs[i - 1].0 >= code {
            return Err(PrepareError::malformed(
                table,
                code,
                "codepoints must be ascending and unique",
            ));
        }
    }

    Ok(())
}
