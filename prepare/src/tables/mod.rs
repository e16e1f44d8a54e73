mod case;
mod classes;
mod codepages;
mod normalization;
mod ranges;

pub use case::{case_pairs, compress, CaseTables, DiffSetBlock, ExplicitMapping};
pub use case::{CASE_BLOCK_BITS, MIN_DIFF_COUNT};
pub use classes::{encode_ranges, CharClassTables};
pub use classes::{ASCII_LENGTH, CATEGORY_BITS, MARKER_ALTERNATING, TAG_BITS};
pub use codepages::{encode as encode_codepage, CodepageRun, CodepageTable};
pub use codepages::{CODEPAGE_LENGTH, INDEX_BITS, VALUE_BITS};
pub use normalization::{decomposition_entries, DecompositionEntry, NormalizationTables};
pub use normalization::{prepare as prepare_normalization, COMPONENT_BITS, KEY_BITS};
pub use ranges::{build_ranges, category_of, fold_ranges, ClosedRange, RangeTag};

use rayon::prelude::*;
use tracing::info;
use unicode_tables_source::properties::{CaseDirection, Codepoint};
use unicode_tables_source::SourceData;

use crate::config::{PrepareConfig, RangeConfig};
use crate::error::Result;

/// все таблицы, построенные по одному набору исходных данных
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTables
{
    /// диапазоны категорий до упаковки
    pub ranges: Vec<ClosedRange>,
    pub classes: CharClassTables,
    /// преобразования регистра, в порядке CaseDirection::ALL
    pub case: Vec<CaseTables>,
    pub normalization: NormalizationTables,
    /// кодовые страницы в порядке исходных данных
    pub codepages: Vec<CodepageTable>,
}

impl PreparedTables
{
    /// таблицы преобразования регистра для направления
    pub fn case(&self, direction: CaseDirection) -> Option<&CaseTables>
    {
        self.case.iter().find(|tables| tables.direction == direction)
    }

    /// кодовая страница по названию
    pub fn codepage(&self, name: &str) -> Option<&CodepageTable>
    {
        self.codepages.iter().find(|codepage| codepage.name == name)
    }
}

/// строим все таблицы. таблицы разных видов независимы и строятся параллельно;
/// при любой ошибке не возвращается ни одной таблицы
pub fn prepare(source: &SourceData, config: &PrepareConfig) -> Result<PreparedTables>
{
    let codepoints = source.codepoints.as_slice();

    let ((classes, case), (normalization, codepages)) = rayon::join(
        || {
            rayon::join(
                || char_classes(codepoints, &config.ranges),
                || case_mappings(codepoints),
            )
        },
        || {
            rayon::join(
                || normalization::prepare(&decomposition_entries(codepoints)),
                || {
                    source
                        .codepages
                        .par_iter()
                        .map(codepages::encode)
                        .collect::<Result<Vec<CodepageTable>>>()
                },
            )
        },
    );

    let (ranges, classes) = classes?;

    let tables = PreparedTables {
        ranges,
        classes,
        case: case?,
        normalization: normalization?,
        codepages: codepages?,
    };

    info!(
        "prepared tables for {} codepoints and {} code pages",
        codepoints.len(),
        tables.codepages.len()
    );

    crate::output::log(&tables);

    Ok(tables)
}

/// диапазоны категорий и их упакованное представление
fn char_classes(
    codepoints: &[Codepoint],
    config: &RangeConfig,
) -> Result<(Vec<ClosedRange>, CharClassTables)>
{
    let ranges = build_ranges(codepoints, config)?;
    let classes = encode_ranges(&ranges)?;

    Ok((ranges, classes))
}

/// преобразования регистра во всех направлениях
fn case_mappings(codepoints: &[Codepoint]) -> Result<Vec<CaseTables>>
{
    CaseDirection::ALL
        .to_vec()
        .into_par_iter()
        .map(|direction| compress(&case_pairs(codepoints, direction), direction))
        .collect()
}
