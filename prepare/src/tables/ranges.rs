use tracing::debug;
use unicode_tables_source::properties::{Codepoint, GeneralCategory, LAST_CODEPOINT};

use crate::config::RangeConfig;
use crate::error::{PrepareError, Result, TableKind};

/// тег диапазона - способ получить категорию кодпоинта, зная его положение в диапазоне
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTag
{
    /// все кодпоинты диапазона имеют одну категорию
    Single(GeneralCategory),
    /// все кодпоинты диапазона, кроме последнего, имеют указанную категорию, последний - не назначен
    Compound(GeneralCategory),
    /// прописные и строчные буквы чередуются, указана категория последнего кодпоинта диапазона
    Alternating(GeneralCategory),
}

impl RangeTag
{
    /// категория кодпоинта code в диапазоне, заканчивающемся на end
    #[inline]
    pub fn category(&self, code: u32, end: u32) -> GeneralCategory
    {
        match *self {
            Self::Single(category) => category,
            Self::Compound(category) => match code == end {
                true => GeneralCategory::Unassigned,
                false => category,
            },
            Self::Alternating(category) => match (code ^ end) & 1 == 0 {
                true => category,
                false => category.case_counterpart().unwrap_or(category),
            },
        }
    }
}

/// диапазон кодпоинтов [start, end] (включительно)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedRange
{
    pub start: u32,
    pub end: u32,
    pub tag: RangeTag,
}

impl ClosedRange
{
    pub fn new(start: u32, end: u32, tag: RangeTag) -> Self
    {
        Self { start, end, tag }
    }

    /// диапазон из одного кодпоинта
    #[inline]
    pub fn is_singleton(&self) -> bool
    {
        self.start == self.end
    }

    /// категория кодпоинта, принадлежащего диапазону
    #[inline]
    pub fn category(&self, code: u32) -> GeneralCategory
    {
        debug_assert!(self.start <= code && code <= self.end);

        self.tag.category(code, self.end)
    }
}

/// категория кодпоинта по списку диапазонов: первый диапазон, конец которого >= кодпоинта
pub fn category_of(ranges: &[ClosedRange], code: u32) -> GeneralCategory
{
    let position = ranges.partition_point(|range| range.end < code);

    match ranges.get(position) {
        Some(range) => range.category(code),
        None => GeneralCategory::Unassigned,
    }
}

/// диапазоны категорий символов, покрывающие [0, limit] без пропусков,
/// с объединением чередующихся регистров и одиночных неназначенных кодпоинтов
pub fn build_ranges(codepoints: &[Codepoint], config: &RangeConfig) -> Result<Vec<ClosedRange>>
{
    let source = fold_ranges(codepoints, config)?;
    let source_count = source.len();

    let merged = merge_unassigned(merge_alternating(source));

    check_partition(&merged, config.limit)?;

    debug!(
        "char classes: {} source ranges, {} after merging",
        source_count,
        merged.len()
    );

    Ok(merged)
}

/// диапазоны без дополнительных объединений - каждый имеет простой тег
pub fn fold_ranges(codepoints: &[Codepoint], config: &RangeConfig) -> Result<Vec<ClosedRange>>
{
    let table = TableKind::CharClasses;

    if config.limit > LAST_CODEPOINT {
        return Err(PrepareError::malformed(
            &table,
            config.limit,
            "range limit is beyond the last Unicode codepoint",
        ));
    }

    let mut ranges: Vec<ClosedRange> = vec![];
    let mut previous: Option<u32> = None;

    for codepoint in codepoints {
        let code = codepoint.code;

        if let Some(previous) = previous {
            if code <= previous {
                return Err(PrepareError::malformed(
                    &table,
                    code,
                    format!("follows U+{:04X}: codepoints must be ascending and unique", previous),
                ));
            }
        }

        if code > config.limit {
            return Err(PrepareError::malformed(
                &table,
                code,
                format!("beyond the last codepoint U+{:04X}", config.limit),
            ));
        }

        previous = Some(code);

        let tag = RangeTag::Single(codepoint.gc);
        let next = ranges.last().map_or(0, |range| range.end + 1);

        // продолжаем диапазон, если кодпоинт следует сразу за ним или закрывает известный диапазон,
        // записанный в источнике только первым и последним кодпоинтом
        let contiguous = code == next || config.known_range_ends.contains(&code);

        if let Some(last) = ranges.last_mut() {
            if contiguous && last.tag == tag {
                last.end = code;
                continue;
            }
        }

        if code > next {
            push_range(&mut ranges, next, code - 1, GeneralCategory::Unassigned);
        }

        push_range(&mut ranges, code, code, codepoint.gc);
    }

    let next = ranges.last().map_or(0, |range| range.end + 1);

    if next <= config.limit {
        push_range(&mut ranges, next, config.limit, GeneralCategory::Unassigned);
    }

    check_partition(&ranges, config.limit)?;

    Ok(ranges)
}

/// дописать диапазон или продлить последний, если у него та же категория
fn push_range(ranges: &mut Vec<ClosedRange>, start: u32, end: u32, category: GeneralCategory)
{
    let tag = RangeTag::Single(category);

    if let Some(last) = ranges.last_mut() {
        if last.tag == tag && last.end + 1 == start {
            last.end = end;
            return;
        }
    }

    ranges.push(ClosedRange::new(start, end, tag));
}

/// одиночные прописные и строчные буквы, следующие друг за другом, объединяем в чередующийся диапазон:
///
///   U+0100 Lu, U+0101 Ll, U+0102 Lu, U+0103 Ll  =>  U+0100 ..= U+0103 чередование, последний - Ll
///
fn merge_alternating(ranges: Vec<ClosedRange>) -> Vec<ClosedRange>
{
    let mut merged: Vec<ClosedRange> = Vec::with_capacity(ranges.len());

    for range in ranges {
        if let (Some(last), RangeTag::Single(category)) = (merged.last_mut(), range.tag) {
            if let Some(counterpart) = category.case_counterpart() {
                let alternates = range.is_singleton()
                    && match last.tag {
                        RangeTag::Single(previous) => last.is_singleton() && previous == counterpart,
                        RangeTag::Alternating(previous) => previous == counterpart,
                        RangeTag::Compound(_) => false,
                    };

                if alternates {
                    last.end = range.end;
                    last.tag = RangeTag::Alternating(category);
                    continue;
                }
            }
        }

        merged.push(range);
    }

    merged
}

/// одиночный неназначенный кодпоинт после диапазона с простым тегом присоединяем к этому диапазону.
/// составной тег сам по себе дальше не объединяется
fn merge_unassigned(ranges: Vec<ClosedRange>) -> Vec<ClosedRange>
{
    let mut merged: Vec<ClosedRange> = Vec::with_capacity(ranges.len());

    for range in ranges {
        if range.is_singleton() && range.tag == RangeTag::Single(GeneralCategory::Unassigned) {
            if let Some(last) = merged.last_mut() {
                if let RangeTag::Single(category) = last.tag {
                    if !category.is_unassigned() {
                        last.end = range.end;
                        last.tag = RangeTag::Compound(category);
                        continue;
                    }
                }
            }
        }

        merged.push(range);
    }

    merged
}

/// диапазоны покрывают [0, limit] без пропусков и пересечений, соседние простые теги различаются
fn check_partition(ranges: &[ClosedRange], limit: u32) -> Result<()>
{
    let table = TableKind::CharClasses;

    let (first, last) = match (ranges.first(), ranges.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(PrepareError::invariant(&table, 0, "no ranges")),
    };

    if first.start != 0 {
        return Err(PrepareError::invariant(&table, first.start, "first range must start at 0"));
    }

    if last.end != limit {
        return Err(PrepareError::invariant(
            &table,
            last.end,
            format!("last range must end at U+{:04X}", limit),
        ));
    }

    for range in ranges {
        if range.start > range.end {
            return Err(PrepareError::invariant(&table, range.start, "empty range"));
        }
    }

    for pair in ranges.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);

        if previous.end.checked_add(1) != Some(next.start) {
            return Err(PrepareError::invariant(
                &table,
                next.start,
                format!("range does not follow U+{:04X}", previous.end),
            ));
        }

        if matches!(previous.tag, RangeTag::Single(_)) && previous.tag == next.tag {
            return Err(PrepareError::invariant(
                &table,
                next.start,
                "adjacent ranges share a tag",
            ));
        }
    }

    Ok(())
}
