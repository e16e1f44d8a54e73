use crate::tables::PreparedTables;

mod stats;

pub use stats::{LaneStats, TableStats};

/// размеры всех построенных таблиц
pub fn stats(tables: &PreparedTables) -> Vec<TableStats>
{
    let mut stats = vec![TableStats::new(
        "char classes",
        vec![
            LaneStats::of("ascii", &tables.classes.ascii),
            LaneStats::of("ranges", &tables.classes.ranges),
        ],
    )];

    for case in tables.case.iter() {
        stats.push(TableStats::new(
            format!("{} case mapping", case.direction),
            vec![
                LaneStats::of("blocks", &case.packed_blocks()),
                LaneStats::of("mappings", &case.packed_mappings()),
            ],
        ));
    }

    stats.push(TableStats::new(
        "normalization",
        vec![
            LaneStats::of("decomposed", &tables.normalization.decomposed),
            LaneStats::of("composed", &tables.normalization.composed),
        ],
    ));

    for codepage in tables.codepages.iter() {
        stats.push(TableStats::new(
            format!("code page {}", codepage.name),
            vec![LaneStats::of("runs", &codepage.packed)],
        ));
    }

    stats
}

/// пишем размеры таблиц в лог
pub fn log(tables: &PreparedTables)
{
    let stats = stats(tables);

    for table in stats.iter() {
        table.log();
    }

    tracing::info!(
        "total size: {} bytes",
        stats.iter().map(TableStats::size).sum::<usize>()
    );
}
