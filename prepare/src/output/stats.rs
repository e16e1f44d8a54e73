use tracing::info;

/// размер одного массива таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneStats
{
    pub name: &'static str,
    pub entries: usize,
    /// размер в байтах
    pub size: usize,
}

impl LaneStats
{
    pub fn of<T>(name: &'static str, lane: &[T]) -> Self
    {
        Self {
            name,
            entries: lane.len(),
            size: core::mem::size_of_val(lane),
        }
    }
}

/// информация о размере таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats
{
    pub name: String,
    pub lanes: Vec<LaneStats>,
}

impl TableStats
{
    pub fn new(name: impl Into<String>, lanes: Vec<LaneStats>) -> Self
    {
        Self {
            name: name.into(),
            lanes,
        }
    }

    /// общий размер в байтах
    pub fn size(&self) -> usize
    {
        self.lanes.iter().map(|lane| lane.size).sum()
    }

    pub fn log(&self)
    {
        let lanes: Vec<String> = self
            .lanes
            .iter()
            .map(|lane| format!("{}: {} ({} bytes)", lane.name, lane.entries, lane.size))
            .collect();

        info!("{}: {}, total {} bytes", self.name, lanes.join(", "), self.size());
    }
}

#[test]
fn lane_sizes()
{
    let stats = TableStats::new(
        "test",
        vec![
            LaneStats::of("bytes", &[0u8; 0x80]),
            LaneStats::of("words", &[0u32; 3]),
            LaneStats::of("pairs", &[0u64; 2]),
        ],
    );

    assert_eq!(stats.lanes[1].entries, 3);
    assert_eq!(stats.size(), 0x80 + 12 + 16);
}
