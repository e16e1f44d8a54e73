pub mod properties;

mod codepage;

pub use codepage::Codepage;

use properties::Codepoint;

/// исходные данные для построения таблиц, уже разобранные из файлов UCD и кодовых страниц
#[derive(Debug, Clone, Default)]
pub struct SourceData
{
    /// кодпоинты по возрастанию кода; отсутствующие кодпоинты считаются неназначенными (Cn)
    pub codepoints: Vec<Codepoint>,
    /// однобайтовые кодовые страницы
    pub codepages: Vec<Codepage>,
}
