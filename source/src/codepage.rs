/// однобайтовая кодовая страница: отображение индексов 0 ..= 255 в кодпоинты
/// индексы, отсутствующие в списке, отображаются сами в себя
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codepage
{
    /// название страницы (например, "WIN_CP1252")
    pub name: String,
    /// пары (индекс, кодпоинт) по возрастанию индекса
    pub mappings: Vec<(u32, u32)>,
}

impl Codepage
{
    pub fn new(name: &str, mappings: Vec<(u32, u32)>) -> Self
    {
        Self {
            name: name.to_owned(),
            mappings,
        }
    }
}
