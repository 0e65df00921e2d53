mod general_category;

pub use general_category::GeneralCategory;

/// кодпоинт Unicode в том виде, в каком он попадает в таблицу названий
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название, приведенное к нижнему регистру
    pub name: String,
    /// комбинирующий символ (Mn)
    pub is_combining: bool,
}

impl Codepoint
{
    #[inline]
    pub fn new(code: u32, name: impl Into<String>, is_combining: bool) -> Self
    {
        Self {
            code,
            name: name.into(),
            is_combining,
        }
    }

    /// длина названия в байтах
    #[inline]
    pub fn name_len(&self) -> usize
    {
        self.name.len()
    }
}
