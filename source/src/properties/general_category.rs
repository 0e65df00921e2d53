/// основная категория символа (General Category, GC)
/// берется из UCD: третья колонка UnicodeData.txt
///
/// категория хранится как есть: для таблицы названий важны только два признака -
/// управляющий символ (C*) и неразрывный комбинирующий маркер (Mn)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralCategory<'a>(&'a str);

impl<'a> GeneralCategory<'a>
{
    /// категория из UnicodeData.txt; пустое поле - None
    #[inline]
    pub fn parse(abbr: &'a str) -> Option<Self>
    {
        match abbr.is_empty() {
            true => None,
            false => Some(Self(abbr)),
        }
    }

    /// управляющий символ, который не попадает в таблицу: вся группа C, кроме Cf
    #[inline]
    pub fn is_excluded_control(&self) -> bool
    {
        let mut chars = self.0.chars();

        chars.next() == Some('C') && chars.next() != Some('f')
    }

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    #[inline]
    pub fn is_nonspacing_mark(&self) -> bool
    {
        self.0 == "Mn"
    }
}
