use std::collections::HashMap;

use unicode_charlist_source::Codepoint;

/// общий буфер названий без разделителей и смещения названий в нём
///
/// границы названий хранятся только в таблице кодпоинтов: пара (смещение, длина)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameHeap
{
    /// сам буфер
    text: String,
    /// смещение названия для каждого кодпоинта, в том же порядке, что и кодпоинты
    offsets: Vec<usize>,
    /// количество различных названий
    distinct: usize,
    /// различные названия, найденные внутри уже записанных (буфер не вырос)
    folded: usize,
}

impl NameHeap
{
    /// собрать буфер названий
    ///
    /// названия добавляются от самых длинных к самым коротким, чтобы более короткие названия
    /// находились внутри уже записанных. при равной длине сохраняется исходный порядок.
    /// если название уже есть в буфере, берется самое левое вхождение. название, добавленное
    /// в конец, получает место добавления, а его повторы - самое левое вхождение в новом буфере
    pub fn build(codepoints: &[Codepoint]) -> Self
    {
        let max_len = codepoints.iter().map(Codepoint::name_len).max().unwrap_or(0);

        // индексы кодпоинтов, сгруппированные по длине названия
        let mut by_len: Vec<Vec<usize>> = vec![vec![]; max_len + 1];

        for (index, codepoint) in codepoints.iter().enumerate() {
            by_len[codepoint.name_len()].push(index);
        }

        let mut text = String::new();
        let mut offsets = vec![0; codepoints.len()];
        let mut folded = 0;

        // уже размещенные названия -> самое левое вхождение в буфере. вхождение, целиком лежащее
        // в буфере, остаётся самым левым: буфер только растёт с конца
        let mut placed: HashMap<&str, usize> = HashMap::new();

        // пустые названия (длина 0) не ищем: смещение 0
        for len in (1 ..= max_len).rev() {
            for &index in by_len[len].iter() {
                let name = codepoints[index].name.as_str();

                let offset = match placed.get(name) {
                    Some(&offset) => offset,
                    None => match text.find(name) {
                        Some(offset) => {
                            folded += 1;
                            placed.insert(name, offset);
                            offset
                        }
                        None => {
                            let offset = text.len();
                            text.push_str(name);

                            // начало названия могло совпасть с концом буфера: для повторов
                            // запоминаем самое левое вхождение, а не место добавления
                            let leftmost = text.find(name).unwrap_or(offset);
                            placed.insert(name, leftmost);

                            offset
                        }
                    },
                };

                offsets[index] = offset;
            }
        }

        Self {
            text,
            offsets,
            distinct: placed.len(),
            folded,
        }
    }

    /// буфер названий
    #[inline]
    pub fn as_str(&self) -> &str
    {
        &self.text
    }

    /// размер буфера в байтах
    #[inline]
    pub fn len(&self) -> usize
    {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.text.is_empty()
    }

    /// смещения названий, параллельно списку кодпоинтов
    #[inline]
    pub fn offsets(&self) -> &[usize]
    {
        &self.offsets
    }

    /// смещение названия кодпоинта с заданным индексом
    #[inline]
    pub fn offset(&self, index: usize) -> Option<usize>
    {
        self.offsets.get(index).copied()
    }

    /// название по смещению и длине, как его увидит потребитель таблицы
    #[inline]
    pub fn name(&self, offset: usize, len: usize) -> Option<&str>
    {
        self.text.get(offset .. offset.checked_add(len)?)
    }

    /// количество различных непустых названий
    #[inline]
    pub fn distinct(&self) -> usize
    {
        self.distinct
    }

    /// количество различных названий, которые не потребовали места в буфере
    #[inline]
    pub fn folded(&self) -> usize
    {
        self.folded
    }
}
