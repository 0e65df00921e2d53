use tracing::info;
use unicode_charlist_source::Codepoint;

use crate::heap::NameHeap;

/// информация о собранном буфере названий
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapStats
{
    /// количество записей в таблице
    pub codepoints: usize,
    /// различные непустые названия
    pub distinct_names: usize,
    /// различные названия, найденные внутри более длинных
    pub folded_names: usize,
    /// суммарная длина всех названий
    pub name_bytes: usize,
    /// суммарная длина различных названий - столько занял бы буфер без поиска подстрок
    pub distinct_name_bytes: usize,
    /// размер буфера
    pub heap_bytes: usize,
}

impl HeapStats
{
    pub fn collect(codepoints: &[Codepoint], heap: &NameHeap) -> Self
    {
        let mut names: Vec<&str> = codepoints.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();

        Self {
            codepoints: codepoints.len(),
            distinct_names: heap.distinct(),
            folded_names: heap.folded(),
            name_bytes: codepoints.iter().map(Codepoint::name_len).sum(),
            distinct_name_bytes: names.iter().map(|name| name.len()).sum(),
            heap_bytes: heap.len(),
        }
    }

    /// байты, сэкономленные поиском подстрок
    #[inline]
    pub fn folded_bytes(&self) -> usize
    {
        self.distinct_name_bytes - self.heap_bytes
    }
}

/// вывести информацию о буфере в лог
pub fn print(codepoints: &[Codepoint], heap: &NameHeap) -> HeapStats
{
    let stats = HeapStats::collect(codepoints, heap);

    info!(
        "записей: {}, различных названий: {} (найдено внутри других: {})",
        stats.codepoints, stats.distinct_names, stats.folded_names,
    );
    info!(
        "названия: {} байт, без повторов: {} байт, буфер: {} байт (экономия {} байт)",
        stats.name_bytes,
        stats.distinct_name_bytes,
        stats.heap_bytes,
        stats.folded_bytes(),
    );

    stats
}
