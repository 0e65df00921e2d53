use std::io::{self, Write};

use unicode_charlist_source::Codepoint;

use crate::heap::NameHeap;

use self::format::{format_entry, format_heap_lines};

mod format;
pub mod stats;

/// ширина строки буфера названий в сгенерированном файле
pub const HEAP_LINE_LENGTH: usize = 76;

/// параметры сгенерированного C-файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat
{
    /// кем сгенерирован файл (для комментария в заголовке)
    pub generator: &'static str,
    /// заголовок с описанием структуры записи
    pub include: &'static str,
    /// тип записи таблицы
    pub entry_type: &'static str,
    /// таблица кодпоинтов
    pub list_symbol: &'static str,
    /// количество записей в таблице
    pub size_symbol: &'static str,
    /// буфер названий
    pub heap_symbol: &'static str,
    /// ширина строки буфера названий
    pub heap_line_length: usize,
}

impl Default for TableFormat
{
    fn default() -> Self
    {
        Self {
            generator: env!("CARGO_PKG_NAME"),
            include: "data.h",
            entry_type: "charinfo",
            list_symbol: "charlist",
            size_symbol: "charlistsize",
            heap_symbol: "charnamebuffer",
            heap_line_length: HEAP_LINE_LENGTH,
        }
    }
}

/// пишем таблицу кодпоинтов и буфер названий
///
/// offsets в heap идут параллельно codepoints
pub fn write<W: Write>(
    codepoints: &[Codepoint],
    heap: &NameHeap,
    format: &TableFormat,
    output: &mut W,
) -> io::Result<()>
{
    writeln!(
        output,
        "/* This file is generated by {}. Do not edit directly. */",
        format.generator
    )?;
    writeln!(output, "#include \"{}\"", format.include)?;
    writeln!(output, "{} const {}[] = {{", format.entry_type, format.list_symbol)?;

    for (codepoint, &offset) in codepoints.iter().zip(heap.offsets()) {
        writeln!(
            output,
            "{},",
            format_entry(offset, codepoint.name_len(), codepoint.code, codepoint.is_combining)
        )?;
    }

    writeln!(output, "}};")?;
    writeln!(
        output,
        "int const {} = sizeof {} / sizeof *{};",
        format.size_symbol, format.list_symbol, format.list_symbol
    )?;
    writeln!(output, "char const *{} = \"\\", format.heap_symbol)?;

    for line in format_heap_lines(heap.as_str(), format.heap_line_length) {
        writeln!(output, "{}\\", line)?;
    }

    writeln!(output, "\";")
}
