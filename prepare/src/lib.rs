use std::io::{self, Write};

use thiserror::Error;
use tracing::info;
use unicode_charlist_source::{extract, ExtractError};

use crate::heap::NameHeap;
use crate::output::TableFormat;

pub mod heap;
pub mod output;

/// ошибка генерации таблицы
#[derive(Debug, Error)]
pub enum GenerateError
{
    #[error("malformed UnicodeData.txt: {0}")]
    Extract(#[from] ExtractError),

    #[error("failed to write the table: {0}")]
    Io(#[from] io::Error),
}

/// UnicodeData.txt -> C-файл с таблицей кодпоинтов и буфером названий
pub fn generate<W: Write>(
    data: &str,
    format: &TableFormat,
    writer: &mut W,
) -> Result<(), GenerateError>
{
    let extraction = extract(data.lines())?;

    info!(
        "разобран список кодпоинтов: {} записей, самое длинное название - {} байт",
        extraction.codepoints.len(),
        extraction.max_name_len,
    );

    let heap = NameHeap::build(&extraction.codepoints);
    output::stats::print(&extraction.codepoints, &heap);

    output::write(&extraction.codepoints, &heap, format, writer)?;

    Ok(())
}
