use thiserror::Error;

/// ошибка разбора UnicodeData.txt
///
/// все ошибки фатальны: таблица собирается на этапе сборки, и неполная таблица хуже остановки.
/// строки нумеруются с 1
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError
{
    #[error("line {line}: expected at least 3 fields separated by ';'")]
    MissingFields { line: usize },

    #[error("line {line}: invalid codepoint {value:?}")]
    InvalidCodepoint { line: usize, value: String },

    #[error("line {line}: empty general category")]
    EmptyCategory { line: usize },

    #[error("line {line}: range end without a preceding range start")]
    RangeEndWithoutStart { line: usize },

    #[error("line {line}: range start while the range opened on line {pending_line} is still open")]
    NestedRangeStart { line: usize, pending_line: usize },

    #[error("line {line}: range end {last:?} does not match range start {first:?}")]
    RangeLabelMismatch { line: usize, first: String, last: String },

    #[error("line {line}: range end U+{last:04X} precedes range start U+{first:04X}")]
    InvalidRange { line: usize, first: u32, last: u32 },

    #[error("line {line}: range {label:?} is never closed")]
    UnterminatedRange { line: usize, label: String },
}
