use tracing::debug;

use crate::error::ExtractError;
use crate::properties::{Codepoint, GeneralCategory};
use crate::range::RangeMarker;

/// кодпоинты, прочитанные из UnicodeData.txt
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction
{
    /// кодпоинты в порядке появления в исходных данных
    pub codepoints: Vec<Codepoint>,
    /// длина самого длинного названия
    pub max_name_len: usize,
}

impl Extraction
{
    fn push(&mut self, codepoint: Codepoint)
    {
        self.max_name_len = self.max_name_len.max(codepoint.name_len());
        self.codepoints.push(codepoint);
    }
}

/// открытый диапазон: встретили <..., First>, ждём <..., Last>
struct PendingRange
{
    start: u32,
    label: String,
    line: usize,
}

/// разбор UnicodeData.txt из UCD
///
/// из каждой строки берутся только первые три колонки: код, название и категория.
/// управляющие символы (кроме Cf) пропускаются, диапазоны разворачиваются в отдельные кодпоинты
pub fn extract<I, S>(lines: I) -> Result<Extraction, ExtractError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extraction = Extraction::default();

    // пригодится, когда встретим диапазоны
    let mut pending: Option<PendingRange> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let mut props = line.as_ref().split(';');

        // код, название, категория
        let (code, name, gc) = match (props.next(), props.next(), props.next()) {
            (Some(code), Some(name), Some(gc)) => (code, name, gc),
            _ => return Err(ExtractError::MissingFields { line: line_no }),
        };

        let code = parse_code(code).ok_or_else(|| ExtractError::InvalidCodepoint {
            line: line_no,
            value: code.to_owned(),
        })?;

        let gc = GeneralCategory::parse(gc).ok_or(ExtractError::EmptyCategory { line: line_no })?;

        // фильтр стоит до диапазонов: Private Use и суррогаты отсекаются целиком
        if gc.is_excluded_control() {
            continue;
        }

        match RangeMarker::parse(name) {
            Some(RangeMarker::First(label)) => {
                if let Some(range) = &pending {
                    return Err(ExtractError::NestedRangeStart {
                        line: line_no,
                        pending_line: range.line,
                    });
                }

                pending = Some(PendingRange {
                    start: code,
                    label: label.to_lowercase(),
                    line: line_no,
                });
            }
            Some(RangeMarker::Last(label)) => {
                let range = pending
                    .take()
                    .ok_or(ExtractError::RangeEndWithoutStart { line: line_no })?;

                let label = label.to_lowercase();

                if label != range.label {
                    return Err(ExtractError::RangeLabelMismatch {
                        line: line_no,
                        first: range.label,
                        last: label,
                    });
                }

                if code < range.start {
                    return Err(ExtractError::InvalidRange {
                        line: line_no,
                        first: range.start,
                        last: code,
                    });
                }

                debug!(
                    "U+{:04X} ..= U+{:04X} {}: {} codepoints",
                    range.start,
                    code,
                    label,
                    code - range.start + 1
                );

                for code in range.start ..= code {
                    extraction.push(Codepoint::new(code, label.as_str(), false));
                }
            }
            None => {
                extraction.push(Codepoint::new(code, name.to_lowercase(), gc.is_nonspacing_mark()));
            }
        }
    }

    match pending {
        Some(range) => Err(ExtractError::UnterminatedRange {
            line: range.line,
            label: range.label,
        }),
        None => Ok(extraction),
    }
}

/// шестнадцатеричный код без знака и прочих префиксов
fn parse_code(code: &str) -> Option<u32>
{
    match !code.is_empty() && code.bytes().all(|b| b.is_ascii_hexdigit()) {
        true => u32::from_str_radix(code, 16).ok(),
        false => None,
    }
}
