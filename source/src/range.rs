use regex::Regex;

lazy_static! {
    /// границы диапазона: <CJK Ideograph Extension A, First> ... <CJK Ideograph Extension A, Last>
    static ref RANGE_MARKER: Regex = Regex::new(r"(?i)^<([^,]+), (first|last)>$").unwrap();
}

/// граница диапазона кодпоинтов, не расписанных в UnicodeData.txt поштучно
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMarker<'a>
{
    /// первый кодпоинт диапазона
    First(&'a str),
    /// последний кодпоинт диапазона (включительно)
    Last(&'a str),
}

impl<'a> RangeMarker<'a>
{
    /// разобрать название кодпоинта; None - обычное название, не граница диапазона
    pub fn parse(name: &'a str) -> Option<Self>
    {
        if !name.starts_with('<') {
            return None;
        }

        let captures = RANGE_MARKER.captures(name)?;
        let label = captures.get(1)?.as_str();

        match captures.get(2)?.as_str().eq_ignore_ascii_case("first") {
            true => Some(Self::First(label)),
            false => Some(Self::Last(label)),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::RangeMarker;

    #[test]
    fn parses_both_bounds()
    {
        assert_eq!(
            RangeMarker::parse("<CJK Ideograph Extension A, First>"),
            Some(RangeMarker::First("CJK Ideograph Extension A"))
        );
        assert_eq!(
            RangeMarker::parse("<hangul syllable, LAST>"),
            Some(RangeMarker::Last("hangul syllable"))
        );
    }

    #[test]
    fn ignores_plain_and_bracketed_names()
    {
        assert_eq!(RangeMarker::parse("LATIN CAPITAL LETTER A"), None);
        assert_eq!(RangeMarker::parse("<control>"), None);
        assert_eq!(RangeMarker::parse("<Plane 15 Private Use, Middle>"), None);
    }
}
