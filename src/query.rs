//! Era-year labels back to Gregorian years: `令和2年` → 2020.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::era::Era;
use crate::error::{Error, Result};
use crate::table::EraTable;

// {Era}{元|digits|kanji numeral}[年]
// The era part is lazy so that names ending in 元 (天元, 保元) still leave
// the year for the second group.
static RE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<era>[^0-9]+?)(?P<year>元|[0-9]+|[一二三四五六七八九十]{1,3})年?$").unwrap()
});

/// Single kanji digit → value 1–9.
fn kanji_digit(c: char) -> Option<u16> {
    match c {
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// Parse an era year written as 元, ASCII digits, or a kanji numeral up to 九十九.
fn parse_year(s: &str) -> Option<u16> {
    if s == "元" {
        return Some(1);
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok();
    }
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        ['十'] => Some(10),
        ['十', d] => Some(10 + kanji_digit(*d)?),
        [c] => kanji_digit(*c),
        [d, '十'] => Some(kanji_digit(*d)? * 10),
        [d1, '十', d2] => Some(kanji_digit(*d1)? * 10 + kanji_digit(*d2)?),
        _ => None,
    }
}

impl EraTable {
    /// Split a label such as `平成三十一年` or `令和２年` into its era and
    /// era-relative year.
    pub fn parse_era_year(&self, label: &str) -> Result<(&Era, u16)> {
        let normalized: String = label.nfkc().collect();
        let normalized = normalized.trim();

        let caps = RE_LABEL
            .captures(normalized)
            .ok_or_else(|| Error::InvalidLabel(label.to_string()))?;
        let name = &caps["era"];
        let era = self
            .get(name)
            .ok_or_else(|| Error::UnknownEra(name.to_string()))?;
        let year = parse_year(&caps["year"])
            .ok_or_else(|| Error::InvalidLabel(label.to_string()))?;
        Ok((era, year))
    }

    /// The Gregorian year an era-year label refers to.
    ///
    /// An era's final year is the year its successor began, so `平成31年`
    /// (2019) is accepted and `平成32年` is not.
    pub fn gregorian_year(&self, label: &str) -> Result<i16> {
        let (era, year) = self.parse_era_year(label)?;
        let out_of_range = || Error::YearOutOfRange {
            era: era.name,
            year,
        };
        if year == 0 {
            return Err(out_of_range());
        }

        let gregorian = i32::from(era.year) + i32::from(year) - 1;
        if let Some(next) = self.successor(era)
            && gregorian > i32::from(next.year)
        {
            return Err(out_of_range());
        }
        i16::try_from(gregorian).map_err(|_| out_of_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(label: &str) -> Result<i16> {
        EraTable::global().gregorian_year(label)
    }

    #[test]
    fn test_parse_year_forms() {
        assert_eq!(parse_year("元"), Some(1));
        assert_eq!(parse_year("1"), Some(1));
        assert_eq!(parse_year("31"), Some(31));
        assert_eq!(parse_year("三"), Some(3));
        assert_eq!(parse_year("十"), Some(10));
        assert_eq!(parse_year("十二"), Some(12));
        assert_eq!(parse_year("三十"), Some(30));
        assert_eq!(parse_year("六十四"), Some(64));
        assert_eq!(parse_year("百"), None);
        assert_eq!(parse_year("十十"), None);
    }

    #[test]
    fn test_gregorian_year_modern() {
        assert_eq!(gregorian("令和元年").unwrap(), 2019);
        assert_eq!(gregorian("令和2年").unwrap(), 2020);
        assert_eq!(gregorian("平成31年").unwrap(), 2019);
        assert_eq!(gregorian("昭和64年").unwrap(), 1989);
        assert_eq!(gregorian("明治元年").unwrap(), 1868);
    }

    #[test]
    fn test_gregorian_year_kanji_numerals() {
        assert_eq!(gregorian("平成三十一年").unwrap(), 2019);
        assert_eq!(gregorian("大正十五年").unwrap(), 1926);
    }

    #[test]
    fn test_gregorian_year_full_width_and_no_suffix() {
        assert_eq!(gregorian("令和２年").unwrap(), 2020);
        assert_eq!(gregorian(" 令和6 ").unwrap(), 2024);
    }

    #[test]
    fn test_era_name_ending_in_gen() {
        assert_eq!(gregorian("天元元年").unwrap(), 978);
        assert_eq!(gregorian("保元3年").unwrap(), 1158);
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(
            gregorian("平成32年"),
            Err(Error::YearOutOfRange {
                era: "平成",
                year: 32
            })
        ));
        assert!(matches!(gregorian("令和0年"), Err(Error::YearOutOfRange { .. })));
    }

    #[test]
    fn test_current_era_is_open_ended() {
        assert_eq!(gregorian("令和100年").unwrap(), 2118);
    }

    #[test]
    fn test_unknown_era() {
        assert!(matches!(gregorian("光文元年"), Err(Error::UnknownEra(name)) if name == "光文"));
    }

    #[test]
    fn test_invalid_label() {
        assert!(matches!(gregorian("令和"), Err(Error::InvalidLabel(_))));
        assert!(matches!(gregorian(""), Err(Error::InvalidLabel(_))));
        assert!(matches!(gregorian("2020"), Err(Error::InvalidLabel(_))));
    }

    #[test]
    fn test_round_trip_with_era_year() {
        let table = EraTable::global();
        let zdt = crate::format::jst(jiff::civil::date(1995, 6, 1)).unwrap();
        let label = table.era_year(&zdt);
        assert_eq!(label, "平成7年");
        assert_eq!(table.gregorian_year(&label).unwrap(), 1995);
    }
}
