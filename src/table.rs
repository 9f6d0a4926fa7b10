//! The era table and the date → era resolver.

use std::sync::LazyLock;

use jiff::Timestamp;

use crate::era::{ERA_ENTRIES, Era, EraEntry};
use crate::error::{Error, Result};

static TABLE: LazyLock<EraTable> =
    LazyLock::new(|| EraTable::new(ERA_ENTRIES).expect("built-in era dataset is ordered"));

/// All eras, ordered by start. Immutable once built.
#[derive(Debug, Clone)]
pub struct EraTable {
    eras: Vec<Era>,
}

impl EraTable {
    /// Build a table, deriving each era's starting instant.
    ///
    /// Entries must begin on strictly increasing days.
    pub fn new(entries: &[EraEntry]) -> Result<Self> {
        let eras = entries
            .iter()
            .map(Era::from_entry)
            .collect::<Result<Vec<_>>>()?;

        for pair in eras.windows(2) {
            if pair[1].start() <= pair[0].start() {
                return Err(Error::Unordered {
                    earlier: pair[0].name,
                    later: pair[1].name,
                });
            }
        }

        tracing::trace!(eras = eras.len(), "era table built");
        Ok(Self { eras })
    }

    /// The process-wide table built from [`ERA_ENTRIES`].
    pub fn global() -> &'static EraTable {
        &TABLE
    }

    /// The era in effect at `at`: the latest one whose start is not after it.
    ///
    /// Era `i` covers `[start(i), start(i + 1))`; the newest era is open-ended.
    pub fn find(&self, at: Timestamp) -> Result<&Era> {
        match self.eras.partition_point(|era| era.start() <= at) {
            0 => Err(Error::EraNotFound { at }),
            n => Ok(&self.eras[n - 1]),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Era> {
        self.eras.iter().find(|era| era.name == name)
    }

    /// The era that replaced `era`, if any.
    pub fn successor(&self, era: &Era) -> Option<&Era> {
        let idx = self.eras.iter().position(|e| e.name == era.name)?;
        self.eras.get(idx + 1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Era> {
        self.eras.iter()
    }

    pub fn len(&self) -> usize {
        self.eras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    pub fn first(&self) -> Option<&Era> {
        self.eras.first()
    }

    pub fn last(&self) -> Option<&Era> {
        self.eras.last()
    }
}

impl<'a> IntoIterator for &'a EraTable {
    type Item = &'a Era;
    type IntoIter = std::slice::Iter<'a, Era>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::jst_zone;
    use jiff::civil::Date;
    use jiff::ToSpan;
    use proptest::prelude::*;

    fn at(y: i16, m: i8, d: i8) -> Timestamp {
        Date::constant(y, m, d).to_zoned(jst_zone()).unwrap().timestamp()
    }

    fn name_at(y: i16, m: i8, d: i8) -> &'static str {
        EraTable::global().find(at(y, m, d)).unwrap().name
    }

    #[test]
    fn test_global_table_is_complete() {
        let table = EraTable::global();
        assert_eq!(table.len(), ERA_ENTRIES.len());
        assert_eq!(table.first().unwrap().name, "大化");
        assert_eq!(table.last().unwrap().name, "令和");
    }

    #[test]
    fn test_find_modern_boundaries() {
        assert_eq!(name_at(1989, 1, 7), "昭和");
        assert_eq!(name_at(1989, 1, 8), "平成");
        assert_eq!(name_at(2019, 4, 30), "平成");
        assert_eq!(name_at(2019, 5, 1), "令和");
        assert_eq!(name_at(2100, 1, 1), "令和");
    }

    #[test]
    fn test_find_first_era() {
        assert_eq!(name_at(645, 1, 1), "大化");
        assert_eq!(name_at(650, 2, 14), "大化");
        assert_eq!(name_at(650, 2, 15), "白雉");
    }

    #[test]
    fn test_find_before_first_era() {
        let err = EraTable::global().find(at(644, 12, 31)).unwrap_err();
        assert!(matches!(err, Error::EraNotFound { .. }));
    }

    #[test]
    fn test_find_boundary_is_midnight_jst() {
        let reiwa = EraTable::global().get("令和").unwrap().start();
        let just_before = reiwa.checked_sub(1.nanosecond()).unwrap();
        assert_eq!(EraTable::global().find(just_before).unwrap().name, "平成");
        assert_eq!(EraTable::global().find(reiwa).unwrap().name, "令和");

        // 2019-04-30T20:00Z is already May 1 in Japan.
        let evening_utc: Timestamp = "2019-04-30T20:00:00Z".parse().unwrap();
        assert_eq!(EraTable::global().find(evening_utc).unwrap().name, "令和");
    }

    #[test]
    fn test_find_normalized_start() {
        // 弘安 is recorded as 1278-02-29, which rolls to March 1.
        assert_eq!(name_at(1278, 2, 28), "建治");
        assert_eq!(name_at(1278, 3, 1), "弘安");
    }

    #[test]
    fn test_find_concurrent_courts() {
        assert_eq!(name_at(1375, 3, 1), "永和");
        assert_eq!(name_at(1375, 6, 1), "天授");
        assert_eq!(name_at(1384, 3, 1), "至徳");
        assert_eq!(name_at(1384, 5, 1), "元中");
    }

    #[test]
    fn test_rejects_unordered_entries() {
        let entries = [
            EraEntry::new("平成", "へいせい", 1989, 1, 8),
            EraEntry::new("昭和", "しょうわ", 1926, 12, 25),
        ];
        let err = EraTable::new(&entries).unwrap_err();
        assert!(matches!(
            err,
            Error::Unordered {
                earlier: "平成",
                later: "昭和"
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_start() {
        let entries = [
            EraEntry::new("甲", "こう", 2000, 1, 1),
            EraEntry::new("乙", "おつ", 2000, 1, 1),
        ];
        assert!(matches!(
            EraTable::new(&entries),
            Err(Error::Unordered { .. })
        ));
    }

    #[test]
    fn test_successor() {
        let table = EraTable::global();
        let heisei = table.get("平成").unwrap();
        assert_eq!(table.successor(heisei).unwrap().name, "令和");
        assert!(table.successor(table.last().unwrap()).is_none());
    }

    #[test]
    fn test_get_unknown() {
        assert!(EraTable::global().get("明日").is_none());
    }

    proptest! {
        #[test]
        fn prop_find_is_latest_start_not_after(secs in -42_000_000_000i64..8_000_000_000i64) {
            let ts = Timestamp::from_second(secs).unwrap();
            let table = EraTable::global();
            match table.find(ts) {
                Ok(era) => {
                    prop_assert!(era.start() <= ts);
                    if let Some(next) = table.successor(era) {
                        prop_assert!(next.start() > ts);
                    }
                }
                Err(Error::EraNotFound { .. }) => {
                    prop_assert!(ts < table.first().unwrap().start());
                }
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }

        #[test]
        fn prop_find_matches_reverse_scan(days in 0i64..500_000) {
            let table = EraTable::global();
            let base = table.first().unwrap().start();
            let ts = base.checked_add((days * 24).hours()).unwrap();
            let scanned = table.iter().rev().find(|era| era.start() <= ts);
            prop_assert_eq!(table.find(ts).ok(), scanned);
        }
    }
}
