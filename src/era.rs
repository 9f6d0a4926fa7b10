//! Japanese eras (元号) and the literal dataset they are built from.
//!
//! Every era is listed from 大化 (645) through 令和 (2019), ordered by the
//! day the era began. Start days are civil dates in Japan Standard Time.

use jiff::civil::Date;
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, ToSpan};
use serde::Serialize;

use crate::error::{Error, Result};

/// The fixed UTC+9 offset era boundaries are defined in.
pub const JST: Offset = Offset::constant(9);

/// A time zone that is always UTC+9.
pub fn jst_zone() -> TimeZone {
    TimeZone::fixed(JST)
}

// ── Literal entries ──────────────────────────────────────────────────

/// One row of the dataset: a name, its reading, and the first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraEntry {
    pub name: &'static str,
    pub kana: &'static str,
    pub year: i16,
    pub month: i8,
    pub day: i8,
}

impl EraEntry {
    pub const fn new(
        name: &'static str,
        kana: &'static str,
        year: i16,
        month: i8,
        day: i8,
    ) -> Self {
        Self {
            name,
            kana,
            year,
            month,
            day,
        }
    }

    /// The first day of the era.
    ///
    /// A few recorded days do not exist in the proleptic Gregorian calendar
    /// (弘安 starts on "1278-02-29", 永正 on "1504-02-30"). The excess rolls
    /// into the following month, so both of those land on March 1.
    pub fn start_date(&self) -> std::result::Result<Date, jiff::Error> {
        let first = Date::new(self.year, self.month, 1)?;
        first.checked_add(i64::from(self.day - 1).days())
    }
}

// ── Era ──────────────────────────────────────────────────────────────

/// A resolved era: the literal entry plus its absolute starting instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Era {
    pub name: &'static str,
    pub kana: &'static str,
    pub year: i16,
    pub month: i8,
    pub day: i8,
    #[serde(rename = "start_date")]
    date: Date,
    #[serde(skip)]
    start: Timestamp,
}

impl Era {
    pub fn from_entry(entry: &EraEntry) -> Result<Self> {
        let invalid = |source| Error::InvalidStart {
            name: entry.name,
            source,
        };
        let date = entry.start_date().map_err(invalid)?;
        let start = date.to_zoned(jst_zone()).map_err(invalid)?.timestamp();
        Ok(Self {
            name: entry.name,
            kana: entry.kana,
            year: entry.year,
            month: entry.month,
            day: entry.day,
            date,
            start,
        })
    }

    /// Midnight JST on the first day of the era.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// The first day of the era as a civil date, after normalization.
    pub fn start_date(&self) -> Date {
        self.date
    }

    /// The main reading followed by any alternatives, e.g.
    /// `しゅちょう（すちょう）` yields `しゅちょう` then `すちょう`.
    pub fn readings(&self) -> impl Iterator<Item = &'static str> {
        self.kana.split(['（', '）']).filter(|s| !s.is_empty())
    }
}

/// Every era, oldest first, with strictly increasing start days.
///
/// Where the Northern and Southern Courts (南北朝) ran concurrent eras, both
/// lines are listed in the order their eras began.
pub static ERA_ENTRIES: &[EraEntry] = &[
    EraEntry::new("大化", "たいか", 645, 1, 1),
    EraEntry::new("白雉", "はくち", 650, 2, 15),
    EraEntry::new("朱鳥", "しゅちょう（すちょう）", 686, 7, 20),
    EraEntry::new("大宝", "たいほう（だいほう）", 701, 3, 21),
    EraEntry::new("慶雲", "けいうん（きょううん）", 704, 5, 10),
    EraEntry::new("和銅", "わどう", 708, 1, 11),
    EraEntry::new("養老", "ようろう", 717, 11, 17),
    EraEntry::new("神亀", "じんき", 724, 2, 4),
    EraEntry::new("天平", "てんぴょう（てんびょう）", 729, 8, 5),
    EraEntry::new("天平感宝", "てんぴょうかんぽう", 749, 4, 14),
    EraEntry::new("天平勝宝", "てんぴょうしょうほう", 749, 7, 2),
    EraEntry::new("天平宝字", "てんぴょうほうじ", 757, 8, 18),
    EraEntry::new("天平神護", "てんぴょうしんご", 765, 1, 7),
    EraEntry::new("神護景雲", "しんごけいうん", 767, 8, 16),
    EraEntry::new("宝亀", "ほうき", 770, 10, 1),
    EraEntry::new("天応", "てんおう", 781, 1, 1),
    EraEntry::new("延暦", "えんりゃく", 782, 8, 19),
    EraEntry::new("弘仁", "こうにん", 810, 9, 19),
    EraEntry::new("天長", "てんちょう", 824, 1, 5),
    EraEntry::new("承和", "じょうわ（しょうわ）", 834, 1, 3),
    EraEntry::new("嘉祥", "かしょう（かじょう）", 848, 6, 13),
    EraEntry::new("仁寿", "にんじゅ", 851, 4, 28),
    EraEntry::new("斎衡", "さいこう", 854, 11, 30),
    EraEntry::new("天安", "てんあん（てんなん）", 857, 2, 21),
    EraEntry::new("貞観", "じょうがん", 859, 4, 15),
    EraEntry::new("元慶", "がんぎょう（げんけい）", 877, 4, 16),
    EraEntry::new("仁和", "にんな（じんな）", 885, 2, 21),
    EraEntry::new("寛平", "かんぴょう（かんぺい）", 889, 4, 27),
    EraEntry::new("昌泰", "しょうたい", 898, 4, 26),
    EraEntry::new("延喜", "えんぎ", 901, 7, 15),
    EraEntry::new("延長", "えんちょう", 923, 4, 11),
    EraEntry::new("承平", "じょうへい（しょうへい）", 931, 4, 26),
    EraEntry::new("天慶", "てんぎょう（てんきょう）", 938, 5, 22),
    EraEntry::new("天暦", "てんりゃく（てんれき）", 947, 4, 22),
    EraEntry::new("天徳", "てんとく", 957, 10, 27),
    EraEntry::new("応和", "おうわ", 961, 2, 16),
    EraEntry::new("康保", "こうほう", 964, 7, 10),
    EraEntry::new("安和", "あんな（あんわ）", 968, 8, 13),
    EraEntry::new("天禄", "てんろく", 970, 3, 25),
    EraEntry::new("天延", "てんえん", 973, 12, 20),
    EraEntry::new("貞元", "じょうげん（ていげん）", 976, 7, 13),
    EraEntry::new("天元", "てんげん", 978, 11, 29),
    EraEntry::new("永観", "えいかん", 983, 4, 15),
    EraEntry::new("寛和", "かんな（かんわ）", 985, 4, 27),
    EraEntry::new("永延", "えいえん（ようえん）", 987, 4, 5),
    EraEntry::new("永祚", "えいそ", 989, 8, 8),
    EraEntry::new("正暦", "しょうりゃく（じょうりゃく）", 990, 11, 7),
    EraEntry::new("長徳", "ちょうとく", 995, 2, 22),
    EraEntry::new("長保", "ちょうほう", 999, 1, 13),
    EraEntry::new("寛弘", "かんこう", 1004, 7, 20),
    EraEntry::new("長和", "ちょうわ", 1012, 12, 25),
    EraEntry::new("寛仁", "かんにん", 1017, 4, 23),
    EraEntry::new("治安", "じあん（ちあん）", 1021, 2, 2),
    EraEntry::new("万寿", "まんじゅ", 1024, 7, 13),
    EraEntry::new("長元", "ちょうげん", 1028, 7, 25),
    EraEntry::new("長暦", "ちょうりゃく（ちょうれき）", 1037, 4, 21),
    EraEntry::new("長久", "ちょうきゅう", 1040, 11, 10),
    EraEntry::new("寛徳", "かんとく", 1044, 11, 24),
    EraEntry::new("永承", "えいしょう（えいじょう）", 1046, 4, 14),
    EraEntry::new("天喜", "てんぎ（てんき）", 1053, 1, 11),
    EraEntry::new("康平", "こうへい", 1058, 8, 29),
    EraEntry::new("治暦", "じりゃく（ちりゃく）", 1065, 8, 2),
    EraEntry::new("延久", "えんきゅう", 1069, 4, 13),
    EraEntry::new("承保", "じょうほう（しょうほう）", 1074, 8, 23),
    EraEntry::new("承暦", "じょうりゃく（しょうりゃく）", 1077, 11, 17),
    EraEntry::new("永保", "えいほう", 1081, 2, 10),
    EraEntry::new("応徳", "おうとく", 1084, 2, 7),
    EraEntry::new("寛治", "かんじ", 1087, 4, 7),
    EraEntry::new("嘉保", "かほう", 1094, 12, 15),
    EraEntry::new("永長", "えいちょう（ようちょう）", 1096, 12, 17),
    EraEntry::new("承徳", "じょうとく（しょうとく）", 1097, 11, 21),
    EraEntry::new("康和", "こうわ", 1099, 8, 28),
    EraEntry::new("長治", "ちょうじ", 1104, 2, 10),
    EraEntry::new("嘉承", "かじょう（かしょう）", 1106, 4, 9),
    EraEntry::new("天仁", "てんにん", 1108, 8, 3),
    EraEntry::new("天永", "てんえい", 1110, 7, 13),
    EraEntry::new("永久", "えいきゅう", 1113, 7, 13),
    EraEntry::new("元永", "げんえい", 1118, 4, 3),
    EraEntry::new("保安", "ほうあん", 1120, 4, 10),
    EraEntry::new("天治", "てんじ", 1124, 4, 3),
    EraEntry::new("大治", "だいじ（たいじ）", 1126, 1, 22),
    EraEntry::new("天承", "てんしょう（てんじょう）", 1131, 1, 29),
    EraEntry::new("長承", "ちょうしょう（ちょうじょう）", 1132, 8, 11),
    EraEntry::new("保延", "ほうえん", 1135, 4, 27),
    EraEntry::new("永治", "えいじ", 1141, 7, 10),
    EraEntry::new("康治", "こうじ", 1142, 4, 28),
    EraEntry::new("天養", "てんよう", 1144, 2, 23),
    EraEntry::new("久安", "きゅうあん", 1145, 7, 22),
    EraEntry::new("仁平", "にんぺい（にんびょう）", 1151, 1, 26),
    EraEntry::new("久寿", "きゅうじゅ", 1154, 10, 28),
    EraEntry::new("保元", "ほうげん", 1156, 4, 27),
    EraEntry::new("平治", "へいじ（びょうじ）", 1159, 4, 20),
    EraEntry::new("永暦", "えいりゃく（ようりゃく）", 1160, 1, 10),
    EraEntry::new("応保", "おうほう", 1161, 9, 4),
    EraEntry::new("長寛", "ちょうかん", 1163, 3, 29),
    EraEntry::new("永万", "えいまん（ようまん）", 1165, 6, 5),
    EraEntry::new("仁安", "にんあん（にんなん）", 1166, 8, 27),
    EraEntry::new("嘉応", "かおう", 1169, 4, 8),
    EraEntry::new("承安", "じょうあん（しょうあん）", 1171, 4, 21),
    EraEntry::new("安元", "あんげん", 1175, 7, 28),
    EraEntry::new("治承", "じしょう（じじょう）", 1177, 8, 4),
    EraEntry::new("養和", "ようわ", 1181, 7, 14),
    EraEntry::new("寿永", "じゅえい", 1182, 5, 27),
    EraEntry::new("元暦", "げんりゃく", 1184, 4, 16),
    EraEntry::new("文治", "ぶんじ（もんじ）", 1185, 8, 14),
    EraEntry::new("正治", "しょうじ", 1199, 4, 27),
    EraEntry::new("建仁", "けんにん", 1201, 2, 13),
    EraEntry::new("元久", "げんきゅう", 1204, 2, 20),
    EraEntry::new("建永", "けんえい", 1206, 4, 27),
    EraEntry::new("承元", "じょうげん（しょうげん）", 1207, 10, 25),
    EraEntry::new("建暦", "けんりゃく", 1211, 3, 9),
    EraEntry::new("建保", "けんぽう（けんほう）", 1213, 12, 6),
    EraEntry::new("承久", "じょうきゅう（しょうきゅう）", 1219, 4, 12),
    EraEntry::new("貞応", "じょうおう（ていおう）", 1222, 4, 13),
    EraEntry::new("元仁", "げんにん", 1224, 11, 20),
    EraEntry::new("嘉禄", "かろく", 1225, 4, 20),
    EraEntry::new("安貞", "あんてい", 1227, 12, 10),
    EraEntry::new("寛喜", "かんき", 1229, 3, 5),
    EraEntry::new("貞永", "じょうえい（ていえい）", 1232, 4, 2),
    EraEntry::new("天福", "てんぷく（てんふく）", 1233, 4, 15),
    EraEntry::new("文暦", "ぶんりゃく（もんりゃく）", 1234, 11, 5),
    EraEntry::new("嘉禎", "かてい", 1235, 9, 19),
    EraEntry::new("暦仁", "りゃくにん（れきにん）", 1238, 11, 23),
    EraEntry::new("延応", "えんおう（えんのう）", 1239, 2, 7),
    EraEntry::new("仁治", "にんじ（にんち）", 1240, 7, 16),
    EraEntry::new("寛元", "かんげん", 1243, 2, 26),
    EraEntry::new("宝治", "ほうじ", 1247, 2, 28),
    EraEntry::new("建長", "けんちょう", 1249, 3, 18),
    EraEntry::new("康元", "こうげん", 1256, 10, 5),
    EraEntry::new("正嘉", "しょうか", 1257, 3, 14),
    EraEntry::new("正元", "しょうげん", 1259, 3, 26),
    EraEntry::new("文応", "ぶんおう", 1260, 4, 13),
    EraEntry::new("弘長", "こうちょう", 1261, 2, 20),
    EraEntry::new("文永", "ぶんえい", 1264, 2, 28),
    EraEntry::new("建治", "けんじ", 1275, 4, 25),
    EraEntry::new("弘安", "こうあん", 1278, 2, 29),
    EraEntry::new("正応", "しょうおう", 1288, 4, 28),
    EraEntry::new("永仁", "えいにん", 1293, 8, 5),
    EraEntry::new("正安", "しょうあん", 1299, 4, 25),
    EraEntry::new("乾元", "けんげん", 1302, 11, 21),
    EraEntry::new("嘉元", "かげん", 1303, 8, 5),
    EraEntry::new("徳治", "とくじ", 1306, 12, 14),
    EraEntry::new("延慶", "えんきょう（えんぎょう）", 1308, 10, 9),
    EraEntry::new("応長", "おうちょう", 1311, 4, 28),
    EraEntry::new("正和", "しょうわ", 1312, 3, 20),
    EraEntry::new("文保", "ぶんぽう（ぶんほう）", 1317, 2, 3),
    EraEntry::new("元応", "げんおう（げんのう）", 1319, 4, 28),
    EraEntry::new("元亨", "げんこう", 1321, 2, 23),
    EraEntry::new("正中", "しょうちゅう", 1324, 12, 9),
    EraEntry::new("嘉暦", "かりゃく", 1326, 4, 26),
    EraEntry::new("元徳", "げんとく", 1329, 8, 29),
    EraEntry::new("元弘", "げんこう", 1331, 8, 9),
    EraEntry::new("正慶", "しょうきょう（しょうけい）", 1332, 4, 28),
    EraEntry::new("建武", "けんむ（けんぶ）", 1334, 1, 29),
    EraEntry::new("延元", "えんげん", 1336, 2, 29),
    EraEntry::new("暦応", "りゃくおう（れきおう）", 1338, 8, 28),
    EraEntry::new("興国", "こうこく", 1340, 4, 28),
    EraEntry::new("康永", "こうえい", 1342, 4, 27),
    EraEntry::new("貞和", "じょうわ（ていわ）", 1345, 10, 21),
    EraEntry::new("正平", "しょうへい", 1346, 12, 8),
    EraEntry::new("観応", "かんおう（かんのう）", 1350, 2, 27),
    EraEntry::new("文和", "ぶんな（ぶんわ）", 1352, 9, 27),
    EraEntry::new("延文", "えんぶん", 1356, 3, 28),
    EraEntry::new("康安", "こうあん", 1361, 3, 29),
    EraEntry::new("貞治", "じょうじ（ていじ）", 1362, 9, 23),
    EraEntry::new("応安", "おうあん", 1368, 2, 18),
    EraEntry::new("建徳", "けんとく", 1370, 7, 24),
    EraEntry::new("文中", "ぶんちゅう", 1372, 4, 1),
    EraEntry::new("永和", "えいわ", 1375, 2, 27),
    EraEntry::new("天授", "てんじゅ", 1375, 5, 27),
    EraEntry::new("康暦", "こうりゃく", 1379, 3, 22),
    EraEntry::new("弘和", "こうわ", 1381, 2, 10),
    EraEntry::new("永徳", "えいとく", 1381, 2, 24),
    EraEntry::new("至徳", "しとく", 1384, 2, 27),
    EraEntry::new("元中", "げんちゅう", 1384, 4, 28),
    EraEntry::new("嘉慶", "かきょう（かけい）", 1387, 8, 23),
    EraEntry::new("康応", "こうおう", 1389, 2, 9),
    EraEntry::new("明徳", "めいとく", 1390, 3, 26),
    EraEntry::new("応永", "おうえい", 1394, 7, 5),
    EraEntry::new("正長", "しょうちょう", 1428, 4, 27),
    EraEntry::new("永享", "えいきょう", 1429, 9, 5),
    EraEntry::new("嘉吉", "かきつ（かきち）", 1441, 2, 17),
    EraEntry::new("文安", "ぶんあん", 1444, 2, 5),
    EraEntry::new("宝徳", "ほうとく", 1449, 7, 28),
    EraEntry::new("享徳", "きょうとく", 1452, 7, 25),
    EraEntry::new("康正", "こうしょう", 1455, 7, 25),
    EraEntry::new("長禄", "ちょうろく", 1457, 9, 28),
    EraEntry::new("寛正", "かんしょう", 1460, 12, 21),
    EraEntry::new("文正", "ぶんしょう（もんしょう）", 1466, 2, 28),
    EraEntry::new("応仁", "おうにん", 1467, 3, 5),
    EraEntry::new("文明", "ぶんめい", 1469, 4, 28),
    EraEntry::new("長享", "ちょうきょう", 1487, 7, 20),
    EraEntry::new("延徳", "えんとく", 1489, 8, 21),
    EraEntry::new("明応", "めいおう", 1492, 7, 19),
    EraEntry::new("文亀", "ぶんき", 1501, 2, 29),
    EraEntry::new("永正", "えいしょう", 1504, 2, 30),
    EraEntry::new("大永", "だいえい", 1521, 8, 23),
    EraEntry::new("享禄", "きょうろく", 1528, 8, 20),
    EraEntry::new("天文", "てんぶん", 1532, 7, 29),
    EraEntry::new("弘治", "こうじ", 1555, 10, 23),
    EraEntry::new("永禄", "えいろく", 1558, 2, 28),
    EraEntry::new("元亀", "げんき", 1570, 4, 23),
    EraEntry::new("文禄", "ぶんろく", 1592, 12, 8),
    EraEntry::new("慶長", "けいちょう（きょうちょう）", 1596, 10, 27),
    EraEntry::new("寛永", "かんえい", 1624, 2, 30),
    EraEntry::new("正保", "しょうほう", 1644, 12, 16),
    EraEntry::new("慶安", "けいあん", 1648, 2, 15),
    EraEntry::new("承応", "じょうおう（しょうおう）", 1652, 9, 18),
    EraEntry::new("明暦", "めいれき（みょうりゃく）", 1655, 4, 13),
    EraEntry::new("万治", "まんじ", 1658, 7, 23),
    EraEntry::new("寛文", "かんぶん", 1661, 4, 25),
    EraEntry::new("延宝", "えんぽう", 1673, 9, 21),
    EraEntry::new("天和", "てんな", 1681, 9, 29),
    EraEntry::new("貞享", "じょうきょう", 1684, 2, 21),
    EraEntry::new("元禄", "げんろく", 1688, 9, 30),
    EraEntry::new("宝永", "ほうえい", 1704, 3, 13),
    EraEntry::new("正徳", "しょうとく", 1711, 4, 25),
    EraEntry::new("享保", "きょうほう（きょうほ）", 1716, 6, 22),
    EraEntry::new("元文", "げんぶん", 1736, 4, 28),
    EraEntry::new("寛保", "かんぽう（かんほう）", 1741, 2, 27),
    EraEntry::new("延享", "えんきょう", 1744, 2, 21),
    EraEntry::new("寛延", "かんえん", 1748, 7, 12),
    EraEntry::new("宝暦", "ほうれき（ほうりゃく）", 1751, 10, 27),
    EraEntry::new("明和", "めいわ", 1764, 6, 2),
    EraEntry::new("安永", "あんえい", 1772, 11, 16),
    EraEntry::new("天明", "てんめい", 1781, 4, 2),
    EraEntry::new("寛政", "かんせい", 1789, 1, 25),
    EraEntry::new("享和", "きょうわ", 1801, 2, 5),
    EraEntry::new("文化", "ぶんか", 1804, 2, 11),
    EraEntry::new("文政", "ぶんせい", 1818, 4, 22),
    EraEntry::new("天保", "てんぽう（てんほう）", 1830, 12, 10),
    EraEntry::new("弘化", "こうか", 1844, 12, 2),
    EraEntry::new("嘉永", "かえい", 1848, 2, 28),
    EraEntry::new("安政", "あんせい", 1854, 11, 27),
    EraEntry::new("万延", "まんえん", 1860, 3, 18),
    EraEntry::new("文久", "ぶんきゅう", 1861, 2, 19),
    EraEntry::new("元治", "げんじ", 1864, 2, 20),
    EraEntry::new("慶応", "けいおう", 1865, 4, 7),
    EraEntry::new("明治", "めいじ", 1868, 9, 8),
    EraEntry::new("大正", "たいしょう", 1912, 7, 30),
    EraEntry::new("昭和", "しょうわ", 1926, 12, 25),
    EraEntry::new("平成", "へいせい", 1989, 1, 8),
    EraEntry::new("令和", "れいわ", 2019, 5, 1),
];
