//! Full-width (全角) rendering for display.

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Offset from printable ASCII to the Halfwidth and Fullwidth Forms block.
const FULLWIDTH_OFFSET: u32 = 0xFF01 - 0x21;

/// Map printable ASCII to its full-width form: `令和2年` → `令和２年`.
///
/// Characters outside ASCII are left alone.
pub fn widen(text: &str) -> String {
    text.chars().map(widen_char).collect()
}

fn widen_char(c: char) -> char {
    match c {
        ' ' => IDEOGRAPHIC_SPACE,
        '!'..='~' => char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_digits() {
        assert_eq!(widen("令和2年"), "令和２年");
        assert_eq!(widen("令和元年12月31日"), "令和元年１２月３１日");
    }

    #[test]
    fn test_widen_ascii_range() {
        assert_eq!(widen("!"), "！");
        assert_eq!(widen("~"), "～");
        assert_eq!(widen("A z"), "Ａ\u{3000}ｚ");
        assert_eq!(widen("-1"), "－１");
    }

    #[test]
    fn test_widen_leaves_wide_text() {
        assert_eq!(widen("平成"), "平成");
        assert_eq!(widen("２"), "２");
        assert_eq!(widen(""), "");
    }
}
