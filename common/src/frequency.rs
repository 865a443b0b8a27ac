//! 最頻出値ユーティリティ

use indexmap::IndexMap;

/// 最頻出値を取得する
///
/// 初出順を保持したマップで出現回数を数え、初出順に走査して
/// より多い値が見つかった場合のみ入れ替える（同数なら先に出た値）。
/// 入力が空なら `None`。
pub fn most_frequent<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent() {
        assert_eq!(most_frequent(["red", "blue", "red"]), Some("red"));
    }

    #[test]
    fn test_most_frequent_empty() {
        let values: Vec<&str> = vec![];
        assert_eq!(most_frequent(values), None);
    }

    #[test]
    fn test_most_frequent_tie_first_key_wins() {
        assert_eq!(most_frequent(["a", "b"]), Some("a"));
        assert_eq!(most_frequent(["b", "a", "a", "b"]), Some("b"));
    }

    #[test]
    fn test_most_frequent_tie_uses_first_appearance_not_last_occurrence() {
        // "x" が最初に登録されるので、同数なら "x"
        assert_eq!(most_frequent(["x", "y", "y", "x"]), Some("x"));
        // 後から追い抜いた場合は多い方
        assert_eq!(most_frequent(["x", "y", "y"]), Some("y"));
    }

    #[test]
    fn test_most_frequent_single() {
        assert_eq!(most_frequent(["black"]), Some("black"));
    }
}
