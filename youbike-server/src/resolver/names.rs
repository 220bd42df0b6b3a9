//! Station name normalization and count parsing.

/// Prefix the upstream puts in front of every YouBike 2.0 station name.
pub const NAME_PREFIX: &str = "YouBike2.0_";

/// Trailing designator ("station") on names like "捷運新北產業園區站".
pub const TRAILING_DESIGNATOR: char = '站';

const OPEN_PARENS: [char; 2] = ['(', '（'];
const CLOSE_PARENS: [char; 2] = [')', '）'];

/// Derive the friendly name from a raw upstream station name.
///
/// The prefix is stripped first. Then exactly one of these applies to the
/// remainder, first match wins:
/// 1. the inner text of the first parenthetical group,
/// 2. the remainder minus one trailing [`TRAILING_DESIGNATOR`],
/// 3. the remainder unchanged.
///
/// # Examples
///
/// ```
/// use youbike_server::resolver::normalize_name;
///
/// assert_eq!(normalize_name("YouBike2.0_捷運新北產業園區站"), "捷運新北產業園區");
/// assert_eq!(normalize_name("YouBike2.0_五工二五工一路口(泰博科技)"), "泰博科技");
/// assert_eq!(normalize_name("三重國小"), "三重國小");
/// ```
pub fn normalize_name(raw: &str) -> &str {
    let name = raw.strip_prefix(NAME_PREFIX).unwrap_or(raw);

    if let Some(inner) = first_parenthetical(name) {
        return inner;
    }

    name.strip_suffix(TRAILING_DESIGNATOR).unwrap_or(name)
}

/// Inner text of the first `(...)` group, ASCII or full-width.
fn first_parenthetical(name: &str) -> Option<&str> {
    let open = name.find(OPEN_PARENS)?;
    let after_open = open + name[open..].chars().next()?.len_utf8();
    let close = name[after_open..].find(CLOSE_PARENS)?;
    Some(&name[after_open..after_open + close])
}

/// Parse an upstream availability count.
///
/// Returns `None` when the text is not a base-10 non-negative integer;
/// malformed upstream data must never fail the request.
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn prefix_then_designator() {
        assert_eq!(
            normalize_name("YouBike2.0_捷運新北產業園區站"),
            "捷運新北產業園區"
        );
    }

    #[test]
    fn parenthetical_wins_over_designator() {
        assert_eq!(
            normalize_name("YouBike2.0_五工二五工一路口(泰博科技)"),
            "泰博科技"
        );
        assert_eq!(normalize_name("捷運新莊站(1號出口)"), "1號出口");
    }

    #[test]
    fn full_width_parentheses() {
        assert_eq!(normalize_name("YouBike2.0_中港路口（新莊高中）"), "新莊高中");
    }

    #[test]
    fn first_group_only() {
        assert_eq!(normalize_name("A(B)C(D)"), "B");
    }

    #[test]
    fn unclosed_parenthesis_is_not_a_group() {
        assert_eq!(normalize_name("YouBike2.0_五股(工商站"), "五股(工商");
    }

    #[test]
    fn passthrough() {
        assert_eq!(normalize_name("五股工商展覽中心"), "五股工商展覽中心");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn prefix_only_stripped_at_start() {
        assert_eq!(normalize_name("站前YouBike2.0_"), "站前YouBike2.0_");
    }

    #[test]
    fn parse_counts() {
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count(" 7 "), Some(7));
        assert_eq!(parse_count("007"), Some(7));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("1.5"), None);
        assert_eq!(parse_count("十"), None);
    }

    fn plain_name() -> impl Strategy<Value = String> {
        // No parentheses and no trailing designator.
        "[a-zA-Z0-9 路口中山]{0,12}"
    }

    proptest! {
        #[test]
        fn prefix_is_stripped_exactly(name in plain_name()) {
            let raw = format!("{NAME_PREFIX}{name}");
            prop_assert_eq!(normalize_name(&raw), name.as_str());
        }

        #[test]
        fn first_group_is_returned_verbatim(
            before in plain_name(),
            inner in plain_name(),
            after in "[a-z站()]{0,6}",
            prefixed in any::<bool>(),
        ) {
            let prefix = if prefixed { NAME_PREFIX } else { "" };
            let raw = format!("{prefix}{before}({inner}){after}");
            prop_assert_eq!(normalize_name(&raw), inner.as_str());
        }

        #[test]
        fn one_designator_is_stripped(name in plain_name(), extra in 1usize..3) {
            let raw = format!("{name}{}", TRAILING_DESIGNATOR.to_string().repeat(extra));
            let expected = format!("{name}{}", TRAILING_DESIGNATOR.to_string().repeat(extra - 1));
            prop_assert_eq!(normalize_name(&raw), expected.as_str());
        }

        #[test]
        fn parse_count_never_panics(raw in "\\PC{0,8}") {
            let _ = parse_count(&raw);
        }

        #[test]
        fn parse_count_round_trips_integers(n in any::<u32>()) {
            prop_assert_eq!(parse_count(&n.to_string()), Some(n));
        }
    }
}
