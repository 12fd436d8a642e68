//! Human-readable duration strings: `"3h5m43s"`, `"2 weeks"`, `"perma"`.
//!
//! Fragments are read right to left as `<digits><letters>` pairs. A missing
//! number means 1, an unknown unit contributes nothing. A string that is a
//! plain integer is taken as milliseconds as-is.

use serde::{Deserialize, Deserializer};

/// Length of one server tick in milliseconds.
pub const TICK_MILLIS: i64 = 50;

const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// 1000 years, the value of `perma`, `forever`, `never` and friends.
pub const PERMANENT_MILLIS: i64 = 1000 * 365 * DAY;

const PERMANENT_SUFFIXES: &[&str] = &["never", "inf", "infinite", "perm", "perma", "forever"];

/// Unit a duration can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    /// 7 days.
    Weeks,
    /// 30 days.
    Months,
    /// 365 days.
    Years,
}

impl DurationUnit {
    /// Length of one unit in milliseconds.
    pub const fn millis(self) -> i64 {
        match self {
            DurationUnit::Milliseconds => 1,
            DurationUnit::Seconds => SECOND,
            DurationUnit::Minutes => MINUTE,
            DurationUnit::Hours => HOUR,
            DurationUnit::Days => DAY,
            DurationUnit::Weeks => 7 * DAY,
            DurationUnit::Months => 30 * DAY,
            DurationUnit::Years => 365 * DAY,
        }
    }

    /// Resolve a (lowercase) unit suffix such as `"s"`, `"min"` or `"weeks"`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ms" | "milli" | "millis" => Some(DurationUnit::Milliseconds),
            "s" | "sec" | "second" | "seconds" => Some(DurationUnit::Seconds),
            "m" | "min" | "minute" | "minutes" => Some(DurationUnit::Minutes),
            "h" | "hour" | "hours" => Some(DurationUnit::Hours),
            "d" | "day" | "days" => Some(DurationUnit::Days),
            "w" | "week" | "weeks" => Some(DurationUnit::Weeks),
            "month" | "months" => Some(DurationUnit::Months),
            "y" | "year" | "years" => Some(DurationUnit::Years),
            _ => None,
        }
    }
}

/// Parse a duration string into milliseconds.
///
/// Spaces and commas are ignored and matching is case-insensitive, so
/// `"1h, 30m"` equals `"1H30M"`. Units may repeat (`"1h1h"` is two hours).
/// This never fails: anything unrecognised simply adds nothing.
pub fn parse_duration(input: &str) -> i64 {
    let normalized: String = input
        .chars()
        .filter(|c| *c != ' ' && *c != ',')
        .flat_map(char::to_lowercase)
        .collect();

    if let Ok(millis) = normalized.parse::<i64>() {
        return millis;
    }

    let mut rest = normalized.as_str();
    let mut total: i64 = 0;
    while !rest.is_empty() {
        let (head, suffix) = split_trailing(rest, char::is_alphabetic);
        let (head, magnitude) = split_trailing(head, |c| c.is_ascii_digit());

        if suffix.is_empty() && magnitude.is_empty() {
            // Neither a unit nor a number ends the string: drop the stray character.
            let mut chars = head.chars();
            chars.next_back();
            rest = chars.as_str();
            continue;
        }

        total = total.saturating_add(fragment_millis(magnitude, suffix));
        rest = head;
    }
    total
}

/// Parse a duration string into server ticks (50 ms each), rounding down.
pub fn parse_duration_as_ticks(input: &str) -> i64 {
    parse_duration(input).div_euclid(TICK_MILLIS)
}

/// Parse a duration string and express it in `unit`, truncating.
pub fn parse_duration_in(input: &str, unit: DurationUnit) -> i64 {
    parse_duration(input) / unit.millis()
}

/// Parse a duration string into a [`std::time::Duration`]. Negative values clamp to zero.
pub fn parse_std_duration(input: &str) -> std::time::Duration {
    let millis = parse_duration(input).max(0) as u64;
    std::time::Duration::from_millis(millis)
}

/// Serde helper for fields holding a duration in milliseconds.
///
/// Accepts a plain integer (milliseconds) or a duration string:
///
/// ```ignore
/// #[serde(deserialize_with = "mc_rs_config::duration::deserialize_millis")]
/// pub cooldown: i64,
/// ```
pub fn deserialize_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDuration {
        Millis(i64),
        Text(String),
    }

    Ok(match RawDuration::deserialize(deserializer)? {
        RawDuration::Millis(millis) => millis,
        RawDuration::Text(text) => parse_duration(&text),
    })
}

fn fragment_millis(magnitude: &str, suffix: &str) -> i64 {
    if PERMANENT_SUFFIXES.contains(&suffix) {
        return PERMANENT_MILLIS;
    }
    let Some(unit) = DurationUnit::from_suffix(suffix) else {
        return 0;
    };
    // Only digits remain here, so the parse can only fail on overflow.
    let count = if magnitude.is_empty() {
        1
    } else {
        magnitude.parse::<i64>().unwrap_or(i64::MAX)
    };
    count.saturating_mul(unit.millis())
}

/// Split `s` into the part before and the maximal run at the end matching `pred`.
fn split_trailing(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let start = s
        .char_indices()
        .rev()
        .take_while(|&(_, c)| pred(c))
        .last()
        .map_or(s.len(), |(i, _)| i);
    s.split_at(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integer_is_millis() {
        for n in [0i64, 1, 50, 1234, 86_400_000, -75, i64::MAX] {
            assert_eq!(parse_duration(&n.to_string()), n);
        }
        assert_eq!(parse_duration("1,000"), 1000);
    }

    #[test]
    fn composite_duration() {
        assert_eq!(
            parse_duration("3h5m43s"),
            3 * 3_600_000 + 5 * 60_000 + 43 * 1000
        );
        assert_eq!(parse_duration("43s5m3h"), parse_duration("3h5m43s"));
    }

    #[test]
    fn repeated_units_accumulate() {
        assert_eq!(parse_duration("1h1h"), 2 * 3_600_000);
    }

    #[test]
    fn spaces_commas_and_case_ignored() {
        assert_eq!(parse_duration("1 Hour, 30 Minutes"), 90 * 60_000);
        assert_eq!(parse_duration("2 WEEKS"), 14 * DAY);
    }

    #[test]
    fn missing_magnitude_means_one() {
        assert_eq!(parse_duration("h"), HOUR);
        assert_eq!(parse_duration("dayh"), 0);
        assert_eq!(parse_duration("month"), 30 * DAY);
    }

    #[test]
    fn unit_synonyms() {
        assert_eq!(parse_duration("5ms"), 5);
        assert_eq!(parse_duration("5millis"), 5);
        assert_eq!(parse_duration("2sec"), 2000);
        assert_eq!(parse_duration("2min"), 2 * MINUTE);
        assert_eq!(parse_duration("1d"), DAY);
        assert_eq!(parse_duration("1w"), 7 * DAY);
        assert_eq!(parse_duration("2months"), 60 * DAY);
        assert_eq!(parse_duration("1y"), 365 * DAY);
    }

    #[test]
    fn permanent_sentinel() {
        assert!(parse_duration("perma") >= 1000 * 365 * 86_400_000);
        for word in ["never", "inf", "infinite", "perm", "forever"] {
            assert_eq!(parse_duration(word), PERMANENT_MILLIS);
        }
        // The magnitude in front of a permanent unit is not multiplied in.
        assert_eq!(parse_duration("5perma"), PERMANENT_MILLIS);
    }

    #[test]
    fn unknown_suffix_ignored() {
        assert_eq!(parse_duration("5gibberish"), 0);
        assert_eq!(parse_duration("5gibberish10s"), 10_000);
        assert_eq!(parse_duration(""), 0);
    }

    #[test]
    fn stray_symbols_terminate() {
        assert_eq!(parse_duration("1.5h"), 5 * HOUR);
        assert_eq!(parse_duration("-"), 0);
        assert_eq!(parse_duration("10s!"), 10_000);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_duration("99999999999999999999999y"), i64::MAX);
        assert_eq!(parse_duration("9223372036854775807y1s"), i64::MAX);
    }

    #[test]
    fn ticks_round_down() {
        for input in ["1s", "75", "3h5m43s", "1ms", "perma", "-75"] {
            assert_eq!(
                parse_duration_as_ticks(input),
                parse_duration(input).div_euclid(50)
            );
        }
        assert_eq!(parse_duration_as_ticks("10s"), 200);
        assert_eq!(parse_duration_as_ticks("99"), 1);
    }

    #[test]
    fn convert_to_unit_truncates() {
        assert_eq!(parse_duration_in("90m", DurationUnit::Hours), 1);
        assert_eq!(parse_duration_in("2d", DurationUnit::Hours), 48);
        assert_eq!(parse_duration_in("1500", DurationUnit::Seconds), 1);
    }

    #[test]
    fn std_duration_clamps_negative() {
        assert_eq!(
            parse_std_duration("2s"),
            std::time::Duration::from_secs(2)
        );
        assert_eq!(parse_std_duration("-10"), std::time::Duration::ZERO);
    }

    #[test]
    fn deserialize_from_string_or_integer() {
        #[derive(Deserialize)]
        struct Cooldowns {
            #[serde(deserialize_with = "deserialize_millis")]
            pearl: i64,
            #[serde(deserialize_with = "deserialize_millis")]
            combat: i64,
        }

        let parsed: Cooldowns = toml::from_str(
            r#"
            pearl = "15s"
            combat = 30000
            "#,
        )
        .unwrap();
        assert_eq!(parsed.pearl, 15_000);
        assert_eq!(parsed.combat, 30_000);
    }
}
