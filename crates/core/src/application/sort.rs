// Sort Engine - title / posted-time ordering as an explicit comparator chain

use super::view::View;
use crate::domain::JobRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordering direction for one sort rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(format!("unknown direction '{}' (expected asc or desc)", other)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

/// Which rule wins when both title and time ordering are requested.
///
/// `TimeFirst` reproduces a title pass followed by a stable time pass:
/// time decides, title only breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    #[default]
    TimeFirst,
    TitleFirst,
}

impl std::str::FromStr for Precedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time" | "time_first" => Ok(Precedence::TimeFirst),
            "title" | "title_first" => Ok(Precedence::TitleFirst),
            other => Err(format!("unknown precedence '{}' (expected time or title)", other)),
        }
    }
}

/// Requested ordering. Both rules unset keeps the input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub title: Option<Direction>,
    pub time: Option<Direction>,
    #[serde(default)]
    pub precedence: Precedence,
}

impl SortOrder {
    pub fn by_title(direction: Direction) -> Self {
        Self {
            title: Some(direction),
            ..Self::default()
        }
    }

    pub fn by_time(direction: Direction) -> Self {
        Self {
            time: Some(direction),
            ..Self::default()
        }
    }

    pub fn is_unset(&self) -> bool {
        self.title.is_none() && self.time.is_none()
    }

    /// Comparator chain for two records, `now_millis` anchoring absolute dates
    pub fn compare(&self, a: &JobRecord, b: &JobRecord, now_millis: i64) -> Ordering {
        let by_title = || {
            self.title
                .map_or(Ordering::Equal, |d| d.apply(locale_compare(a.title(), b.title())))
        };
        let by_time = || {
            self.time.map_or(Ordering::Equal, |d| {
                let age_a = a.posted().minutes_ago(now_millis);
                let age_b = b.posted().minutes_ago(now_millis);
                d.apply(age_a.cmp(&age_b))
            })
        };

        match self.precedence {
            Precedence::TimeFirst => by_time().then_with(by_title),
            Precedence::TitleFirst => by_title().then_with(by_time),
        }
    }
}

/// Locale-style title comparison.
///
/// Levels, each only consulted on a tie of the previous one:
/// 1. base letters, accents and case folded away, with whitespace <
///    punctuation and symbols < digits < letters (`"[Urgent]" < "1 page"`,
///    `"Éclair" < "Zebra"`);
/// 2. accents, unaccented first;
/// 3. case, lower before upper (`"apple" < "Apple"`);
/// 4. code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| accent_keys(a).cmp(accent_keys(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn primary_keys(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (CharClass::of(c), c))
}

fn accent_keys(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(is_combining_mark)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

/// Sort a copy of `records`. The input is never reordered.
pub fn sort(records: &[Arc<JobRecord>], order: &SortOrder, now_millis: i64) -> View {
    let mut sorted = records.to_vec();

    if !order.is_unset() {
        // stable: records equal under every active rule keep input order
        sorted.sort_by(|a, b| order.compare(a, b, now_millis));
    }

    debug!(
        title = ?order.title,
        time = ?order.time,
        precedence = ?order.precedence,
        count = sorted.len(),
        "Sort applied"
    );

    View::new(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn job(title: &str, posted: &str) -> Arc<JobRecord> {
        Arc::new(JobRecord::builder(title, posted).build())
    }

    #[test]
    fn test_title_ascending_and_descending() {
        let records = vec![job("Banana Job", "1 day ago"), job("Apple Job", "1 day ago")];

        let asc = sort(&records, &SortOrder::by_title(Direction::Asc), NOW);
        assert_eq!(asc.titles(), vec!["Apple Job", "Banana Job"]);

        let desc = sort(&records, &SortOrder::by_title(Direction::Desc), NOW);
        assert_eq!(desc.titles(), vec!["Banana Job", "Apple Job"]);
    }

    #[test]
    fn test_time_ascending() {
        let records = vec![
            job("two hours", "2 hours ago"),
            job("eight minutes", "8 minutes ago"),
            job("three days", "3 days ago"),
        ];

        let asc = sort(&records, &SortOrder::by_time(Direction::Asc), NOW);
        assert_eq!(asc.titles(), vec!["eight minutes", "two hours", "three days"]);

        let desc = sort(&records, &SortOrder::by_time(Direction::Desc), NOW);
        assert_eq!(desc.titles(), vec!["three days", "two hours", "eight minutes"]);
    }

    #[test]
    fn test_unparsed_sorts_as_zero() {
        let records = vec![job("old", "1 day ago"), job("garbage", "whenever")];
        let asc = sort(&records, &SortOrder::by_time(Direction::Asc), NOW);
        assert_eq!(asc.titles(), vec!["garbage", "old"]);
    }

    #[test]
    fn test_time_first_uses_title_as_tiebreak() {
        let records = vec![
            job("Charlie", "1 hour ago"),
            job("Bravo", "5 minutes ago"),
            job("Alpha", "1 hour ago"),
        ];
        let order = SortOrder {
            title: Some(Direction::Asc),
            time: Some(Direction::Asc),
            precedence: Precedence::TimeFirst,
        };

        let view = sort(&records, &order, NOW);
        assert_eq!(view.titles(), vec!["Bravo", "Alpha", "Charlie"]);
    }

    #[test]
    fn test_title_first_uses_time_as_tiebreak() {
        let records = vec![
            job("Same", "3 days ago"),
            job("Other", "1 minute ago"),
            job("Same", "2 minutes ago"),
        ];
        let order = SortOrder {
            title: Some(Direction::Asc),
            time: Some(Direction::Desc),
            precedence: Precedence::TitleFirst,
        };

        let view = sort(&records, &order, NOW);
        let ages: Vec<i64> = view.iter().map(|r| r.posted().minutes_ago(NOW)).collect();
        assert_eq!(view.titles(), vec!["Other", "Same", "Same"]);
        assert_eq!(ages, vec![1, 4320, 2]);
    }

    #[test]
    fn test_unset_order_keeps_input_and_does_not_touch_source() {
        let records = vec![job("B", "1 day ago"), job("A", "2 days ago")];
        let view = sort(&records, &SortOrder::default(), NOW);
        assert_eq!(view.titles(), vec!["B", "A"]);

        let _ = sort(&records, &SortOrder::by_title(Direction::Asc), NOW);
        assert_eq!(records[0].title(), "B");
    }

    #[test]
    fn test_absolute_dates_use_reference_clock() {
        // 2023-11-14T22:13:20Z is NOW; one record a day earlier, one an hour earlier
        let records = vec![
            job("day", "2023-11-13T22:13:20Z"),
            job("hour", "2023-11-14T21:13:20Z"),
            job("relative", "30 minutes ago"),
        ];
        let view = sort(&records, &SortOrder::by_time(Direction::Asc), NOW);
        assert_eq!(view.titles(), vec!["relative", "hour", "day"]);
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("Job", "Job"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_folds_accents() {
        assert_eq!(locale_compare("Éclair job", "Zebra job"), Ordering::Less);
        assert_eq!(locale_compare("café menu", "cafe menus"), Ordering::Less);
        // same letters: unaccented first
        assert_eq!(locale_compare("Eclair", "Éclair"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_punctuation_before_digits_before_letters() {
        assert_eq!(locale_compare("[Urgent] fix", "1 page site"), Ordering::Less);
        assert_eq!(locale_compare("1 page site", "A page site"), Ordering::Less);
        assert_eq!(locale_compare("Job site", "Jobsite"), Ordering::Less);
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        let records = vec![
            job("Zebra job", "1 day ago"),
            job("Éclair job", "1 day ago"),
            job("Apple job", "1 day ago"),
        ];
        let view = sort(&records, &SortOrder::by_title(Direction::Asc), NOW);
        assert_eq!(view.titles(), vec!["Apple job", "Éclair job", "Zebra job"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = vec![job("B", "2 hours ago"), job("A", "2 hours ago"), job("C", "1 minute ago")];
        let order = SortOrder {
            title: Some(Direction::Desc),
            time: Some(Direction::Asc),
            precedence: Precedence::TimeFirst,
        };
        assert_eq!(sort(&records, &order, NOW), sort(&records, &order, NOW));
    }

    #[test]
    fn test_parse_direction_and_precedence() {
        assert_eq!("ASC".parse::<Direction>(), Ok(Direction::Asc));
        assert_eq!("desc".parse::<Direction>(), Ok(Direction::Desc));
        assert!("up".parse::<Direction>().is_err());
        assert_eq!("title".parse::<Precedence>(), Ok(Precedence::TitleFirst));
        assert_eq!("time_first".parse::<Precedence>(), Ok(Precedence::TimeFirst));
    }
}
