use crate::constants::*;

/// Day index counted from Monday (0) through Sunday (6).
///
/// Values above 6 can occur transiently: "tomorrow" on a Sunday resolves
/// to 7. Anything above 4 is outside the menu week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weekday(u8);

impl Weekday {
    pub const MONDAY: Weekday = Weekday(0);
    pub const FRIDAY: Weekday = Weekday(4);

    pub fn new(index: u8) -> Self {
        Self(index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// The following day, without wrapping past Sunday.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Whether a menu is published for this day (Monday to Friday).
    pub fn is_menu_day(self) -> bool {
        self <= Self::FRIDAY
    }

    /// Returns the Danish day name used as link text on the menu page.
    pub fn danish_name(self) -> Option<&'static str> {
        DANISH_DAY_NAMES.get(usize::from(self.0)).copied()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        // num_days_from_monday is always in 0..=6
        Self(day.num_days_from_monday() as u8)
    }
}

/// A parsed day argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayToken {
    Today,
    Tomorrow,
    Named(Weekday),
    /// Anything else; resolves like `Today`. Holds the normalized token.
    Unknown(String),
}

impl DayToken {
    /// Resolves the token against the current weekday.
    pub fn resolve(&self, today: Weekday) -> Weekday {
        match self {
            Self::Today | Self::Unknown(_) => today,
            Self::Tomorrow => today.next(),
            Self::Named(day) => *day,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for DayToken {
    fn from(value: &str) -> Self {
        // Trim whitespace and compare case-insensitively
        let lower = value.trim().to_lowercase();

        if lower == TODAY_ALIAS {
            return Self::Today;
        }
        if lower == TOMORROW_ALIAS {
            return Self::Tomorrow;
        }

        ENGLISH_DAY_NAMES
            .iter()
            .position(|name| *name == lower)
            .or_else(|| DANISH_DAY_NAMES.iter().position(|name| *name == lower))
            .map(|idx| Self::Named(Weekday::new(idx as u8)))
            .unwrap_or(Self::Unknown(lower))
    }
}

/// A link found on the menu page: its visible text and resolved URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    pub text: String,
    pub url: String,
}

impl CandidateLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Link text trimmed and lowercased, the form used for matching.
    pub fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::{CandidateLink, DayToken, Weekday};

    const THURSDAY: Weekday = Weekday(3);
    const SATURDAY: Weekday = Weekday(5);

    #[test]
    fn test_english_names_match_table() {
        let names = ["monday", "tuesday", "wednesday", "thursday", "friday"];
        for (idx, name) in names.iter().enumerate() {
            assert_eq!(
                DayToken::from(*name).resolve(SATURDAY),
                Weekday::new(idx as u8)
            );
        }
    }

    #[test]
    fn test_danish_names_match_table() {
        let names = ["mandag", "tirsdag", "onsdag", "torsdag", "fredag"];
        for (idx, name) in names.iter().enumerate() {
            assert_eq!(
                DayToken::from(*name).resolve(SATURDAY),
                Weekday::new(idx as u8)
            );
        }
    }

    #[test]
    fn test_token_is_trimmed_and_case_insensitive() {
        assert_eq!(
            DayToken::from("  WeDnEsDaY \n"),
            DayToken::Named(Weekday::new(2))
        );
        assert_eq!(DayToken::from("Fredag"), DayToken::Named(Weekday::FRIDAY));
        assert_eq!(DayToken::from(" TODAY "), DayToken::Today);
        assert_eq!(DayToken::from("Tomorrow"), DayToken::Tomorrow);
    }

    #[test]
    fn test_today_and_tomorrow_are_relative() {
        assert_eq!(DayToken::Today.resolve(THURSDAY), THURSDAY);
        assert_eq!(DayToken::Tomorrow.resolve(THURSDAY), Weekday::FRIDAY);
    }

    #[test]
    fn test_tomorrow_on_friday_does_not_wrap() {
        let resolved = DayToken::Tomorrow.resolve(Weekday::FRIDAY);
        assert_eq!(resolved.index(), 5);
        assert!(!resolved.is_menu_day());
    }

    #[test]
    fn test_tomorrow_on_sunday_is_past_the_week() {
        let resolved = DayToken::Tomorrow.resolve(Weekday::new(6));
        assert_eq!(resolved.index(), 7);
        assert!(!resolved.is_menu_day());
        assert_eq!(resolved.danish_name(), None);
    }

    #[test]
    fn test_unknown_token_resolves_like_today() {
        let token = DayToken::from("Saturday");
        assert_eq!(token, DayToken::Unknown("saturday".to_string()));
        assert!(token.is_unknown());
        for idx in 0..7 {
            let today = Weekday::new(idx);
            assert_eq!(token.resolve(today), DayToken::Today.resolve(today));
        }
    }

    #[test]
    fn test_unknown_on_saturday_is_gated() {
        assert!(!DayToken::from("saturday").resolve(SATURDAY).is_menu_day());
    }

    #[test]
    fn test_fredag_reaches_scraping_on_any_date() {
        for idx in 0..7 {
            let day = DayToken::from("Fredag").resolve(Weekday::new(idx));
            assert_eq!(day.index(), 4);
            assert!(day.is_menu_day());
            assert_eq!(day.danish_name(), Some("fredag"));
        }
    }

    #[test]
    fn test_weekend_has_no_danish_name() {
        assert_eq!(Weekday::MONDAY.danish_name(), Some("mandag"));
        assert_eq!(Weekday::new(5).danish_name(), None);
        assert_eq!(Weekday::new(6).danish_name(), None);
    }

    #[test]
    fn test_from_chrono_weekday() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::MONDAY);
        assert_eq!(Weekday::from(chrono::Weekday::Sun).index(), 6);
    }

    #[test]
    fn test_candidate_link_normalized_text() {
        let link = CandidateLink::new("  Mandag \n", "https://example.com/a.pdf");
        assert_eq!(link.normalized_text(), "mandag");
    }
}
