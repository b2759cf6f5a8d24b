//! Event category classification.
//!
//! Categories are derived from the event title by an ordered keyword scan:
//! the first rule whose keyword set matches the lower-cased title wins, and
//! anything unmatched falls back to [`EventCategory::Meeting`].

use serde::{Deserialize, Serialize};

/// The display category of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// A scheduled course session.
    Class,
    /// A generic meeting (default).
    #[default]
    Meeting,
    /// Individual study or review time.
    Study,
    /// Physical exercise.
    Workout,
    /// Networking and social-professional events.
    Networking,
    /// Recruiting activities: interviews, career fairs, info sessions.
    Recruiting,
    /// Buffer time between commitments.
    Buffer,
}

impl EventCategory {
    /// Returns a human-readable name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Meeting => "Meeting",
            Self::Study => "Study",
            Self::Workout => "Workout",
            Self::Networking => "Networking",
            Self::Recruiting => "Recruiting",
            Self::Buffer => "Buffer",
        }
    }
}

/// Ordered classification rules. The first rule whose keyword list matches
/// wins, so the order here is part of the contract: a title containing both
/// "class" and "workout" classifies as Class because that rule is checked
/// first.
const RULES: &[(EventCategory, &[&str])] = &[
    (EventCategory::Class, &["class", "lecture", "seminar", "lab"]),
    (EventCategory::Study, &["study", "review", "homework", "problem set"]),
    (EventCategory::Workout, &["workout", "gym", "yoga", "lift"]),
    (EventCategory::Networking, &["networking", "coffee chat", "mixer", "meetup"]),
    (EventCategory::Recruiting, &["recruiting", "interview", "career fair", "info session"]),
    (EventCategory::Buffer, &["buffer", "commute", "travel"]),
];

/// Classifies a title into an [`EventCategory`].
///
/// Matching is case-insensitive substring containment over the whole title.
pub fn classify_title(title: &str) -> EventCategory {
    let title_lower = title.to_lowercase();
    for (category, keywords) in RULES {
        if keywords.iter().any(|kw| title_lower.contains(kw)) {
            return *category;
        }
    }
    EventCategory::Meeting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_category() {
        assert_eq!(classify_title("Distributed Systems Lecture"), EventCategory::Class);
        assert_eq!(classify_title("Study session: graphs"), EventCategory::Study);
        assert_eq!(classify_title("Morning gym"), EventCategory::Workout);
        assert_eq!(classify_title("Alumni networking night"), EventCategory::Networking);
        assert_eq!(classify_title("Onsite interview"), EventCategory::Recruiting);
        assert_eq!(classify_title("Buffer before standup"), EventCategory::Buffer);
    }

    #[test]
    fn defaults_to_meeting() {
        assert_eq!(classify_title("1:1 with Sam"), EventCategory::Meeting);
        assert_eq!(classify_title(""), EventCategory::Meeting);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_title("YOGA CLASS"), EventCategory::Class);
        assert_eq!(classify_title("Coffee Chat with recruiter"), EventCategory::Networking);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Contains both a class keyword and a workout keyword; the class rule
        // is checked first.
        assert_eq!(classify_title("Spin class workout"), EventCategory::Class);
        // Networking is checked before recruiting.
        assert_eq!(classify_title("Recruiting mixer"), EventCategory::Networking);
    }

    #[test]
    fn classification_is_deterministic() {
        let title = "Team sync";
        assert_eq!(classify_title(title), classify_title(title));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&EventCategory::Recruiting).unwrap();
        assert_eq!(json, "\"recruiting\"");
        let parsed: EventCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, EventCategory::Recruiting);
    }
}
