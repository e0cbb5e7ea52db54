//! Task record and the small value types around it.
//!
//! A [`Task`] is plain data: the store assigns its id and creation date,
//! flips `completed` and removes it, nothing else mutates it.
//!
//! [`Priority`] is totally ordered in declaration order
//! (`Low < Medium < High < Urgent`), which is what the priority view sorts by.

use crate::libs::formatter::format_short_date;
use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Priority names as written to the tasks file.
const PRIORITY_NAMES: &[&str] = &["Low", "Medium", "High", "Urgent"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    /// Maps a menu selector (`"1"`..`"4"`) to a priority.
    ///
    /// Anything unrecognized falls back to [`Priority::Low`]; this is not an error.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Priority::Medium,
            "3" => Priority::High,
            "4" => Priority::Urgent,
            _ => Priority::Low,
        }
    }

    /// Looks up a priority by its zero-based ordinal.
    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        Self::ALL.get(usize::try_from(ordinal).ok()?).copied()
    }

    pub fn name(&self) -> &'static str {
        PRIORITY_NAMES[*self as usize]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Written by name, read back from either the name or the ordinal.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PriorityVisitor;

        impl<'de> de::Visitor<'de> for PriorityVisitor {
            type Value = Priority;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a priority name or an ordinal between 0 and 3")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Priority, E> {
                Priority::ALL
                    .iter()
                    .find(|priority| priority.name() == value)
                    .copied()
                    .ok_or_else(|| E::unknown_variant(value, PRIORITY_NAMES))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Priority, E> {
                Priority::from_ordinal(value).ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Priority, E> {
                u64::try_from(value)
                    .ok()
                    .and_then(Priority::from_ordinal)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
            }
        }

        deserializer.deserialize_any(PriorityVisitor)
    }
}

/// Selection for the priority view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Only tasks with exactly this priority, in insertion order.
    Only(Priority),
    /// Every task, most urgent first.
    All,
}

impl PriorityFilter {
    /// Maps a menu selector: `"1"`..`"4"` pick a priority, anything else means all.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => PriorityFilter::Only(Priority::Low),
            "2" => PriorityFilter::Only(Priority::Medium),
            "3" => PriorityFilter::Only(Priority::High),
            "4" => PriorityFilter::Only(Priority::Urgent),
            _ => PriorityFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub created_date: NaiveDateTime,
}

impl Task {
    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "[✓]" } else { "[ ]" };
        write!(
            f,
            "{}. {} {} (Due: {}, {})",
            self.id,
            mark,
            self.title,
            format_short_date(&self.due_date),
            self.priority
        )
    }
}

/// Raw user input for a new task, before the store interprets it.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// Free-text due date; unparsable text means "a week from now".
    pub due_date: String,
    /// Priority selector `"1"`..`"4"`; anything else means Low.
    pub priority: String,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, due_date: &str, priority: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            due_date: due_date.to_string(),
            priority: priority.to_string(),
        }
    }
}
