//! In-memory schedule registry so routine cards stay an ordered, owned collection.
//!
//! The registry is the sole owner of its entries. Callers hold only the
//! `EntryId` returned by `add` and use it for removal ("mark done"); there is
//! no update-in-place operation.

use std::fmt;

use serde::Serialize;

/// Marker shown on entries added without an explicit icon.
pub const DEFAULT_ENTRY_ICON: &str = "\u{1f7e2}";

/// Identifier issued by the registry; unique among all ids it ever issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single visual-routine card: a time-of-day label, a title, and an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub time: String,
    pub title: String,
    pub icon: String,
}

/// Validation failures raised when creating a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// Entry titles must contain at least one non-whitespace character.
    EmptyTitle,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::EmptyTitle => write!(f, "schedule entry title cannot be empty"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Ordered collection of schedule entries with monotonic id assignment.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRegistry {
    entries: Vec<ScheduleEntry>,
    next_id: u64,
}

impl ScheduleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the example routine new sessions start from.
    pub fn with_default_routine() -> Self {
        let mut registry = Self::new();
        let seeds = [
            ("09:00", "Morning Routine", "\u{2600}\u{fe0f}"),
            ("11:00", "Speech Practice", "\u{1f5e3}\u{fe0f}"),
            ("14:00", "Sensory Break", "\u{1f33f}"),
        ];
        for (time, title, icon) in seeds {
            // Seed titles are non-empty literals, so add cannot fail here.
            let _ = registry.add(time, title, icon);
        }
        registry
    }

    /// Append a new entry, returning its freshly issued id.
    pub fn add(
        &mut self,
        time: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<EntryId, ScheduleError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(ScheduleEntry {
            id,
            time: time.into(),
            title,
            icon: icon.into(),
        });
        Ok(id)
    }

    /// `add` with the default green-circle marker.
    pub fn add_with_default_icon(
        &mut self,
        time: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<EntryId, ScheduleError> {
        self.add(time, title, DEFAULT_ENTRY_ICON)
    }

    /// Remove the entry with the matching id. Absent ids are a no-op, not an
    /// error; returns whether an entry was removed.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Point-in-time view of the entries in insertion order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
