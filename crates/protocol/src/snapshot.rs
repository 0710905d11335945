//! Serialized todo snapshots and their parsed form.
//!
//! The application persists its todo list as four strings: titles,
//! identifiers and completion flags joined with a delimiter, plus a pending
//! count. [`SnapshotFields`] holds those strings verbatim, and
//! [`TodoSnapshot::parse`] turns them into an ordered list of [`TodoItem`]
//! records once, so nothing downstream has to index parallel arrays.
//!
//! Parsing never fails. Missing or malformed pieces degrade to empty lists,
//! incomplete flags and a zero count.

use serde::{Deserialize, Serialize};

use crate::store::{PreferenceStore, keys};
use crate::todo::TodoItem;

/// Delimiter the application joins snapshot lists with.
pub const DEFAULT_DELIMITER: &str = "|||";

/// Splits a delimiter-joined field into its entries.
///
/// An empty string holds zero entries, not one empty entry. Empty pieces
/// between delimiters are kept so indices stay aligned with the other fields.
///
/// # Examples
///
/// ```
/// use ghostty_protocol::split_field;
///
/// assert!(split_field("", "|||").is_empty());
/// assert_eq!(split_field("a|||b", "|||"), vec!["a", "b"]);
/// assert_eq!(split_field("a||||||c", "|||"), vec!["a", "", "c"]);
/// ```
#[must_use]
pub fn split_field<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    if raw.is_empty() {
        Vec::new()
    } else if delimiter.is_empty() {
        vec![raw]
    } else {
        raw.split(delimiter).collect()
    }
}

/// The four raw strings of a persisted snapshot, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFields {
    /// Delimiter-joined titles.
    pub titles: String,
    /// Delimiter-joined identifiers.
    pub ids: String,
    /// Delimiter-joined completion flags.
    pub completed: String,
    /// Pending count as written by the application.
    pub pending_count: String,
}

impl Default for SnapshotFields {
    fn default() -> Self {
        Self {
            titles: String::new(),
            ids: String::new(),
            completed: String::new(),
            pending_count: "0".to_string(),
        }
    }
}

impl SnapshotFields {
    /// Reads the snapshot fields out of a preference store.
    ///
    /// Missing list keys read as empty strings and a missing count reads as
    /// `"0"`.
    #[must_use]
    pub fn read_from(store: &impl PreferenceStore) -> Self {
        Self {
            titles: store.get_string(keys::TODO_TITLES).unwrap_or_default(),
            ids: store.get_string(keys::TODO_IDS).unwrap_or_default(),
            completed: store.get_string(keys::TODO_COMPLETED).unwrap_or_default(),
            pending_count: store
                .get_string(keys::TODO_COUNT)
                .unwrap_or_else(|| "0".to_string()),
        }
    }

    /// Writes all four fields into a preference store.
    pub fn write_to(&self, store: &mut impl PreferenceStore) {
        store.set_string(keys::TODO_TITLES, &self.titles);
        store.set_string(keys::TODO_IDS, &self.ids);
        store.set_string(keys::TODO_COMPLETED, &self.completed);
        store.set_string(keys::TODO_COUNT, &self.pending_count);
    }

    /// Encodes todo records the way the application does.
    ///
    /// The pending count is the number of incomplete items. Titles or ids
    /// that themselves contain `delimiter` will not survive a round trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_protocol::{SnapshotFields, TodoItem};
    ///
    /// let fields = SnapshotFields::from_items(
    ///     &[
    ///         TodoItem::new("1", "Buy milk").with_completed(true),
    ///         TodoItem::new("2", "Call mom"),
    ///     ],
    ///     "|||",
    /// );
    ///
    /// assert_eq!(fields.titles, "Buy milk|||Call mom");
    /// assert_eq!(fields.ids, "1|||2");
    /// assert_eq!(fields.completed, "1|||0");
    /// assert_eq!(fields.pending_count, "1");
    /// ```
    #[must_use]
    pub fn from_items(items: &[TodoItem], delimiter: &str) -> Self {
        let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        let completed: Vec<&str> = items.iter().map(TodoItem::completed_flag).collect();
        let pending = items.iter().filter(|item| !item.completed).count();

        Self {
            titles: titles.join(delimiter),
            ids: ids.join(delimiter),
            completed: completed.join(delimiter),
            pending_count: pending.to_string(),
        }
    }

    /// Sets the completion flag of entry `index` in place.
    ///
    /// Titles and ids are left untouched, including titles with no id.
    /// Flags missing before `index` are written as `"0"`. A numeric pending
    /// count moves by one when the flag changes (never below zero); any
    /// other count text is kept as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_protocol::SnapshotFields;
    ///
    /// let mut fields = SnapshotFields {
    ///     titles: "A|||B|||C".to_string(),
    ///     ids: "1|||2".to_string(),
    ///     completed: String::new(),
    ///     pending_count: "3".to_string(),
    /// };
    /// fields.set_completed(1, true, "|||");
    ///
    /// assert_eq!(fields.titles, "A|||B|||C");
    /// assert_eq!(fields.completed, "0|||1");
    /// assert_eq!(fields.pending_count, "2");
    /// ```
    pub fn set_completed(&mut self, index: usize, completed: bool, delimiter: &str) {
        let mut flags: Vec<&str> = split_field(&self.completed, delimiter);
        if flags.len() <= index {
            flags.resize(index + 1, "0");
        }
        let was_completed = flags[index] == "1";
        flags[index] = if completed { "1" } else { "0" };
        let joined = flags.join(delimiter);
        self.completed = joined;

        if was_completed == completed {
            return;
        }
        if let Ok(count) = self.pending_count.parse::<i32>() {
            let count = if completed {
                count.saturating_sub(1).max(0)
            } else {
                count.saturating_add(1)
            };
            self.pending_count = count.to_string();
        }
    }
}

/// The application-supplied pending count.
///
/// Keeps the original text for display next to its parsed value. Text that
/// does not parse as an `i32` counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingCount {
    text: String,
    value: i32,
}

impl PendingCount {
    /// Parses a pending count, defaulting to zero on malformed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_protocol::PendingCount;
    ///
    /// assert_eq!(PendingCount::parse("3").value(), 3);
    /// assert_eq!(PendingCount::parse("three").value(), 0);
    /// assert_eq!(PendingCount::parse("three").text(), "three");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            text: raw.to_string(),
            value: raw.parse().unwrap_or(0),
        }
    }

    /// Returns the count as written by the application.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed count (zero when unparsable).
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns `true` when the count is zero or could not be parsed.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl Default for PendingCount {
    fn default() -> Self {
        Self::parse("0")
    }
}

impl From<usize> for PendingCount {
    fn from(count: usize) -> Self {
        Self::parse(&count.to_string())
    }
}

/// A parsed todo snapshot.
///
/// Titles are paired with identifiers by index. Titles without a matching
/// identifier are not turned into items, but they are still counted so a
/// snapshot whose titles are all unpaired is distinguishable from one with
/// no titles at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSnapshot {
    items: Vec<TodoItem>,
    title_count: usize,
    pending: PendingCount,
}

impl TodoSnapshot {
    /// Parses raw snapshot fields.
    ///
    /// An item exists for every index that has both a title and an
    /// identifier. It is completed only if the completion list reaches that
    /// index and holds exactly `"1"` there.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_protocol::{SnapshotFields, TodoSnapshot};
    ///
    /// let fields = SnapshotFields {
    ///     titles: "A|||B|||C".to_string(),
    ///     ids: "1|||2".to_string(),
    ///     completed: "0|||1".to_string(),
    ///     pending_count: "1".to_string(),
    /// };
    /// let snapshot = TodoSnapshot::parse(&fields, "|||");
    ///
    /// assert_eq!(snapshot.items().len(), 2);
    /// assert_eq!(snapshot.unpaired_titles(), 1);
    /// assert!(snapshot.items()[1].completed);
    /// ```
    #[must_use]
    pub fn parse(fields: &SnapshotFields, delimiter: &str) -> Self {
        let titles = split_field(&fields.titles, delimiter);
        let ids = split_field(&fields.ids, delimiter);
        let completed = split_field(&fields.completed, delimiter);

        let items = titles
            .iter()
            .zip(&ids)
            .enumerate()
            .map(|(i, (title, id))| TodoItem {
                id: (*id).to_string(),
                title: (*title).to_string(),
                completed: completed.get(i).is_some_and(|flag| *flag == "1"),
            })
            .collect();

        Self {
            items,
            title_count: titles.len(),
            pending: PendingCount::parse(&fields.pending_count),
        }
    }

    /// Builds a snapshot directly from records.
    #[must_use]
    pub fn from_items(items: Vec<TodoItem>, pending: PendingCount) -> Self {
        Self {
            title_count: items.len(),
            items,
            pending,
        }
    }

    /// Returns the renderable items, in display order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the pending count supplied alongside the lists.
    #[must_use]
    pub fn pending(&self) -> &PendingCount {
        &self.pending
    }

    /// Returns the number of titles in the snapshot, paired or not.
    #[must_use]
    pub const fn title_count(&self) -> usize {
        self.title_count
    }

    /// Returns the number of titles that had no matching identifier.
    #[must_use]
    pub const fn unpaired_titles(&self) -> usize {
        self.title_count.saturating_sub(self.items.len())
    }

    /// Returns `true` if the snapshot holds no titles at all.
    #[must_use]
    pub const fn has_no_titles(&self) -> bool {
        self.title_count == 0
    }

    /// Counts items whose completion flag is not set.
    ///
    /// This is derived from the records and may disagree with
    /// [`pending`](Self::pending) when the application's count is stale.
    #[must_use]
    pub fn incomplete_items(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
