//! Read-side queries over operator notes.

use chrono::NaiveDate;

use crate::domain::Note;

pub struct NoteService;

impl NoteService {
    /// Notes attached to the given calendar day, in stored order.
    pub fn for_day<'a>(notes: &'a [Note], day: NaiveDate) -> Vec<&'a Note> {
        notes
            .iter()
            .filter(|note| note.date.date() == day)
            .collect()
    }

    /// All notes ordered by their attached date, oldest first.
    pub fn sorted(notes: &[Note]) -> Vec<&Note> {
        let mut all: Vec<&Note> = notes.iter().collect();
        all.sort_by_key(|note| note.date);
        all
    }

    pub fn open_count(notes: &[Note]) -> usize {
        notes.iter().filter(|note| !note.is_completed).count()
    }
}
