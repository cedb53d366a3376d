//! Transcript entity

use super::entry::{EntryId, EntryKind, TranscriptEntry};
use crate::core::error::DomainError;

/// Ordered sequence of rendered entries (Entity)
///
/// Holds at most one [`EntryKind::Pending`] entry at any time.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry and return it.
    ///
    /// Fails with [`DomainError::PendingAlreadyShown`] when `kind` is
    /// `Pending` and a pending entry is already present.
    pub fn push(&mut self, kind: EntryKind) -> Result<&TranscriptEntry, DomainError> {
        if kind.is_pending() && self.pending().is_some() {
            return Err(DomainError::PendingAlreadyShown);
        }

        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(TranscriptEntry::new(id, kind));

        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// Remove the pending entry if there is one.
    ///
    /// Returns the id of the removed entry; `None` when nothing was pending.
    pub fn remove_pending(&mut self) -> Option<EntryId> {
        let index = self.entries.iter().position(|e| e.kind.is_pending())?;
        Some(self.entries.remove(index).id)
    }

    pub fn pending(&self) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|e| e.kind.is_pending())
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut transcript = Transcript::new();
        let first = transcript.push(EntryKind::User("hi".into())).unwrap().id;
        let second = transcript.push(EntryKind::BotReply("hello".into())).unwrap().id;

        assert!(first < second);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_second_pending_is_rejected() {
        let mut transcript = Transcript::new();
        transcript.push(EntryKind::Pending).unwrap();

        let err = transcript.push(EntryKind::Pending).unwrap_err();
        assert_eq!(err, DomainError::PendingAlreadyShown);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_remove_pending_is_idempotent() {
        let mut transcript = Transcript::new();
        transcript.push(EntryKind::User("hi".into())).unwrap();
        let pending_id = transcript.push(EntryKind::Pending).unwrap().id;

        assert_eq!(transcript.remove_pending(), Some(pending_id));
        assert_eq!(transcript.remove_pending(), None);
        assert!(transcript.pending().is_none());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_remove_pending_on_empty_transcript() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.remove_pending(), None);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut transcript = Transcript::new();
        let pending_id = transcript.push(EntryKind::Pending).unwrap().id;
        transcript.remove_pending();

        let next = transcript.push(EntryKind::BotReply("ok".into())).unwrap().id;
        assert_ne!(next, pending_id);
    }

    #[test]
    fn test_pending_can_be_shown_again_after_removal() {
        let mut transcript = Transcript::new();
        transcript.push(EntryKind::Pending).unwrap();
        transcript.remove_pending();

        assert!(transcript.push(EntryKind::Pending).is_ok());
    }
}
