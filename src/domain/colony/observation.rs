//! Free-text observations about a weaned group.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ObservationId, Timestamp, ValidationError, WeanedGroupId};

/// Maximum length for an observation note.
pub const MAX_NOTE_LENGTH: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    id: ObservationId,
    weaned_group_id: WeanedGroupId,
    note: String,
    recorded_at: Timestamp,
}

impl Observation {
    /// Record a note against a group.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the note is blank
    /// - `OutOfRange` if the note exceeds [`MAX_NOTE_LENGTH`] characters
    pub fn new(
        id: ObservationId,
        weaned_group_id: WeanedGroupId,
        note: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let note = note.into();
        let trimmed = note.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("note"));
        }
        let length = trimmed.chars().count();
        if length > MAX_NOTE_LENGTH {
            return Err(ValidationError::out_of_range(
                "note",
                1,
                MAX_NOTE_LENGTH as i64,
                length as i64,
            ));
        }

        Ok(Self {
            id,
            weaned_group_id,
            note: trimmed.to_string(),
            recorded_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: ObservationId,
        weaned_group_id: WeanedGroupId,
        note: String,
        recorded_at: Timestamp,
    ) -> Self {
        Self {
            id,
            weaned_group_id,
            note,
            recorded_at,
        }
    }

    pub fn id(&self) -> &ObservationId {
        &self.id
    }

    pub fn weaned_group_id(&self) -> &WeanedGroupId {
        &self.weaned_group_id
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_note_is_rejected() {
        let err = Observation::new(ObservationId::new(), WeanedGroupId::new(), "   ").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("note"));
    }

    #[test]
    fn note_is_trimmed() {
        let obs =
            Observation::new(ObservationId::new(), WeanedGroupId::new(), "  fight wound \n")
                .unwrap();
        assert_eq!(obs.note(), "fight wound");
    }

    #[test]
    fn oversized_note_is_rejected() {
        let note = "x".repeat(MAX_NOTE_LENGTH + 1);
        let err = Observation::new(ObservationId::new(), WeanedGroupId::new(), note).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }
}
