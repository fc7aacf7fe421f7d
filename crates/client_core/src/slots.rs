//! File slot store for the four schedule datasets.

use shared::domain::SlotKey;

/// A user-chosen dataset file: name plus raw content bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl SlotFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Holds the four user-selected dataset files.
///
/// Created empty; each slot is independently replaceable and `None` is
/// the valid "not yet chosen" state. This store never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlots {
    students: Option<SlotFile>,
    teachers: Option<SlotFile>,
    slots: Option<SlotFile>,
    busy: Option<SlotFile>,
}

impl FileSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the file held by `key`; `None` clears the slot.
    pub fn set(&mut self, key: SlotKey, file: Option<SlotFile>) {
        match key {
            SlotKey::Students => self.students = file,
            SlotKey::Teachers => self.teachers = file,
            SlotKey::Slots => self.slots = file,
            SlotKey::Busy => self.busy = file,
        }
    }

    pub fn get(&self, key: SlotKey) -> Option<&SlotFile> {
        match key {
            SlotKey::Students => self.students.as_ref(),
            SlotKey::Teachers => self.teachers.as_ref(),
            SlotKey::Slots => self.slots.as_ref(),
            SlotKey::Busy => self.busy.as_ref(),
        }
    }

    /// True iff every one of the four slots holds a file.
    pub fn all_present(&self) -> bool {
        self.missing().is_empty()
    }

    /// Keys without a file, in fixed submission order.
    pub fn missing(&self) -> Vec<SlotKey> {
        SlotKey::ALL
            .into_iter()
            .filter(|key| self.get(*key).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_reports_all_keys_missing() {
        let slots = FileSlots::new();
        assert!(!slots.all_present());
        assert_eq!(slots.missing(), SlotKey::ALL.to_vec());
    }

    #[test]
    fn selecting_a_file_replaces_the_prior_value() {
        let mut slots = FileSlots::new();
        slots.set(
            SlotKey::Students,
            Some(SlotFile::new("first.csv", b"a".to_vec())),
        );
        slots.set(
            SlotKey::Students,
            Some(SlotFile::new("second.csv", b"bb".to_vec())),
        );

        let file = slots.get(SlotKey::Students).expect("slot filled");
        assert_eq!(file.filename, "second.csv");
        assert_eq!(file.size_bytes(), 2);
        assert_eq!(
            slots.missing(),
            vec![SlotKey::Teachers, SlotKey::Slots, SlotKey::Busy]
        );
    }

    #[test]
    fn all_present_once_every_slot_is_filled() {
        let mut slots = FileSlots::new();
        for key in SlotKey::ALL {
            assert!(!slots.all_present());
            slots.set(key, Some(SlotFile::new(format!("{key}.csv"), Vec::new())));
        }
        assert!(slots.all_present());

        slots.set(SlotKey::Busy, None);
        assert_eq!(slots.missing(), vec![SlotKey::Busy]);
    }
}
