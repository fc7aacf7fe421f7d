use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fixed dataset slots a schedule request is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    Students,
    Teachers,
    Slots,
    Busy,
}

impl SlotKey {
    /// Fixed submission order; also the multipart field order.
    pub const ALL: [SlotKey; 4] = [
        SlotKey::Students,
        SlotKey::Teachers,
        SlotKey::Slots,
        SlotKey::Busy,
    ];

    /// Wire field name for the corresponding multipart part.
    pub fn as_str(self) -> &'static str {
        match self {
            SlotKey::Students => "students",
            SlotKey::Teachers => "teachers",
            SlotKey::Slots => "slots",
            SlotKey::Busy => "busy",
        }
    }

    /// Human-facing picker label.
    pub fn label(self) -> &'static str {
        match self {
            SlotKey::Students => "Students",
            SlotKey::Teachers => "Teachers",
            SlotKey::Slots => "Slots",
            SlotKey::Busy => "Busy",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
