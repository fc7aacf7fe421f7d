//! Backend commands queued from UI to backend worker.

use client_core::FileSlots;

pub enum BackendCommand {
    GenerateSchedule { slots: FileSlots },
}
