//! Types shared between the client core and the desktop app.

pub mod domain;
pub mod protocol;
