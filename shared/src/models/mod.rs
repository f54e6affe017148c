//! Data models
//!
//! Shared between the client services and the console screens. Records
//! (`Employee`, `Department`) always carry an id; the payload types used for
//! create/update never do — the server assigns ids and the client must not
//! originate one.

pub mod department;
pub mod employee;

// Re-exports
pub use department::*;
pub use employee::*;
