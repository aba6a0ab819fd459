//! Typed error definitions for P2G Sync.
//!
//! Errors here are plain data: they carry no transport or I/O handles so they
//! can cross crate boundaries and be rendered into API responses.

mod config;
mod request;

pub use config::ConfigError;
pub use request::SyncRequestError;
