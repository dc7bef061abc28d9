//! Type definitions for the Xtreme assignment API.
//!
//! Request types serialize exactly the fields the caller set. Response
//! schemas are owned by the server, so the decode targets here are lenient.

pub mod assignments;
pub mod common;
