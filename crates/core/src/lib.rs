//! Functional core for dashshare.
//!
//! Pure types, errors and trait contracts. Nothing in this crate performs I/O;
//! the server crate provides the implementations.

pub mod features;
pub mod identity;
pub mod sharing;
