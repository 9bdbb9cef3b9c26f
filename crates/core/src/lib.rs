//! Placevendor Core - shared host-side record types.
//!
//! This crate holds the snapshot types the bridge reads from the business
//! management host (orders, products, contacts, stock movements) plus the
//! cross-cutting [`types::Notification`] surfaced back to the user. It has
//! no I/O of its own.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
