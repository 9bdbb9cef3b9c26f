//! Placevendor Sync - outbound order synchronization library.
//!
//! Pushes a normalized representation of a confirmed sales or purchase
//! order's fulfillment events (deliveries or receptions) and their line
//! items to the Place Vendor platform over its GraphQL API, after resolving
//! which remote warehouse the transaction belongs to.
//!
//! # Architecture
//!
//! - `auth` - credential records per (actor, tenant) and the resolver that
//!   gates every remote call
//! - `vendor` - the GraphQL wire layer: retrying HTTP session, documents,
//!   batch login+mutation submission, warehouse directory query
//! - `normalize` - pure mapping from host records to the vendor platform's
//!   flat input schema
//! - `selection` - the fetch-then-render warehouse selection state machine
//! - `submit` - order-level orchestration and notification conversion
//!
//! Every batch submission embeds a fresh `login` operation alongside the
//! business mutation; cached tokens on the credential record are
//! informational only and never short-circuit authentication.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod normalize;
pub mod selection;
pub mod submit;
pub mod vendor;

pub use auth::{AuthOutcome, CredentialRecord, CredentialStore, MemoryCredentialStore};
pub use selection::{SelectionOutcome, SelectionState, WarehouseChoice};
pub use vendor::{VendorClient, VendorCredentials, VendorError};
