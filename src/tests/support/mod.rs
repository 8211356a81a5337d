//! Shared pieces for route and flow tests: stub use cases, a builder that
//! assembles them into an `AppState`, and real services over an in-memory
//! store.

pub mod app_state_builder;
pub mod fixtures;
pub mod store_backed;
pub mod stubs;
