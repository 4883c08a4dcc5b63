//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `queue`, `pack`, `ui`) so individual
//! screens depend on small focused models. There is no shared cache: each
//! screen re-fetches its truth from the service.

pub mod pack;
pub mod queue;
pub mod session;
pub mod ui;
