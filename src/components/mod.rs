//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render individual pieces of the review screens; route-level
//! orchestration stays in `pages`.

pub mod draft_card;
pub mod error_banner;
pub mod pack_card;
