//! Game rules for zone transitions.
//!
//! `ZoneRules` decides what each command is allowed to move and drives the
//! zone primitives accordingly. It is shared by the single-owner engine and
//! the thread-safe one, so both enforce identical semantics.

pub mod zone_rules;

pub use zone_rules::ZoneRules;
