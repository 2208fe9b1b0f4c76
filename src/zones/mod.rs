//! Zone system for card locations.
//!
//! Every player has the same four zones (deck, hand, active, discard).
//!
//! ## Key Types
//!
//! - `Zone`: Closed enumeration of the four zones
//! - `ZoneBucket`: Ordered cards plus their cached count
//! - `PlayerCardState`: One player's four buckets and zone transfers

pub mod bucket;
pub mod state;
pub mod zone;

pub use bucket::ZoneBucket;
pub use state::{MovedCards, PlayerCardState, ZoneSet};
pub use zone::Zone;
