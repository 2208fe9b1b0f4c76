//! Card system: instances, characters, and character selection.
//!
//! ## Key Types
//!
//! - `Card`: A card's identity plus its current zone and visibility
//! - `CardId`, `CardNumber`: Identity types
//! - `Visibility`: Who may see a card's face
//! - `CharacterId`: The four characters and their six-card pools
//! - `CharacterSelection`: One character per player per session

pub mod card;
pub mod character;
pub mod selection;

pub use card::{Card, CardId, CardNumber, Visibility};
pub use character::{CharacterId, CharacterParseError};
pub use selection::CharacterSelection;
