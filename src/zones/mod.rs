//! Piles: the ordered card sequences a player owns.
//!
//! ## Key Types
//!
//! - `pile`: free functions over `Vec<Card>` (draw, remove, filter, sum)
//! - `Flank`: which end of a creature line a card joins

pub mod pile;

pub use pile::Flank;
