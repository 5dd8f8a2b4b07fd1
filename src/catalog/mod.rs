//! Static lookup tables: the brand palette, category keyword rules and tag
//! vocabularies.

pub mod category;
pub mod palette;
pub mod tags;
