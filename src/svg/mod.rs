//! SVG document core.
//!
//! Everything here works on in-memory trees; reading and writing files is
//! left to the commands.
//!
//! ```text
//!  bytes ──► model::Document ──┬──► canonical ──► dedup      (fingerprints)
//!                              ├──► style ──► rewrite        (theming, masks)
//!                              ├──► geometry                 (backdrops)
//!                              └──► sprite                   (symbols + index)
//!                                      │
//!  bytes ◄── Document::serialize ◄─────┘
//! ```

pub mod canonical;
pub mod dedup;
pub mod geometry;
pub mod model;
pub mod rewrite;
pub mod sprite;
pub mod style;

pub use dedup::find_duplicates;
pub use model::Document;
