//! `mow-core` — foundational types for the `mow` lawn-mowing simulator.
//!
//! This crate is a dependency of every other `mow-*` crate.  It has no
//! `mow-*` dependencies and only `thiserror` (plus optional `serde`) as
//! external ones.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `MowerId`                                             |
//! | [`geo`]         | `Cell`, `Area`                                        |
//! | [`heading`]     | `Heading` (cardinal orientation in degrees)           |
//! | [`moves`]       | `Move` instruction enum                               |
//! | [`error`]       | `MowError`, `MowResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod heading;
pub mod ids;
pub mod moves;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MowError, MowResult};
pub use geo::{Area, Cell};
pub use heading::Heading;
pub use ids::MowerId;
pub use moves::Move;
