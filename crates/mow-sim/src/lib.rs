//! `mow-sim` — runs a fleet of mowers concurrently on one lawn.
//!
//! # Run model
//!
//! ```text
//! for each mower (concurrently, no ordering between mowers):
//!   on_mower_start
//!   for each instruction (strictly in sequence):
//!     step → on_step
//!   on_mower_done
//! join all mowers (one-shot barrier)
//! on_fleet_done
//! ```
//!
//! When two mowers target the same plot at the same instant, exactly one is
//! admitted and the other stays put for that instruction.  Which one wins is
//! a race; final positions are not deterministic across runs.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Adds `Dispatch::Pool` (Rayon tasks).  On by default.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mow_sim::{FleetBuilder, NoopObserver};
//!
//! let config = mow_config::load_config_path(path)?;
//! let mut fleet = FleetBuilder::new(config.lawn())
//!     .mowers(config.mowers)
//!     .build()?;
//! let summary = fleet.run(&NoopObserver);
//! for mower in fleet.mowers() {
//!     println!("{mower}");
//! }
//! ```

pub mod builder;
pub mod error;
pub mod fleet;
pub mod observer;


pub use builder::FleetBuilder;
pub use error::{SimError, SimResult};
pub use fleet::{Dispatch, Fleet, RunSummary};
pub use observer::{FleetObserver, NoopObserver};
