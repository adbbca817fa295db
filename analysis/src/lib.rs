//! Derived match narratives for the match dashboard.
//!
//! Every function here is a pure transform over records already fetched from
//! the match service. Nothing is cached and nothing is mutated, so the
//! functions can be called again on every render.

pub mod config;
pub mod economy;
pub mod error;
pub mod killmap;
pub mod scoreboard;
pub mod side;
pub mod streak;
pub mod summary;
pub mod timeline;

pub use config::Config;
pub use error::InvalidInput;
pub use side::Team;
