//! Page-glue controllers for the Influencer Platform site.
//!
//! Everything here is target-independent: the wasm binding layer in
//! `influence_web` owns the DOM handles and forwards browser events into these
//! controllers, which decide what the page should do next. Keeping the state
//! out of the wasm-only code lets us unit-test it on the host.

pub mod config;
pub mod contact;
pub mod error;
pub mod gesture;
pub mod install;
pub mod menu;
pub mod reveal;
pub mod scroll;

pub use config::SiteConfig;
pub use error::SiteError;
