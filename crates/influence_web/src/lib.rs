//! Browser-side page glue for the Influencer Platform site.
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without a wasm toolchain. Enable the real bindings with `--features web`
//! on `wasm32`.

/// Placeholder for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
