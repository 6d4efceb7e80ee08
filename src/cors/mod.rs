//! Cross-origin access control
//!
//! A fixed allow-list of origins decides which cross-origin headers a
//! response carries. Simple (read/delete) responses echo the origin
//! only when it is allow-listed; preflight responses grant any present
//! origin. The two rules differ on purpose — see DESIGN.md.

mod gate;

pub use gate::{CorsGate, PreflightGrant, ALLOW_METHODS};
