//! Plain data shared by the `ui` and `web` crates.

pub mod crosshair;
pub mod paint;
pub mod site;
