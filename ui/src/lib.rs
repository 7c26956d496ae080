//! This crate contains all shared UI for the workspace.

mod layout;
pub use layout::Layout;

mod icons;
pub use icons::CrosshairIcon;

mod reveal;
pub use reveal::*;

mod landing;
pub use landing::{icon_paint, Landing, LANDING_ICON_SIZE};
