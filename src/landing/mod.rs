//! Landing page model
//!
//! This module contains everything the landing view needs that does not
//! depend on a UI framework:
//! - The color palette and the random background draw
//! - The static content of the four landing regions
//! - Inline style generation for each region

mod page;
mod palette;

pub use page::{
    ABOUT_PATH, ADD_BOOK_PATH, Action, ActionVariant, Block, FEATURES, LandingPage, Region,
    RegionKind, Style, TextAlign,
};
pub use palette::{Color, MACARONS, Palette, is_valid_hex, pick_random};
