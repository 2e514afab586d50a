//! Presentation layer for glyphs and icon ids.
//!
//! This module keeps icon naming separate from the pad logic:
//! - Resolution of `mdi:*` ids to drawable glyphs
//! - The fixed feedback glyph of each gesture

pub mod icons;
