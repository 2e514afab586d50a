//! Rendering subsystem for drawing the touch pad
//!
//! This module contains the low-level painting of the pad:
//! - Background and outline
//! - Corner regions and their icons
//! - Cursor circle and feedback glyphs

pub mod pad_renderer;
