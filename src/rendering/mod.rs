//! Rendering subsystem for drawing dashboard visuals
//!
//! - Chart rendering (legend, axes, line and bar datasets, hover tooltip)
//! - Text utilities (text measurement and truncation)

pub mod chart_renderer;
pub mod text_utils;
