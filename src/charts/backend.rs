//! Capability seam between the chart registry and a rendering backend.

use super::{ChartConfig, ChartId};
use std::collections::HashMap;

/// Pixel dimensions of a mounted drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when layout has not given the surface any area yet.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Resolves a chart's mount point to its drawing surface.
///
/// `None` means the mount point is not present.
pub trait SurfaceLookup {
    fn surface(&self, id: ChartId) -> Option<Surface>;
}

/// Surfaces recorded during a layout pass, keyed by chart.
pub type SurfaceMap = HashMap<ChartId, Surface>;

impl SurfaceLookup for SurfaceMap {
    fn surface(&self, id: ChartId) -> Option<Surface> {
        self.get(&id).copied()
    }
}

/// A charting library as seen by the registry.
pub trait ChartBackend {
    /// Live chart instance returned by `construct`.
    type Handle;

    /// Builds a chart on a surface.
    fn construct(&mut self, id: ChartId, surface: Surface, config: ChartConfig) -> Self::Handle;

    /// Adapts an existing chart to a new surface size, in place.
    fn resize(&mut self, handle: &mut Self::Handle, surface: Surface);
}
