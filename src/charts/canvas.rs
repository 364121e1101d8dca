//! Built-in chart backend.
//!
//! A [`CanvasChart`] keeps its configuration and the layout computed for the
//! last surface size it was given. Renderers draw from the cached layout, so
//! a chart only picks up a new size when it is resized.

use super::{ChartBackend, ChartConfig, ChartId, ChartLayout, Surface};

/// Handle to a chart drawn by the built-in renderer.
#[derive(Debug, Clone)]
pub struct CanvasChart {
    id: ChartId,
    config: ChartConfig,
    layout: ChartLayout,
    relayouts: u32,
}

impl CanvasChart {
    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Number of times the layout was recomputed after construction.
    pub fn relayouts(&self) -> u32 {
        self.relayouts
    }
}

/// Backend producing [`CanvasChart`] handles.
#[derive(Debug, Default)]
pub struct CanvasBackend;

impl CanvasBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ChartBackend for CanvasBackend {
    type Handle = CanvasChart;

    fn construct(&mut self, id: ChartId, surface: Surface, config: ChartConfig) -> CanvasChart {
        let layout = ChartLayout::compute(&config, surface);
        CanvasChart {
            id,
            config,
            layout,
            relayouts: 0,
        }
    }

    fn resize(&mut self, handle: &mut CanvasChart, surface: Surface) {
        if handle.layout.surface == surface {
            return;
        }
        handle.layout = ChartLayout::compute(&handle.config, surface);
        handle.relayouts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::ContentCatalogue;

    #[test]
    fn test_resize_updates_layout_in_place() {
        let mut backend = CanvasBackend::new();
        let config = ChartConfig::revenue(&ContentCatalogue::builtin());
        let mut chart = backend.construct(ChartId::Revenue, Surface::new(400.0, 300.0), config);
        assert_eq!(chart.layout().surface, Surface::new(400.0, 300.0));

        backend.resize(&mut chart, Surface::new(800.0, 300.0));
        assert_eq!(chart.layout().surface.width, 800.0);
        assert_eq!(chart.relayouts(), 1);
        assert_eq!(chart.id(), ChartId::Revenue);
    }

    #[test]
    fn test_resize_same_size_is_noop() {
        let mut backend = CanvasBackend::new();
        let config = ChartConfig::user_growth(&ContentCatalogue::builtin());
        let mut chart = backend.construct(ChartId::UserGrowth, Surface::new(400.0, 300.0), config);

        backend.resize(&mut chart, Surface::new(400.0, 300.0));
        assert_eq!(chart.relayouts(), 0);
    }
}
