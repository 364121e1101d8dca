//! Registry of live chart handles.

use crate::catalogue::ContentCatalogue;
use crate::charts::{ChartBackend, ChartConfig, ChartId, SurfaceLookup};
use std::collections::BTreeMap;

/// Owns the mapping from chart identifier to live handle.
///
/// Charts are independent: a chart whose mount point is missing is skipped
/// without affecting the others. Handles are created once and resized in
/// place afterwards.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    handles: BTreeMap<ChartId, B::Handle>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    /// Creates an empty registry over a backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handles: BTreeMap::new(),
        }
    }

    /// Constructs every declared chart whose surface is mounted.
    ///
    /// Charts that already have a handle are left untouched. Returns the
    /// number of handles created.
    pub fn initialize(&mut self, catalogue: &ContentCatalogue, surfaces: &dyn SurfaceLookup) -> usize {
        let mut created = 0;
        for id in ChartId::ALL {
            if self.handles.contains_key(&id) {
                continue;
            }
            let Some(surface) = surfaces.surface(id) else {
                tracing::debug!(chart = %id, mount = id.mount_point(), "Mount point missing, skipping chart");
                continue;
            };
            let config = ChartConfig::for_chart(id, catalogue);
            let handle = self.backend.construct(id, surface, config);
            self.handles.insert(id, handle);
            created += 1;
        }
        tracing::debug!(created, live = self.handles.len(), "Charts initialized");
        created
    }

    /// Resizes every live handle whose surface is still mounted.
    ///
    /// Safe on an empty registry. Returns the number of handles resized.
    pub fn resize_all(&mut self, surfaces: &dyn SurfaceLookup) -> usize {
        let mut resized = 0;
        for (id, handle) in self.handles.iter_mut() {
            match surfaces.surface(*id) {
                Some(surface) => {
                    self.backend.resize(handle, surface);
                    resized += 1;
                }
                None => {
                    tracing::debug!(chart = %id, "Surface removed, skipping resize");
                }
            }
        }
        resized
    }

    // ===== Queries =====

    pub fn handle(&self, id: ChartId) -> Option<&B::Handle> {
        self.handles.get(&id)
    }

    pub fn contains(&self, id: ChartId) -> bool {
        self.handles.contains_key(&id)
    }

    /// Identifiers of live handles, in key order.
    pub fn ids(&self) -> Vec<ChartId> {
        self.handles.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{CanvasBackend, Surface, SurfaceMap};

    fn mounted(ids: &[ChartId]) -> SurfaceMap {
        ids.iter().map(|&id| (id, Surface::new(480.0, 300.0))).collect()
    }

    #[test]
    fn test_empty_registry_resize_is_noop() {
        let mut registry = ChartRegistry::new(CanvasBackend::new());
        assert_eq!(registry.resize_all(&mounted(&ChartId::ALL)), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_initialize_creates_both() {
        let mut registry = ChartRegistry::new(CanvasBackend::new());
        let created = registry.initialize(&ContentCatalogue::builtin(), &mounted(&ChartId::ALL));
        assert_eq!(created, 2);
        assert_eq!(registry.ids(), vec![ChartId::Revenue, ChartId::UserGrowth]);
    }

    #[test]
    fn test_missing_mount_skips_only_that_chart() {
        let mut registry = ChartRegistry::new(CanvasBackend::new());
        let created = registry.initialize(&ContentCatalogue::builtin(), &mounted(&[ChartId::Revenue]));
        assert_eq!(created, 1);
        assert!(registry.contains(ChartId::Revenue));
        assert!(!registry.contains(ChartId::UserGrowth));
    }

    #[test]
    fn test_initialize_twice_keeps_handles() {
        let mut registry = ChartRegistry::new(CanvasBackend::new());
        let catalogue = ContentCatalogue::builtin();
        registry.initialize(&catalogue, &mounted(&ChartId::ALL));
        assert_eq!(registry.initialize(&catalogue, &mounted(&ChartId::ALL)), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_resize_skips_removed_surface() {
        let mut registry = ChartRegistry::new(CanvasBackend::new());
        registry.initialize(&ContentCatalogue::builtin(), &mounted(&ChartId::ALL));

        let mut surfaces = SurfaceMap::new();
        surfaces.insert(ChartId::UserGrowth, Surface::new(900.0, 300.0));
        assert_eq!(registry.resize_all(&surfaces), 1);

        let users = registry.handle(ChartId::UserGrowth).unwrap();
        assert_eq!(users.layout().surface.width, 900.0);
        let revenue = registry.handle(ChartId::Revenue).unwrap();
        assert_eq!(revenue.layout().surface.width, 480.0);
    }
}
