//! # Destruction Manager
//!
//! Watches the externally supplied hazard-boundary Y (the rising void)
//! and retires platforms that have fallen behind it, releasing their
//! decoration handles and pruning emptied chunk records.
//!
//! This is the only component permitted to remove entities during normal
//! operation. The threshold trails the hazard by a fixed offset, so
//! platforms are destroyed in the same direction they were created, with
//! a time lag.

use crate::config::LevelConfig;
use crate::decoration::DecorationHook;
use crate::store::PlatformStore;

/// Sweeps the platform store against the hazard boundary each tick.
#[derive(Clone, Copy, Debug)]
pub struct DestructionManager {
    destruction_offset: f32,
}

impl DestructionManager {
    /// Builds a destruction manager from validated config.
    #[must_use]
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            destruction_offset: config.destruction_offset,
        }
    }

    /// Removes every platform the threshold has passed.
    ///
    /// The threshold is `hazard_y + destruction_offset`; the hazard rises
    /// by decreasing Y, so a platform is behind the boundary once its
    /// center-y exceeds the threshold. Each platform is removed exactly
    /// once; a second sweep with an unmoved boundary removes nothing.
    /// A non-finite hazard reading disables destruction for the tick.
    ///
    /// Returns the number of platforms removed.
    pub fn sweep(
        &self,
        hazard_y: f32,
        store: &mut PlatformStore,
        hook: &mut dyn DecorationHook,
    ) -> usize {
        if !hazard_y.is_finite() {
            return 0;
        }

        let threshold = hazard_y + self.destruction_offset;
        let doomed = store.query(|platform| platform.center.y > threshold);
        if doomed.is_empty() {
            return 0;
        }

        let count = doomed.len();
        for id in doomed {
            store.remove(id, hook);
        }
        let pruned = store.prune_empty_chunks();

        tracing::debug!(
            "destruction sweep at threshold {threshold}: {count} platforms removed, {pruned} chunks pruned"
        );
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::NullDecorationHook;
    use crate::platform::{
        ChunkTheme, DecorationHandle, PlatformBlueprint, PlatformId, PlatformView,
    };
    use skywell_shared::Vec2;

    /// Hook that records which platforms had their handles released.
    #[derive(Default)]
    struct ReleaseTracker {
        released: Vec<PlatformId>,
    }

    impl DecorationHook for ReleaseTracker {
        fn on_platform_created(&mut self, view: &PlatformView) -> Vec<DecorationHandle> {
            vec![DecorationHandle(view.id.0)]
        }

        fn on_platform_destroyed(&mut self, id: PlatformId, handles: &[DecorationHandle]) {
            assert_eq!(handles, &[DecorationHandle(id.0)]);
            self.released.push(id);
        }
    }

    fn blueprint(y: f32) -> PlatformBlueprint {
        PlatformBlueprint {
            center: Vec2::new(512.0, y),
            width: 100.0,
            height: 20.0,
            is_light_emitter: false,
            wants_collectible: false,
        }
    }

    fn populated_store(hook: &mut dyn DecorationHook) -> (PlatformStore, Vec<PlatformId>) {
        let config = LevelConfig::default();
        let mut store = PlatformStore::new(&config);
        let chunk = store.begin_chunk(ChunkTheme::default(), 0);

        // Platforms at y = 700, 600, 500, 400
        let ids = [700.0, 600.0, 500.0, 400.0]
            .into_iter()
            .map(|y| store.try_commit(blueprint(y), chunk, 0, hook).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn test_sweep_removes_exactly_the_passed_platforms() {
        let config = LevelConfig::default();
        let manager = DestructionManager::new(&config);
        let mut hook = NullDecorationHook;
        let (mut store, ids) = populated_store(&mut hook);

        // Hazard at 500, offset 150: threshold 650 passes only y=700
        let removed = manager.sweep(500.0, &mut store, &mut hook);

        assert_eq!(removed, 1);
        assert!(store.get(ids[0]).is_none());
        for id in &ids[1..] {
            assert!(store.get(*id).is_some());
        }
    }

    #[test]
    fn test_second_sweep_with_unmoved_boundary_removes_nothing() {
        let config = LevelConfig::default();
        let manager = DestructionManager::new(&config);
        let mut hook = NullDecorationHook;
        let (mut store, _) = populated_store(&mut hook);

        assert_eq!(manager.sweep(500.0, &mut store, &mut hook), 1);
        assert_eq!(manager.sweep(500.0, &mut store, &mut hook), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_sweep_follows_the_advancing_hazard() {
        let config = LevelConfig::default();
        let manager = DestructionManager::new(&config);
        let mut hook = NullDecorationHook;
        let (mut store, _) = populated_store(&mut hook);

        // The void climbs; each advance swallows one more platform
        assert_eq!(manager.sweep(500.0, &mut store, &mut hook), 1);
        assert_eq!(manager.sweep(400.0, &mut store, &mut hook), 1);
        assert_eq!(manager.sweep(200.0, &mut store, &mut hook), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_releases_handles_through_hook() {
        let config = LevelConfig::default();
        let manager = DestructionManager::new(&config);
        let mut hook = ReleaseTracker::default();
        let (mut store, ids) = populated_store(&mut hook);

        manager.sweep(500.0, &mut store, &mut hook);
        assert_eq!(hook.released, vec![ids[0]]);
    }

    #[test]
    fn test_sweep_prunes_emptied_chunks() {
        let config = LevelConfig::default();
        let manager = DestructionManager::new(&config);
        let mut hook = NullDecorationHook;
        let (mut store, _) = populated_store(&mut hook);

        // Swallow everything: the single chunk record must go with it
        manager.sweep(-1000.0, &mut store, &mut hook);
        assert!(store.is_empty());
        assert_eq!(store.chunk_count(), 0);
    }

    #[test]
    fn test_missing_hazard_input_is_ignored() {
        let config = LevelConfig::default();
        let manager = DestructionManager::new(&config);
        let mut hook = NullDecorationHook;
        let (mut store, _) = populated_store(&mut hook);

        assert_eq!(manager.sweep(f32::NAN, &mut store, &mut hook), 0);
        assert_eq!(store.len(), 4);
    }
}
