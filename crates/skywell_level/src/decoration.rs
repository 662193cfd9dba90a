//! # Decoration Hook
//!
//! The seam between the level core and the decoration subsystems (lights,
//! collectibles). The core pushes; it never pulls. Any capability-shaped
//! decorator satisfies this contract, and the core carries zero
//! compile-time knowledge of what a hook does internally.
//!
//! Contract:
//! - `on_platform_created` is invoked synchronously, exactly once per
//!   successfully committed platform, never for rejected candidates.
//! - `on_platform_destroyed` is invoked exactly once per removal, before
//!   the entity is dropped, with every handle the hook handed back.

use crate::platform::{DecorationHandle, PlatformId, PlatformView};

/// External decoration callback, invoked by the platform store.
pub trait DecorationHook {
    /// Called once per successfully committed platform.
    ///
    /// Returned handles are stored on the platform and given back through
    /// [`Self::on_platform_destroyed`] when it is removed. Return an empty
    /// vec to decline decoration.
    fn on_platform_created(&mut self, view: &PlatformView) -> Vec<DecorationHandle>;

    /// Called once when a platform is removed, before the entity drops.
    ///
    /// `handles` contains exactly what `on_platform_created` returned for
    /// this platform. Hooks that own external resources release them here.
    fn on_platform_destroyed(&mut self, id: PlatformId, handles: &[DecorationHandle]);
}

/// No-op hook for hosts that run the engine undecorated.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDecorationHook;

impl DecorationHook for NullDecorationHook {
    fn on_platform_created(&mut self, _view: &PlatformView) -> Vec<DecorationHandle> {
        Vec::new()
    }

    fn on_platform_destroyed(&mut self, _id: PlatformId, _handles: &[DecorationHandle]) {}
}
