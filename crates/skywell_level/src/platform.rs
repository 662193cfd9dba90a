//! # Platform & Chunk Entities
//!
//! The data model of the level: platforms (one climbable surface each) and
//! chunks (the batch a platform was generated in, kept purely for bulk
//! bookkeeping).
//!
//! A platform's AABB is derived once at commit time and never changes:
//! platforms do not move or resize for their whole lifetime.

use skywell_shared::{Aabb, Vec2};

/// Stable platform identifier, unique for the process lifetime.
///
/// Allocated monotonically by the store; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformId(pub u64);

/// Identifier of a generated chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(pub u32);

/// Opaque theme tag attached to a chunk and forwarded to decoration hooks.
///
/// The engine assigns these but never interprets them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkTheme(pub u32);

/// Opaque reference returned by a decoration hook.
///
/// Owned by the platform that triggered it; released through the hook
/// before the platform is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecorationHandle(pub u64);

/// One climbable surface.
#[derive(Debug)]
pub struct Platform {
    /// Stable identifier.
    pub id: PlatformId,
    /// Center in world space.
    pub center: Vec2,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent (fixed constant from config).
    pub height: f32,
    /// Collision extent, derived at commit time. Immutable.
    pub aabb: Aabb,
    /// Decorative flag, set probabilistically at creation.
    pub is_light_emitter: bool,
    /// Back-reference (non-owning) to the generating chunk.
    pub chunk_id: ChunkId,
    /// Opaque handles returned by the decoration hook, released on destruction.
    pub decoration_handles: Vec<DecorationHandle>,
    /// Tick the platform was committed on. Diagnostics only.
    pub creation_tick: u64,
}

/// A logical batch of platforms generated across one vertical span.
///
/// Chunks exist purely for bulk bookkeeping; platform correctness
/// invariants never depend on chunk membership.
#[derive(Debug)]
pub struct Chunk {
    /// Chunk identifier.
    pub id: ChunkId,
    /// Opaque theme tag forwarded to decoration hooks.
    pub theme: ChunkTheme,
    /// Member platforms in commit order.
    pub member_platforms: Vec<PlatformId>,
    /// Tick the chunk was opened on. Diagnostics only.
    pub creation_tick: u64,
}

/// A platform candidate, assembled by the generator and offered to the store.
///
/// Carries everything the store needs to validate and commit; the id and
/// AABB are allocated/derived by the store itself.
#[derive(Clone, Copy, Debug)]
pub struct PlatformBlueprint {
    /// Candidate center in world space.
    pub center: Vec2,
    /// Candidate width.
    pub width: f32,
    /// Platform thickness.
    pub height: f32,
    /// Whether this platform emits light.
    pub is_light_emitter: bool,
    /// Whether the decoration hook is offered a collectible slot.
    pub wants_collectible: bool,
}

/// The public, read-only view of a committed platform handed to
/// decoration hooks and collaborators.
#[derive(Clone, Copy, Debug)]
pub struct PlatformView {
    /// Stable identifier.
    pub id: PlatformId,
    /// Center in world space.
    pub center: Vec2,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
    /// Collision extent.
    pub aabb: Aabb,
    /// Whether this platform emits light.
    pub is_light_emitter: bool,
    /// Whether the hook is offered a collectible slot.
    pub wants_collectible: bool,
    /// Theme of the generating chunk.
    pub theme: ChunkTheme,
}

impl Platform {
    /// Builds the public view of this platform.
    #[must_use]
    pub fn view(&self, wants_collectible: bool, theme: ChunkTheme) -> PlatformView {
        PlatformView {
            id: self.id,
            center: self.center,
            width: self.width,
            height: self.height,
            aabb: self.aabb,
            is_light_emitter: self.is_light_emitter,
            wants_collectible,
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_view_mirrors_entity() {
        let center = Vec2::new(512.0, 668.0);
        let platform = Platform {
            id: PlatformId(7),
            center,
            width: 984.0,
            height: 20.0,
            aabb: Aabb::from_center(center, 984.0, 20.0),
            is_light_emitter: false,
            chunk_id: ChunkId(0),
            decoration_handles: Vec::new(),
            creation_tick: 3,
        };

        let view = platform.view(true, ChunkTheme(2));
        assert_eq!(view.id, PlatformId(7));
        assert_eq!(view.center, center);
        assert_eq!(view.width, 984.0);
        assert!(view.wants_collectible);
        assert_eq!(view.theme, ChunkTheme(2));
        assert!(!view.is_light_emitter);
    }
}
