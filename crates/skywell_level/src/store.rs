//! # Platform Store
//!
//! The authoritative collection of live platforms and chunk bookkeeping.
//!
//! Membership is mutated ONLY through [`PlatformStore::try_commit`] and
//! [`PlatformStore::remove`]; no other component holds a mutable path into
//! the collection. That single-writer discipline is what makes the
//! generation loop's repeated commit calls safe without any locking in
//! the single-threaded tick model.

use std::collections::HashMap;

use skywell_shared::Aabb;

use crate::config::LevelConfig;
use crate::decoration::DecorationHook;
use crate::error::CommitRejection;
use crate::platform::{Chunk, ChunkId, ChunkTheme, Platform, PlatformBlueprint, PlatformId};

/// Owns every live platform and the chunk records they belong to.
pub struct PlatformStore {
    platforms: HashMap<PlatformId, Platform>,
    chunks: HashMap<ChunkId, Chunk>,
    next_platform_id: u64,
    next_chunk_id: u32,
    min_visible_width: f32,
}

impl PlatformStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            platforms: HashMap::new(),
            chunks: HashMap::new(),
            next_platform_id: 0,
            next_chunk_id: 0,
            min_visible_width: config.min_visible_width,
        }
    }

    /// Opens a new chunk record and returns its id.
    pub fn begin_chunk(&mut self, theme: ChunkTheme, tick: u64) -> ChunkId {
        let id = ChunkId(self.next_chunk_id);
        self.next_chunk_id += 1;
        self.chunks.insert(
            id,
            Chunk {
                id,
                theme,
                member_platforms: Vec::new(),
                creation_tick: tick,
            },
        );
        id
    }

    /// Validates and commits a platform candidate.
    ///
    /// On success the platform is stored, appended to its chunk's member
    /// list, and the decoration hook is invoked exactly once with the
    /// platform's public view.
    ///
    /// # Errors
    ///
    /// Returns a [`CommitRejection`] and commits nothing when the
    /// candidate has non-finite geometry, a width below the minimum
    /// visible width, or an AABB that intersects a live platform. Both
    /// rejections are soft: the caller skips the slot and moves on.
    pub fn try_commit(
        &mut self,
        blueprint: PlatformBlueprint,
        chunk_id: ChunkId,
        tick: u64,
        hook: &mut dyn DecorationHook,
    ) -> Result<PlatformId, CommitRejection> {
        let PlatformBlueprint {
            center,
            width,
            height,
            is_light_emitter,
            wants_collectible,
        } = blueprint;

        if !center.is_finite()
            || !width.is_finite()
            || !height.is_finite()
            || height <= 0.0
            || width < self.min_visible_width
        {
            let rejection = CommitRejection::InvalidGeometry {
                x: center.x,
                y: center.y,
                width,
            };
            tracing::debug!("commit rejected: {rejection}");
            return Err(rejection);
        }

        let aabb = Aabb::from_center(center, width, height);
        for (id, platform) in &self.platforms {
            if aabb.intersects(&platform.aabb) {
                let rejection = CommitRejection::Overlap { existing: *id };
                tracing::debug!("commit rejected: {rejection}");
                return Err(rejection);
            }
        }

        let id = PlatformId(self.next_platform_id);
        self.next_platform_id += 1;

        let theme = self
            .chunks
            .get(&chunk_id)
            .map(|chunk| chunk.theme)
            .unwrap_or_default();

        let mut platform = Platform {
            id,
            center,
            width,
            height,
            aabb,
            is_light_emitter,
            chunk_id,
            decoration_handles: Vec::new(),
            creation_tick: tick,
        };

        let view = platform.view(wants_collectible, theme);
        platform.decoration_handles = hook.on_platform_created(&view);

        if let Some(chunk) = self.chunks.get_mut(&chunk_id) {
            chunk.member_platforms.push(id);
        }
        self.platforms.insert(id, platform);

        Ok(id)
    }

    /// Removes a platform, releasing its decoration handles first.
    ///
    /// Idempotent: removing an id that is not live is a no-op, which
    /// tolerates double-sweep races between teardown and the destruction
    /// manager. Returns whether a platform was actually removed.
    pub fn remove(&mut self, id: PlatformId, hook: &mut dyn DecorationHook) -> bool {
        let Some(platform) = self.platforms.remove(&id) else {
            return false;
        };

        // Handles may own external resources; release before the entity drops
        hook.on_platform_destroyed(id, &platform.decoration_handles);

        if let Some(chunk) = self.chunks.get_mut(&platform.chunk_id) {
            chunk.member_platforms.retain(|member| *member != id);
        }
        true
    }

    /// Drops every chunk record with no remaining members.
    ///
    /// Returns the number of records pruned.
    pub fn prune_empty_chunks(&mut self) -> usize {
        let before = self.chunks.len();
        self.chunks.retain(|_, chunk| !chunk.member_platforms.is_empty());
        before - self.chunks.len()
    }

    /// Removes every live platform and clears chunk bookkeeping.
    ///
    /// Handles are released through the hook, one platform at a time.
    pub fn clear(&mut self, hook: &mut dyn DecorationHook) {
        let ids: Vec<PlatformId> = self.platforms.keys().copied().collect();
        for id in ids {
            self.remove(id, hook);
        }
        self.chunks.clear();
    }

    /// Read-only traversal: ids of platforms matching a predicate.
    pub fn query(&self, predicate: impl Fn(&Platform) -> bool) -> Vec<PlatformId> {
        self.platforms
            .values()
            .filter(|platform| predicate(platform))
            .map(|platform| platform.id)
            .collect()
    }

    /// Looks up a live platform.
    #[must_use]
    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.get(&id)
    }

    /// Looks up a chunk record.
    #[must_use]
    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(&id)
    }

    /// Iterates live platforms in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    /// Number of live platforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// True when no platform is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Number of live chunk records.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of live platforms flagged as light emitters.
    #[must_use]
    pub fn light_emitter_count(&self) -> usize {
        self.platforms
            .values()
            .filter(|platform| platform.is_light_emitter)
            .count()
    }

    /// The read-only listing consumed by physics and rendering.
    #[must_use]
    pub fn list_live(&self) -> Vec<(PlatformId, Aabb, bool)> {
        self.platforms
            .values()
            .map(|platform| (platform.id, platform.aabb, platform.is_light_emitter))
            .collect()
    }
}
