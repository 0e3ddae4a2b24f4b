//! Movement domain: axis-separated tile collision resolution.
//!
//! Each pass corrects against the first overlapping tile in level order and
//! stops there. Simultaneous overlaps with several tiles are not merged.

use bevy::prelude::*;

use super::{MovementState, SpriteMetrics};
use crate::level::{Aabb, CollisionGeometry, LevelGeometry, WorldBounds};

/// Which side of the character a pass corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Moving left into a tile.
    Left,
    /// Moving right into a tile.
    Right,
    /// Moving up into a tile.
    Ceiling,
    /// Landed on a tile.
    Ground,
    /// Fell past the bottom of the level.
    LevelFloor,
}

/// Borrowed view over the level used by both collision passes.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver<'a> {
    tiles: &'a [CollisionGeometry],
    bounds: WorldBounds,
    epsilon: f32,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(level: &'a LevelGeometry, epsilon: f32) -> Self {
        Self {
            tiles: &level.tiles,
            bounds: level.bounds,
            epsilon,
        }
    }

    /// Inclusive AABB test: touching edges overlap.
    pub fn overlaps(character: &Aabb, tile: &Aabb) -> bool {
        character.overlaps(tile)
    }

    fn first_overlap(&self, character: &Aabb) -> Option<Aabb> {
        self.tiles
            .iter()
            .map(CollisionGeometry::bounding_rect)
            .find(|tile| Self::overlaps(character, tile))
    }

    /// Integrate `velocity.x`, push out of the first overlapping tile, then
    /// clamp to `[0, width - character width]`.
    pub fn resolve_horizontal(
        &self,
        state: &mut MovementState,
        metrics: &SpriteMetrics,
    ) -> Option<Contact> {
        state.position.x += state.velocity.x;

        let size = metrics.box_size();
        let mut contact = None;
        if let Some(tile) = self.first_overlap(&state.bounding_box(metrics)) {
            if state.velocity.x < 0.0 {
                state.position.x = tile.right + self.epsilon;
                state.velocity.x = 0.0;
                contact = Some(Contact::Left);
            } else if state.velocity.x > 0.0 {
                state.position.x = tile.left - size.x - self.epsilon;
                state.velocity.x = 0.0;
                contact = Some(Contact::Right);
            }
        }

        state.position.x = state.position.x.min(self.bounds.width - size.x).max(0.0);
        if let Some(contact) = contact {
            trace!("Horizontal contact {:?} at x={}", contact, state.position.x);
        }
        contact
    }

    /// Push out of the first overlapping tile along y. Landing on a tile or
    /// falling past the level bottom grounds the character.
    pub fn resolve_vertical(
        &self,
        state: &mut MovementState,
        metrics: &SpriteMetrics,
    ) -> Option<Contact> {
        let size = metrics.box_size();
        let mut contact = None;
        if let Some(tile) = self.first_overlap(&state.bounding_box(metrics)) {
            if state.velocity.y < 0.0 {
                state.position.y = tile.bottom + self.epsilon;
                state.velocity.y = 0.0;
                contact = Some(Contact::Ceiling);
            } else if state.velocity.y > 0.0 {
                state.position.y = tile.top - size.y - self.epsilon;
                state.land();
                contact = Some(Contact::Ground);
            }
        }

        // Provisional floor until falling out of the level has a consequence.
        if contact != Some(Contact::Ground) && state.position.y + size.y > self.bounds.height {
            state.position.y = self.bounds.height - size.y;
            state.land();
            contact = Some(Contact::LevelFloor);
        }

        if let Some(contact) = contact {
            trace!("Vertical contact {:?} at y={}", contact, state.position.y);
        }
        contact
    }
}
