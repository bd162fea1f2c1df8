// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host scene-graph seam: read-only queries and container resolution.
//!
//! The controller never mutates the scene. It reads parent links, container
//! tags, and current attribute values through [`SceneView`], and hands
//! mutations back as commands. Attributes are modeled as optional: an absent
//! orientation or scale is defaulted by the caller, never treated as an
//! error.

use core::fmt::Debug;
use core::hash::Hash;

use tactile_gesture::pinch::Scale3;
use tactile_gesture::rotate::Euler;

/// Read-only view of the host scene graph.
///
/// Implementations wrap whatever hierarchy the host uses (a DOM, an entity
/// tree, a retained scene graph). All methods must be cheap; they are called
/// on every pointer event.
pub trait SceneView {
    /// Stable handle for a node in the hierarchy.
    type NodeId: Copy + Eq + Hash + Debug;

    /// Returns the parent of `node`, or `None` at the root.
    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Returns `true` if `node` is tagged as a manipulation container: the
    /// unit that rotates and scales together in response to gestures.
    fn is_container(&self, node: Self::NodeId) -> bool;

    /// Returns the node's current orientation, or `None` when the attribute
    /// is absent.
    fn orientation(&self, node: Self::NodeId) -> Option<Euler>;

    /// Returns the node's current per-axis scale, or `None` when the
    /// attribute is absent.
    fn scale(&self, node: Self::NodeId) -> Option<Scale3>;
}

/// Upper bound on ancestor hops, so malformed parent chains cannot loop.
const MAX_ANCESTOR_HOPS: usize = 256;

/// Resolves the manipulation container owning `node`, if any.
///
/// Walks `node` and then its ancestor chain, returning the first node tagged
/// as a container. Returns `None` when the chain reaches the root without
/// finding one; callers treat that as a deliberate no-op.
pub fn containing_target<S: SceneView>(scene: &S, node: S::NodeId) -> Option<S::NodeId> {
    let mut current = node;
    for _ in 0..MAX_ANCESTOR_HOPS {
        if scene.is_container(current) {
            return Some(current);
        }
        current = scene.parent(current)?;
    }
    None
}
