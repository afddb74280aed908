/// DisplayList — ordered registry of renderable objects.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys, plus a
/// registration-order index so filtering and depth sorting stay stable
/// with respect to insertion. Removal leaves a dead key in the index;
/// compaction runs once dead keys outnumber live ones, keeping both
/// operations O(1) amortized.

use slotmap::SlotMap;
use crate::gameobject::{Renderable, RenderableKey};

/// Ordered collection of Renderables queried by cameras for culling
/// and by the loop for depth-sorted drawing.
#[derive(Debug, Default)]
pub struct DisplayList {
    objects: SlotMap<RenderableKey, Renderable>,
    /// Keys in registration order; may contain dead keys until the
    /// next compaction.
    order: Vec<RenderableKey>,
    dead: usize,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            order: Vec::new(),
            dead: 0,
        }
    }

    /// Register an object. Returns a stable key that remains valid
    /// until the object is removed.
    pub fn add(&mut self, object: Renderable) -> RenderableKey {
        let key = self.objects.insert(object);
        self.order.push(key);
        key
    }

    /// Remove an object. Returns it, or None if the key is stale.
    pub fn remove(&mut self, key: RenderableKey) -> Option<Renderable> {
        let object = self.objects.remove(key)?;
        self.dead += 1;
        if self.dead * 2 > self.order.len() {
            self.compact();
        }
        Some(object)
    }

    fn compact(&mut self) {
        let objects = &self.objects;
        self.order.retain(|k| objects.contains_key(*k));
        self.dead = 0;
    }

    pub fn get(&self, key: RenderableKey) -> Option<&Renderable> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: RenderableKey) -> Option<&mut Renderable> {
        self.objects.get_mut(key)
    }

    pub fn contains(&self, key: RenderableKey) -> bool {
        self.objects.contains_key(key)
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Keys of all registered objects, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = RenderableKey> + '_ {
        self.order.iter().copied().filter(|k| self.objects.contains_key(*k))
    }

    /// Iterate `(key, object)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (RenderableKey, &Renderable)> {
        self.order
            .iter()
            .filter_map(|k| self.objects.get(*k).map(|o| (*k, o)))
    }

    /// Iterate objects mutably, in arbitrary order. Used by the
    /// scene's internal tick, which touches every object regardless
    /// of order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Renderable> {
        self.objects.values_mut()
    }

    /// Keys of objects whose `visible` flag equals `visible`,
    /// preserving registration order.
    pub fn visibility_filter(&self, visible: bool) -> Vec<RenderableKey> {
        self.iter()
            .filter(|(_, o)| o.visible() == visible)
            .map(|(k, _)| k)
            .collect()
    }

    /// Keys ordered by ascending z_index.
    ///
    /// The sort is stable: objects with equal z_index keep their
    /// registration order. Used purely for draw order; flags are not
    /// touched.
    pub fn depth_sort(&self) -> Vec<RenderableKey> {
        let mut keys: Vec<RenderableKey> = self.keys().collect();
        keys.sort_by_key(|k| self.objects[*k].z_index);
        keys
    }
}

#[cfg(test)]
#[path = "display_list_tests.rs"]
mod tests;
