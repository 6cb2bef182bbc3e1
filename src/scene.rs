//! Scene of identified primitives.
//!
//! Items are kept in insertion order, which is also paint order. Redrawing
//! an existing identifier replaces the primitive but keeps its position.

use indexmap::IndexMap;
use log::debug;

use crate::clip::ClipAlgorithm;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point};
use crate::primitive::Primitive;

/// A primitive together with the pen color it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Geometry.
    pub primitive: Primitive,
    /// Pen color at insertion time.
    pub color: Rgba,
}

/// Ordered collection of items keyed by identifier, plus the current pen.
#[derive(Debug, Clone)]
pub struct Scene {
    items: IndexMap<String, Item>,
    pen: Rgba,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Empty scene with a black pen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            pen: Rgba::BLACK,
        }
    }

    /// Current pen color.
    #[must_use]
    pub const fn pen(&self) -> Rgba {
        self.pen
    }

    /// Set the pen color used by subsequent inserts.
    pub fn set_pen(&mut self, color: Rgba) {
        self.pen = color;
    }

    /// Store `primitive` under `id` with the current pen color.
    pub fn insert(&mut self, id: impl Into<String>, primitive: Primitive) {
        let id = id.into();
        debug!("insert {} '{id}'", primitive.kind());
        self.items.insert(
            id,
            Item {
                primitive,
                color: self.pen,
            },
        );
    }

    /// Look up an item.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Remove an item, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        self.items.shift_remove(id)
    }

    /// Remove every item. The pen color is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Translate an item in place.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if `id` is not present.
    pub fn translate(&mut self, id: &str, dx: i32, dy: i32) -> Result<()> {
        let item = self.item_mut(id)?;
        item.primitive = item.primitive.translated(dx, dy);
        Ok(())
    }

    /// Rotate an item clockwise about `pivot`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if `id` is not present, or
    /// [`Error::UnsupportedOperation`] for ellipses.
    pub fn rotate(&mut self, id: &str, pivot: Point, degrees: f64) -> Result<()> {
        let item = self.item_mut(id)?;
        item.primitive = item.primitive.rotated(pivot, degrees)?;
        Ok(())
    }

    /// Scale an item about `pivot`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if `id` is not present.
    pub fn scale(&mut self, id: &str, pivot: Point, factor: f64) -> Result<()> {
        let item = self.item_mut(id)?;
        item.primitive = item.primitive.scaled(pivot, factor);
        Ok(())
    }

    /// Clip a line item to `window`. A line clipped away entirely is removed.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if `id` is not present, or
    /// [`Error::UnsupportedOperation`] if the item is not a line.
    pub fn clip(&mut self, id: &str, window: ClipWindow, algorithm: ClipAlgorithm) -> Result<()> {
        let item = self.item_mut(id)?;
        match item.primitive.clipped(window, algorithm)? {
            Some(clipped) => item.primitive = clipped,
            None => {
                debug!("'{id}' clipped away entirely");
                self.items.shift_remove(id);
            }
        }
        Ok(())
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut Item> {
        self.items
            .get_mut(id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))
    }
}
