//! Owner of the current round's circles
//!
//! Populated once per round during setup and read-only during play. Cleared
//! when a finished round is dismissed; the presentation layer must then
//! generate a new packing.

use glam::Vec2;

use super::geometry::Circle;
use super::packer::Packing;

#[derive(Debug, Clone, Default)]
pub struct CircleRegistry {
    packing: Option<Packing>,
}

impl CircleRegistry {
    pub fn new() -> Self {
        Self { packing: None }
    }

    /// Replace the current circles with a freshly generated packing
    pub fn populate(&mut self, packing: Packing) -> &Packing {
        self.packing.insert(packing)
    }

    pub fn packing(&self) -> Option<&Packing> {
        self.packing.as_ref()
    }

    /// All circles in creation order (empty after a reset)
    pub fn circles(&self) -> &[Circle] {
        self.packing.as_ref().map(Packing::circles).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.circles().is_empty()
    }

    /// First circle containing `p`; creation order breaks ties
    pub fn hit_test(&self, p: Vec2) -> Option<&Circle> {
        self.packing.as_ref().and_then(|packing| packing.hit_test(p))
    }

    pub fn numbered(&self) -> impl Iterator<Item = &Circle> {
        self.circles().iter().filter(|c| c.is_numbered())
    }

    pub fn circle_with_label(&self, label: u32) -> Option<&Circle> {
        self.numbered().find(|c| c.label() == Some(label))
    }

    pub fn reset(&mut self) {
        self.packing = None;
    }
}
