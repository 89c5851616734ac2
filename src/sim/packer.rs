//! Random sequential circle packing
//!
//! Candidate centers are drawn uniformly over the surface. Each candidate
//! grows until it touches the nearest edge or existing circle (capped at the
//! upper radius bound) and is kept only if that radius beats the lower bound.
//! The loop always stops after `max_attempts` draws, so density is
//! probabilistic rather than maximal.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, edge_distance};
use crate::error::ConfigError;
use crate::settings::Settings;

/// Circles generated for one round, in creation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packing {
    pub width: f32,
    pub height: f32,
    /// Seed the round was generated from (unset for packings built from a caller's RNG)
    seed: Option<u64>,
    circles: Vec<Circle>,
}

impl Packing {
    fn empty(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            seed: None,
            circles: Vec::new(),
        }
    }

    /// Build a packing from arbitrary circles, bypassing the packer's invariants
    #[cfg(test)]
    pub(crate) fn from_circles(width: f32, height: f32, circles: Vec<Circle>) -> Self {
        Self {
            width,
            height,
            seed: None,
            circles,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub(crate) fn circles_mut(&mut self) -> &mut [Circle] {
        &mut self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Labeled circles, in creation order
    pub fn numbered(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter().filter(|c| c.is_numbered())
    }

    /// First circle (in creation order) containing `p`.
    ///
    /// Packed circles never overlap, but if two did, the one created first wins.
    pub fn hit_test(&self, p: Vec2) -> Option<&Circle> {
        self.circles.iter().find(|c| c.contains(p))
    }
}

/// Reject surfaces that cannot hold a circle
pub fn check_surface(width: f32, height: f32) -> Result<(), ConfigError> {
    // `!(x > 0)` also catches NaN
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(ConfigError::InvalidSurface { width, height });
    }
    Ok(())
}

/// Pack circles into a `width x height` surface
pub fn pack<R>(
    width: f32,
    height: f32,
    settings: &Settings,
    rng: &mut R,
) -> Result<Packing, ConfigError>
where
    R: Rng + ?Sized,
{
    check_surface(width, height)?;
    settings.validate()?;

    let mut packing = Packing::empty(width, height);
    let mut too_small = 0u32;

    for _ in 0..settings.max_attempts {
        let p = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
        let radius = max_radius_at(
            &packing.circles,
            p,
            width,
            height,
            settings.upper_radius_bound,
        );

        if radius > settings.lower_radius_bound {
            packing.circles.push(Circle::new(p, radius));
        } else {
            too_small += 1;
        }
    }

    log::debug!(
        "Packed {} circles into {}x{} ({} of {} candidates rejected)",
        packing.len(),
        width,
        height,
        too_small,
        settings.max_attempts
    );

    Ok(packing)
}

/// Largest radius a circle centered at `p` can have.
///
/// Negative when `p` lies inside an existing circle; scanning stops there
/// since the candidate is rejected either way.
fn max_radius_at(circles: &[Circle], p: Vec2, width: f32, height: f32, upper: f32) -> f32 {
    let mut max_radius = edge_distance(p, width, height).min(upper);
    for circle in circles {
        let gap = circle.signed_gap(p);
        max_radius = max_radius.min(gap);
        if gap < 0.0 {
            break;
        }
    }
    max_radius
}
