//! Round generation: pack, then number

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::numbering::number_circles;
use super::packer::{Packing, pack};
use crate::error::ConfigError;
use crate::settings::Settings;

/// Generate a labeled packing for a `width x height` surface.
///
/// The same seed and surface always yield the same circles and labels. Without
/// a seed one is drawn from the OS RNG and recorded on the packing.
pub fn generate_round(
    width: f32,
    height: f32,
    seed: Option<u64>,
    settings: &Settings,
) -> Result<Packing, ConfigError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut packing = pack(width, height, settings, &mut rng)?;
    let labeled = number_circles(&mut packing, settings.numbered_count, &mut rng);
    packing.set_seed(seed);

    if labeled == 0 {
        log::warn!("No circle fits on a {}x{} surface", width, height);
        return Err(ConfigError::SurfaceTooSmall { width, height });
    }
    if labeled < settings.numbered_count {
        log::warn!(
            "Only {} of {} circles could be numbered on a {}x{} surface",
            labeled,
            settings.numbered_count,
            width,
            height
        );
    }
    log::info!(
        "Round generated with seed {}: {} circles, {} numbered",
        seed,
        packing.len(),
        labeled
    );

    Ok(packing)
}
