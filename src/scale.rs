//! Physical radii to pixel radii.
//!
//! One linear scale anchored on the reference body, a shrink factor that keeps
//! the gas giants on the canvas, then the override multiplier on top.

use tracing::debug;

use crate::catalog::{Catalog, Dwarf, Moon, PlanetMap};
use crate::config::MapConfig;

/// Round half to even, then clamp to at least `floor` pixels.
fn to_px(raw: f64, floor: u32) -> u32 {
    (raw.round_ties_even().max(0.0) as u32).max(floor)
}

#[derive(Debug, Clone)]
pub struct RadiusModel {
    /// Pixels per kilometre.
    scale: f64,
    /// Applied to gas giants only. Never above 1.
    shrink: f64,
    override_factor: u32,
    min_radius_px: u32,
    base: PlanetMap<u32>,
    overridden: PlanetMap<u32>,
}

impl RadiusModel {
    pub fn new(catalog: &Catalog, config: &MapConfig) -> Self {
        let scale = config.reference_px as f64 / catalog.radius_km[catalog.reference];
        let raw = PlanetMap::from_fn(|planet| catalog.radius_km[planet] * scale);

        let largest_gas = raw
            .iter()
            .filter(|(planet, _)| planet.category().is_gas())
            .map(|(_, &px)| px)
            .fold(0.0_f64, f64::max);
        let shrink = if largest_gas > 0.0 {
            (config.gas_giant_cap_px / largest_gas).min(1.0)
        } else {
            1.0
        };

        let base = PlanetMap::from_fn(|planet| {
            if planet == catalog.reference {
                return config.reference_px;
            }
            let factor = if planet.category().is_gas() { shrink } else { 1.0 };
            to_px(raw[planet] * factor, config.min_radius_px)
        });
        let overridden = PlanetMap::from_fn(|planet| {
            if catalog.is_overridden(planet) {
                base[planet] * config.override_factor
            } else {
                base[planet]
            }
        });

        for (planet, &r) in base.iter() {
            debug!(%planet, base = r, overridden = overridden[planet], "planet radius");
        }

        Self {
            scale,
            shrink,
            override_factor: config.override_factor,
            min_radius_px: config.min_radius_px,
            base,
            overridden,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// Radii before the override multiplier. Only the belt bounds use these.
    pub fn base(&self) -> &PlanetMap<u32> {
        &self.base
    }

    /// Radii after the override multiplier. Everything drawn uses these.
    pub fn overridden(&self) -> &PlanetMap<u32> {
        &self.overridden
    }

    /// Every moon is in the override category.
    pub fn moon_radius(&self, moon: &Moon) -> u32 {
        to_px(moon.radius_km * self.scale, self.min_radius_px) * self.override_factor
    }

    /// Dwarf bodies keep their scaled size, raised to `min_px`.
    pub fn dwarf_radius(&self, dwarf: &Dwarf, min_px: u32) -> u32 {
        to_px(dwarf.radius_km * self.scale, min_px)
    }
}
