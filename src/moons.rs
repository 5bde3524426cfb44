//! Moons stacked on the vertical axis of their parent.
//!
//! The vertical offset grows with semi-major axis and the sorted list
//! alternates above and below the parent. This is presentation only.

use tracing::debug;

use crate::catalog::{BodyRef, Catalog, Planet};
use crate::config::MapConfig;
use crate::layout::{Annulus, FinalLayout};
use crate::scale::RadiusModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonPlacement {
    pub parent: Planet,
    pub name: &'static str,
    pub radius: u32,
    pub center: (i32, i32),
    pub ring: Annulus,
}

impl MoonPlacement {
    pub fn body(&self) -> BodyRef {
        BodyRef::Moon {
            parent: self.parent,
            name: self.name,
        }
    }
}

/// Place every moon of every planet around the final layout.
pub fn place_moons(
    catalog: &Catalog,
    radii: &RadiusModel,
    layout: &FinalLayout,
    config: &MapConfig,
) -> Vec<MoonPlacement> {
    let mut placements = Vec::new();

    for (parent, moons) in &catalog.moons {
        let (cx, cy) = layout.get(*parent).center;
        let base_outer = layout.get(*parent).rings.outermost() as f64;
        let max_a = moons.iter().map(|m| m.semi_major_km).fold(0.0_f64, f64::max);

        let mut sorted: Vec<_> = moons.iter().collect();
        sorted.sort_by(|a, b| a.semi_major_km.total_cmp(&b.semi_major_km));

        for (idx, moon) in sorted.into_iter().enumerate() {
            let fraction = if max_a > 0.0 { moon.semi_major_km / max_a } else { 0.0 };
            let offset = base_outer + config.moon_pad as f64 + fraction * base_outer;
            let offset = offset.round_ties_even() as i32;
            let y = if idx % 2 == 0 { cy - offset } else { cy + offset };

            let radius = radii.moon_radius(moon);
            let ring_inner = (radius + config.moon_ring_offset) as i32;
            let placement = MoonPlacement {
                parent: *parent,
                name: moon.name,
                radius,
                center: (cx, y),
                ring: Annulus::new(ring_inner, ring_inner + config.moon_ring_thickness as i32),
            };
            debug!(
                parent = %placement.parent,
                moon = placement.name,
                y = placement.center.1,
                radius,
                "moon placed"
            );
            placements.push(placement);
        }
    }
    placements
}
