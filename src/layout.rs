//! Planet positions and ring extents.
//!
//! Positions come from hand-tuned rules over the *base* radii. Two layouts are
//! built from the radius model: `BaseLayout` keeps base radii and unshifted
//! centers and only feeds the belt bounds; `FinalLayout` applies the manual
//! shifts and recomputes rings from the overridden radii. Neither is derived
//! from the other.

use std::ops::Deref;

use tracing::debug;

use crate::catalog::{Category, Planet, PlanetMap};
use crate::config::MapConfig;
use crate::scale::RadiusModel;

// ============================================================================
// RINGS
// ============================================================================

/// Closed radial interval `[inner, outer]` around a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annulus {
    pub inner: i32,
    pub outer: i32,
}

impl Annulus {
    pub const fn new(inner: i32, outer: i32) -> Self {
        Self { inner, outer }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rings {
    /// Two thin orbit indicators.
    Orbit { low: Annulus, high: Annulus },
    /// The ringed giant's single wide ring.
    Wide(Annulus),
}

impl Rings {
    pub fn for_body(category: Category, radius: u32, config: &MapConfig) -> Self {
        let r = radius as i32;
        match category {
            Category::RingedGasGiant => Rings::Wide(Annulus::new(
                r + config.wide_ring_offset as i32,
                (radius as f64 * config.wide_ring_factor).round_ties_even() as i32,
            )),
            Category::Rocky | Category::GasGiant => {
                let low_inner = r + config.low_ring_offset as i32;
                let low = Annulus::new(low_inner, low_inner + config.low_ring_thickness as i32);
                let high_inner = low.outer + config.high_ring_gap as i32;
                let high = Annulus::new(high_inner, high_inner + config.high_ring_thickness as i32);
                Rings::Orbit { low, high }
            }
        }
    }

    /// Outer edge of the innermost ring.
    pub fn low_outer(&self) -> i32 {
        match self {
            Rings::Orbit { low, .. } => low.outer,
            Rings::Wide(wide) => wide.outer,
        }
    }

    /// Outer edge of the outermost ring.
    pub fn outermost(&self) -> i32 {
        match self {
            Rings::Orbit { high, .. } => high.outer,
            Rings::Wide(wide) => wide.outer,
        }
    }

    pub fn annuli(&self) -> Vec<Annulus> {
        match *self {
            Rings::Orbit { low, high } => vec![low, high],
            Rings::Wide(wide) => vec![wide],
        }
    }
}

// ============================================================================
// MANUAL SHIFTS
// ============================================================================

/// Signed per-planet pixel offsets layered on top of the systematic layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelShifts(Vec<(Planet, i32, i32)>);

impl PixelShifts {
    pub fn none() -> Self {
        Self::default()
    }

    /// Mercury and Jupiter pushed right, as on the reference map.
    pub fn sol() -> Self {
        Self::none()
            .with(Planet::Mercury, 250, 0)
            .with(Planet::Jupiter, 1500, 0)
    }

    pub fn with(mut self, planet: Planet, dx: i32, dy: i32) -> Self {
        self.0.push((planet, dx, dy));
        self
    }

    /// Total offset for `planet`. Repeated entries add up.
    pub fn offset(&self, planet: Planet) -> (i32, i32) {
        self.0
            .iter()
            .filter(|(p, _, _)| *p == planet)
            .fold((0, 0), |(x, y), (_, dx, dy)| (x + dx, y + dy))
    }

    pub fn apply(&self, centers: &PlanetMap<(i32, i32)>) -> PlanetMap<(i32, i32)> {
        PlanetMap::from_fn(|planet| {
            let (x, y) = centers[planet];
            let (dx, dy) = self.offset(planet);
            (x + dx, y + dy)
        })
    }
}

// ============================================================================
// SYSTEMATIC POSITIONS
// ============================================================================

/// Centers before any manual shift, derived from `radii`.
pub fn systematic_centers(radii: &PlanetMap<u32>, config: &MapConfig) -> PlanetMap<(i32, i32)> {
    let r = |planet: Planet| radii[planet] as i32;
    let rings = |planet: Planet| Rings::for_body(planet.category(), radii[planet], config);
    let mut x = PlanetMap::from_fn(|_| 0_i32);

    // Inner rocky bodies, evenly spread up to a fraction of the width.
    let [first, .., last] = Planet::INNER;
    x[first] = config.left_margin + r(first);
    let inner_right = (config.width as f64 * config.inner_span_fraction).floor() as i32;
    let spacing = (inner_right - x[first] - r(last)) as f64 / (Planet::INNER.len() - 1) as f64;
    for (i, planet) in Planet::INNER.into_iter().enumerate().skip(1) {
        x[planet] = (x[first] as f64 + i as f64 * spacing).round_ties_even() as i32;
    }

    x[Planet::Jupiter] = x[last]
        + rings(last).outermost()
        + config.min_gap_inner_giant
        + rings(Planet::Jupiter).low_outer()
        + config.first_giant_pad;
    x[Planet::Pluto] = config.width as i32 - config.right_margin - r(Planet::Pluto);

    let span = (x[Planet::Pluto] - x[Planet::Jupiter]) as f64;
    x[Planet::Neptune] =
        (x[Planet::Jupiter] as f64 + config.outer_giant_fraction * span).round_ties_even() as i32;
    x[Planet::Saturn] =
        (x[Planet::Jupiter] + x[Planet::Neptune]).div_euclid(2) + config.ringed_giant_offset;
    x[Planet::Uranus] = (x[Planet::Saturn] + x[Planet::Neptune]).div_euclid(2);

    let cy = (config.height / 2) as i32;
    PlanetMap::from_fn(|planet| (x[planet], cy))
}

// ============================================================================
// LAYOUTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub radius: u32,
    pub center: (i32, i32),
    pub rings: Rings,
}

/// Immutable planet → placement table.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    placements: PlanetMap<Placement>,
}

impl Layout {
    fn build(radii: &PlanetMap<u32>, centers: &PlanetMap<(i32, i32)>, config: &MapConfig) -> Self {
        let placements = PlanetMap::from_fn(|planet| Placement {
            radius: radii[planet],
            center: centers[planet],
            rings: Rings::for_body(planet.category(), radii[planet], config),
        });
        Self { placements }
    }

    pub fn get(&self, planet: Planet) -> &Placement {
        &self.placements[planet]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Planet, &Placement)> {
        self.placements.iter()
    }
}

/// Unshifted centers, base radii and rings from base radii.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayout(Layout);

impl BaseLayout {
    pub fn compute(radii: &RadiusModel, config: &MapConfig) -> Self {
        let centers = systematic_centers(radii.base(), config);
        Self(Layout::build(radii.base(), &centers, config))
    }
}

impl Deref for BaseLayout {
    type Target = Layout;

    fn deref(&self) -> &Layout {
        &self.0
    }
}

/// Shifted centers, overridden radii and rings from overridden radii.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalLayout(Layout);

impl FinalLayout {
    pub fn compute(radii: &RadiusModel, config: &MapConfig) -> Self {
        let centers = config
            .pixel_shifts
            .apply(&systematic_centers(radii.base(), config));
        let layout = Layout::build(radii.overridden(), &centers, config);
        for (planet, placement) in layout.iter() {
            debug!(
                %planet,
                x = placement.center.0,
                y = placement.center.1,
                radius = placement.radius,
                outermost = placement.rings.outermost(),
                "planet placed"
            );
        }
        Self(layout)
    }
}

impl Deref for FinalLayout {
    type Target = Layout;

    fn deref(&self) -> &Layout {
        &self.0
    }
}
