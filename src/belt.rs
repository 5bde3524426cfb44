//! Asteroid belt: non-overlapping circles scattered by rejection sampling.
//!
//! Dwarf bodies go first, each with a bounded number of tries and a thin ring.
//! Filler asteroids follow until the belt holds the target count.

use rand::Rng;
use tracing::{info, warn};

use crate::canvas::Canvas;
use crate::catalog::{Catalog, Planet};
use crate::config::MapConfig;
use crate::error::{MapError, MapResult};
use crate::layout::{Annulus, BaseLayout};
use crate::scale::RadiusModel;

// ============================================================================
// BOUNDS
// ============================================================================

/// Horizontal band `[left, right] × [0, height)` in which asteroids are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeltBounds {
    pub left: i32,
    pub right: i32,
}

impl BeltBounds {
    /// Clamp to the canvas and force `left <= right`.
    pub fn clamped(left: i32, right: i32, width: u32) -> Self {
        let max_x = width as i32 - 1;
        let left = left.clamp(0, max_x.max(0));
        let mut right = right.min(max_x);
        if right < left {
            warn!(left, right, "belt bounds inverted, collapsing band");
            right = left;
        }
        Self { left, right }
    }

    /// Baseline from the unshifted, un-overridden layout, then shifted.
    pub fn from_layout(base: &BaseLayout, config: &MapConfig) -> Self {
        let [.., inner] = Planet::INNER;
        let inner = base.get(inner);
        let giant = base.get(Planet::Jupiter);

        let left = inner.center.0 + inner.rings.outermost() + config.belt_pad;
        let right = giant.center.0 - giant.rings.low_outer() - config.belt_pad;
        Self::clamped(left + config.belt_shift.0, right + config.belt_shift.1, config.width)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0
    }
}

/// No point can be sampled: zero-width band or zero-height canvas.
fn band_is_empty(bounds: BeltBounds, height: u32) -> bool {
    bounds.is_degenerate() || height == 0
}

// ============================================================================
// ASTEROIDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidKind {
    Dwarf { name: &'static str, ring: Annulus },
    Filler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    pub center: (i32, i32),
    pub radius: u32,
    pub kind: AsteroidKind,
}

impl Asteroid {
    /// Radius that must stay clear of other asteroids, ring included.
    pub fn footprint(&self) -> u32 {
        match self.kind {
            AsteroidKind::Dwarf { ring, .. } => ring.outer as u32,
            AsteroidKind::Filler => self.radius,
        }
    }

    fn is_dwarf(&self) -> bool {
        matches!(self.kind, AsteroidKind::Dwarf { .. })
    }
}

/// True when the two centers are closer than `reach`.
fn too_close(a: (i32, i32), b: (i32, i32), reach: u32) -> bool {
    let dx = (a.0 - b.0) as i64;
    let dy = (a.1 - b.1) as i64;
    let reach = reach as i64;
    dx * dx + dy * dy < reach * reach
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: BeltBounds, height: u32) -> (i32, i32) {
    let x = rng.random_range(bounds.left..=bounds.right);
    let y = rng.random_range(0..height as i32);
    (x, y)
}

// ============================================================================
// POPULATION
// ============================================================================

/// Place and draw dwarf bodies. Unplaceable ones are skipped.
pub fn place_dwarfs<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    bounds: BeltBounds,
    catalog: &Catalog,
    radii: &RadiusModel,
    config: &MapConfig,
    rng: &mut R,
) -> Vec<Asteroid> {
    let mut placed: Vec<Asteroid> = Vec::with_capacity(catalog.dwarfs.len());

    for dwarf in &catalog.dwarfs {
        if band_is_empty(bounds, config.height) {
            warn!(dwarf = dwarf.name, ?bounds, height = config.height, "belt band is empty, dwarf skipped");
            continue;
        }
        let radius = radii.dwarf_radius(dwarf, config.dwarf_min_radius_px);
        let extent = config.moon_ring_extent(radius);

        let spot = (0..config.dwarf_attempts)
            .map(|_| random_point(rng, bounds, config.height))
            .find(|&candidate| {
                placed.iter().all(|other| {
                    !too_close(candidate, other.center, extent + other.footprint() + config.asteroid_gap)
                })
            });

        let Some(center) = spot else {
            warn!(dwarf = dwarf.name, attempts = config.dwarf_attempts, "no room for dwarf body, skipped");
            continue;
        };

        let ring_inner = (radius + config.moon_ring_offset) as i32;
        let ring = Annulus::new(ring_inner, extent as i32);
        canvas.fill_disk(center.0, center.1, radius as i32, config.palette.asteroid);
        canvas.fill_annulus(center.0, center.1, ring.inner, ring.outer, config.palette.orbit_ring);
        placed.push(Asteroid {
            center,
            radius,
            kind: AsteroidKind::Dwarf {
                name: dwarf.name,
                ring,
            },
        });
    }
    placed
}

/// Add filler asteroids to `asteroids` until the target count is reached.
pub fn place_fillers<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    bounds: BeltBounds,
    asteroids: &mut Vec<Asteroid>,
    config: &MapConfig,
    rng: &mut R,
) -> MapResult<()> {
    let target = config.asteroid_target;
    let exhausted = |placed: usize, attempts: u64| MapError::BeltExhausted {
        placed,
        target,
        attempts,
    };
    if asteroids.len() < target && band_is_empty(bounds, config.height) {
        return Err(exhausted(asteroids.len(), 0));
    }

    let (min_r, max_r) = config.filler_radius;
    let mut attempts = 0_u64;
    while asteroids.len() < target {
        if attempts >= config.filler_max_attempts {
            return Err(exhausted(asteroids.len(), attempts));
        }
        attempts += 1;

        let radius = rng.random_range(min_r..=max_r);
        let center = random_point(rng, bounds, config.height);

        let clear_of_all = asteroids
            .iter()
            .all(|other| !too_close(center, other.center, radius + other.radius + config.asteroid_gap));
        let clear_of_dwarfs = clear_of_all
            && asteroids.iter().filter(|a| a.is_dwarf()).all(|dwarf| {
                !too_close(center, dwarf.center, radius + dwarf.footprint() + config.asteroid_gap)
            });
        if !clear_of_dwarfs {
            continue;
        }

        canvas.fill_disk(center.0, center.1, radius as i32, config.palette.asteroid);
        asteroids.push(Asteroid {
            center,
            radius,
            kind: AsteroidKind::Filler,
        });
    }
    info!(count = asteroids.len(), attempts, "belt filled");
    Ok(())
}

/// Run both tiers and return every placed asteroid, dwarfs first.
pub fn populate<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    bounds: BeltBounds,
    catalog: &Catalog,
    radii: &RadiusModel,
    config: &MapConfig,
    rng: &mut R,
) -> MapResult<Vec<Asteroid>> {
    info!(left = bounds.left, right = bounds.right, "populating asteroid belt");
    let mut asteroids = place_dwarfs(canvas, bounds, catalog, radii, config, rng);
    place_fillers(canvas, bounds, &mut asteroids, config, rng)?;
    Ok(asteroids)
}
