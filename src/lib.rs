// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod belt;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod moons;
pub mod scale;
pub mod texture;

#[cfg(test)]
mod canvas_test;
#[cfg(test)]
mod layout_test;
#[cfg(test)]
mod moons_test;

// External crate imports
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

// Standard library imports
use std::collections::HashMap;
use std::path::Path;

pub use belt::{Asteroid, AsteroidKind, BeltBounds};
pub use canvas::Canvas;
pub use catalog::{BodyRef, Catalog, Category, Planet, TextureAsset};
pub use config::{MapConfig, Palette};
pub use error::{MapError, MapResult};
pub use layout::{BaseLayout, FinalLayout, PixelShifts, Rings};
pub use moons::MoonPlacement;
pub use scale::RadiusModel;
pub use texture::{Texture, TextureDisc};

// ============================================================================
// TEXTURE SOURCES
// ============================================================================

/// Decoded source images keyed by the body they are projected onto.
#[derive(Debug, Clone, Default)]
pub struct TextureSet {
    textures: HashMap<BodyRef, Texture>,
}

impl TextureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every asset from `dir`. The first unreadable file aborts.
    pub fn load(dir: impl AsRef<Path>, assets: &[TextureAsset]) -> MapResult<Self> {
        let dir = dir.as_ref();
        let mut set = Self::new();
        for asset in assets {
            let path = dir.join(asset.file);
            info!(body = %asset.target, path = %path.display(), "loading texture");
            set.insert(asset.target, Texture::open(&path)?);
        }
        Ok(set)
    }

    pub fn insert(&mut self, body: BodyRef, texture: Texture) {
        self.textures.insert(body, texture);
    }

    pub fn get(&self, body: BodyRef) -> Option<&Texture> {
        self.textures.get(&body)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Everything a render produced. The canvas is ready to save.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub canvas: Canvas,
    pub layout: FinalLayout,
    pub moons: Vec<MoonPlacement>,
    pub belt: BeltBounds,
    pub asteroids: Vec<Asteroid>,
}

/// Map generator - the primary public interface
#[derive(Debug, Clone)]
pub struct SolarMap {
    config: MapConfig,
    catalog: Catalog,
}

impl SolarMap {
    pub fn new(config: MapConfig) -> Self {
        Self::with_catalog(config, Catalog::sol())
    }

    pub fn with_catalog(config: MapConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run every phase in order on a fresh canvas.
    ///
    /// radii → positions → rings and planets → textures → moons → belt.
    /// Later phases overwrite earlier ones where they overlap.
    pub fn render(&self, textures: &TextureSet) -> MapResult<Rendered> {
        let config = &self.config;
        let catalog = &self.catalog;

        let radii = RadiusModel::new(catalog, config);
        info!(scale = radii.scale(), shrink = radii.shrink(), "radii computed");

        let base = BaseLayout::compute(&radii, config);
        let layout = FinalLayout::compute(&radii, config);
        let moons = moons::place_moons(catalog, &radii, &layout, config);

        let mut canvas = Canvas::new(config.width, config.height);

        info!("drawing planets");
        draw_planets(&mut canvas, &layout, &config.palette);

        info!(count = catalog.textures.len(), "projecting textures");
        apply_textures(&mut canvas, catalog, &layout, &moons, textures)?;

        info!(count = moons.len(), "drawing moons");
        draw_moons(&mut canvas, catalog, &moons, &config.palette);

        let belt = BeltBounds::from_layout(&base, config);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let asteroids = belt::populate(&mut canvas, belt, catalog, &radii, config, &mut rng)?;

        Ok(Rendered {
            canvas,
            layout,
            moons,
            belt,
            asteroids,
        })
    }
}

// ============================================================================
// RENDERING PHASES
// ============================================================================

/// Orbit rings, then wide rings, then every planet disk on top.
fn draw_planets(canvas: &mut Canvas, layout: &FinalLayout, palette: &Palette) {
    for (_, placement) in layout.iter() {
        let (cx, cy) = placement.center;
        if let Rings::Orbit { low, high } = placement.rings {
            canvas.fill_annulus(cx, cy, low.inner, low.outer, palette.orbit_ring);
            canvas.fill_annulus(cx, cy, high.inner, high.outer, palette.orbit_ring);
        }
    }
    for (_, placement) in layout.iter() {
        let (cx, cy) = placement.center;
        if let Rings::Wide(wide) = placement.rings {
            canvas.fill_annulus(cx, cy, wide.inner, wide.outer, palette.sat_ring);
        }
    }
    for (_, placement) in layout.iter() {
        let (cx, cy) = placement.center;
        canvas.fill_disk(cx, cy, placement.radius as i32, palette.planet);
    }
}

fn apply_textures(
    canvas: &mut Canvas,
    catalog: &Catalog,
    layout: &FinalLayout,
    moons: &[MoonPlacement],
    textures: &TextureSet,
) -> MapResult<()> {
    for asset in &catalog.textures {
        let (center, radius) = match asset.target {
            BodyRef::Planet(planet) => {
                let placement = layout.get(planet);
                (placement.center, placement.radius)
            }
            body @ BodyRef::Moon { .. } => {
                let moon = moons
                    .iter()
                    .find(|m| m.body() == body)
                    .ok_or(MapError::UnknownBody(body))?;
                (moon.center, moon.radius)
            }
        };
        let texture = textures
            .get(asset.target)
            .ok_or(MapError::MissingTexture(asset.target))?;

        let disc = texture.project_disc(radius);
        canvas.composite(center.0, center.1, &disc);
    }
    Ok(())
}

/// Plain disks for untextured moons, rings for all of them.
fn draw_moons(canvas: &mut Canvas, catalog: &Catalog, moons: &[MoonPlacement], palette: &Palette) {
    for moon in moons {
        let (cx, cy) = moon.center;
        if !catalog.is_textured(moon.body()) {
            canvas.fill_disk(cx, cy, moon.radius as i32, palette.planet);
        }
        canvas.fill_annulus(cx, cy, moon.ring.inner, moon.ring.outer, palette.orbit_ring);
    }
}
