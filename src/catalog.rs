//! Physical data for every body drawn on the map.
//!
//! Radii and semi-major axes are in kilometres. Nothing here knows about
//! pixels; the scale model turns these numbers into radii.

use std::fmt;
use std::ops::{Index, IndexMut};

// ============================================================================
// PLANET IDENTIFIERS
// ============================================================================

/// Planets in catalog order. Rings and disks are drawn in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Rocky bodies laid out left to right from the left margin.
    pub const INNER: [Planet; 4] = [Planet::Mercury, Planet::Venus, Planet::Earth, Planet::Mars];

    pub const fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Planet::Jupiter | Planet::Uranus | Planet::Neptune => Category::GasGiant,
            Planet::Saturn => Category::RingedGasGiant,
            _ => Category::Rocky,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rocky,
    GasGiant,
    RingedGasGiant,
}

impl Category {
    /// Gas giants of either kind are subject to the shrink factor.
    pub const fn is_gas(self) -> bool {
        matches!(self, Category::GasGiant | Category::RingedGasGiant)
    }
}

/// Fixed-size table with one entry per planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetMap<T>([T; 9]);

impl<T> PlanetMap<T> {
    pub fn from_fn(mut f: impl FnMut(Planet) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Planet::ALL[i])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Planet, &T)> {
        Planet::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Planet> for PlanetMap<T> {
    type Output = T;

    fn index(&self, planet: Planet) -> &T {
        &self.0[planet.index()]
    }
}

impl<T> IndexMut<Planet> for PlanetMap<T> {
    fn index_mut(&mut self, planet: Planet) -> &mut T {
        &mut self.0[planet.index()]
    }
}

// ============================================================================
// SATELLITES, DWARF BODIES AND TEXTURE TARGETS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    pub name: &'static str,
    pub radius_km: f64,
    /// Only used to order and space moons around their parent.
    pub semi_major_km: f64,
}

impl Moon {
    pub const fn new(name: &'static str, radius_km: f64, semi_major_km: f64) -> Self {
        Self {
            name,
            radius_km,
            semi_major_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dwarf {
    pub name: &'static str,
    pub radius_km: f64,
}

/// A body that can receive a photographic texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRef {
    Planet(Planet),
    Moon { parent: Planet, name: &'static str },
}

impl fmt::Display for BodyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyRef::Planet(planet) => write!(f, "{planet}"),
            BodyRef::Moon { parent, name } => write!(f, "{name} ({parent})"),
        }
    }
}

/// Source image for a textured body, relative to the asset directory.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureAsset {
    pub target: BodyRef,
    pub file: &'static str,
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Body whose pixel radius anchors the scale.
    pub reference: Planet,
    pub radius_km: PlanetMap<f64>,
    /// Satellites per parent, in drawing order of the parents.
    pub moons: Vec<(Planet, Vec<Moon>)>,
    pub dwarfs: Vec<Dwarf>,
    /// Planets whose final radius gets the override factor. Moons always do.
    pub overridden: Vec<Planet>,
    /// Textures in compositing order.
    pub textures: Vec<TextureAsset>,
}

impl Catalog {
    /// The solar system as drawn on the reference map.
    pub fn sol() -> Self {
        let radius_km = PlanetMap::from_fn(|planet| match planet {
            Planet::Mercury => 2440.0,
            Planet::Venus => 6052.0,
            Planet::Earth => 6371.0,
            Planet::Mars => 3390.0,
            Planet::Jupiter => 69911.0,
            Planet::Saturn => 58232.0,
            Planet::Uranus => 25362.0,
            Planet::Neptune => 24622.0,
            Planet::Pluto => 1188.0,
        });

        let moons = vec![
            (Planet::Earth, vec![Moon::new("Moon", 1737.0, 384_400.0)]),
            (
                Planet::Mars,
                vec![
                    Moon::new("Phobos", 11.27, 9377.0),
                    Moon::new("Deimos", 6.2, 23_460.0),
                ],
            ),
            (
                Planet::Jupiter,
                vec![
                    Moon::new("Io", 1821.0, 421_700.0),
                    Moon::new("Europa", 1560.0, 671_034.0),
                    Moon::new("Ganymede", 2634.0, 1_070_412.0),
                    Moon::new("Callisto", 2410.0, 1_882_709.0),
                ],
            ),
            (
                Planet::Saturn,
                vec![
                    Moon::new("Titan", 2575.0, 1_221_870.0),
                    Moon::new("Rhea", 764.0, 527_108.0),
                    Moon::new("Iapetus", 735.0, 3_560_820.0),
                    Moon::new("Dione", 561.0, 377_415.0),
                ],
            ),
            (
                Planet::Uranus,
                vec![
                    Moon::new("Miranda", 235.0, 129_900.0),
                    Moon::new("Ariel", 578.0, 191_020.0),
                    Moon::new("Umbriel", 584.0, 266_000.0),
                    Moon::new("Titania", 788.0, 435_910.0),
                    Moon::new("Oberon", 761.0, 583_520.0),
                ],
            ),
            (
                Planet::Neptune,
                vec![
                    Moon::new("Triton", 1353.0, 354_759.0),
                    Moon::new("Proteus", 210.0, 117_647.0),
                ],
            ),
            (Planet::Pluto, vec![Moon::new("Charon", 606.0, 19_591.0)]),
        ];

        let dwarfs = [("Ceres", 473.0), ("Vesta", 262.0), ("Pallas", 272.0), ("Hygiea", 215.0)]
            .into_iter()
            .map(|(name, radius_km)| Dwarf { name, radius_km })
            .collect();

        let textures = vec![
            TextureAsset {
                target: BodyRef::Planet(Planet::Mars),
                file: "mars_1k_topo.jpg",
            },
            TextureAsset {
                target: BodyRef::Moon {
                    parent: Planet::Earth,
                    name: "Moon",
                },
                file: "moonmap4k.jpg",
            },
            TextureAsset {
                target: BodyRef::Planet(Planet::Mercury),
                file: "mercurybump.jpg",
            },
            TextureAsset {
                target: BodyRef::Planet(Planet::Venus),
                file: "venusbump.jpg",
            },
            TextureAsset {
                target: BodyRef::Planet(Planet::Pluto),
                file: "plutomap2k.jpg",
            },
        ];

        Self {
            reference: Planet::Earth,
            radius_km,
            moons,
            dwarfs,
            overridden: Planet::ALL
                .into_iter()
                .filter(|p| p.category() == Category::Rocky)
                .collect(),
            textures,
        }
    }

    pub fn is_overridden(&self, planet: Planet) -> bool {
        self.overridden.contains(&planet)
    }

    pub fn is_textured(&self, body: BodyRef) -> bool {
        self.textures.iter().any(|asset| asset.target == body)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sol()
    }
}
