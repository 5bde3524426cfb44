use bon::Builder;

use crate::layout::PixelShifts;

/// Gray levels for the four kinds of paint on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub planet: u16,
    pub orbit_ring: u16,
    pub sat_ring: u16,
    pub asteroid: u16,
}

impl Palette {
    pub const fn new(planet: u16, orbit_ring: u16, sat_ring: u16, asteroid: u16) -> Self {
        Self {
            planet,
            orbit_ring,
            sat_ring,
            asteroid,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(45000, 30000, 60000, 35000)
    }
}

/// Every tunable constant of the map. Defaults reproduce the reference render.
#[derive(Debug, Clone, Builder)]
pub struct MapConfig {
    // Canvas configuration
    #[builder(default = 16384)]
    pub width: u32,
    #[builder(default = 8192)]
    pub height: u32,
    #[builder(default)]
    pub palette: Palette,

    // Scale configuration
    #[builder(default = 150)]
    pub reference_px: u32,
    /// Largest gas giant is shrunk so its radius does not exceed this.
    #[builder(default = 450.0)]
    pub gas_giant_cap_px: f64,
    #[builder(default = 2)]
    pub min_radius_px: u32,
    #[builder(default = 3)]
    pub override_factor: u32,

    // Layout configuration
    #[builder(default = 100)]
    pub left_margin: i32,
    #[builder(default = 100)]
    pub right_margin: i32,
    /// Fraction of the width where the inner planets end.
    #[builder(default = 0.30)]
    pub inner_span_fraction: f64,
    #[builder(default = 1100)]
    pub min_gap_inner_giant: i32,
    #[builder(default = 600)]
    pub first_giant_pad: i32,
    /// Outermost gas giant sits at this fraction of the first-giant to outer-rocky span.
    #[builder(default = 0.88)]
    pub outer_giant_fraction: f64,
    #[builder(default = -100)]
    pub ringed_giant_offset: i32,
    #[builder(default = PixelShifts::sol())]
    pub pixel_shifts: PixelShifts,

    // Ring configuration
    #[builder(default = 24)]
    pub low_ring_offset: u32,
    #[builder(default = 6)]
    pub low_ring_thickness: u32,
    #[builder(default = 30)]
    pub high_ring_gap: u32,
    #[builder(default = 6)]
    pub high_ring_thickness: u32,
    #[builder(default = 10)]
    pub wide_ring_offset: u32,
    #[builder(default = 1.5)]
    pub wide_ring_factor: f64,

    // Moon configuration
    #[builder(default = 6)]
    pub moon_ring_offset: u32,
    #[builder(default = 4)]
    pub moon_ring_thickness: u32,
    #[builder(default = 60)]
    pub moon_pad: u32,

    // Belt configuration
    #[builder(default = 250)]
    pub belt_pad: i32,
    /// Left and right belt edge shifts, applied after the baseline bounds.
    #[builder(default = (300, 800))]
    pub belt_shift: (i32, i32),
    #[builder(default = 30)]
    pub dwarf_min_radius_px: u32,
    #[builder(default = 8000)]
    pub dwarf_attempts: u32,
    #[builder(default = 200)]
    pub asteroid_target: usize,
    #[builder(default = (8, 15))]
    pub filler_radius: (u32, u32),
    #[builder(default = 2)]
    pub asteroid_gap: u32,
    #[builder(default = 2_000_000)]
    pub filler_max_attempts: u64,
    #[builder(default = 9090)]
    pub seed: u64,
}

impl MapConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Outer edge of the thin ring drawn around a moon or dwarf body.
    pub fn moon_ring_extent(&self, radius: u32) -> u32 {
        radius + self.moon_ring_offset + self.moon_ring_thickness
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}
