use crate::catalog::{Catalog, Category, Planet, PlanetMap};
use crate::config::MapConfig;
use crate::layout::{systematic_centers, Annulus, BaseLayout, FinalLayout, PixelShifts, Rings};
use crate::scale::RadiusModel;

fn layouts(config: &MapConfig) -> (RadiusModel, BaseLayout, FinalLayout) {
    let radii = RadiusModel::new(&Catalog::sol(), config);
    let base = BaseLayout::compute(&radii, config);
    let fin = FinalLayout::compute(&radii, config);
    (radii, base, fin)
}

#[test]
fn test_orbit_rings_from_radius() {
    let config = MapConfig::new();
    let rings = Rings::for_body(Category::Rocky, 100, &config);
    assert_eq!(
        rings,
        Rings::Orbit {
            low: Annulus::new(124, 130),
            high: Annulus::new(160, 166),
        }
    );
    assert_eq!(rings.low_outer(), 130);
    assert_eq!(rings.outermost(), 166);
}

#[test]
fn test_wide_ring_rounds_half_to_even() {
    let config = MapConfig::new();
    let rings = Rings::for_body(Category::RingedGasGiant, 375, &config);
    assert_eq!(rings, Rings::Wide(Annulus::new(385, 562)));
    assert_eq!(rings.low_outer(), 562);
    assert_eq!(rings.outermost(), 562);
}

#[test]
fn test_rings_clear_their_body() {
    let config = MapConfig::new();
    let (_, base, fin) = layouts(&config);
    let min_offset = config.low_ring_offset.min(config.wide_ring_offset) as i32;

    for layout in [&*base, &*fin] {
        for (planet, placement) in layout.iter() {
            for ring in placement.rings.annuli() {
                assert!(ring.inner < ring.outer, "{planet}: {ring:?}");
                assert!(ring.inner >= placement.radius as i32 + min_offset, "{planet}: {ring:?}");
            }
        }
    }
}

#[test]
fn test_systematic_centers_match_reference_map() {
    let config = MapConfig::new();
    let radii = RadiusModel::new(&Catalog::sol(), &config);
    let centers = systematic_centers(radii.base(), &config);

    assert_eq!(centers[Planet::Mercury], (157, 4096));
    assert_eq!(centers[Planet::Venus], (1716, 4096));
    assert_eq!(centers[Planet::Earth], (3276, 4096));
    assert_eq!(centers[Planet::Mars], (4835, 4096));
    assert_eq!(centers[Planet::Jupiter], (7161, 4096));
    assert_eq!(centers[Planet::Pluto], (16256, 4096));
}

#[test]
fn test_outer_giants_split_the_span() {
    let config = MapConfig::new();
    let radii = RadiusModel::new(&Catalog::sol(), &config);
    let centers = systematic_centers(radii.base(), &config);

    // Neptune at 0.88 of Jupiter..Pluto, Saturn at the floored midpoint less 100.
    assert_eq!(centers[Planet::Neptune].0, 15165);
    assert_eq!(centers[Planet::Saturn].0, (7161 + 15165) / 2 - 100);
    assert_eq!(centers[Planet::Saturn].0, 11063);
    assert_eq!(centers[Planet::Uranus].0, 13114);
}

#[test]
fn test_planets_ordered_left_to_right() {
    let config = MapConfig::new();
    let radii = RadiusModel::new(&Catalog::sol(), &config);
    let centers = systematic_centers(radii.base(), &config);

    let xs: Vec<i32> = Planet::ALL.iter().map(|&p| centers[p].0).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]), "{xs:?}");
}

#[test]
fn test_final_layout_is_base_plus_shifts() {
    let config = MapConfig::new();
    let (radii, base, fin) = layouts(&config);

    for planet in Planet::ALL {
        let (bx, by) = base.get(planet).center;
        let (dx, dy) = config.pixel_shifts.offset(planet);
        assert_eq!(fin.get(planet).center, (bx + dx, by + dy), "{planet}");
        assert_eq!(base.get(planet).radius, radii.base()[planet]);
        assert_eq!(fin.get(planet).radius, radii.overridden()[planet]);
    }
    assert_eq!(fin.get(Planet::Mercury).center.0, 157 + 250);
    assert_eq!(fin.get(Planet::Jupiter).center.0, 7161 + 1500);
}

#[test]
fn test_final_rings_follow_overridden_radii() {
    let config = MapConfig::new();
    let (_, base, fin) = layouts(&config);

    assert_eq!(base.get(Planet::Mercury).rings.outermost(), 57 + 66);
    assert_eq!(fin.get(Planet::Mercury).rings.outermost(), 171 + 66);
    assert_eq!(base.get(Planet::Saturn).rings, fin.get(Planet::Saturn).rings);
}

#[test]
fn test_shifts_are_independent_of_geometry() {
    let shifts = PixelShifts::none()
        .with(Planet::Venus, 10, -4)
        .with(Planet::Venus, 5, 1)
        .with(Planet::Uranus, -30, 0);

    assert_eq!(shifts.offset(Planet::Venus), (15, -3));
    assert_eq!(shifts.offset(Planet::Uranus), (-30, 0));
    assert_eq!(shifts.offset(Planet::Earth), (0, 0));

    let centers = PlanetMap::from_fn(|_| (100, 200));
    let shifted = shifts.apply(&centers);
    assert_eq!(shifted[Planet::Venus], (115, 197));
    assert_eq!(shifted[Planet::Earth], (100, 200));
    assert_eq!(centers[Planet::Venus], (100, 200));
}

#[test]
fn test_no_shifts_leaves_layouts_aligned() {
    let config = MapConfig::builder().pixel_shifts(PixelShifts::none()).build();
    let (_, base, fin) = layouts(&config);

    for planet in Planet::ALL {
        assert_eq!(base.get(planet).center, fin.get(planet).center);
    }
}
