use crate::catalog::{BodyRef, Catalog, Planet};
use crate::config::MapConfig;
use crate::layout::FinalLayout;
use crate::moons::{place_moons, MoonPlacement};
use crate::scale::RadiusModel;

fn sol_moons() -> (Catalog, FinalLayout, Vec<MoonPlacement>) {
    let config = MapConfig::new();
    let catalog = Catalog::sol();
    let radii = RadiusModel::new(&catalog, &config);
    let layout = FinalLayout::compute(&radii, &config);
    let moons = place_moons(&catalog, &radii, &layout, &config);
    (catalog, layout, moons)
}

#[test]
fn test_every_moon_is_placed() {
    let (catalog, _, moons) = sol_moons();
    let total: usize = catalog.moons.iter().map(|(_, list)| list.len()).sum();
    assert_eq!(moons.len(), total);
}

#[test]
fn test_moons_stack_outward_and_alternate() {
    let (catalog, layout, moons) = sol_moons();

    for (parent, _) in &catalog.moons {
        let (cx, cy) = layout.get(*parent).center;
        let outermost = layout.get(*parent).rings.outermost();
        let mine: Vec<_> = moons.iter().filter(|m| m.parent == *parent).collect();

        let mut last_offset = 0;
        for (idx, moon) in mine.iter().enumerate() {
            assert_eq!(moon.center.0, cx, "{}", moon.name);
            let offset = (moon.center.1 - cy).abs();
            assert!(offset > outermost, "{} inside parent rings", moon.name);
            assert!(offset > last_offset, "{} not further out", moon.name);
            last_offset = offset;

            if idx % 2 == 0 {
                assert!(moon.center.1 < cy, "{} should sit above", moon.name);
            } else {
                assert!(moon.center.1 > cy, "{} should sit below", moon.name);
            }
        }
    }
}

#[test]
fn test_moons_sorted_by_semi_major_axis() {
    let (_, _, moons) = sol_moons();
    let saturn: Vec<_> = moons
        .iter()
        .filter(|m| m.parent == Planet::Saturn)
        .map(|m| m.name)
        .collect();
    assert_eq!(saturn, ["Dione", "Rhea", "Titan", "Iapetus"]);
}

#[test]
fn test_single_moon_sits_at_twice_outer_ring() {
    let (_, layout, moons) = sol_moons();
    let earth = layout.get(Planet::Earth);
    let moon = moons
        .iter()
        .find(|m| m.parent == Planet::Earth)
        .expect("Earth has a moon");

    // Overridden Earth radius 450, outermost ring 516.
    assert_eq!(earth.rings.outermost(), 516);
    assert_eq!(moon.center, (earth.center.0, earth.center.1 - (516 + 60 + 516)));
    assert_eq!(moon.radius, 123);
}

#[test]
fn test_moon_rings_hug_the_moon() {
    let (_, _, moons) = sol_moons();
    for moon in &moons {
        assert_eq!(moon.ring.inner, moon.radius as i32 + 6, "{}", moon.name);
        assert_eq!(moon.ring.outer, moon.radius as i32 + 10, "{}", moon.name);
    }
}

#[test]
fn test_textured_moon_identity() {
    let (catalog, _, moons) = sol_moons();
    let textured: Vec<_> = moons
        .iter()
        .filter(|m| catalog.is_textured(m.body()))
        .collect();

    assert_eq!(textured.len(), 1);
    assert_eq!(
        textured[0].body(),
        BodyRef::Moon {
            parent: Planet::Earth,
            name: "Moon"
        }
    );
}
