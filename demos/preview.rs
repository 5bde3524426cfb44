use solar_map::{BodyRef, MapConfig, Planet, PixelShifts, SolarMap, Texture, TextureSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    // A quarter-size map using the bon-generated builder
    let config = MapConfig::builder()
        .width(4096)
        .height(2048)
        .reference_px(40)
        .gas_giant_cap_px(120.0)
        .min_gap_inner_giant(300)
        .first_giant_pad(150)
        .belt_pad(60)
        .belt_shift((75, 200))
        .dwarf_min_radius_px(8)
        .filler_radius((2, 4))
        .pixel_shifts(
            PixelShifts::none()
                .with(Planet::Mercury, 60, 0)
                .with(Planet::Jupiter, 375, 0),
        )
        .build();

    let map = SolarMap::new(config);

    // Flat stand-ins for the photographic heightmaps
    let mut textures = TextureSet::new();
    for (i, asset) in map.catalog().textures.iter().enumerate() {
        let shade = 0.4 + 0.1 * i as f32;
        textures.insert(asset.target, Texture::uniform(64, 32, shade));
    }
    let moon = BodyRef::Moon {
        parent: Planet::Earth,
        name: "Moon",
    };
    println!("Moon textured: {}", textures.get(moon).is_some());

    let rendered = map.render(&textures)?;
    for (planet, placement) in rendered.layout.iter() {
        println!(
            "{:<8} x={:>5} r={:>4} outer ring={:>4}",
            planet.name(),
            placement.center.0,
            placement.radius,
            placement.rings.outermost()
        );
    }
    println!(
        "Belt [{}, {}] holds {} asteroids",
        rendered.belt.left,
        rendered.belt.right,
        rendered.asteroids.len()
    );

    rendered.canvas.save("solar_system_preview.png")?;
    println!("Saved: solar_system_preview.png");
    Ok(())
}
