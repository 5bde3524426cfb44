use crate::canvas::Canvas;
use crate::texture::Texture;

fn dist_sq(x: u32, y: u32, cx: i64, cy: i64) -> i64 {
    let dx = x as i64 - cx;
    let dy = y as i64 - cy;
    dx * dx + dy * dy
}

#[test]
fn test_annulus_paints_exact_band() {
    let mut canvas = Canvas::new(200, 200);
    canvas.fill_annulus(100, 100, 10, 15, 500);

    for y in 0..200 {
        for x in 0..200 {
            let d = dist_sq(x, y, 100, 100);
            let expected = if (100..=225).contains(&d) { 500 } else { 0 };
            assert_eq!(canvas.get(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_disk_covers_closed_circle() {
    let mut canvas = Canvas::new(64, 64);
    canvas.fill_disk(30, 20, 7, 9);

    for y in 0..64 {
        for x in 0..64 {
            let inside = dist_sq(x, y, 30, 20) <= 49;
            assert_eq!(canvas.get(x, y) == Some(9), inside, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_disk_is_idempotent() {
    let mut once = Canvas::new(80, 60);
    once.fill_disk(40, 30, 12, 1234);

    let mut twice = once.clone();
    twice.fill_disk(40, 30, 12, 1234);

    assert_eq!(once, twice);
}

#[test]
fn test_off_canvas_primitives_leave_canvas_untouched() {
    let mut canvas = Canvas::new(50, 50);
    canvas.fill_disk(-500, -500, 100, 7);
    canvas.fill_disk(10_000, 25, 5, 7);
    canvas.fill_annulus(25, 9_000, 3, 40, 7);
    canvas.fill_disk(25, 25, -3, 7);

    assert!(canvas.pixels().iter().all(|&v| v == 0));
}

#[test]
fn test_partially_visible_disk_is_clipped() {
    let mut canvas = Canvas::new(20, 20);
    canvas.fill_disk(0, 0, 5, 3);

    assert_eq!(canvas.get(0, 0), Some(3));
    assert_eq!(canvas.get(5, 0), Some(3));
    assert_eq!(canvas.get(4, 4), Some(0));
    assert_eq!(canvas.get(6, 0), Some(0));
}

#[test]
fn test_later_paint_wins() {
    let mut canvas = Canvas::new(40, 40);
    canvas.fill_disk(20, 20, 10, 100);
    canvas.fill_annulus(20, 20, 4, 6, 200);

    assert_eq!(canvas.get(20, 20), Some(100));
    assert_eq!(canvas.get(25, 20), Some(200));
    assert_eq!(canvas.get(28, 20), Some(100));
}

#[test]
fn test_inverted_annulus_draws_nothing() {
    let mut canvas = Canvas::new(30, 30);
    canvas.fill_annulus(15, 15, 9, 4, 1);

    assert!(canvas.pixels().iter().all(|&v| v == 0));
}

#[test]
fn test_composite_skips_zero_pixels() {
    let mut canvas = Canvas::new(30, 30);
    canvas.fill_annulus(15, 15, 0, 20, 7);

    let disc = Texture::uniform(8, 4, 1.0).project_disc(4);
    canvas.composite(15, 15, &disc);

    assert_eq!(canvas.get(15, 15), Some(u16::MAX));
    assert_eq!(canvas.get(19, 15), Some(u16::MAX));
    // Patch corner lies outside the disc and stays transparent.
    assert_eq!(canvas.get(11, 11), Some(7));
    assert_eq!(canvas.get(25, 25), Some(7));
}

#[test]
fn test_composite_clips_at_edges() {
    let mut canvas = Canvas::new(10, 10);
    let disc = Texture::uniform(8, 4, 0.5).project_disc(6);

    canvas.composite(0, 9, &disc);
    canvas.composite(-100, -100, &disc);

    assert_ne!(canvas.get(0, 9), Some(0));
    assert_eq!(canvas.get(9, 0), Some(0));
}

#[test]
fn test_get_outside_bounds() {
    let canvas = Canvas::new(4, 3);
    assert_eq!(canvas.get(3, 2), Some(0));
    assert_eq!(canvas.get(4, 0), None);
    assert_eq!(canvas.get(0, 3), None);
}
