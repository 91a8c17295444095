use moodcolor::{Anchor, AnchorRegistry, ColorSample, Interpolator, Point, Rasterizer};
use palette::Srgb;

fn interpolator(anchors: &[(&str, [f64; 2], [u8; 3])]) -> Interpolator {
    let anchors = anchors
        .iter()
        .map(|&(name, [x, y], [r, g, b])| Anchor::new(name, Point::new(x, y), Srgb::new(r, g, b)))
        .collect();
    Interpolator::new(AnchorRegistry::new(anchors).unwrap())
}

fn grid(min: f64, max: f64, n: usize) -> impl Iterator<Item = Point> {
    let at = move |i: usize| min + (max - min) * i as f64 / (n - 1) as f64;
    (0..n).flat_map(move |i| (0..n).map(move |j| Point::new(at(i), at(j))))
}

fn in_display_range(c: ColorSample) -> bool {
    [c.r, c.g, c.b].iter().all(|v| (0.0..=255.0).contains(v))
}

const CORNERS: [(&str, [f64; 2], [u8; 3]); 4] = [
    ("ne", [1.0, 1.0], [255, 0, 0]),
    ("nw", [-1.0, 1.0], [0, 255, 0]),
    ("sw", [-1.0, -1.0], [0, 0, 255]),
    ("se", [1.0, -1.0], [255, 255, 0]),
];

#[test]
fn red_and_blue_meet_in_magenta() {
    let interpolator = interpolator(&[
        ("a", [1.0, 0.0], [255, 0, 0]),
        ("b", [-1.0, 0.0], [0, 0, 255]),
    ]);
    let color = interpolator.color_at(Point::ORIGIN);
    assert!(color.distance(&ColorSample::new(255.0, 0.0, 255.0)) < 1e-9);
    assert_eq!(interpolator.rgb_at(Point::ORIGIN), Srgb::new(255, 0, 255));
}

#[test]
fn output_stays_in_display_range_even_when_extrapolating() {
    for interpolator in [Interpolator::default(), interpolator(&CORNERS)] {
        for point in grid(-2.0, 2.0, 81) {
            let color = interpolator.color_at(point);
            assert!(in_display_range(color), "{point:?} -> {color:?}");
        }
    }
}

#[test]
fn far_away_points_still_blend() {
    let interpolator = Interpolator::default();
    let color = interpolator.color_at(Point::new(1e6, -1e6));
    assert!(in_display_range(color));
    assert!(color.max() > 0.0);
}

#[test]
fn each_anchor_dominates_at_its_own_position() {
    let interpolator = interpolator(&CORNERS);
    let anchors = interpolator.anchors().anchors();

    for (i, anchor) in anchors.iter().enumerate() {
        let weights = interpolator.weights(anchor.position);
        let others: f64 = weights.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, w)| w).sum();
        assert!(weights[i] > others, "{}: {weights:?}", anchor.name);

        let blend = interpolator.blend(anchor.position);
        let own = ColorSample::from(anchor.color);
        for other in anchors.iter().filter(|a| a.name != anchor.name) {
            assert!(blend.distance(&own) < blend.distance(&ColorSample::from(other.color)));
        }
    }
}

#[test]
fn emotion_anchors_carry_the_largest_weight_on_themselves() {
    let interpolator = Interpolator::default();
    for (i, anchor) in interpolator.anchors().anchors().iter().enumerate() {
        let weights = interpolator.weights(anchor.position);
        let top = weights
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(j, _)| j);
        assert_eq!(top, Some(i), "{}", anchor.name);
    }
}

#[test]
fn nearby_points_get_nearby_colors() {
    let interpolator = Interpolator::default();
    let delta = 1e-5;
    for point in grid(-1.5, 1.5, 61) {
        let here = interpolator.color_at(point);
        for moved in [
            Point::new(point.x + delta, point.y),
            Point::new(point.x, point.y + delta),
        ] {
            let there = interpolator.color_at(moved);
            assert!(here.distance(&there) < 1.0, "{point:?}: {here:?} vs {there:?}");
        }
    }
}

#[test]
fn anchor_order_does_not_matter() {
    let forward = Interpolator::default();
    let mut reversed = forward.anchors().anchors().to_vec();
    reversed.reverse();
    let reversed = Interpolator::new(AnchorRegistry::new(reversed).unwrap());

    for point in grid(-1.2, 1.2, 25) {
        let a = forward.color_at(point);
        let b = reversed.color_at(point);
        assert!(a.distance(&b) < 1e-9, "{point:?}");
    }
}

#[test]
fn mirrored_anchors_give_balanced_colors_on_the_mirror_line() {
    let interpolator = interpolator(&[
        ("left", [-0.5, 0.0], [255, 0, 0]),
        ("right", [0.5, 0.0], [0, 0, 255]),
        ("top", [0.0, 0.8], [0, 200, 0]),
    ]);
    for y in [-1.0, -0.3, 0.0, 0.4, 0.8, 1.0] {
        let color = interpolator.color_at(Point::new(0.0, y));
        assert!((color.r - color.b).abs() < 1e-9, "y = {y}: {color:?}");
    }
}

#[test]
fn rendered_map_covers_the_canvas() {
    let interpolator = Interpolator::default();
    let canvas = Rasterizer::new(&interpolator).render(400, 400).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (400, 400));

    for (x, y, pixel) in canvas.as_image().enumerate_pixels() {
        assert_ne!(pixel.0, [0, 0, 0], "unfilled pixel ({x}, {y})");
    }

    // pixel (200, 200) belongs to the block sampled at (202, 202)
    let sampled = interpolator.rgb_at(canvas.point_at(202, 202));
    assert_eq!(canvas.pixel(200, 200), Some(sampled));

    let center = interpolator.rgb_at(Point::ORIGIN);
    let got = canvas.pixel(200, 200).unwrap();
    let drift = ColorSample::from(got).distance(&ColorSample::from(center));
    assert!(drift < 30.0, "{got:?} vs {center:?}");
}

#[test]
fn unit_step_center_matches_origin_exactly() {
    let interpolator = Interpolator::default();
    let canvas = Rasterizer::new(&interpolator)
        .with_step(1)
        .unwrap()
        .render(400, 400)
        .unwrap();
    assert_eq!(canvas.pixel(200, 200), Some(interpolator.rgb_at(Point::ORIGIN)));
}

#[test]
fn anchor_pixels_lean_towards_their_anchor() {
    let interpolator = interpolator(&[
        ("red", [0.5, 0.5], [255, 0, 0]),
        ("green", [-0.5, 0.5], [0, 255, 0]),
        ("blue", [0.0, -0.5], [0, 0, 255]),
    ]);
    let canvas = Rasterizer::new(&interpolator).render(400, 400).unwrap();

    for (channel, anchor) in interpolator.anchors().anchors().iter().enumerate() {
        let (x, y) = canvas.locate(anchor.position);
        let pixel = canvas.pixel(x as u32, y as u32).unwrap();
        let channels = [pixel.red, pixel.green, pixel.blue];
        assert_eq!(channels[channel], 255, "{}: {pixel:?}", anchor.name);
        for (other, value) in channels.iter().enumerate() {
            if other != channel {
                assert!(*value < 60, "{}: {pixel:?}", anchor.name);
            }
        }
    }
}

#[test]
fn ragged_canvas_keeps_an_unfilled_border() {
    let interpolator = Interpolator::default();
    let canvas = Rasterizer::new(&interpolator).render(403, 403).unwrap();
    for i in 0..403 {
        for edge in 400..403 {
            assert_eq!(canvas.pixel(edge, i), Some(Srgb::new(0, 0, 0)));
            assert_eq!(canvas.pixel(i, edge), Some(Srgb::new(0, 0, 0)));
        }
    }
    assert_ne!(canvas.pixel(399, 399), Some(Srgb::new(0, 0, 0)));
}

#[test]
fn picking_reads_back_the_rendered_color() {
    let interpolator = Interpolator::default();
    let canvas = Rasterizer::new(&interpolator).render(400, 400).unwrap();

    let point = Point::from_unit(0.8, 0.75);
    let picked = canvas.pick(point).unwrap();
    let direct = interpolator.rgb_at(point);
    let drift = ColorSample::from(picked).distance(&ColorSample::from(direct));
    assert!(drift < 30.0, "{picked:?} vs {direct:?}");

    assert_eq!(canvas.pick(Point::new(1.0, 0.0)), None);
}
