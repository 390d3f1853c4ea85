//! Stage one of capture: rasterize a `VisualDescriptor` into an RGBA
//! overlay image. Allowed to fail independently of the compositing stage;
//! the compositor falls back to the bare frame when it does.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;

use crate::error::{CompassError, Result};
use crate::face::VisualDescriptor;

const RING_COLOR: Rgba<u8> = Rgba([59, 130, 246, 255]);
const INNER_RING_COLOR: Rgba<u8> = Rgba([229, 231, 235, 220]);
const TICK_COLOR: Rgba<u8> = Rgba([148, 163, 184, 255]);
const TICK_EMPHASIS_COLOR: Rgba<u8> = Rgba([30, 64, 175, 255]);
const NEEDLE_COLOR: Rgba<u8> = Rgba([239, 68, 68, 255]);
const HUB_COLOR: Rgba<u8> = Rgba([30, 64, 175, 255]);

const RING_STROKE: i32 = 4;
const MIN_SIDE: u32 = 16;

/// Unit direction on screen for a compass angle (0° = up, clockwise).
fn direction(angle_degrees: f32) -> (f32, f32) {
    let rad = angle_degrees.to_radians();
    (rad.sin(), -rad.cos())
}

/// Rasterize a face descriptor into a square transparent overlay of the
/// given side length.
pub fn rasterize_overlay(descriptor: &VisualDescriptor, side: u32) -> Result<RgbaImage> {
    if side < MIN_SIDE {
        return Err(CompassError::Encode(format!(
            "overlay side {} below minimum {}",
            side, MIN_SIDE
        )));
    }

    let mut overlay = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 0]));
    let center = side as f32 / 2.0;
    let ci = center as i32;
    let radius = (side as i32 / 2) - RING_STROKE;

    for offset in 0..RING_STROKE {
        draw_hollow_circle_mut(&mut overlay, (ci, ci), radius - offset, RING_COLOR);
    }
    draw_hollow_circle_mut(
        &mut overlay,
        (ci, ci),
        radius - RING_STROKE - 4,
        INNER_RING_COLOR,
    );

    let tick_outer = radius as f32 - 6.0;
    for tick in &descriptor.ticks {
        let (dx, dy) = direction(descriptor.rotation_degrees + tick.angle_degrees);
        let (color, half_width) = if tick.emphasized {
            (TICK_EMPHASIS_COLOR, 1)
        } else {
            (TICK_COLOR, 0)
        };
        // Thickness via parallel lines offset along the perpendicular
        let (px, py) = (-dy, dx);
        for w in -half_width..=half_width {
            let (ox, oy) = (px * w as f32, py * w as f32);
            draw_line_segment_mut(
                &mut overlay,
                (center + ox, center + oy),
                (center + dx * tick_outer + ox, center + dy * tick_outer + oy),
                color,
            );
        }
    }

    if let Some(needle_degrees) = descriptor.needle_degrees {
        draw_needle(&mut overlay, center, radius as f32, needle_degrees);
    }

    Ok(overlay)
}

/// Diamond needle pointing at `angle_degrees`, with a hub dot at center.
fn draw_needle(overlay: &mut RgbaImage, center: f32, radius: f32, angle_degrees: f32) {
    let (dx, dy) = direction(angle_degrees);
    let (px, py) = (-dy, dx);

    let tip_len = radius - 10.0;
    let tail_len = radius * 0.12;
    let half_width = (radius * 0.06).max(2.0);

    let at = |along: f32, across: f32| {
        Point::new(
            (center + dx * along + px * across).round() as i32,
            (center + dy * along + py * across).round() as i32,
        )
    };
    let polygon = [
        at(tip_len, 0.0),
        at(0.0, half_width),
        at(-tail_len, 0.0),
        at(0.0, -half_width),
    ];
    // draw_polygon_mut panics when consecutive points coincide; the
    // MIN_SIDE guard keeps the needle non-degenerate.
    draw_polygon_mut(overlay, &polygon, NEEDLE_COLOR);
    draw_filled_circle_mut(overlay, (center as i32, center as i32), 4, HUB_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::Heading;
    use crate::config::Mode;
    use crate::face::render;

    fn non_transparent_pixels(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn test_rasterizes_every_mode() {
        for mode in [Mode::Normal, Mode::Sixteen, Mode::ThirtyTwo, Mode::Chakra] {
            let desc = render(mode, Heading::Known(135.0));
            let overlay = rasterize_overlay(&desc, 200).unwrap();
            assert_eq!(overlay.dimensions(), (200, 200));
            assert!(
                non_transparent_pixels(&overlay) > 100,
                "{:?} produced an empty overlay",
                mode
            );
        }
    }

    #[test]
    fn test_rejects_degenerate_side() {
        let desc = render(Mode::Normal, Heading::Known(0.0));
        assert!(rasterize_overlay(&desc, 0).is_err());
        assert!(rasterize_overlay(&desc, MIN_SIDE - 1).is_err());
    }

    #[test]
    fn test_unknown_heading_still_draws_geometry() {
        let desc = render(Mode::ThirtyTwo, Heading::Unknown);
        let overlay = rasterize_overlay(&desc, 180).unwrap();
        assert!(non_transparent_pixels(&overlay) > 100);
    }

    #[test]
    fn test_rotation_moves_tick_pixels() {
        let a = rasterize_overlay(&render(Mode::Sixteen, Heading::Known(0.0)), 160).unwrap();
        let b = rasterize_overlay(&render(Mode::Sixteen, Heading::Known(7.0)), 160).unwrap();
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_direction_convention() {
        let (dx, dy) = direction(0.0);
        assert!(dx.abs() < 1e-6 && dy < 0.0, "north must point up");
        let (dx, dy) = direction(90.0);
        assert!(dx > 0.0 && dy.abs() < 1e-6, "east must point right");
    }
}
