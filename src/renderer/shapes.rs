//! Triangle-list generators for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

fn push_tri(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

fn on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Filled circle as a fan of `segments` triangles
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    let segments = segments.max(3);
    for i in 0..segments {
        let t1 = i as f32 / segments as f32 * TAU;
        let t2 = (i + 1) as f32 / segments as f32 * TAU;
        push_tri(
            out,
            center,
            on_circle(center, radius, t1),
            on_circle(center, radius, t2),
            color,
        );
    }
}

/// Hollow ring between two radii
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    let segments = segments.max(3);
    for i in 0..segments {
        let t1 = i as f32 / segments as f32 * TAU;
        let t2 = (i + 1) as f32 / segments as f32 * TAU;

        let inner1 = on_circle(center, inner_radius, t1);
        let outer1 = on_circle(center, outer_radius, t1);
        let inner2 = on_circle(center, inner_radius, t2);
        let outer2 = on_circle(center, outer_radius, t2);

        push_tri(out, inner1, outer1, inner2, color);
        push_tri(out, inner2, outer1, outer2, color);
    }
}

/// Axis-aligned rectangle centered on `center`
pub fn quad(out: &mut Vec<Vertex>, center: Vec2, half: Vec2, color: [f32; 4]) {
    let tl = center - half;
    let br = center + half;
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);
    push_tri(out, tl, tr, bl, color);
    push_tri(out, bl, tr, br, color);
}

/// Upward-pointing ship: a nose triangle with two swept wings
pub fn ship(out: &mut Vec<Vertex>, center: Vec2, size: f32, color: [f32; 4]) {
    let h = size / 2.0;
    let nose = center + Vec2::new(0.0, -h);
    let left = center + Vec2::new(-h, h);
    let right = center + Vec2::new(h, h);
    let tail = center + Vec2::new(0.0, h * 0.4);
    push_tri(out, nose, left, tail, color);
    push_tri(out, nose, tail, right, color);
}

/// Downward-pointing arrowhead for enemies
pub fn invader(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    let top_left = center + Vec2::new(-radius, -radius * 0.7);
    let top_right = center + Vec2::new(radius, -radius * 0.7);
    let notch = center + Vec2::new(0.0, -radius * 0.2);
    let tip = center + Vec2::new(0.0, radius);
    push_tri(out, top_left, notch, tip, color);
    push_tri(out, notch, top_right, tip, color);
}

/// Diamond (rotated square) for pickups
pub fn diamond(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    let top = center + Vec2::new(0.0, -radius);
    let right = center + Vec2::new(radius, 0.0);
    let bottom = center + Vec2::new(0.0, radius);
    let left = center + Vec2::new(-radius, 0.0);
    push_tri(out, top, right, bottom, color);
    push_tri(out, bottom, left, top, color);
}
