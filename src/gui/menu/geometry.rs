use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Layout parameters for the wedge ring. Radii are in pixels, angles in
/// radians. Callers are expected to keep `outer_radius > inner_radius >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParams {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub rotation: f64,
    pub gap: f64,
}

/// One annulus sector of the ring, in coordinates relative to the ring center.
///
/// The outline runs outer-start -> outer arc -> outer-end -> radial edge ->
/// inner-end -> inner arc (reversed) -> inner-start -> close. `large_arc` is
/// set when the angular span exceeds half a turn, which an arc-flag path
/// encoding (SVG-style) needs to pick the correct sweep.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
    pub large_arc: bool,
    pub label_pos: Point,
}

impl Wedge {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid_angle(&self) -> f64 {
        self.start + self.span() / 2.0
    }

    /// Exact hit test against this sector, `p` relative to the ring center.
    /// Labels are painted on top of wedges but never take part in hit
    /// testing, so a click on a label lands on the wedge beneath it.
    pub fn contains(&self, p: Point, params: &RingParams) -> bool {
        let span = self.span();
        if span <= 0.0 {
            return false;
        }
        let dist = p.x.hypot(p.y);
        if dist < params.inner_radius || dist > params.outer_radius {
            return false;
        }
        let theta = p.y.atan2(p.x);
        (theta - self.start).rem_euclid(2.0 * PI) <= span
    }
}

pub fn polar(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// Divides the full circle evenly among `count` wedges.
///
/// Wedge `i` starts at `i * (2pi/count) + rotation + gap` and spans
/// `2pi/count - 2*gap`, i.e. the gap is applied symmetrically on both sides
/// of every wedge. The label anchor sits at the mid-angle, halfway between
/// the two radii. `count == 0` yields no wedges.
pub fn layout(params: &RingParams, count: usize) -> Vec<Wedge> {
    if count == 0 {
        return Vec::new();
    }

    let step = 2.0 * PI / count as f64;
    let label_radius = (params.inner_radius + params.outer_radius) / 2.0;

    (0..count)
        .map(|i| {
            let start = i as f64 * step + params.rotation + params.gap;
            let end = start + step - 2.0 * params.gap;
            let mid = start + (end - start) / 2.0;

            Wedge {
                index: i,
                start,
                end,
                outer_start: polar(params.outer_radius, start),
                outer_end: polar(params.outer_radius, end),
                inner_end: polar(params.inner_radius, end),
                inner_start: polar(params.inner_radius, start),
                large_arc: end - start > PI,
                label_pos: polar(label_radius, mid),
            }
        })
        .collect()
}
