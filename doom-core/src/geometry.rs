pub type Vertex = [f32; 3];

/// Corners of an equilateral triangle with side `edge`, centered on the
/// origin in the z = 0 plane: lower left, lower right, apex.
#[must_use]
#[inline]
pub fn equilateral_triangle(edge: f32) -> [Vertex; 3] {
    let height = edge * 3.0_f32.sqrt() / 2.0;
    let half = edge / 2.0;

    [
        [-half, -height / 3.0, 0.0],
        [half, -height / 3.0, 0.0],
        [0.0, height * 2.0 / 3.0, 0.0],
    ]
}
