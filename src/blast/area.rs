use glam::Vec3;

use crate::core::mesh::Triangle;

/// Area of one triangle as seen from `viewpoint`, or zero if it faces away.
///
/// The normal is `(P3 - P2) x (P1 - P2)`. The triangle counts when that normal
/// points back toward the viewpoint, measured against the ray to `P2`. This is
/// a back-face test only; nothing checks whether another surface occludes it.
pub fn triangle_exposure([p1, p2, p3]: Triangle, viewpoint: Vec3) -> f32 {
    let normal = (p3 - p2).cross(p1 - p2);
    let doubled_area = normal.length();
    if doubled_area == 0.0 || !doubled_area.is_finite() {
        return 0.0;
    }

    if normal.dot(p2 - viewpoint) < 0.0 {
        0.5 * doubled_area
    } else {
        0.0
    }
}

/// Total area of the triangles facing `viewpoint`, in the triangles' units squared.
pub fn exposed_area<I>(triangles: I, viewpoint: Vec3) -> f32
where
    I: IntoIterator<Item = Triangle>,
{
    triangles
        .into_iter()
        .map(|tri| triangle_exposure(tri, viewpoint))
        .sum()
}
