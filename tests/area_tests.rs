use approx::assert_relative_eq;
use blastwave::{exposed_area, Transform, TriangleMesh, Vec3};

/// Unit cube centred on the origin, counter-clockwise outward faces.
fn cube() -> TriangleMesh {
    let h = 0.5;
    let vertices = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    let indices = vec![
        [0, 3, 2],
        [0, 2, 1],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];
    TriangleMesh::builder(vertices, indices).build().unwrap()
}

fn inverted_cube() -> TriangleMesh {
    let mesh = cube();
    TriangleMesh::builder(mesh.vertices().to_vec(), mesh.indices().to_vec())
        .flip_winding()
        .build()
        .unwrap()
}

#[test]
fn single_triangle_faces_or_hides() {
    let tri = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    // Normal is +Z with this winding.
    assert_eq!(exposed_area([tri], Vec3::new(0.5, 0.5, 10.0)), 2.0);
    assert_eq!(exposed_area([tri], Vec3::new(0.5, 0.5, -10.0)), 0.0);
}

#[test]
fn cube_seen_from_inside_depends_on_winding() {
    let outward = cube();
    let inward = inverted_cube();
    assert_relative_eq!(outward.surface_area(), 6.0, epsilon = 1e-5);
    assert_eq!(exposed_area(outward.triangles(), Vec3::ZERO), 0.0);
    assert_relative_eq!(exposed_area(inward.triangles(), Vec3::ZERO), 6.0, epsilon = 1e-5);
}

#[test]
fn opposite_windings_partition_the_surface() {
    let outward = cube();
    let inward = inverted_cube();
    for viewpoint in [
        Vec3::new(10.0, 7.0, 3.0),
        Vec3::new(0.2, 0.1, 0.3),
        Vec3::new(-4.0, 0.25, 0.1),
    ] {
        let seen = exposed_area(outward.triangles(), viewpoint);
        let hidden = exposed_area(inward.triangles(), viewpoint);
        assert_relative_eq!(seen + hidden, outward.surface_area(), epsilon = 1e-4);
    }
}

#[test]
fn off_axis_cube_exposes_half_its_area() {
    let mesh = cube();
    let seen = exposed_area(mesh.triangles(), Vec3::new(10.0, 7.0, 3.0));
    assert_relative_eq!(seen, 0.5 * mesh.surface_area(), epsilon = 1e-5);
}

#[test]
fn face_on_cube_exposes_one_face() {
    let mesh = cube();
    let seen = exposed_area(mesh.triangles(), Vec3::new(10.0, 0.1, 0.2));
    assert_relative_eq!(seen, 1.0, epsilon = 1e-5);
}

#[test]
fn world_transform_moves_the_visibility_test() {
    let mesh = cube();
    let transform = Transform::from_position(Vec3::new(20.0, 0.0, 0.0));
    // From the origin only the -X face of the moved cube faces the viewer.
    let seen = exposed_area(mesh.world_triangles(&transform), Vec3::ZERO);
    assert_relative_eq!(seen, 1.0, epsilon = 1e-4);
    // In local space the origin is inside the cube and sees nothing.
    assert_eq!(exposed_area(mesh.triangles(), Vec3::ZERO), 0.0);
}

#[test]
fn scaled_mesh_scales_area() {
    let mesh = cube();
    let transform = Transform {
        scale: Vec3::splat(2.0),
        ..Transform::default()
    };
    let seen = exposed_area(mesh.world_triangles(&transform), Vec3::new(30.0, 20.0, 10.0));
    assert_relative_eq!(seen, 12.0, epsilon = 1e-3);
}
