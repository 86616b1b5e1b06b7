use approx::assert_relative_eq;
use blastwave::{
    BlastEngine, BlastError, Charge, ExplosionConfig, SceneWorld, SurfaceBody, SurfaceId,
    SurfaceLocation, SurfaceQuery, TargetSurface, Transform, TriangleMesh, Vec3,
};

/// 2 ft x 2 ft wall panel facing -X in local space.
fn panel() -> TriangleMesh {
    let vertices = vec![
        Vec3::new(0.0, -1.0, -1.0),
        Vec3::new(0.0, 1.0, -1.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(0.0, -1.0, 1.0),
    ];
    TriangleMesh::builder(vertices, vec![[0, 2, 1], [0, 3, 2]])
        .build()
        .unwrap()
}

fn wall(location: SurfaceLocation, x: f32) -> TargetSurface {
    TargetSurface::new(location, Transform::from_position(Vec3::new(x, 0.0, 0.0)))
        .with_body(SurfaceBody::kinematic(80.0))
        .with_mesh(panel())
}

#[test]
fn added_surfaces_get_their_ids() {
    let mut world = SceneWorld::default();
    let id = world.add_surface(wall(SurfaceLocation::Exterior, 6.0));
    assert_eq!(world.surface(id).map(|s| s.id), Some(id));
    assert_eq!(world.len(), 1);
}

#[test]
fn grid_query_matches_brute_force() {
    let mut world = SceneWorld::new(3.0);
    let mut all = Vec::new();
    for i in 0..40 {
        let x = -30.0 + i as f32 * 1.7;
        let id = world.add_surface(wall(SurfaceLocation::Exterior, x));
        let mut copy = wall(SurfaceLocation::Exterior, x);
        copy.id = id;
        all.push(copy);
    }

    for radius in [1.0, 5.0, 13.0, 40.0] {
        let mut from_grid: Vec<SurfaceId> = world
            .surfaces_within(Vec3::new(2.0, 0.5, 0.0), radius)
            .iter()
            .map(|s| s.id)
            .collect();
        let mut from_list: Vec<SurfaceId> = all
            .surfaces_within(Vec3::new(2.0, 0.5, 0.0), radius)
            .iter()
            .map(|s| s.id)
            .collect();
        from_grid.sort();
        from_list.sort();
        assert_eq!(from_grid, from_list, "radius {radius}");
    }
}

#[test]
fn detonation_pushes_bodies_in_the_world() {
    let mut world = SceneWorld::default();
    let near = world.add_surface(wall(SurfaceLocation::Exterior, 8.0));
    let far = world.add_surface(wall(SurfaceLocation::Exterior, 60.0));
    let inside = world.add_surface(wall(SurfaceLocation::Interior, 9.0));

    let result = world
        .detonate(
            &BlastEngine::new(),
            Charge::tnt(Vec3::ZERO, 4.41).unwrap(),
            ExplosionConfig::default(),
        )
        .unwrap();

    assert_eq!(result.affected_count, 1);

    let body = world.surface(near).and_then(|s| s.body.as_ref()).unwrap();
    assert!(!body.is_kinematic);
    assert!(body.accumulated_force.x > 0.0);
    assert_relative_eq!(
        body.accumulated_force.length(),
        result.impacts[0].force.length(),
        max_relative = 1e-6
    );

    for untouched in [far, inside] {
        let body = world.surface(untouched).and_then(|s| s.body.as_ref()).unwrap();
        assert!(body.is_kinematic);
        assert_eq!(body.accumulated_force, Vec3::ZERO);
    }
}

#[test]
fn removed_surfaces_drop_out_of_queries() {
    let mut world = SceneWorld::default();
    let id = world.add_surface(wall(SurfaceLocation::Exterior, 4.0));
    assert_eq!(world.surfaces_within(Vec3::ZERO, 10.0).len(), 1);

    assert!(world.remove_surface(id).is_some());
    assert!(world.surfaces_within(Vec3::ZERO, 10.0).is_empty());
    assert_eq!(
        world.push_surface(id, Vec3::X),
        Err(BlastError::UnknownSurface(id))
    );
}

#[test]
fn moved_surfaces_are_found_after_reindexing() {
    let mut world = SceneWorld::default();
    let id = world.add_surface(wall(SurfaceLocation::Exterior, 100.0));
    assert!(world.surfaces_within(Vec3::ZERO, 10.0).is_empty());

    if let Some(surface) = world.surface_mut(id) {
        surface.transform.position = Vec3::new(5.0, 0.0, 0.0);
    }
    world.rebuild_index();
    assert_eq!(world.surfaces_within(Vec3::ZERO, 10.0).len(), 1);
}

#[test]
fn wide_blast_over_sparse_world_matches_brute_force() {
    let mut world = SceneWorld::default();
    let mut all = Vec::new();
    for x in [10.0, 1500.0, 2600.0] {
        let id = world.add_surface(wall(SurfaceLocation::Exterior, x));
        let mut copy = wall(SurfaceLocation::Exterior, x);
        copy.id = id;
        all.push(copy);
    }

    for radius in [514.0, 2429.0, 1.0e5] {
        let mut from_grid: Vec<SurfaceId> = world
            .surfaces_within(Vec3::ZERO, radius)
            .iter()
            .map(|s| s.id)
            .collect();
        let mut from_list: Vec<SurfaceId> = all
            .surfaces_within(Vec3::ZERO, radius)
            .iter()
            .map(|s| s.id)
            .collect();
        from_grid.sort();
        from_list.sort();
        assert_eq!(from_grid, from_list, "radius {radius}");
    }

    let result = world
        .detonate(
            &BlastEngine::new(),
            Charge::tnt(Vec3::ZERO, 1000.0).unwrap(),
            ExplosionConfig::new(SurfaceLocation::Exterior, 0.1),
        )
        .unwrap();
    assert_eq!(result.effective_radius, 2429);
    assert_eq!(result.affected_count, 2);
}
