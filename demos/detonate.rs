use blastwave::{
    config, BlastEngine, Charge, ExplosionConfig, Result, SceneWorld, SurfaceBody,
    SurfaceLocation, TargetSurface, Transform, TriangleMesh, Vec3,
};

fn main() -> Result<()> {
    let mut world = SceneWorld::default();

    let panel = TriangleMesh::builder(
        vec![
            Vec3::new(0.0, -1.5, -2.0),
            Vec3::new(0.0, 1.5, -2.0),
            Vec3::new(0.0, 1.5, 2.0),
            Vec3::new(0.0, -1.5, 2.0),
        ],
        vec![[0, 2, 1], [0, 3, 2]],
    )
    .build()?;

    for i in 0..6 {
        let x = 4.0 + i as f32 * 3.0;
        world.add_surface(
            TargetSurface::new(
                SurfaceLocation::Exterior,
                Transform::from_position(Vec3::new(x, 0.0, 0.0)),
            )
            .with_body(SurfaceBody::kinematic(120.0))
            .with_mesh(panel.clone()),
        );
    }

    // Usage: detonate [weight_lb] [minimum_psi]
    let mut args = std::env::args().skip(1);
    let weight = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .map_or(config::DEFAULT_EXPLOSIVE_WEIGHT, config::clamp_explosive_weight);
    let pressure = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(config::DEFAULT_MINIMUM_RELEVANT_PRESSURE);

    let charge = Charge::new(config::DEFAULT_CHARGE_TYPE, Vec3::ZERO, weight)?;
    let explosion = ExplosionConfig::new(SurfaceLocation::Exterior, pressure)
        .clamped_to_operator_range();
    let result = world.detonate(&BlastEngine::new(), charge, explosion)?;

    println!(
        "Effective radius: {} ft, surfaces affected: {}",
        result.effective_radius, result.affected_count
    );
    for impact in &result.impacts {
        println!(
            "  {:?}: {:.1} ft, {:.2} psi over {:.2} ft² -> {:.0} lbf",
            impact.surface,
            impact.distance,
            impact.overpressure,
            impact.exposed_area,
            impact.force.length()
        );
    }
    Ok(())
}
