use vectorf::core::prelude::*;
use vectorf::util::log::setup_log;

fn main() -> Result<()> {
    setup_log()?;
    run_showcase()
}

fn run_showcase() -> Result<()> {
    let path = [
        Vector2f::ZERO,
        Vector2f::new(3.0, 4.0),
        Vector2f::new(3.0, -1.0),
        Vector2f::new(-2.5, -1.0),
    ];
    let path_length: f32 = path
        .iter()
        .tuple_windows()
        .map(|(a, b)| math::distance(*a, *b))
        .sum();
    info!(
        "path {:?}: length {path_length}",
        path.iter().map(ToString::to_string).collect_vec()
    );

    let velocity = Vector2f::new(3.0, 4.0);
    info!(
        "velocity {velocity}: length {}, direction {:.3}",
        velocity.length(),
        velocity.normalized()
    );
    info!("velocity limited to 2.5: {}", velocity.limited(2.5));
    info!(
        "zero normalized: {}, unsafe: {}",
        Vector2f::ZERO.normalized(),
        Vector2f::ZERO.normalized_unsafe()
    );

    let bounced = math::reflect(Vector2f::new(1.0, -1.0), Vector2f::AXIS_Y);
    info!("(1, -1) bounced off the floor: {bounced}");
    info!(
        "perpendicular to {}: {}",
        Vector2f::AXIS_X,
        math::perpendicular(Vector2f::AXIS_X)
    );

    let bounds = (Vector2f::ZERO, Vector2f::splat(3.0));
    let clamped = math::clamp(Vector2f::new(5.0, -5.0), bounds.0, bounds.1);
    info!("(5, -5) clamped to {} .. {}: {clamped}", bounds.0, bounds.1);
    let footprint = Vector2f::new(clamped.x, 2.0);
    info!(
        "{footprint} on the ground plane: {}, raised: {}",
        footprint.x0y(),
        footprint.xy0()
    );

    let grid_cell: i32 = math::floor_checked(math::to_degrees(PI_HALF) / 15.0)
        .context("grid cell out of range")?;
    info!("{:.2} degrees lands in 15-degree cell {grid_cell}", math::to_degrees(PI_HALF));
    info!(
        "snapped: {} / {} / {}",
        math::floor_to::<f32>(37.0, 10.0),
        math::round_to::<f32>(37.0, 10.0),
        math::ceiling_to::<f32>(37.0, 10.0)
    );
    Ok(())
}
