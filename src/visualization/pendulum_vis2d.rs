use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::clock::FixedStepClock;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::simulation::tail::Tail;

/// Marks the bob sprite
#[derive(Component)]
struct MassMarker;

/// Component tagging each trail dot with its position in the tail, oldest = 0
#[derive(Component)]
struct TrailDot(pub usize);

#[derive(Resource)]
struct Trail(Tail);

#[derive(Resource)]
struct StepClock(FixedStepClock);

const WINDOW_TITLE: &str = "Spring Forces";

const ANCHOR_RADIUS: f32 = 3.0;
const MASS_RADIUS: f32 = 20.0;
const TRAIL_RADIUS: f32 = 2.0;

const BACKGROUND: Color = Color::BLACK;
const ANCHOR_COLOR: Color = Color::WHITE;
const MASS_COLOR: Color = Color::srgb(245.0 / 255.0, 5.0 / 255.0, 150.0 / 255.0);
const TRAIL_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);

/// Map a simulation point (window pixels, origin top-left, y down) to Bevy
/// world space (origin at the window centre, y up)
pub fn to_world(p: NVec2, window: [f32; 2]) -> Vec2 {
    Vec2::new(
        p.x as f32 - 0.5 * window[0],
        0.5 * window[1] - p.y as f32,
    )
}

/// Open the live viewer and run until the window is closed
pub fn run_2d(scenario: Scenario) -> AppExit {
    let [w, h] = scenario.live.window;
    let trail = Trail(Tail::new(scenario.live.tail));
    let clock = StepClock(FixedStepClock::new(
        scenario.live.steps_per_second,
        scenario.live.max_steps_per_frame,
    ));

    App::new()
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(trail)
        .insert_resource(clock)
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: WindowResolution::new(w, h),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_spring_system).chain())
        .run()
}

fn setup_scene_system(mut commands: Commands, scenario: Res<Scenario>, trail: Res<Trail>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!(
        "live viewer: anchor at ({}, {}), dt = {}, trail of {}",
        scenario.parameters.anchor.x,
        scenario.parameters.anchor.y,
        scenario.parameters.dt,
        trail.0.cap()
    );

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let window = scenario.live.window;
    let anchor = to_world(scenario.parameters.anchor, window);
    let mass = to_world(scenario.pendulum.state.x, window);

    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(ANCHOR_RADIUS))),
        material: materials.add(ColorMaterial::from(ANCHOR_COLOR)),
        transform: Transform::from_xyz(anchor.x, anchor.y, 1.0),
        ..Default::default()
    });

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(MASS_RADIUS))),
            material: materials.add(ColorMaterial::from(MASS_COLOR)),
            transform: Transform::from_xyz(mass.x, mass.y, 2.0),
            ..Default::default()
        },
        MassMarker,
    ));

    // One dot per tail slot, hidden until the tail reaches it
    let dot_mesh = Mesh2dHandle(meshes.add(Circle::new(TRAIL_RADIUS)));
    let dot_material = materials.add(ColorMaterial::from(TRAIL_COLOR));
    for i in 0..trail.0.cap() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: dot_mesh.clone(),
                material: dot_material.clone(),
                transform: Transform::from_xyz(mass.x, mass.y, 0.0),
                visibility: Visibility::Hidden,
                ..Default::default()
            },
            TrailDot(i),
        ));
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>, mut clock: ResMut<StepClock>, mut trail: ResMut<Trail>, mut halted: Local<bool>, mut exit: EventWriter<AppExit>) {
    if *halted {
        return;
    }

    let due = clock.0.tick(time.delta_seconds_f64());
    if let Err(e) = scenario.advance_live(&mut trail.0, due) {
        error!("simulation stopped at t = {:.3}: {e}", scenario.pendulum.t);
        *halted = true;
        exit.send(AppExit::error());
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, trail: Res<Trail>, mut mass_query: Query<&mut Transform, (With<MassMarker>, Without<TrailDot>)>, mut dot_query: Query<(&TrailDot, &mut Transform, &mut Visibility), Without<MassMarker>>) {
    let window = scenario.live.window;

    let mass = to_world(scenario.pendulum.state.x, window);
    for mut transform in &mut mass_query {
        transform.translation.x = mass.x;
        transform.translation.y = mass.y;
    }

    let points: Vec<&NVec2> = trail.0.iter().collect();
    for (TrailDot(i), mut transform, mut visibility) in &mut dot_query {
        match points.get(*i) {
            Some(p) => {
                let p = to_world(**p, window);
                transform.translation.x = p.x;
                transform.translation.y = p.y;
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn draw_spring_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let window = scenario.live.window;
    let anchor = to_world(scenario.parameters.anchor, window);
    let mass = to_world(scenario.pendulum.state.x, window);
    gizmos.line_2d(anchor, mass, MASS_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_corners_map_to_world_corners() {
        let window = [800.0, 600.0];
        assert_eq!(to_world(NVec2::new(0.0, 0.0), window), Vec2::new(-400.0, 300.0));
        assert_eq!(to_world(NVec2::new(800.0, 600.0), window), Vec2::new(400.0, -300.0));
        assert_eq!(to_world(NVec2::new(400.0, 300.0), window), Vec2::ZERO);
    }
}
