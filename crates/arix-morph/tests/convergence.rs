use arix_common::{FrameTime, StateSignal};
use arix_config::schema::OvershootPolicy;
use arix_config::ArixConfig;
use arix_morph::point_engine::{PointFrame, PointProgramBinding};
use arix_morph::{MorphScene, MorphState};

const DT: f32 = 1.0 / 60.0;

struct Sink;

impl PointProgramBinding for Sink {
    fn write_frame(&mut self, _frame: PointFrame) {}
}

#[test]
fn five_seconds_at_sixty_hertz_nearly_assembles() {
    let mut state = MorphState::new(StateSignal::Scattered, 2.0, OvershootPolicy::ClampStep);
    state.set_target(StateSignal::Assembled);
    for _ in 0..(5 * 60) {
        state.step(DT);
    }
    assert!(state.progress() > 0.95, "progress {}", state.progress());
    assert!(state.progress() <= 1.0);
}

#[test]
fn convergence_is_frame_rate_independent() {
    let run = |hz: u32| {
        let mut s = MorphState::new(StateSignal::Scattered, 2.0, OvershootPolicy::ClampStep);
        s.set_target(StateSignal::Assembled);
        for _ in 0..hz {
            s.step(1.0 / hz as f32);
        }
        s.progress()
    };
    // One second at 30, 60, and 144 Hz all land near 1 - e^-2.
    let expected = 1.0 - (-2.0f32).exp();
    for hz in [30, 60, 144] {
        assert!((run(hz) - expected).abs() < 0.03, "{hz} Hz: {}", run(hz));
    }
}

#[test]
fn hitch_frame_policy() {
    let mut clamped = MorphState::new(StateSignal::Scattered, 2.5, OvershootPolicy::ClampStep);
    clamped.set_target(StateSignal::Assembled);
    assert!((clamped.step(0.5) - 1.0).abs() < 1e-6);

    let mut raw = MorphState::new(StateSignal::Scattered, 2.5, OvershootPolicy::Allow);
    raw.set_target(StateSignal::Assembled);
    // 0 + (1 - 0) · 1.25
    assert!((raw.step(0.5) - 1.25).abs() < 1e-6);
}

#[test]
fn scene_round_trip_returns_to_scatter() {
    let mut config = ArixConfig::default();
    config.foliage.count = 128;
    config.morph.seed = Some(4);
    let mut scene: MorphScene<Sink> = MorphScene::from_config(&config);
    scene.foliage_mut().mount(Sink);

    let mut elapsed = 0.0;
    let mut run = |scene: &mut MorphScene<Sink>, signal: StateSignal, frames: u32| {
        for _ in 0..frames {
            elapsed += DT;
            scene.tick(
                signal,
                FrameTime {
                    delta: DT,
                    elapsed,
                },
            );
        }
    };

    run(&mut scene, StateSignal::Assembled, 5 * 60);
    assert!(scene.foliage_progress() > 0.95);
    for layer in scene.ornaments() {
        assert!(scene.progress(layer.id()).unwrap() > 0.95);
    }

    run(&mut scene, StateSignal::Scattered, 5 * 60);
    assert!(scene.foliage_progress() < 0.05);
    assert!(scene.foliage().elapsed() > 9.9);
}
