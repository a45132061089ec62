//! Per-population progress integration.
//!
//! Each population carries one [`MorphState`]: a progress scalar pulled
//! toward the target of the shared [`StateSignal`] by a first-order filter,
//! `progress += (target - progress) * speed * dt`. States live in a
//! [`MorphRegistry`] keyed by [`PopulationId`], never on a render resource.

use std::collections::BTreeMap;

use arix_common::StateSignal;

pub use arix_config::schema::OvershootPolicy;

/// Stable handle for one population's morph state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PopulationId(u32);

impl PopulationId {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PopulationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "population#{}", self.0)
    }
}

/// Progress, target, and speed of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphState {
    progress: f32,
    target: StateSignal,
    speed: f32,
    policy: OvershootPolicy,
}

impl MorphState {
    /// Start at rest on `initial`: progress 0 when scattered, 1 when assembled.
    pub fn new(initial: StateSignal, speed: f32, policy: OvershootPolicy) -> Self {
        Self {
            progress: initial.target(),
            target: initial,
            speed,
            policy,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> StateSignal {
        self.target
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn policy(&self) -> OvershootPolicy {
        self.policy
    }

    pub fn set_target(&mut self, target: StateSignal) {
        self.target = target;
    }

    /// Advance one frame of `dt` seconds and return the new progress.
    ///
    /// Negative or non-finite deltas advance nothing.
    pub fn step(&mut self, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.progress;
        }

        let gain = self.speed * dt;
        let gain = match self.policy {
            OvershootPolicy::ClampStep => gain.min(1.0),
            OvershootPolicy::Allow => gain,
        };

        self.progress += (self.target.target() - self.progress) * gain;
        self.progress
    }
}

/// Owns every population's [`MorphState`].
#[derive(Debug, Default)]
pub struct MorphRegistry {
    states: BTreeMap<PopulationId, MorphState>,
    next_id: u32,
}

impl MorphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new population and return its id.
    pub fn register(&mut self, state: MorphState) -> PopulationId {
        let id = PopulationId(self.next_id);
        self.next_id += 1;
        self.states.insert(id, state);
        tracing::debug!(
            "registered {id} (progress={}, speed={})",
            state.progress,
            state.speed
        );
        id
    }

    /// Drop a population's state when the population is torn down.
    pub fn remove(&mut self, id: PopulationId) -> Option<MorphState> {
        self.states.remove(&id)
    }

    pub fn get(&self, id: PopulationId) -> Option<&MorphState> {
        self.states.get(&id)
    }

    /// Current progress of `id`, or `None` once it has been removed.
    pub fn progress(&self, id: PopulationId) -> Option<f32> {
        self.states.get(&id).map(MorphState::progress)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Point every population at `signal` and integrate one frame.
    pub fn advance(&mut self, signal: StateSignal, dt: f32) {
        for state in self.states.values_mut() {
            state.set_target(signal);
            state.step(dt);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_progress_follows_initial_state() {
        let s = MorphState::new(StateSignal::Scattered, 2.0, OvershootPolicy::ClampStep);
        assert_eq!(s.progress(), 0.0);
        let s = MorphState::new(StateSignal::Assembled, 2.0, OvershootPolicy::ClampStep);
        assert_eq!(s.progress(), 1.0);
    }

    #[test]
    fn single_step_follows_recurrence() {
        let mut s = MorphState::new(StateSignal::Scattered, 2.0, OvershootPolicy::ClampStep);
        s.set_target(StateSignal::Assembled);
        let p = s.step(0.1);
        // 0 + (1 - 0) * 2.0 * 0.1
        assert!((p - 0.2).abs() < 1e-6);
    }

    #[test]
    fn hitch_frame_lands_on_target_when_clamped() {
        let mut s = MorphState::new(StateSignal::Scattered, 2.5, OvershootPolicy::ClampStep);
        s.set_target(StateSignal::Assembled);
        s.step(0.5);
        assert!((s.progress() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn hitch_frame_overshoots_when_allowed() {
        let mut s = MorphState::new(StateSignal::Scattered, 2.5, OvershootPolicy::Allow);
        s.set_target(StateSignal::Assembled);
        // 0.1 + (1 - 0.1) * 1.25 = 1.225
        s.progress = 0.1;
        s.step(0.5);
        assert!((s.progress() - 1.225).abs() < 1e-5);
    }

    #[test]
    fn clamped_step_never_crosses_target_from_below() {
        for start in [0.0_f32, 0.05, 0.1, 0.19] {
            let mut s = MorphState::new(StateSignal::Scattered, 2.5, OvershootPolicy::ClampStep);
            s.progress = start;
            s.set_target(StateSignal::Assembled);
            s.step(0.5);
            assert!(s.progress() <= 1.0 + 1e-6, "start {start}");
        }
    }

    #[test]
    fn bad_deltas_are_ignored() {
        let mut s = MorphState::new(StateSignal::Scattered, 2.0, OvershootPolicy::Allow);
        s.set_target(StateSignal::Assembled);
        s.step(-1.0);
        s.step(f32::NAN);
        s.step(f32::INFINITY);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn reversing_target_mid_flight_is_continuous() {
        let mut s = MorphState::new(StateSignal::Scattered, 2.0, OvershootPolicy::ClampStep);
        s.set_target(StateSignal::Assembled);
        for _ in 0..20 {
            s.step(1.0 / 60.0);
        }
        let before = s.progress();
        s.set_target(StateSignal::Scattered);
        let after = s.step(1.0 / 60.0);
        assert!(after < before);
        assert!(before - after < 0.05);
    }

    #[test]
    fn registry_assigns_distinct_ids() {
        let mut reg = MorphRegistry::new();
        let a = reg.register(MorphState::new(
            StateSignal::Scattered,
            2.0,
            OvershootPolicy::ClampStep,
        ));
        let b = reg.register(MorphState::new(
            StateSignal::Scattered,
            2.5,
            OvershootPolicy::ClampStep,
        ));
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn registry_advance_uses_each_population_speed() {
        let mut reg = MorphRegistry::new();
        let slow = reg.register(MorphState::new(
            StateSignal::Scattered,
            2.0,
            OvershootPolicy::ClampStep,
        ));
        let fast = reg.register(MorphState::new(
            StateSignal::Scattered,
            2.5,
            OvershootPolicy::ClampStep,
        ));
        reg.advance(StateSignal::Assembled, 0.1);
        assert!((reg.progress(slow).unwrap() - 0.2).abs() < 1e-6);
        assert!((reg.progress(fast).unwrap() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn removed_population_has_no_progress() {
        let mut reg = MorphRegistry::new();
        let id = reg.register(MorphState::new(
            StateSignal::Assembled,
            2.0,
            OvershootPolicy::ClampStep,
        ));
        assert!(reg.remove(id).is_some());
        assert!(reg.progress(id).is_none());
        assert!(reg.is_empty());
    }
}
