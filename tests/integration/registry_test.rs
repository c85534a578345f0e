//! Integration tests for the registry, bootstrap and simulated provider

use std::time::{Duration, Instant};

use segplay::controller::PlayPauseGlyph;
use segplay::provider::{LoadStatus, ProviderBootstrap, SimulatedFactory, SimulatedLoader};
use segplay::segment::{PollSettings, PollTask};
use segplay::{InstanceRegistry, PlayerError};

use crate::helpers::{ManualClock, RecordingHost};

/// Pump every 100ms of simulated time for `total`.
fn run_for(registry: &mut InstanceRegistry<'_, RecordingHost>, clock: &ManualClock, total: Duration) {
    let step = Duration::from_millis(100);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        let now = clock.advance(step);
        registry.pump_all(now);
        elapsed += step;
    }
}

// ============================================================================
// Bootstrap fan-out
// ============================================================================

#[test]
fn pending_instances_are_created_on_ready() {
    let bootstrap = ProviderBootstrap::new();
    let mut registry = InstanceRegistry::new(
        &bootstrap,
        Box::new(SimulatedFactory::new(300.0)),
        PollSettings::default(),
    );
    let a = registry
        .register("first", 0.0, Some(30.0), RecordingHost::default())
        .unwrap();
    let b = registry
        .register("second", 45.0, None, RecordingHost::default())
        .unwrap();

    let mut loader = SimulatedLoader::default();
    assert_eq!(
        registry.load_provider(&mut loader).unwrap(),
        LoadStatus::Requested
    );
    assert!(!registry.get(&a).unwrap().has_player());

    assert_eq!(registry.on_provider_ready(), 2);
    registry.pump_all(Instant::now());

    assert!(bootstrap.is_ready());
    assert_eq!(
        registry.load_provider(&mut loader).unwrap(),
        LoadStatus::AlreadyReady
    );
    assert_eq!(loader.requested.len(), 1);

    let first = registry.get(&a).unwrap();
    assert!(first.is_ready());
    assert_eq!(first.ui().duration, "0:30");
    assert_eq!(first.ui().rate, "1×");

    let second = registry.get(&b).unwrap();
    assert!(second.is_ready());
    // Open-ended: remaining media after the start
    assert_eq!(second.ui().duration, "4:15");
}

#[test]
fn bootstrap_marks_ready_once() {
    let bootstrap = ProviderBootstrap::new();
    assert!(bootstrap.mark_ready());
    assert!(!bootstrap.mark_ready());
}

// ============================================================================
// Isolation
// ============================================================================

#[test]
fn one_failing_instance_leaves_siblings_ready() {
    let bootstrap = ProviderBootstrap::new();
    let mut registry = InstanceRegistry::new(
        &bootstrap,
        Box::new(SimulatedFactory::new(300.0).with_error("embargoed", 150)),
        PollSettings::default(),
    );
    let good = registry
        .register("fine", 0.0, None, RecordingHost::default())
        .unwrap();
    let bad = registry
        .register("embargoed", 0.0, None, RecordingHost::default())
        .unwrap();
    let invalid = registry.register("fine", 50.0, Some(50.0), RecordingHost::default());

    registry.on_provider_ready();
    registry.pump_all(Instant::now());

    assert!(matches!(invalid, Err(PlayerError::Configuration(_))));
    assert_eq!(registry.len(), 2);
    assert!(registry.get(&good).unwrap().is_ready());

    let failed = registry.get(&bad).unwrap();
    assert!(!failed.is_ready());
    assert_eq!(
        failed.ui().error.as_deref(),
        Some("Video Player Error: Video not allowed for playback")
    );
    assert!(!failed.ui().controls_visible);
}

// ============================================================================
// End-to-end playback over the simulated provider
// ============================================================================

#[test]
fn playback_stops_at_segment_end() {
    let clock = ManualClock::new();
    let bootstrap = ProviderBootstrap::new();
    let mut registry = InstanceRegistry::new(
        &bootstrap,
        Box::new(SimulatedFactory::new(300.0).with_clock(clock.sim_clock())),
        PollSettings::default(),
    );
    let id = registry
        .register("clip", 10.0, Some(20.0), RecordingHost::default())
        .unwrap();
    registry.on_provider_ready();
    registry.pump_all(clock.now());

    registry.get_mut(&id).unwrap().toggle_play_pause();
    registry.pump_all(clock.now());
    {
        let controller = registry.get(&id).unwrap();
        assert_eq!(controller.ui().glyph, Some(PlayPauseGlyph::Pause));
        assert!(controller.is_polling(PollTask::Boundary));
    }

    run_for(&mut registry, &clock, Duration::from_secs(12));

    let controller = registry.get(&id).unwrap();
    assert_eq!(controller.ui().glyph, Some(PlayPauseGlyph::Play));
    assert!(!controller.is_polling(PollTask::Boundary));
    assert!(controller.ui().progress.unwrap() >= 98.0);
    assert_eq!(controller.ui().current_time, "0:10");
}

#[test]
fn replay_after_segment_end_restarts_at_start() {
    let clock = ManualClock::new();
    let bootstrap = ProviderBootstrap::new();
    let mut registry = InstanceRegistry::new(
        &bootstrap,
        Box::new(SimulatedFactory::new(300.0).with_clock(clock.sim_clock())),
        PollSettings::default(),
    );
    let id = registry
        .register("clip", 10.0, Some(20.0), RecordingHost::default())
        .unwrap();
    registry.on_provider_ready();
    registry.pump_all(clock.now());

    registry.get_mut(&id).unwrap().toggle_play_pause();
    run_for(&mut registry, &clock, Duration::from_secs(12));

    // Jump to the very end, then press play again
    registry
        .get_mut(&id)
        .unwrap()
        .seek_to_percent(100.0, segplay::SeekPhase::Released, clock.now());
    registry.get_mut(&id).unwrap().toggle_play_pause();
    registry.pump_all(clock.now());

    let controller = registry.get(&id).unwrap();
    assert_eq!(controller.ui().glyph, Some(PlayPauseGlyph::Pause));
    assert_eq!(controller.ui().current_time, "0:00");
}

#[test]
fn open_ended_segment_plays_until_media_ends() {
    let clock = ManualClock::new();
    let bootstrap = ProviderBootstrap::new();
    let mut registry = InstanceRegistry::new(
        &bootstrap,
        Box::new(SimulatedFactory::new(5.0).with_clock(clock.sim_clock())),
        PollSettings::default(),
    );
    let id = registry
        .register("short", 0.0, None, RecordingHost::default())
        .unwrap();
    registry.on_provider_ready();
    registry.pump_all(clock.now());

    registry.get_mut(&id).unwrap().toggle_play_pause();
    run_for(&mut registry, &clock, Duration::from_secs(7));

    let controller = registry.get(&id).unwrap();
    assert_eq!(controller.ui().glyph, Some(PlayPauseGlyph::Play));
    assert_eq!(controller.ui().progress, Some(100.0));
    assert_eq!(controller.ui().current_time, "0:05");
    assert!(controller.session().scheduler.is_idle());
}

#[test]
fn faster_rate_reaches_end_sooner() {
    let clock = ManualClock::new();
    let bootstrap = ProviderBootstrap::new();
    let mut registry = InstanceRegistry::new(
        &bootstrap,
        Box::new(SimulatedFactory::new(300.0).with_clock(clock.sim_clock())),
        PollSettings::default(),
    );
    let id = registry
        .register("clip", 0.0, Some(20.0), RecordingHost::default())
        .unwrap();
    registry.on_provider_ready();
    registry.pump_all(clock.now());

    {
        let controller = registry.get_mut(&id).unwrap();
        for _ in 0..10 {
            controller.change_playback_rate(0.1);
        }
        assert_eq!(controller.ui().rate, "2×");
        controller.toggle_play_pause();
    }
    run_for(&mut registry, &clock, Duration::from_secs(11));

    let controller = registry.get(&id).unwrap();
    assert_eq!(controller.ui().glyph, Some(PlayPauseGlyph::Play));
    assert!(controller.ui().progress.unwrap() >= 98.0);
}
