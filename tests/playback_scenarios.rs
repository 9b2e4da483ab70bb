// Integration tests for step generation and playback

use sortty::playback::{Controller, PlaybackState};
use sortty::steps::{generate_steps, StepKind};
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(100);

/// Fire every due tick until playback stops, recording the applied kinds
fn play_out(controller: &mut Controller, start: Instant) -> Vec<StepKind> {
    let mut applied = Vec::new();
    let mut now = start;
    while controller.has_pending_tick() {
        now += INTERVAL;
        if let Some(kind) = controller.poll(now) {
            applied.push(kind);
        }
    }
    applied
}

#[test]
fn test_scenario_5_3_8_1() {
    let t0 = Instant::now();
    let mut controller = Controller::new(vec![5, 3, 8, 1], INTERVAL);
    assert!(controller.start(t0));

    let first_compare = controller
        .steps()
        .iter()
        .find(|s| s.kind == StepKind::Compare)
        .expect("unsorted input must compare");
    assert_eq!(first_compare.indices, vec![0, 1]);

    play_out(&mut controller, t0);
    assert_eq!(controller.state(), PlaybackState::Complete);
    assert_eq!(controller.visual().display, vec![1, 3, 5, 8]);
}

#[test]
fn test_playback_applies_every_step_in_order() {
    let t0 = Instant::now();
    let source = vec![42, 17, 99, 17, 3, 64];
    let expected: Vec<StepKind> = generate_steps(&source).iter().map(|s| s.kind).collect();

    let mut controller = Controller::new(source, INTERVAL);
    controller.start(t0);
    assert_eq!(play_out(&mut controller, t0), expected);
}

#[test]
fn test_pause_resume_neither_skips_nor_replays() {
    let t0 = Instant::now();
    let source = vec![9, 8, 7, 6, 5];
    let expected: Vec<StepKind> = generate_steps(&source).iter().map(|s| s.kind).collect();

    let mut controller = Controller::new(source, INTERVAL);
    controller.start(t0);

    let mut applied = Vec::new();
    let mut now = t0;
    let mut round = 0;
    while controller.state() != PlaybackState::Complete {
        now += INTERVAL;
        if let Some(kind) = controller.poll(now) {
            applied.push(kind);
        }

        // Pause every third round and come back much later
        round += 1;
        if round % 3 == 0 && controller.pause() {
            let paused_at = controller.step_index();
            now += INTERVAL * 10;
            assert_eq!(controller.poll(now), None);
            assert!(controller.start(now));
            assert_eq!(controller.step_index(), paused_at);
        }
    }

    assert_eq!(applied, expected);
}

#[test]
fn test_rapid_control_toggling_is_harmless() {
    let t0 = Instant::now();
    let mut controller = Controller::new(vec![3, 1, 2], INTERVAL);

    assert!(!controller.pause());
    controller.reset();
    controller.reset();
    assert_eq!(controller.state(), PlaybackState::Idle);

    assert!(controller.start(t0));
    assert!(!controller.start(t0));
    assert!(controller.pause());
    assert!(!controller.pause());
    assert!(controller.start(t0));

    // Only ever one tick pending: nothing fires before a full interval
    assert_eq!(controller.poll(t0 + INTERVAL / 2), None);
    assert!(controller.poll(t0 + INTERVAL).is_some());
    assert_eq!(controller.step_index(), 1);
}

#[test]
fn test_independent_controllers_do_not_interfere() {
    let t0 = Instant::now();
    let mut a = Controller::new(vec![2, 1], INTERVAL);
    let mut b = Controller::new(vec![4, 3, 2, 1], INTERVAL * 2);
    a.start(t0);
    b.start(t0);

    a.poll(t0 + INTERVAL);
    assert_eq!(a.step_index(), 1);
    assert_eq!(b.poll(t0 + INTERVAL), None);
    assert_eq!(b.step_index(), 0);

    a.reset();
    assert_eq!(b.state(), PlaybackState::Running);
}

#[test]
fn test_already_sorted_input_is_bookkeeping_only() {
    let steps = generate_steps(&[1, 2, 3]);
    let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Sorted,
            StepKind::Current,
            StepKind::Insert,
            StepKind::Sorted,
            StepKind::Current,
            StepKind::Insert,
            StepKind::Sorted,
            StepKind::Complete,
        ]
    );
}
