// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Debouncer behaviour against noisy raw levels.

use xasuuso_core::{Debouncer, Edge};

const WINDOW_US: u64 = 50_000;
const MS: u64 = 1_000;

/// Feed `pressed` every millisecond from `from_ms` up to (excluding) `to_ms`.
fn feed(d: &mut Debouncer, pressed: bool, from_ms: u64, to_ms: u64) -> Vec<(u64, Edge)> {
    (from_ms..to_ms)
        .filter_map(|ms| d.update(pressed, ms * MS, WINDOW_US).map(|e| (ms, e)))
        .collect()
}

#[test]
fn test_initial_level_is_trusted() {
    let released = Debouncer::new(false, 0);
    assert!(!released.is_pressed());

    let held = Debouncer::new(true, 0);
    assert!(held.is_pressed());
}

#[test]
fn test_press_reported_after_window() {
    let mut d = Debouncer::new(false, 0);

    let edges = feed(&mut d, true, 10, 100);

    // Raw change seen at 10 ms, stable 50 ms later.
    assert_eq!(edges, vec![(60, Edge::Pressed)]);
    assert!(d.is_pressed());
}

#[test]
fn test_glitch_shorter_than_window_is_ignored() {
    let mut d = Debouncer::new(false, 0);

    assert!(feed(&mut d, true, 10, 40).is_empty());
    assert!(feed(&mut d, false, 40, 200).is_empty());
    assert!(!d.is_pressed());
}

#[test]
fn test_bounce_restarts_window() {
    let mut d = Debouncer::new(false, 0);

    // Contact bounce: the level flips every 10 ms for a while before settling.
    let mut edges = Vec::new();
    for burst in 0..5 {
        let start = burst * 20;
        edges.extend(feed(&mut d, true, start, start + 10));
        edges.extend(feed(&mut d, false, start + 10, start + 20));
    }
    assert!(edges.is_empty());

    let edges = feed(&mut d, true, 100, 200);
    assert_eq!(edges, vec![(150, Edge::Pressed)]);
}

#[test]
fn test_release_edge() {
    let mut d = Debouncer::new(true, 0);

    let edges = feed(&mut d, false, 5, 80);

    assert_eq!(edges, vec![(55, Edge::Released)]);
    assert!(!d.is_pressed());
}

#[test]
fn test_steady_level_reports_a_single_edge() {
    let mut d = Debouncer::new(false, 0);

    let edges = feed(&mut d, true, 0, 1_000);

    assert_eq!(edges.len(), 1);
}

#[test]
fn test_state_survives_sparse_sampling() {
    let mut d = Debouncer::new(false, 0);

    // Samples far apart: the change is remembered between calls rather than reset.
    assert_eq!(d.update(true, 1_000 * MS, WINDOW_US), None);
    assert_eq!(d.update(true, 1_020 * MS, WINDOW_US), None);
    assert_eq!(d.update(true, 1_050 * MS, WINDOW_US), Some(Edge::Pressed));
}
