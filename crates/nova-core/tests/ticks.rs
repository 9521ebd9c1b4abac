// File: crates/nova-core/tests/ticks.rs
// Purpose: Tick locators and label formatting on linear and log axes.

use nova_core::ticks::{format_linear, linspace, major_ticks, major_values, minor_values, nice_step, MAX_MAJOR_TICKS};
use nova_core::{Axis, ScaleKind};

#[test]
fn nice_steps_follow_1_2_5_sequence() {
    assert_eq!(nice_step(0.0, 10.0), 2.0);
    assert!((nice_step(0.0, 1.0) - 0.2).abs() < 1e-12);
    assert_eq!(nice_step(0.0, 100.0), 20.0);
}

#[test]
fn linear_majors_stay_inside_limits() {
    let axis = Axis::new("x", -0.4, 10.4);
    let ticks = major_values(&axis);
    assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    for lim in [(0.0, 1.0), (-3.7, 123.4), (1e-6, 9e-6)] {
        let v = major_values(&Axis::new("x", lim.0, lim.1));
        assert!(v.len() <= MAX_MAJOR_TICKS, "{lim:?} gave {} ticks", v.len());
        assert!(v.iter().all(|t| *t >= lim.0 - 1e-12 && *t <= lim.1 + 1e-12));
    }
}

#[test]
fn linear_minor_ticks_subdivide() {
    let axis = Axis::new("x", 0.0, 10.0);
    let majors = major_values(&axis);
    let minors = minor_values(&axis, &majors);
    // step 2 splits in four
    assert!(minors.iter().any(|v| (v - 0.5).abs() < 1e-9));
    assert!(!minors.iter().any(|v| (v - 2.0).abs() < 1e-9));
}

#[test]
fn labels_use_needed_decimals() {
    let axis = Axis::new("x", 0.0, 1.0);
    let labels: Vec<String> = major_ticks(&axis).into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    assert_eq!(format_linear(-0.0, 1), "0.0");
}

#[test]
fn log_axis_labels_decades_with_superscripts() {
    let axis = Axis::new("y", 1.0, 1000.0).with_kind(ScaleKind::Log10);
    let labels: Vec<String> = major_ticks(&axis).into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["10⁰", "10¹", "10²", "10³"]);

    let small = Axis::new("y", 1e-3, 1.0).with_kind(ScaleKind::Log10);
    assert_eq!(major_ticks(&small)[0].label, "10⁻³");
}

#[test]
fn log_minor_ticks_between_decades() {
    let axis = Axis::new("y", 1.0, 100.0).with_kind(ScaleKind::Log10);
    let minors = minor_values(&axis, &major_values(&axis));
    assert_eq!(minors.len(), 16);
    assert!(minors.contains(&2.0) && minors.contains(&90.0));
}

#[test]
fn fixed_ticks_override_locator() {
    let axis = Axis::new("x", 0.0, 10.0).with_ticks(Some(vec![1.0, 2.5, 7.0]));
    let ticks = major_ticks(&axis);
    assert_eq!(ticks.iter().map(|t| t.value).collect::<Vec<_>>(), vec![1.0, 2.5, 7.0]);
    assert_eq!(ticks[1].label, "2.5");
}

#[test]
fn linspace_includes_ends() {
    assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    assert!(linspace(2.0, 3.0, 0).is_empty());
    // last value is the exact end even when the step does not divide evenly
    assert_eq!(linspace(0.1, 0.7, 7).last().copied(), Some(0.7));
}
