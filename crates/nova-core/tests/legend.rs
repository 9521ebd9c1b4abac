// File: crates/nova-core/tests/legend.rs
// Purpose: Legend preset parsing, option expansion and "best" placement.

use nova_core::geometry::RectF;
use nova_core::legend::best_location;
use nova_core::{LegendLoc, LegendOptions, LegendPreset, LegendSettings};

#[test]
fn preset_names_accept_spaces_or_underscores() {
    assert_eq!("default inside".parse::<LegendPreset>(), Ok(LegendPreset::DefaultInside));
    assert_eq!("Fancy_Outside".parse::<LegendPreset>(), Ok(LegendPreset::FancyOutside));
    assert!("sideways".parse::<LegendPreset>().is_err());
}

#[test]
fn unknown_preset_disables_the_legend() {
    assert_eq!(LegendSettings::parse("default outside"), Some(LegendSettings::Preset(LegendPreset::DefaultOutside)));
    assert_eq!(LegendSettings::parse("nowhere"), None);
}

#[test]
fn presets_expand_to_options() {
    let inside = LegendSettings::Preset(LegendPreset::DefaultInside).options();
    assert_eq!(inside.loc, LegendLoc::Best);
    assert!(!inside.frame);
    assert_eq!(inside.anchor, None);

    let outside = LegendSettings::Preset(LegendPreset::DefaultOutside).options();
    assert_eq!(outside.loc, LegendLoc::UpperLeft);
    assert_eq!(outside.anchor, Some((1.0, 1.0)));

    assert!(LegendSettings::Preset(LegendPreset::FancyInside).options().fancy);
    assert!(LegendSettings::Preset(LegendPreset::FancyOutside).options().fancy);

    let custom = LegendOptions { ncol: 2, ..LegendOptions::default() };
    assert_eq!(LegendSettings::Custom(custom.clone()).options(), custom);
}

#[test]
fn locations_parse_by_name_and_code() {
    assert_eq!("upper left".parse::<LegendLoc>(), Ok(LegendLoc::UpperLeft));
    assert_eq!("lower_right".parse::<LegendLoc>(), Ok(LegendLoc::LowerRight));
    assert_eq!("0".parse::<LegendLoc>(), Ok(LegendLoc::Best));
    assert_eq!("10".parse::<LegendLoc>(), Ok(LegendLoc::Center));
    assert!("top".parse::<LegendLoc>().is_err());
}

#[test]
fn best_location_avoids_data() {
    let plot = RectF::from_ltrb(0.0, 0.0, 100.0, 100.0);
    assert_eq!(best_location(20.0, 10.0, &plot, 5.0, &[]), LegendLoc::UpperRight);

    let crowded_right = [(90.0, 10.0), (80.0, 8.0)];
    assert_eq!(best_location(20.0, 10.0, &plot, 5.0, &crowded_right), LegendLoc::UpperLeft);

    let top_row: Vec<(f32, f32)> = (0..=100).step_by(5).map(|x| (x as f32, 10.0)).collect();
    assert_eq!(best_location(20.0, 10.0, &plot, 5.0, &top_row), LegendLoc::LowerLeft);
}
