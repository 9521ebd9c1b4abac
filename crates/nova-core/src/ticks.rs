// File: crates/nova-core/src/ticks.rs
// Summary: Major/minor tick location and tick label formatting for linear and log axes.

use crate::axis::{Axis, ScaleKind};
use crate::mathtext::superscript;

/// Most major ticks a linear locator produces.
pub const MAX_MAJOR_TICKS: usize = 9;
/// Most decades labelled on a log axis before thinning.
pub const MAX_LOG_DECADES: usize = 10;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// `count` evenly spaced values from `start` to `end`; the last one is exactly `end`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| if i + 1 == count { end } else { start + step * i as f64 }).collect()
        }
    }
}

fn ordered(axis: &Axis) -> (f64, f64) {
    if axis.min <= axis.max { (axis.min, axis.max) } else { (axis.max, axis.min) }
}

/// Step of the linear locator for `[lo, hi]`.
pub fn nice_step(lo: f64, hi: f64) -> f64 {
    let range = (hi - lo).abs();
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let raw = range / (MAX_MAJOR_TICKS - 1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = NICE_STEPS.iter().copied().find(|&s| s + 1e-9 >= norm).unwrap_or(10.0);
    nice * mag
}

fn steps_in(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil();
    let mut out = Vec::new();
    let mut k = first;
    loop {
        let v = k * step;
        if v > hi + eps || out.len() > 10_000 {
            break;
        }
        // snap tiny float noise around zero
        out.push(if v.abs() < eps { 0.0 } else { v });
        k += 1.0;
    }
    out
}

/// Major tick values; fixed ticks win when the axis carries them.
pub fn major_values(axis: &Axis) -> Vec<f64> {
    let (lo, hi) = ordered(axis);
    if let Some(fixed) = &axis.ticks {
        return fixed.iter().copied().filter(|v| v.is_finite()).collect();
    }
    match axis.kind {
        ScaleKind::Linear => steps_in(lo, hi, nice_step(lo, hi)),
        ScaleKind::Log10 => {
            if hi <= 0.0 {
                return Vec::new();
            }
            let lo = if lo > 0.0 { lo } else { hi / 10.0 };
            let d0 = (lo.log10() - 1e-9).ceil() as i32;
            let d1 = (hi.log10() + 1e-9).floor() as i32;
            let count = (d1 - d0 + 1).max(0) as usize;
            let stride = count.div_ceil(MAX_LOG_DECADES).max(1) as i32;
            (d0..=d1).filter(|d| (d - d0) % stride == 0).map(|d| 10f64.powi(d)).collect()
        }
    }
}

/// Minor tick values (major positions excluded).
pub fn minor_values(axis: &Axis, majors: &[f64]) -> Vec<f64> {
    let (lo, hi) = ordered(axis);
    match axis.kind {
        ScaleKind::Linear => {
            if majors.len() < 2 {
                return Vec::new();
            }
            let step = (majors[1] - majors[0]).abs();
            let mantissa = step / 10f64.powf(step.log10().floor());
            let ndiv = if (mantissa - 1.0).abs() < 1e-6 || (mantissa - 5.0).abs() < 1e-6 { 5.0 } else { 4.0 };
            let minor = step / ndiv;
            steps_in(lo, hi, minor)
                .into_iter()
                .filter(|v| majors.iter().all(|m| (m - v).abs() > minor * 1e-3))
                .collect()
        }
        ScaleKind::Log10 => {
            if hi <= 0.0 {
                return Vec::new();
            }
            let lo = if lo > 0.0 { lo } else { hi / 10.0 };
            let d0 = lo.log10().floor() as i32;
            let d1 = hi.log10().ceil() as i32;
            let mut out = Vec::new();
            for d in d0..=d1 {
                let base = 10f64.powi(d);
                for k in 2..=9 {
                    let v = k as f64 * base;
                    if v >= lo * (1.0 - 1e-9) && v <= hi * (1.0 + 1e-9) {
                        out.push(v);
                    }
                }
            }
            out
        }
    }
}

/// Decimals needed to print multiples of `step` exactly.
fn decimals_for(step: f64) -> usize {
    for d in 0..=10usize {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0) {
            return d;
        }
    }
    10
}

/// Format a linear tick value with `decimals` digits; negative zero prints as "0".
pub fn format_linear(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') { s.trim_start_matches('-').to_string() } else { s }
}

/// Format a log tick value: decades as `10` with a superscript exponent.
pub fn format_log(v: f64) -> String {
    let e = v.log10();
    if (e - e.round()).abs() < 1e-9 {
        format!("10{}", superscript(&format!("{}", e.round() as i64)))
    } else {
        let d = decimals_for(v);
        format_linear(v, d.min(6))
    }
}

/// Major ticks with labels for `axis`.
pub fn major_ticks(axis: &Axis) -> Vec<Tick> {
    let values = major_values(axis);
    match axis.kind {
        ScaleKind::Linear => {
            let decimals = if values.len() >= 2 {
                decimals_for((values[1] - values[0]).abs())
            } else {
                values.first().map(|v| decimals_for(*v)).unwrap_or(0)
            };
            let decimals = if axis.ticks.is_some() {
                values.iter().map(|v| decimals_for(*v)).max().unwrap_or(0).min(6)
            } else {
                decimals
            };
            values.into_iter().map(|v| Tick { value: v, label: format_linear(v, decimals) }).collect()
        }
        ScaleKind::Log10 => values.into_iter().map(|v| Tick { value: v, label: format_log(v) }).collect(),
    }
}
