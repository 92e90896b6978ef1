// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for body-metrics
// ABOUTME: Renders the profile table and JSON outcomes on stdout

use body_metrics::errors::AppResult;
use body_metrics::models::PersonProfile;
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.precision$}"))
}

/// Print enrolled profiles as a table
pub fn display_profiles<'a>(profiles: impl IntoIterator<Item = &'a PersonProfile>) {
    let profiles: Vec<&PersonProfile> = profiles.into_iter().collect();
    if profiles.is_empty() {
        println!("No profiles enrolled.");
        return;
    }

    println!(
        "{:<4} {:<16} {:>9} {:>8} {:>4} {:<7} {:>10} {:>12} {:>10}",
        "ID", "NAME", "EXPECTED", "HEIGHT", "AGE", "SEX", "TOLERANCE", "SMOOTHED KG", "SMOOTHED Z"
    );
    println!("{}", "-".repeat(88));
    for profile in profiles {
        let attrs = &profile.attributes;
        println!(
            "{:<4} {:<16} {:>9.1} {:>8.1} {:>4} {:<7} {:>10} {:>12} {:>10}",
            profile.id,
            attrs.name(),
            attrs.expected_weight_kg(),
            attrs.height_cm(),
            attrs.age_years(),
            attrs.sex(),
            format_optional(attrs.weight_tolerance_kg(), 1),
            format_optional(profile.smoothing.weight_kg, 2),
            format_optional(profile.smoothing.impedance_ohm, 1),
        );
    }
}
