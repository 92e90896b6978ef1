// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for body-metrics
// ABOUTME: Provides access to profiles file persistence and display formatting

pub mod display;
pub mod profiles_file;
