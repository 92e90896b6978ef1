// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for body-metrics
// ABOUTME: Provides access to profile management and reading commands

pub mod profiles;
pub mod reading;
