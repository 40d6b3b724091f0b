/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Number of jobs returned by an unfiltered listing.
pub const DEFAULT_JOB_LIMIT: u64 = 6;

pub const SALARY_RANGE_SEPARATOR: char = '-';

/// Upper bound for token lifetime, one year.
pub const MAX_JWT_EXPIRY_HOURS: i64 = 24 * 365;
