/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 6..=128;

pub const LINK_PREFIX: &str = "/jobs/";
pub const SLUG_MAX_LEN: usize = 50;
pub const SUFFIX_LEN: usize = 9;
pub const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const DEFAULT_SALARY: &str = "Not specified";
pub const DEFAULT_COMPANY: &str = "Our Company";
pub const DEFAULT_DEPARTMENT: &str = "Engineering";

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const SUGGESTION_MIN_LEN: usize = 2;
pub const SUGGESTION_LIMIT: u64 = 10;
pub const RECENT_ACTIVITY_LIMIT: u64 = 5;

/// Filter value meaning "no restriction" for enum-valued query parameters.
pub const FILTER_ALL: &str = "all";
