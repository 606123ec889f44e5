/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Identifies which mounted route entries belong to a base path.

use crate::control_plane::route_registry::{RouteEntry, RouteRegistry};

/// Returns the registry indices of every entry mounted for `base_path`, in
/// ascending discovery order.
///
/// Entries carrying a mount-path tag are matched by exact equality. Untagged
/// entries fall back to pattern-string inference against the rendered match
/// pattern, which must tolerate framework-generated trailing wildcard text.
pub fn find_matching_entries(registry: &RouteRegistry, base_path: &str) -> Vec<usize> {
    registry
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry_matches(entry, base_path))
        .map(|(index, _)| index)
        .collect()
}

fn entry_matches(entry: &RouteEntry, base_path: &str) -> bool {
    match entry.mount_path() {
        Some(mount_path) => mount_path == base_path,
        None => pattern_matches(entry.pattern(), base_path),
    }
}

/// Tests a rendered pattern string against a literal base path.
///
/// The base path is regex-escaped so its metacharacters compare literally,
/// the pattern's leading anchor is stripped, and the escaped path must be a
/// prefix of the remainder. The text following the prefix may only be an
/// optional-trailing-slash wildcard, a lookahead group, or an end anchor;
/// anything else means the pattern was mounted for a longer sibling path.
fn pattern_matches(pattern: &str, base_path: &str) -> bool {
    let body = pattern.strip_prefix('^').unwrap_or(pattern);
    let escaped = regex::escape(base_path);

    let Some(rest) = body.strip_prefix(escaped.as_str()) else {
        return false;
    };

    rest.is_empty() || rest.starts_with("/?") || rest.starts_with('(') || rest.starts_with('$')
}
