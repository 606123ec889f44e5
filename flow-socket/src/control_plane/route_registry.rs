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

//! Ordered route registry data model and base-path pruning.

use crate::control_plane::path_matcher::find_matching_entries;
use std::collections::HashSet;

/// Stable identity for one mounted route entry.
///
/// Pruning deletes by identity rather than by position, so entry removal can
/// never be corrupted by the index shift a forward enumerate-and-remove pass
/// would suffer on an ordered registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EntryId(u64);

/// One mounted HTTP route registration.
///
/// `mount_path` is stamped at mount time and makes teardown an exact-match
/// removal. Entries mounted outside this crate may lack the tag; for those,
/// only the framework-rendered pattern string is available for matching.
#[derive(Clone, Debug)]
pub struct RouteEntry {
    id: EntryId,
    mount_path: Option<String>,
    pattern: String,
}

impl RouteEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn mount_path(&self) -> Option<&str> {
        self.mount_path.as_deref()
    }

    /// The rendered match-pattern string exposed by the routing framework.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// The shared, ordered registry of mounted route entries.
///
/// Order is significant: later entries can shadow earlier ones at match
/// time, so removal must never disturb the relative order of survivors.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    next_id: u64,
    entries: Vec<RouteEntry>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry mounted for `base_path`, tagged for exact-match
    /// removal at teardown.
    pub fn mount(&mut self, base_path: &str, pattern: &str) -> EntryId {
        self.push(Some(base_path.to_string()), pattern)
    }

    /// Appends an untagged entry known only by its rendered pattern string.
    pub fn mount_pattern(&mut self, pattern: &str) -> EntryId {
        self.push(None, pattern)
    }

    fn push(&mut self, mount_path: Option<String>, pattern: &str) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(RouteEntry {
            id,
            mount_path,
            pattern: pattern.to_string(),
        });
        id
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry whose identity is in `ids`, preserving the
    /// relative order of survivors. Returns the number removed.
    pub fn remove_ids(&mut self, ids: &HashSet<EntryId>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !ids.contains(&entry.id));
        before - self.entries.len()
    }
}

/// Removes every entry mounted for `base_path` from the registry.
///
/// Matching identities are collected first from an enumeration snapshot;
/// removal then proceeds against the live collection by identity. Returns
/// the number of entries removed.
pub fn prune_base_path(registry: &mut RouteRegistry, base_path: &str) -> usize {
    let indices = find_matching_entries(registry, base_path);
    let ids: HashSet<EntryId> = indices
        .into_iter()
        .map(|index| registry.entries()[index].id())
        .collect();

    registry.remove_ids(&ids)
}
