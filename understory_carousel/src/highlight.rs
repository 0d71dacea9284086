// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-element rule: exactly one slide and one dot carry "active".

use crate::view::{Group, ViewAdapter};

/// Which groups were updated by [`highlight_active`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveMarks {
    /// A slide matched the index and is now the only active slide.
    pub slide: bool,
    /// A dot matched the index and is now the only active dot.
    pub dot: bool,
}

/// Marks the slide and dot whose declared position is `index + 1`.
///
/// Each group is handled independently: if some element matches, every
/// element of the group is cleared and the match is set. If nothing matches
/// (no dots, mismatched counts) the group is left alone.
pub fn highlight_active<V: ViewAdapter>(view: &mut V, index: usize) -> ActiveMarks {
    ActiveMarks {
        slide: highlight_group(view, Group::Slides, index + 1),
        dot: highlight_group(view, Group::Dots, index + 1),
    }
}

fn highlight_group<V: ViewAdapter>(view: &mut V, group: Group, position: usize) -> bool {
    let elements = view.elements(group);
    let Some(target) = elements
        .iter()
        .position(|el| view.position_of(group, el) == Some(position))
    else {
        return false;
    };
    for (i, el) in elements.iter().enumerate() {
        if i != target {
            view.set_active(el, false);
        }
    }
    view.set_active(&elements[target], true);
    true
}
