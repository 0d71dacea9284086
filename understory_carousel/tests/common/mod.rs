// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory view used by the integration tests.

#![allow(dead_code, reason = "Not every test file uses every helper")]

use understory_carousel::{ControlSurface, Group, Transition, ViewAdapter};

/// One element of the fake markup.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node {
    pub(crate) position: Option<usize>,
    pub(crate) active: bool,
}

/// Records everything a carousel asks of its view.
#[derive(Clone, Debug)]
pub(crate) struct RecordingView {
    pub(crate) slides: Vec<Node>,
    pub(crate) dots: Option<Vec<Node>>,
    pub(crate) buttons: usize,
    pub(crate) width: f64,
    pub(crate) offsets: Vec<(f64, Transition)>,
}

impl RecordingView {
    /// `count` slides of `width`, positions `1..=count`, no controls.
    pub(crate) fn new(count: usize, width: f64) -> Self {
        Self {
            slides: numbered(count),
            dots: None,
            buttons: 0,
            width,
            offsets: Vec::new(),
        }
    }

    pub(crate) fn with_dots(mut self, count: usize) -> Self {
        self.dots = Some(numbered(count));
        self
    }

    pub(crate) fn active_slides(&self) -> Vec<usize> {
        active_positions(&self.slides)
    }

    pub(crate) fn active_dots(&self) -> Vec<usize> {
        self.dots.as_deref().map(active_positions).unwrap_or_default()
    }

    pub(crate) fn last_offset(&self) -> Option<(f64, Transition)> {
        self.offsets.last().copied()
    }

    fn group(&self, group: Group) -> &[Node] {
        match group {
            Group::Slides => &self.slides,
            Group::Dots => self.dots.as_deref().unwrap_or_default(),
        }
    }

    fn group_mut(&mut self, group: Group) -> &mut [Node] {
        match group {
            Group::Slides => &mut self.slides,
            Group::Dots => self.dots.as_deref_mut().unwrap_or_default(),
        }
    }
}

fn numbered(count: usize) -> Vec<Node> {
    (1..=count)
        .map(|position| Node {
            position: Some(position),
            active: false,
        })
        .collect()
}

fn active_positions(nodes: &[Node]) -> Vec<usize> {
    nodes
        .iter()
        .filter(|node| node.active)
        .filter_map(|node| node.position)
        .collect()
}

impl ViewAdapter for RecordingView {
    type Element = (Group, usize);

    fn elements(&self, group: Group) -> Vec<(Group, usize)> {
        (0..self.group(group).len()).map(|i| (group, i)).collect()
    }

    fn position_of(&self, group: Group, element: &(Group, usize)) -> Option<usize> {
        self.group(group)[element.1].position
    }

    fn measure_width(&self, _slide: &(Group, usize)) -> f64 {
        self.width
    }

    fn apply_offset(&mut self, offset: f64, transition: Transition) {
        self.offsets.push((offset, transition));
    }

    fn set_active(&mut self, element: &(Group, usize), active: bool) {
        self.group_mut(element.0)[element.1].active = active;
    }
}

impl ControlSurface for RecordingView {
    fn button_count(&self) -> usize {
        self.buttons
    }

    fn create_buttons(&mut self) {
        self.buttons += 2;
    }

    fn remove_buttons(&mut self) {
        self.buttons = 0;
    }

    fn has_dots(&self) -> bool {
        self.dots.is_some()
    }

    fn create_dots(&mut self, slide_count: usize) {
        self.dots = Some(numbered(slide_count));
    }
}
