// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the carousel demos.
//!
//! [`ConsoleView`] is a headless stand-in for a slider's markup: it keeps the
//! slides and dots as numbered cells and logs every change the carousel makes.

use std::fmt::Write as _;

use tracing::info;
use understory_carousel::{ControlSurface, Group, Transition, ViewAdapter};

/// Headless carousel view that prints its state.
#[derive(Clone, Debug)]
pub struct ConsoleView {
    slides: Vec<bool>,
    dots: Option<Vec<bool>>,
    buttons: usize,
    width: f64,
}

impl ConsoleView {
    /// `count` slides of `width` pixels and no controls.
    pub fn new(count: usize, width: f64) -> Self {
        Self {
            slides: vec![false; count],
            dots: None,
            buttons: 0,
            width,
        }
    }

    /// One-line picture of the slides, e.g. `[ ][#][ ]`.
    pub fn strip(&self) -> String {
        let mut out = String::new();
        for &active in &self.slides {
            let _ = write!(out, "[{}]", if active { '#' } else { ' ' });
        }
        out
    }

    fn cells_mut(&mut self, group: Group) -> Option<&mut Vec<bool>> {
        match group {
            Group::Slides => Some(&mut self.slides),
            Group::Dots => self.dots.as_mut(),
        }
    }
}

impl ViewAdapter for ConsoleView {
    type Element = (Group, usize);

    fn elements(&self, group: Group) -> Vec<(Group, usize)> {
        let len = match group {
            Group::Slides => self.slides.len(),
            Group::Dots => self.dots.as_ref().map_or(0, Vec::len),
        };
        (0..len).map(|i| (group, i)).collect()
    }

    fn position_of(&self, _group: Group, element: &(Group, usize)) -> Option<usize> {
        Some(element.1 + 1)
    }

    fn measure_width(&self, _slide: &(Group, usize)) -> f64 {
        self.width
    }

    fn apply_offset(&mut self, offset: f64, transition: Transition) {
        info!(offset, duration_ms = transition.duration_ms(), "translate");
    }

    fn set_active(&mut self, element: &(Group, usize), active: bool) {
        if let Some(cell) = self
            .cells_mut(element.0)
            .and_then(|cells| cells.get_mut(element.1))
        {
            *cell = active;
        }
    }
}

impl ControlSurface for ConsoleView {
    fn button_count(&self) -> usize {
        self.buttons
    }

    fn create_buttons(&mut self) {
        info!("adding prev/next buttons");
        self.buttons = 2;
    }

    fn remove_buttons(&mut self) {
        self.buttons = 0;
    }

    fn has_dots(&self) -> bool {
        self.dots.is_some()
    }

    fn create_dots(&mut self, slide_count: usize) {
        info!(slide_count, "adding pagination dots");
        self.dots = Some(vec![false; slide_count]);
    }
}
