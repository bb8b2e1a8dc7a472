//! Editor panel UI module.
//!
//! This module provides the left-side panel for drawing annotations,
//! managing the path list, and controlling the agent.
//!
//! ## Module Structure
//!
//! - [`drawing`] - Drawing mode selector and start/stop button
//! - [`path_list`] - Saved annotations with inline rename and delete
//! - [`agent`] - Agent add/reset/remove and control help
//! - [`settings`] - Navigation tuning sliders backed by the config file
//! - [`main_panel`] - Main panel orchestration
//!
//! ## Key Types
//!
//! - [`PathListState`]: Resource tracking the inline rename field

use bevy::prelude::*;

use crate::map::AnnotationId;

mod agent;
mod drawing;
mod main_panel;
mod path_list;
mod settings;

/// Inline rename state for the path list
#[derive(Resource, Default)]
pub struct PathListState {
    /// Annotation whose name is being edited
    pub editing: Option<AnnotationId>,
    pub edit_name: String,
    /// Focus the text field on the first frame it is shown
    pub focus_pending: bool,
}

impl PathListState {
    pub fn begin_edit(&mut self, id: AnnotationId, current_name: &str) {
        self.editing = Some(id);
        self.edit_name = current_name.to_string();
        self.focus_pending = true;
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
        self.edit_name.clear();
        self.focus_pending = false;
    }
}

// Re-exports - Systems
pub use main_panel::editor_panel_ui;
