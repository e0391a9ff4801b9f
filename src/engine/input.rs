//! Pointer, keyboard & selection methods for ContactMapEngine

use glam::Vec2;

use super::ContactMapEngine;
use crate::input::{GestureProgress, KeyAction, PointerEvent};
use crate::selection::SelectionController;

impl ContactMapEngine {
    /// Process a pointer event in display pixels.
    ///
    /// Returns `true` if the displayed image changed and the host should
    /// redraw (hover moved, drag preview changed, or a selection was
    /// committed or cleared).
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { x, y } => {
                let pos = self.to_matrix_space(x, y);
                self.gestures.pointer_down(pos, self.generation);
                self.drag_preview.take().is_some()
            }
            PointerEvent::Move { x, y } => {
                let pos = self.to_matrix_space(x, y);
                self.dispatch_pointer_move(pos)
            }
            PointerEvent::Up { x, y } => {
                let pos = self.to_matrix_space(x, y);
                self.dispatch_pointer_up(pos)
            }
            PointerEvent::Leave => {
                if self.gestures.is_pressed() {
                    self.gestures.cancel();
                    self.drag_preview.take().is_some()
                } else {
                    self.selection.hover(None)
                }
            }
        }
    }

    fn to_matrix_space(&self, x: f32, y: f32) -> Vec2 {
        self.mapper.to_matrix_space(Vec2::new(x, y))
    }

    /// Pointer moved: hover when idle, update the drag preview when
    /// dragging.
    fn dispatch_pointer_move(&mut self, pos: Vec2) -> bool {
        match self.gestures.pointer_move(pos) {
            GestureProgress::Idle => self.selection.hover_at(pos, &self.mapper),
            GestureProgress::Pressed => false,
            GestureProgress::Dragging { start, current } => {
                let preview =
                    SelectionController::preview_range(start, current, &self.mapper);
                let changed = preview != self.drag_preview;
                self.drag_preview = preview;
                changed
            }
        }
    }

    /// Pointer released: classify the gesture and commit it, unless the
    /// structure changed since the press.
    fn dispatch_pointer_up(&mut self, pos: Vec2) -> bool {
        let had_preview = self.drag_preview.take().is_some();
        let Some(done) = self.gestures.pointer_up(pos) else {
            return had_preview;
        };
        if done.generation != self.generation {
            log::debug!(
                "discarding gesture from structure generation {} (now {})",
                done.generation,
                self.generation
            );
            return had_preview;
        }

        let before = self.selection.state();
        if let Some(event) =
            self.selection.apply_gesture(done.gesture, &self.mapper)
        {
            let _ = self.bridge.dispatch(event);
        }
        had_preview || self.selection.state() != before
    }

    /// Drop the current selection (and any hover). Returns whether anything
    /// changed.
    pub fn clear_selection(&mut self) -> bool {
        let before = self.selection.state();
        if let Some(event) = self.selection.clear() {
            let _ = self.bridge.dispatch(event);
        }
        self.selection.state() != before
    }

    /// Run the action bound to `key` (a `KeyboardEvent.code`-style string,
    /// e.g. `"Escape"`). Returns whether the image changed.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return false;
        };
        self.execute(action)
    }

    /// Execute a key action.
    pub fn execute(&mut self, action: KeyAction) -> bool {
        let step = self.options.contact.threshold_step;
        let threshold = self.options.contact.threshold;
        match action {
            KeyAction::ClearSelection => self.clear_selection(),
            KeyAction::IncreaseThreshold => self.set_threshold(threshold + step),
            KeyAction::DecreaseThreshold => {
                self.set_threshold((threshold - step).max(0.0))
            }
        }
    }
}
