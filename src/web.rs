//! Browser host adapter (feature `web`).
//!
//! [`WebContactMap`] wraps a [`ContactMapEngine`] around an
//! `HtmlCanvasElement`. The canvas backing store is sized to N×N so each
//! atom pair is one pixel; CSS may stretch it to any display size, which is
//! what [`WebContactMap::resize_display`] reports back to the engine.
//!
//! ```js
//! const map = new WebContactMap(canvas);
//! map.load_atoms(new Float32Array(xyz));
//! map.set_on_range_selected(([start, end]) => highlight(start, end));
//! canvas.addEventListener("pointerdown", (e) => map.pointer_down(e.offsetX, e.offsetY));
//! ```

use glam::Vec3;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::engine::ContactMapEngine;
use crate::input::PointerEvent;
use crate::options::Options;
use crate::overlay::Overlay;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A contact matrix bound to a `<canvas>`.
#[wasm_bindgen]
pub struct WebContactMap {
    engine: ContactMapEngine,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl WebContactMap {
    /// Bind to `canvas` with default options.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<WebContactMap, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            engine: ContactMapEngine::new(Options::default()),
            canvas,
            ctx,
        })
    }

    /// Apply options from a TOML string.
    pub fn set_options_toml(&mut self, toml: &str) -> Result<(), JsValue> {
        let options = Options::from_toml_str(toml)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.engine.set_options(options);
        self.redraw()
    }

    /// Load a structure from a flat `[x0, y0, z0, x1, ...]` array.
    ///
    /// A trailing partial triple is ignored.
    pub fn load_atoms(&mut self, xyz: &[f32]) -> Result<(), JsValue> {
        let atoms: Vec<Vec3> =
            xyz.chunks_exact(3).map(Vec3::from_slice).collect();
        self.engine
            .load_atoms(atoms)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let n = self.engine.atom_count() as u32;
        self.canvas.set_width(n);
        self.canvas.set_height(n);
        self.sync_display_size();
        self.redraw()
    }

    /// Set the contact threshold (Å) and redraw.
    pub fn set_threshold(&mut self, threshold: f32) -> Result<(), JsValue> {
        if self.engine.set_threshold(threshold) {
            self.redraw()?;
        }
        Ok(())
    }

    /// Register `callback([start, end])`, invoked once per completed drag.
    pub fn set_on_range_selected(&mut self, callback: js_sys::Function) {
        self.engine.set_on_range_selected(move |[start, end]| {
            let range = js_sys::Array::of2(
                &JsValue::from(start as u32),
                &JsValue::from(end as u32),
            );
            if let Err(e) = callback.call1(&JsValue::NULL, &range) {
                log::error!("onRangeSelected threw: {e:?}");
            }
        });
    }

    /// Re-read the canvas' CSS size after a layout change.
    pub fn resize_display(&mut self) {
        self.sync_display_size();
    }

    /// Forward `pointerdown` (offset coordinates).
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.pointer(PointerEvent::Down { x, y })
    }

    /// Forward `pointermove` (offset coordinates).
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.pointer(PointerEvent::Move { x, y })
    }

    /// Forward `pointerup` (offset coordinates).
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.pointer(PointerEvent::Up { x, y })
    }

    /// Forward `pointerleave`.
    pub fn pointer_leave(&mut self) -> Result<(), JsValue> {
        self.pointer(PointerEvent::Leave)
    }

    /// Forward a `keydown` event's `code`.
    pub fn key_down(&mut self, code: &str) -> Result<(), JsValue> {
        if self.engine.handle_key_press(code) {
            self.redraw()?;
        }
        Ok(())
    }

    /// Blit the composited heatmap and draw the distance label.
    pub fn redraw(&mut self) -> Result<(), JsValue> {
        let composition = self.engine.composite();
        let image = composition.flatten();
        let n = image.size() as u32;
        if n == 0 {
            self.ctx.clear_rect(
                0.0,
                0.0,
                f64::from(self.canvas.width()),
                f64::from(self.canvas.height()),
            );
            return Ok(());
        }
        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(image.as_bytes()),
            n,
            n,
        )?;
        self.ctx.put_image_data(&data, 0.0, 0.0)?;

        for overlay in composition.overlays() {
            if let Overlay::DistanceLabel { row, col, text } = overlay {
                let x = (*col as f64 + 2.0).min(f64::from(n) - 1.0);
                let y = (*row as f64 - 2.0).max(10.0);
                self.ctx.set_fill_style_str("black");
                self.ctx.set_font("10px sans-serif");
                self.ctx.fill_text(text, x, y)?;
            }
        }
        Ok(())
    }
}

impl WebContactMap {
    fn pointer(&mut self, event: PointerEvent) -> Result<(), JsValue> {
        if self.engine.handle_pointer(event) {
            self.redraw()?;
        }
        Ok(())
    }

    fn sync_display_size(&mut self) {
        let width = self.canvas.client_width() as f32;
        let height = self.canvas.client_height() as f32;
        self.engine.set_display_size(width, height);
    }
}
