//! Tauri Command Wrappers
//!
//! Frontend bindings to the desktop shell commands.

mod mask;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Rejections carry the shell's `{ kind, message }` error
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

pub use mask::*;
