// Console logging and formatting helpers.
use crate::model::Point;

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cerror(msg: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));
}

// Off-wasm (unit tests) there is no console object to call into.
#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    eprintln!("{}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    eprintln!("warn: {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cerror(msg: &str) {
    eprintln!("error: {}", msg);
}

pub fn format_point(p: Point) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}
