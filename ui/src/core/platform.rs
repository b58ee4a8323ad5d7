//! Platform detection helpers.

#[cfg(target_arch = "wasm32")]
pub fn platform_string() -> String {
    "web".to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_string() -> String {
    std::env::consts::OS.to_string()
}
