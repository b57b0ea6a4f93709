#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod contact;
mod content;
mod cursor;
mod logging;
mod motion;
mod nav;
mod projects;
mod theme;
mod visibility;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
