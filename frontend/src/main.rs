#[cfg(target_arch = "wasm32")]
fn main() {
    hrms_lite_frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("hrms-lite-frontend runs in the browser; build it with `trunk serve` or `trunk build`.");
}
