//! Binary entrypoint for the browser-hosted playground.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    play::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `play_app` for wasm32 with the `csr` feature and serve it with a wasm bundler."
    );
}
