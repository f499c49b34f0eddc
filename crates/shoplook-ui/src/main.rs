#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shoplook widget entry point.
//!
//! In the browser the widget mounts into `#shoplook-root`. Host builds only print
//! how to serve it.

#[cfg(not(target_arch = "wasm32"))]
const HOST_BUILD_HINT: &str = "shoplook-ui renders in the browser. From crates/shoplook-ui run \
`SHOPLOOK_API_URL=<gateway> trunk serve`, then open the page with `?shop=<shop>.myshopify.com` \
(or set `data-shop` on #shoplook-root).\n";

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    shoplook_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    io::stderr().lock().write_all(HOST_BUILD_HINT.as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_hint_names_widget_serve_flow() {
        assert!(HOST_BUILD_HINT.contains("trunk serve"));
        assert!(HOST_BUILD_HINT.contains("SHOPLOOK_API_URL"));
        assert!(HOST_BUILD_HINT.contains("?shop="));
        assert!(HOST_BUILD_HINT.contains("#shoplook-root"));
    }

    #[test]
    fn host_main_prints_hint() -> std::io::Result<()> {
        main()
    }
}
