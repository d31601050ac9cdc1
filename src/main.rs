//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` locally.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::process::{Command, Stdio};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => {
            log::error!("wasm-pack finished with {st}. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            log::warn!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_owned());
    log::info!("serving http://127.0.0.1:{port}/ (try ?variant=spectrum or ?variant=clicker&drift=1)");
    let status = Command::new("python3")
        .args(["-m", "http.server", port.as_str(), "--directory", "static"])
        .stdout(Stdio::null())
        .status();

    let code = match status {
        Ok(st) if st.success() => 0,
        Ok(st) => {
            log::error!("http server exited with {st}");
            1
        }
        Err(e) => {
            log::error!("failed to start http server: {e}");
            1
        }
    };
    std::process::exit(code);
}

// The wasm entry point lives in the library (`wasm::main`).
#[cfg(target_arch = "wasm32")]
fn main() {}
