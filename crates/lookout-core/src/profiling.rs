//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are cheap no-ops until [`set_enabled`] turns them on. With the
//! `profiling-server` feature the data can be streamed to `puffin_viewer`.

pub use puffin::{profile_function, profile_scope};

/// Turn scope collection on or off.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

/// Whether scopes are currently collected.
pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Mark the start of a new frame.
///
/// Call once per UI frame so the viewer groups scopes by frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(feature = "profiling-server")]
mod server {
    use std::sync::OnceLock;

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Start the puffin HTTP server on `addr` (e.g. `"0.0.0.0:8585"`).
    pub fn start_server(addr: &str) {
        super::set_enabled(true);

        match puffin_http::Server::new(addr) {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://{}", addr);
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }
}

#[cfg(feature = "profiling-server")]
pub use server::start_server;
