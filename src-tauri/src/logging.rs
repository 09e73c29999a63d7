//! Logging Setup
//!
//! `RUST_LOG` filters (default `info`); `PLAYGROUND_LOG_JSON=true` switches to
//! JSON lines.

use tracing_subscriber::EnvFilter;

const ENV_LOG_JSON: &str = "PLAYGROUND_LOG_JSON";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if json_output(std::env::var(ENV_LOG_JSON).ok().as_deref()) {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}

fn json_output(raw: Option<&str>) -> bool {
    raw.map(|v| v.trim().eq_ignore_ascii_case("true")).unwrap_or(false)
}
