/// Replays a pointer trace against a headless drag-scroll controller.
///
/// Usage: `dragscroll-replay [TRACE.json]`. Without a trace, a built-in demo
/// session is replayed. The report is printed as JSON.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dragscroll::{replay, AppConfig, Trace};

    let config = AppConfig::load_from_default_path().unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let trace = match std::env::args_os().nth(1) {
        Some(path) => match Trace::load(std::path::Path::new(&path)) {
            Ok(trace) => trace,
            Err(e) => {
                eprintln!("Failed to load trace {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No trace given, replaying demo session");
            Trace::demo()
        }
    };

    let report = replay(&trace, config.preferences.drag_scroll_config());
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
