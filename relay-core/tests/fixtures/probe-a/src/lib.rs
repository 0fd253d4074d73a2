//! Test fixture plugin: appends each received event to the file named by
//! the `RELAY_PROBE_LOG` environment variable, tagged `a:`.

use std::io::Write;

fn record(event: &str) {
    let Ok(path) = std::env::var("RELAY_PROBE_LOG") else {
        return;
    };
    if let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        let _ = writeln!(file, "a:{event}");
    }
}

relay_plugin_api::export_callback!(record);
