// Opt-in file-based diagnostic logging. The TUI owns stdout/stderr, so
// diagnostics go to a file that can be tailed from another terminal.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_PATH: &str = "/tmp/ghost-pong-debug.log";

/// Initialize debug logging to file. Controlled by the --debug flag;
/// when disabled no file is created and log() is a no-op.
pub fn init(enabled: bool) -> io::Result<()> {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);

    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE_PATH)?;

    writeln!(file, "=== Ghost Pong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", LOG_FILE_PATH)?;
    writeln!(file)?;

    Ok(())
}

/// Append a categorized line to the log file: [timestamp] [CATEGORY] message
pub fn log(category: &str, message: &str) {
    if !DEBUG_ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let timestamp = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_PATH)
    {
        let _ = writeln!(file, "[{:013}] [{}] {}", timestamp, category, message);
    }
}
