// Audio host. The simulation only emits typed cues; whatever noise (if
// any) comes out is decided entirely here.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::debug;
use crate::sim::Cue;

/// Consumer of simulation audio cues.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell for each cue. A terminal cannot honor the
/// frequency/duration payload, so that stays advisory and only shows up
/// in the debug log.
pub struct TerminalBell {
    enabled: bool,
    last_ring: Option<Instant>,
}

// Back-to-back cues (paddle hit + score in one frame) collapse into a
// single ring; most terminals swallow repeated BELs anyway.
const MIN_RING_GAP: Duration = Duration::from_millis(50);

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_ring: None,
        }
    }
}

impl CueSink for TerminalBell {
    fn play(&mut self, cue: Cue) {
        debug::log(
            "CUE",
            &format!(
                "{:?} ({} Hz, {} ms)",
                cue,
                cue.frequency_hz(),
                cue.duration_ms()
            ),
        );

        if !self.enabled {
            return;
        }

        if let Some(last) = self.last_ring {
            if last.elapsed() < MIN_RING_GAP {
                return;
            }
        }

        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
        self.last_ring = Some(Instant::now());
    }
}
