use std::borrow::Cow;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// The spinner currently on screen, if any. Log lines are routed through it so
/// they do not tear the animation.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Spins until dropped.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<Cow<'static, str>>, q_level: u8) -> Self {
        let bar = if q_level > 1 {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };

        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}") {
            bar.set_style(style.tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]));
        }
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut active) = ACTIVE.lock() {
            *active = Some(bar.clone());
        }
        Self { bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
        if let Ok(mut active) = ACTIVE.lock() {
            active.take();
        }
    }
}

/// Writes above the active spinner, or straight to stdout when none is running.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end_matches('\n');

        let active = ACTIVE.lock().ok().and_then(|active| active.clone());
        match active {
            Some(bar) => bar.println(msg),
            None => println!("{msg}"),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
