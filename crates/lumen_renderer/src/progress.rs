//! Progress reporting for long renders.

/// Receives human-readable status lines. Reporting never fails.
pub trait Progress {
    fn report(&mut self, message: &str);
}

/// Sends progress through the `log` facade.
///
/// Per-scanline lines go out at `debug` so a default `info` logger only
/// shows every `info_every`-th one.
#[derive(Debug, Clone)]
pub struct LogProgress {
    info_every: u32,
    count: u32,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::with_interval(25)
    }

    /// Log every `info_every`-th report at `info`, the rest at `debug`.
    pub fn with_interval(info_every: u32) -> Self {
        Self {
            info_every: info_every.max(1),
            count: 0,
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn report(&mut self, message: &str) {
        if self.count % self.info_every == 0 {
            log::info!("{}", message);
        } else {
            log::debug!("{}", message);
        }
        self.count = self.count.wrapping_add(1);
    }
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _message: &str) {}
}

/// Collects progress lines in memory.
impl Progress for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects_messages() {
        let mut lines: Vec<String> = Vec::new();
        lines.report("Scanlines remaining: 2");
        lines.report("Done.");
        assert_eq!(lines, vec!["Scanlines remaining: 2", "Done."]);
    }

    #[test]
    fn test_log_progress_counts() {
        let mut progress = LogProgress::with_interval(0);
        assert_eq!(progress.info_every, 1);
        progress.report("one");
        progress.report("two");
        assert_eq!(progress.count, 2);
    }
}
