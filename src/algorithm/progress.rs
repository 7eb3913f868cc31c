const NUM_STEPS: usize = 10;

/// Reports how far a long running pass has come, as `log::info!` lines in 10% steps.
///
/// A disabled reporter does nothing, so the sorters can always carry one.
pub struct Progress {
    label: &'static str,
    total: usize,
    step_size: usize,
    next_report: usize,
    enabled: bool,
}

impl Progress {
    pub fn new(label: &'static str, total: usize, enabled: bool) -> Self {
        let step_size = (total / NUM_STEPS).max(1);

        Self {
            label,
            total,
            step_size,
            next_report: step_size,
            enabled,
        }
    }

    // called from the innermost sorting loops
    #[inline]
    pub fn update(&mut self, value: usize) {
        if !self.enabled || value < self.next_report {
            return;
        }

        let percent = value.min(self.total) * 100 / self.total.max(1);
        log::info!("{}: {percent}% ({value}/{})", self.label, self.total);

        self.next_report = (value / self.step_size + 1) * self.step_size;
    }

    pub fn finish(&mut self) {
        if self.enabled {
            log::info!("{}: done ({} elements)", self.label, self.total);
            self.enabled = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_steps_forward() {
        let mut progress = Progress::new("Testing", 100, true);
        assert_eq!(progress.next_report, 10);

        progress.update(5);
        assert_eq!(progress.next_report, 10);

        progress.update(37);
        assert_eq!(progress.next_report, 40);

        progress.finish();
        assert!(!progress.enabled);
    }

    #[test]
    fn test_progress_tiny_total() {
        let mut progress = Progress::new("Testing", 3, true);
        assert_eq!(progress.step_size, 1);

        progress.update(3);
        assert_eq!(progress.next_report, 4);
    }
}
