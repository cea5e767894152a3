use reify::declarations::CheckOutcome;

#[derive(Default)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub broken_files: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &CheckOutcome) {
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failed == 0 && self.broken_files == 0
    }
}
