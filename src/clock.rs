/// Counts simulation steps and reports them as logical milliseconds.
///
/// Cooldowns are measured against [`LogicalClock::now`], so a run behaves the
/// same no matter how long a frame actually took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalClock {
    ticks: u64,
    frame_rate: u32,
}

impl LogicalClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            ticks: 0,
            frame_rate: frame_rate.max(1),
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn now(&self) -> u64 {
        self.ticks * 1000 / u64::from(self.frame_rate)
    }

    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }
}
