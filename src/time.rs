/// Elapsed and per-tick delta time, owned by the driver loop.
///
/// Consumers receive `&Time` and can only read it. The driver calls
/// [`Time::advance`] once per tick with a non-decreasing timestamp; the
/// timestamp is not validated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Time {
    elapsed: f32,
    delta: f32,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the driver started.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds between the last two ticks.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn realtime_since_startup(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, new_elapsed: f32) {
        self.delta = new_elapsed - self.elapsed;
        self.elapsed = new_elapsed;
    }
}
