//! Loop drivers.
//!
//! The per-frame function does not know how it is scheduled. A blocking
//! driver owns the loop on desktop targets; [`HostDriven`] adapts it to
//! platforms whose host calls back once per frame.

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Call `frame` until it asks to exit. Returns the number of frames run.
pub fn run_blocking<F>(mut frame: F) -> u64
where
    F: FnMut() -> LoopControl,
{
    let mut frames = 0;
    loop {
        frames += 1;
        if frame() == LoopControl::Exit {
            return frames;
        }
    }
}

/// Per-frame callback for a host-owned main loop.
///
/// Once the frame function has asked to exit, further ticks are no-ops so
/// a host that cancels late does not run extra frames.
pub struct HostDriven<F> {
    frame: F,
    finished: bool,
}

impl<F> HostDriven<F>
where
    F: FnMut() -> LoopControl,
{
    pub fn new(frame: F) -> Self {
        Self {
            frame,
            finished: false,
        }
    }

    /// Run one frame. `Exit` tells the host to cancel its loop.
    pub fn tick(&mut self) -> LoopControl {
        if self.finished {
            return LoopControl::Exit;
        }
        let control = (self.frame)();
        if control == LoopControl::Exit {
            self.finished = true;
        }
        control
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(mut remaining: u32) -> impl FnMut() -> LoopControl {
        move || {
            remaining -= 1;
            if remaining == 0 {
                LoopControl::Exit
            } else {
                LoopControl::Continue
            }
        }
    }

    #[test]
    fn test_run_blocking_counts_frames() {
        assert_eq!(run_blocking(countdown(3)), 3);
        assert_eq!(run_blocking(|| LoopControl::Exit), 1);
    }

    #[test]
    fn test_host_driven_stops_after_exit() {
        let mut calls = 0;
        let mut driver = HostDriven::new(|| {
            calls += 1;
            if calls == 2 {
                LoopControl::Exit
            } else {
                LoopControl::Continue
            }
        });

        assert_eq!(driver.tick(), LoopControl::Continue);
        assert!(!driver.is_finished());
        assert_eq!(driver.tick(), LoopControl::Exit);
        assert!(driver.is_finished());
        assert_eq!(driver.tick(), LoopControl::Exit);
        drop(driver);
        assert_eq!(calls, 2);
    }
}
