use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Shared stop flag for a running loop. Cloning shares the same flag.
#[derive(Clone, Default)]
pub struct StopFlag(Rc<Cell<bool>>);

impl StopFlag {
    pub fn raise(&self) {
        self.0.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }
}

/// One step of work per tick, until the flag is raised.
pub struct FrameTask<F> {
    step: F,
    stop: StopFlag,
}

impl<F: FnMut()> FrameTask<F> {
    pub fn new(step: F, stop: StopFlag) -> Self {
        Self { step, stop }
    }

    /// Runs one step. Returns whether the task wants another tick.
    pub fn tick(&mut self) -> bool {
        if self.stop.is_raised() {
            return false;
        }
        (self.step)();
        !self.stop.is_raised()
    }
}

type SharedTask = Rc<RefCell<FrameTask<Box<dyn FnMut()>>>>;

/// Drives a `FrameTask` from the browser's display refresh.
pub struct FrameLoop {
    stop: StopFlag,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start(step: impl FnMut() + 'static) -> Self {
        let stop = StopFlag::default();
        let boxed: Box<dyn FnMut()> = Box::new(step);
        let task = Rc::new(RefCell::new(FrameTask::new(boxed, stop.clone())));
        let pending = Rc::new(RefCell::new(None));

        schedule(task, stop.clone(), Rc::clone(&pending));

        Self { stop, pending }
    }

    pub fn stop(&self) {
        self.stop.raise();
        // Dropping the handle cancels the outstanding request.
        self.pending.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_raised()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(task: SharedTask, stop: StopFlag, pending: Rc<RefCell<Option<AnimationFrame>>>) {
    if stop.is_raised() {
        return;
    }
    let slot = Rc::clone(&pending);
    let frame = request_animation_frame(move |_timestamp| {
        let again = task.borrow_mut().tick();
        if again {
            schedule(task, stop, slot);
        } else {
            slot.borrow_mut().take();
        }
    });
    *pending.borrow_mut() = Some(frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_until_stopped() {
        let count = Rc::new(Cell::new(0));
        let stop = StopFlag::default();
        let c = Rc::clone(&count);
        let mut task = FrameTask::new(move || c.set(c.get() + 1), stop.clone());

        assert!(task.tick());
        assert!(task.tick());
        stop.raise();
        assert!(!task.tick());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn stop_raised_inside_step_prevents_reschedule() {
        let stop = StopFlag::default();
        let inner = stop.clone();
        let mut task = FrameTask::new(move || inner.raise(), stop.clone());

        assert!(!task.tick());
        assert!(stop.is_raised());
    }
}
