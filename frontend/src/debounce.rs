use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs `callback` once events stop arriving for `wait_ms`.
///
/// Each trigger replaces the pending timeout; dropping a gloo `Timeout`
/// cancels it.
#[derive(Clone)]
pub struct Debounced {
    wait_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounced {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn trigger(&self) {
        let callback = self.callback.clone();
        let timeout = Timeout::new(self.wait_ms, move || callback());
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
