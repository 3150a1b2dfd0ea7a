//! One-shot timers
//!
//! A [`Timer`] wraps a single hidden event and re-exposes it as a
//! schedule / cancel / expire state machine:
//!
//! ```text
//! IDLE --schedule(delay, list)--> SCHEDULED --expire or cancel--> IDLE
//! ```
//!
//! There are no other states. Once back to idle the timer can be
//! re-scheduled, on the same or a different list.
//!
//! Behaviour is injected through three optional hooks rather than
//! subclassing: `on_schedule(time)` and `on_cancel(time)` observe the
//! host clock at the moment of the transition; `on_expire(list, time)`
//! additionally receives the running list. The timer is returned to idle
//! *before* `on_expire` runs, so the hook may immediately re-arm the
//! timer — timers are shallow `Clone` precisely so a hook can capture a
//! handle to its own timer.
//!
//! # Example
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use des_core_rs::{EventList, Timer};
//!
//! let mut list: EventList = EventList::default();
//! list.reset_to(0.0).unwrap();
//!
//! let fired = Rc::new(Cell::new(f64::NAN));
//! let timer = Timer::new("demo");
//! let seen = fired.clone();
//! timer.set_on_expire(move |_list, time| seen.set(time));
//!
//! timer.schedule(16.0, &mut list).unwrap();
//! list.run().unwrap();
//! assert_eq!(fired.get(), 16.0);
//! assert!(!timer.is_scheduled());
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;
use tracing::trace;

use crate::list::engine::ListTag;
use crate::list::{EventList, EventListError};
use crate::models::event::SimEvent;

/// Errors surfaced by timer operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimerError {
    /// Delay was negative, infinite or NaN.
    #[error("timer delay must be finite and non-negative (got {delay})")]
    InvalidDelay { delay: f64 },

    /// The host list's clock is not finite, so `clock + delay` is
    /// meaningless.
    #[error("cannot schedule a timer while the list clock is {time}")]
    InfiniteClock { time: f64 },

    /// The timer is already pending.
    #[error("timer is already scheduled")]
    AlreadyScheduled,

    /// `cancel` was handed a list the timer is not pending on.
    #[error("timer is scheduled on a different event list")]
    WrongEventList,

    /// The host list refused the timer's internal event.
    #[error("event list rejected the timer event: {0}")]
    List(#[from] EventListError),
}

type ClockHook = Box<dyn FnMut(f64)>;
type ExpireHook<P> = Box<dyn FnMut(&mut EventList<P>, f64)>;

struct TimerCore<P> {
    /// Identity of the host list while scheduled; `None` means idle.
    host: Option<Weak<ListTag>>,
    on_schedule: Option<ClockHook>,
    on_cancel: Option<ClockHook>,
    on_expire: Option<ExpireHook<P>>,
}

/// A single-shot, cancellable delay on an event list.
pub struct Timer<P = ()> {
    name: String,
    core: Rc<RefCell<TimerCore<P>>>,
    /// Reusable internal event; its action flips the timer back to idle
    /// and invokes the expire hook.
    expire_event: SimEvent<P>,
}

impl<P: 'static> Timer<P> {
    /// Creates an idle timer with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let core = Rc::new(RefCell::new(TimerCore {
            host: None,
            on_schedule: None,
            on_cancel: None,
            on_expire: None,
        }));
        let weak = Rc::downgrade(&core);
        let expire_event = SimEvent::new(0.0)
            .with_name(format!("{}_expire", name))
            .with_action(move |list, event| {
                let core = match weak.upgrade() {
                    Some(core) => core,
                    None => return Ok(()), // timer dropped while pending
                };
                // Back to idle before the user hook, so it may re-arm.
                let hook = {
                    let mut core = core.borrow_mut();
                    core.host = None;
                    core.on_expire.take()
                };
                if let Some(mut hook) = hook {
                    hook(list, event.time());
                    let mut core = core.borrow_mut();
                    if core.on_expire.is_none() {
                        core.on_expire = Some(hook);
                    }
                }
                Ok(())
            });
        Timer {
            name,
            core,
            expire_event,
        }
    }

    /// The timer's name; may be empty, never inspected by the engine.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the timer is currently pending on a live list.
    pub fn is_scheduled(&self) -> bool {
        self.core
            .borrow()
            .host
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some()
    }

    /// Installs the hook invoked right after the timer is scheduled, with
    /// the host clock at scheduling time.
    pub fn set_on_schedule<F>(&self, hook: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.core.borrow_mut().on_schedule = Some(Box::new(hook));
    }

    /// Installs the hook invoked after a pending timer is cancelled, with
    /// the host clock captured before the timer went idle.
    pub fn set_on_cancel<F>(&self, hook: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.core.borrow_mut().on_cancel = Some(Box::new(hook));
    }

    /// Installs the hook invoked on expiration with the running list and
    /// the expiration time. The timer is already idle when the hook runs.
    pub fn set_on_expire<F>(&self, hook: F)
    where
        F: FnMut(&mut EventList<P>, f64) + 'static,
    {
        self.core.borrow_mut().on_expire = Some(Box::new(hook));
    }

    /// Schedules the timer to expire `delay` after the list's current
    /// clock.
    ///
    /// # Errors
    ///
    /// - `InvalidDelay` for a negative, infinite or NaN delay.
    /// - `InfiniteClock` when the list clock is not finite (reset the
    ///   list to a finite time first).
    /// - `AlreadyScheduled` when the timer is pending.
    pub fn schedule(&self, delay: f64, list: &mut EventList<P>) -> Result<(), TimerError> {
        if delay < 0.0 || !delay.is_finite() {
            return Err(TimerError::InvalidDelay { delay });
        }
        let now = list.time();
        if !now.is_finite() {
            return Err(TimerError::InfiniteClock { time: now });
        }
        if self.is_scheduled() {
            return Err(TimerError::AlreadyScheduled);
        }
        self.expire_event.set_time(now + delay);
        list.add(&self.expire_event)?;
        trace!(name = %self.name, at = now + delay, "timer scheduled");
        let hook = {
            let mut core = self.core.borrow_mut();
            core.host = Some(Rc::downgrade(list.tag()));
            core.on_schedule.take()
        };
        if let Some(mut hook) = hook {
            hook(now);
            let mut core = self.core.borrow_mut();
            if core.on_schedule.is_none() {
                core.on_schedule = Some(hook);
            }
        }
        Ok(())
    }

    /// Cancels a pending timer; a no-op when the timer is idle.
    ///
    /// # Errors
    ///
    /// `WrongEventList` when the timer is pending on a different (live)
    /// list than the one supplied.
    pub fn cancel(&self, list: &mut EventList<P>) -> Result<(), TimerError> {
        let host = self.core.borrow().host.clone();
        let host = match host {
            Some(host) => host,
            None => return Ok(()),
        };
        match host.upgrade() {
            None => {
                // Host list is gone; nothing left to cancel.
                self.core.borrow_mut().host = None;
                Ok(())
            }
            Some(tag) => {
                if !Rc::ptr_eq(&tag, list.tag()) {
                    return Err(TimerError::WrongEventList);
                }
                let time = list.time();
                list.remove(&self.expire_event);
                trace!(name = %self.name, time, "timer cancelled");
                let hook = {
                    let mut core = self.core.borrow_mut();
                    core.host = None;
                    core.on_cancel.take()
                };
                if let Some(mut hook) = hook {
                    hook(time);
                    let mut core = self.core.borrow_mut();
                    if core.on_cancel.is_none() {
                        core.on_cancel = Some(hook);
                    }
                }
                Ok(())
            }
        }
    }
}

impl<P> Clone for Timer<P> {
    /// Shallow clone: both handles drive the same timer.
    fn clone(&self) -> Self {
        Timer {
            name: self.name.clone(),
            core: Rc::clone(&self.core),
            expire_event: self.expire_event.clone(),
        }
    }
}

impl<P: 'static> Default for Timer<P> {
    /// An idle, unnamed timer.
    fn default() -> Self {
        Timer::new("")
    }
}

impl<P> std::fmt::Debug for Timer<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("name", &self.name)
            .field("scheduled", &self.core.borrow().host.is_some())
            .finish()
    }
}
