//! Single-slot notification presenter.
//!
//! # Responsibility
//! - Show at most one transient notification at a time.
//! - Hand out a timer handle per shown notification and honour it only
//!   while that notification is still the visible one.
//!
//! # Invariants
//! - State is either `Absent` or `Visible`; `notify` always ends `Visible`.
//! - A newer `notify` replaces the visible notification immediately and
//!   makes every earlier `TimerHandle` stale.
//! - A stale or early timer never removes anything.

use crate::clock::Clock;
use crate::model::notification::{Notification, NotificationId, NotificationKind};
use log::debug;

/// Auto-dismiss delay used when no override is configured.
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5_000;

/// Pending auto-dismiss timer bound to one notification instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub notification_id: NotificationId,
    /// Clock reading at which the notification expires.
    pub deadline_ms: u64,
}

/// Why a notification left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    User,
    Timeout,
    Replaced,
}

/// Notification currently on screen plus its timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNotification {
    pub notification: Notification,
    pub timer: TimerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterState {
    Absent,
    Visible(VisibleNotification),
}

/// Presenter owning the visible notification slot.
pub struct NotificationPresenter<C: Clock> {
    clock: C,
    auto_dismiss_ms: u64,
    state: PresenterState,
}

impl<C: Clock> NotificationPresenter<C> {
    pub fn new(clock: C) -> Self {
        Self::with_timeout(clock, DEFAULT_AUTO_DISMISS_MS)
    }

    pub fn with_timeout(clock: C, auto_dismiss_ms: u64) -> Self {
        Self {
            clock,
            auto_dismiss_ms,
            state: PresenterState::Absent,
        }
    }

    pub fn auto_dismiss_ms(&self) -> u64 {
        self.auto_dismiss_ms
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the visible notification, if any.
    pub fn current(&self) -> Option<&Notification> {
        match &self.state {
            PresenterState::Visible(visible) => Some(&visible.notification),
            PresenterState::Absent => None,
        }
    }

    /// Returns the timer of the visible notification, if any.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        match &self.state {
            PresenterState::Visible(visible) => Some(visible.timer),
            PresenterState::Absent => None,
        }
    }

    /// Shows `message`, replacing whatever is visible.
    ///
    /// The returned handle is the only one that can auto-dismiss this
    /// notification; the caller schedules it on its event loop.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> TimerHandle {
        if let Some(previous) = self.take_visible() {
            debug!(
                "event=notification_dismiss module=presenter status=ok reason={:?} notification_id={}",
                DismissReason::Replaced,
                previous.id
            );
        }

        let notification = Notification::new(message, kind);
        let timer = TimerHandle {
            notification_id: notification.id,
            deadline_ms: self.clock.now_ms().saturating_add(self.auto_dismiss_ms),
        };
        debug!(
            "event=notification_show module=presenter status=ok kind={} notification_id={} deadline_ms={}",
            kind.as_str(),
            notification.id,
            timer.deadline_ms
        );

        self.state = PresenterState::Visible(VisibleNotification {
            notification,
            timer,
        });
        timer
    }

    /// Shows an `info` notification.
    pub fn notify_info(&mut self, message: impl Into<String>) -> TimerHandle {
        self.notify(message, NotificationKind::default())
    }

    /// Close-control handler: removes the visible notification now.
    ///
    /// Its timer handle becomes stale. Returns `None` when nothing is shown.
    pub fn dismiss(&mut self) -> Option<Notification> {
        let removed = self.take_visible()?;
        debug!(
            "event=notification_dismiss module=presenter status=ok reason={:?} notification_id={}",
            DismissReason::User,
            removed.id
        );
        Some(removed)
    }

    /// Timer callback: removes the notification `handle` was issued for.
    ///
    /// Ignored when the handle is stale or its deadline has not been reached.
    pub fn on_timer_elapsed(&mut self, handle: TimerHandle) -> Option<Notification> {
        let is_live = matches!(
            &self.state,
            PresenterState::Visible(visible) if visible.timer == handle
        );
        if !is_live {
            debug!(
                "event=notification_timer module=presenter status=stale notification_id={}",
                handle.notification_id
            );
            return None;
        }
        if self.clock.now_ms() < handle.deadline_ms {
            return None;
        }

        let removed = self.take_visible()?;
        debug!(
            "event=notification_dismiss module=presenter status=ok reason={:?} notification_id={}",
            DismissReason::Timeout,
            removed.id
        );
        Some(removed)
    }

    /// Expires the visible notification if its deadline has passed.
    pub fn poll(&mut self) -> Option<Notification> {
        let handle = self.pending_timer()?;
        self.on_timer_elapsed(handle)
    }

    fn take_visible(&mut self) -> Option<Notification> {
        match std::mem::replace(&mut self.state, PresenterState::Absent) {
            PresenterState::Visible(visible) => Some(visible.notification),
            PresenterState::Absent => None,
        }
    }
}
