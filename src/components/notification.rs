use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::contact::clock::{BrowserClock, Clock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub leaving: bool,
    shown_at: f64,
}

/// Notifications currently on screen, oldest first.
///
/// Each one stays for `NOTIFICATION_DISPLAY_MS`, then leaves over
/// `NOTIFICATION_EXIT_MS` and is dropped. `sweep` applies whatever is due at
/// a given time.
#[derive(Debug, Default, PartialEq)]
pub struct NotificationStack {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            leaving: false,
            shown_at: now_ms,
        });
        id
    }

    /// Starts exits and drops finished notifications. Returns true if
    /// anything changed.
    pub fn sweep(&mut self, now_ms: f64) -> bool {
        let exit_after = f64::from(config::NOTIFICATION_DISPLAY_MS);
        let gone_after = exit_after + f64::from(config::NOTIFICATION_EXIT_MS);

        let before = self.items.len();
        self.items.retain(|n| now_ms - n.shown_at < gone_after);
        let mut changed = self.items.len() != before;

        for n in self.items.iter_mut() {
            if !n.leaving && now_ms - n.shown_at >= exit_after {
                n.leaving = true;
                changed = true;
            }
        }
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }
}

/// Inline style for the notification at `index`; the base offset lives in the
/// stylesheet so the small-screen rule still applies.
fn stack_offset_style(index: usize) -> String {
    format!("--stack-offset: {}rem;", index as f64 * 4.5)
}

/// Handle for showing notifications, handed out through context by
/// [`NotificationHost`].
#[derive(Clone)]
pub struct Notifier {
    stack: Rc<RefCell<NotificationStack>>,
    clock: BrowserClock,
    rerender: Callback<()>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stack, &other.stack)
    }
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.stack.borrow_mut().push(message, kind, self.clock.now_ms());
        debug!("Showing {:?} notification {}", kind, id);
        self.rerender.emit(());

        let notifier = self.clone();
        Timeout::new(config::NOTIFICATION_DISPLAY_MS, move || {
            notifier.sweep();
            Timeout::new(config::NOTIFICATION_EXIT_MS, move || notifier.sweep()).forget();
        })
        .forget();
    }

    fn sweep(&self) {
        let changed = self.stack.borrow_mut().sweep(self.clock.now_ms());
        if changed {
            self.rerender.emit(());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub children: Children,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let stack = use_mut_ref(NotificationStack::default);
    let force_update = use_force_update();

    let notifier = {
        let stack = stack.clone();
        use_memo(
            move |_| Notifier {
                stack,
                clock: BrowserClock,
                rerender: Callback::from(move |_| force_update.force_update()),
            },
            (),
        )
    };

    let items: Vec<Notification> = stack.borrow().iter().cloned().collect();

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        bottom: calc(2rem + var(--stack-offset, 0rem));
                        right: 2rem;
                        padding: 1rem 1.5rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        z-index: 10000;
                        animation: slideInRight 0.3s ease-out;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                        max-width: 400px;
                        color: white;
                    }
                    .notification.leaving {
                        animation: slideOutRight 0.3s ease-out forwards;
                    }
                    .notification-success { background: #10b981; }
                    .notification-error { background: #ef4444; }
                    .notification-info { background: #3b82f6; }
                    @keyframes slideInRight {
                        from { opacity: 0; transform: translateX(100px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes slideOutRight {
                        from { opacity: 1; transform: translateX(0); }
                        to { opacity: 0; transform: translateX(100px); }
                    }
                    @media (max-width: 480px) {
                        .notification {
                            bottom: calc(1rem + var(--stack-offset, 0rem));
                            right: 1rem;
                            left: 1rem;
                            max-width: none;
                        }
                    }
                "#}
            </style>
            {
                // Newer notifications sit above older ones.
                items.iter().enumerate().map(|(i, n)| {
                    html! {
                        <div
                            key={n.id}
                            role="status"
                            class={classes!("notification", n.kind.class(), n.leaving.then(|| "leaving"))}
                            style={stack_offset_style(i)}
                        >
                            {&n.message}
                        </div>
                    }
                }).collect::<Html>()
            }
        </ContextProvider<Notifier>>
    }
}

#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_to_info() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn notifications_keep_append_order_without_dedup() {
        let mut stack = NotificationStack::default();
        let a = stack.push("same", NotificationKind::Error, 0.0);
        let b = stack.push("same", NotificationKind::Error, 0.0);
        assert!(b > a);
        let ids: Vec<u64> = stack.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn stays_five_seconds_then_leaves_over_300ms() {
        let mut stack = NotificationStack::default();
        stack.push("Thanks", NotificationKind::Success, 1000.0);

        assert!(!stack.sweep(5999.0));
        assert!(!stack.iter().next().unwrap().leaving);

        assert!(stack.sweep(6000.0));
        assert!(stack.iter().next().unwrap().leaving);

        assert!(!stack.sweep(6299.0));
        assert_eq!(stack.iter().count(), 1);

        assert!(stack.sweep(6300.0));
        assert_eq!(stack.iter().count(), 0);
    }

    #[test]
    fn sweep_only_touches_notifications_that_are_due() {
        let mut stack = NotificationStack::default();
        let early = stack.push("first", NotificationKind::Info, 0.0);
        let late = stack.push("second", NotificationKind::Error, 4000.0);

        stack.sweep(5300.0);
        let ids: Vec<u64> = stack.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![late]);
        assert_ne!(early, late);
        assert!(!stack.iter().next().unwrap().leaving);

        stack.sweep(9000.0);
        assert!(stack.iter().next().unwrap().leaving);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut stack = NotificationStack::default();
        let first = stack.push("one", NotificationKind::Info, 0.0);
        stack.sweep(10_000.0);
        let second = stack.push("two", NotificationKind::Info, 10_000.0);
        assert_ne!(first, second);
    }

    #[test]
    fn stack_offset_leaves_bottom_to_the_stylesheet() {
        assert_eq!(stack_offset_style(0), "--stack-offset: 0rem;");
        assert_eq!(stack_offset_style(2), "--stack-offset: 9rem;");
        assert!(!stack_offset_style(1).contains("bottom"));
    }
}
