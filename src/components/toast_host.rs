//! Toast notifications rendered at the top-right corner of the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Notifier` is the handle the bindings use to raise a toast; `ToastHost`
//! is mounted once on `<body>` and renders whatever the notification center
//! holds. Each `show` call owns an independent timer chain.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::config::ToastTiming;
use crate::state::notifications::{Notification, NotificationCenter, NotificationKind};

/// Copyable handle over the shared notification center.
#[derive(Clone, Copy)]
pub struct Notifier {
    center: RwSignal<NotificationCenter>,
    timing: ToastTiming,
}

impl Notifier {
    pub fn new(timing: ToastTiming) -> Self {
        Self { center: RwSignal::new(NotificationCenter::default()), timing }
    }

    pub fn center(&self) -> RwSignal<NotificationCenter> {
        self.center
    }

    /// Raise a toast and schedule its entry, exit, and removal.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> Uuid {
        let notification = Notification::new(message, kind);
        let id = notification.id;
        self.center.update(|c| {
            c.insert(notification);
        });

        #[cfg(feature = "csr")]
        {
            use gloo_timers::future::sleep;
            use std::time::Duration;

            let center = self.center;
            let timing = self.timing;
            leptos::task::spawn_local(async move {
                sleep(Duration::from_millis(u64::from(timing.enter_delay_ms))).await;
                center.update(|c| {
                    c.reveal(id);
                });
                let hold = timing.display_ms.saturating_sub(timing.enter_delay_ms);
                sleep(Duration::from_millis(u64::from(hold))).await;
                center.update(|c| {
                    c.begin_dismiss(id);
                });
                sleep(Duration::from_millis(u64::from(timing.exit_ms))).await;
                center.update(|c| {
                    c.remove(id);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.timing;
        }

        id
    }

    /// Remove a toast now. Safe to call after it already expired.
    pub fn dismiss(&self, id: Uuid) {
        self.center.update(|c| {
            c.remove(id);
        });
    }
}

/// Renders every live notification.
#[component]
pub fn ToastHost(notifier: Notifier) -> impl IntoView {
    let center = notifier.center();
    view! {
        <For
            each=move || center.with(NotificationCenter::ids)
            key=|id| *id
            children=move |id| view! { <Toast notifier id/> }
        />
    }
}

#[component]
fn Toast(notifier: Notifier, id: Uuid) -> impl IntoView {
    let center = notifier.center();
    let message = center.with_untracked(|c| c.get(id).map(|n| n.message.clone()).unwrap_or_default());
    let class = move || center.with(|c| c.get(id).map(Notification::class_name).unwrap_or_default());

    view! {
        <div class=class>
            <div class="flex items-center justify-between">
                <span>{message}</span>
                <button class="ml-4 text-white hover:text-gray-200" on:click=move |_| notifier.dismiss(id)>
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M6 18L18 6M6 6l12 12"
                        ></path>
                    </svg>
                </button>
            </div>
        </div>
    }
}
