//! Bridge between domain [`Notification`]s and Thaw toasts.

use contracts::domain::a001_shopping_item::{Notification, NotificationIntent};
use leptos::prelude::*;
use std::time::Duration;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

/// How long a toast stays on screen
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(4);

pub fn toast_intent(intent: NotificationIntent) -> ToastIntent {
    match intent {
        NotificationIntent::Success => ToastIntent::Success,
        NotificationIntent::Info => ToastIntent::Info,
        NotificationIntent::Error => ToastIntent::Error,
    }
}

/// Fire-and-forget: show the notification and return immediately.
pub fn notify(toaster: &ToasterInjection, notification: Notification) {
    let Notification {
        title,
        description,
        intent,
    } = notification;

    log::debug!("toast [{:?}] {}: {}", intent, title, description);

    let options = ToastOptions::default()
        .with_intent(toast_intent(intent))
        .with_timeout(TOAST_TIMEOUT);

    toaster.dispatch_toast(
        move || {
            view! {
                <Toast>
                    <ToastTitle>{title}</ToastTitle>
                    <ToastBody>{description}</ToastBody>
                </Toast>
            }
        },
        options,
    );
}
