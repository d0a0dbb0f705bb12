//! Contact form submission with simulated latency.
//!
//! `submit` and `complete` decide what the user sees; `bind` only moves
//! field values and button state between them and the DOM.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use crate::components::toast_host::Notifier;
use crate::state::contact_form::{ContactFormState, ContactSubmission, FormError, SUCCESS_MESSAGE};
use crate::state::notifications::NotificationKind;
use crate::util::analytics;

/// Validate the fields and enter the loading state, or raise the error toast.
///
/// # Errors
///
/// The [`FormError`] that was shown to the user. The form stays idle.
pub fn submit(
    state: &mut ContactFormState,
    notifier: Notifier,
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactSubmission, FormError> {
    state.begin(name, email, message).inspect_err(|e| {
        notifier.show(e.to_string(), NotificationKind::Error);
    })
}

/// Finish a pending submission after the latency: success toast, then the
/// event log line. A form that is not loading is left alone.
pub fn complete(state: &mut ContactFormState, notifier: Notifier) -> Option<ContactSubmission> {
    let submission = state.finish()?;
    notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
    analytics::log_event("Form submitted", &submission);
    Some(submission)
}

#[cfg(feature = "csr")]
const FORM_ID: &str = "contact-form";
#[cfg(feature = "csr")]
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

#[cfg(feature = "csr")]
fn field(data: &web_sys::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

#[cfg(feature = "csr")]
pub fn bind(page: &crate::app::Page) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

    use crate::state::contact_form::LOADING_CLASS;
    use crate::util::dom;

    let Some(form) = dom::by_id(FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        return;
    };
    let notifier = page.notifier;
    let latency = Duration::from_millis(u64::from(page.config.form_latency_ms));
    let state = Rc::new(RefCell::new(ContactFormState::default()));
    let form_ref = form.clone();

    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();

        let Ok(data) = FormData::new_with_form(&form_ref) else {
            return;
        };
        let begun = submit(
            &mut state.borrow_mut(),
            notifier,
            &field(&data, "name"),
            &field(&data, "email"),
            &field(&data, "message"),
        );
        if begun.is_err() {
            return;
        }

        let button = form_ref
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let original_text = button.as_ref().and_then(|b| b.text_content());
        if let Some(button) = &button {
            dom::add_classes(button, &[LOADING_CLASS]);
            button.set_disabled(true);
        }

        let form = form_ref.clone();
        let state = Rc::clone(&state);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(latency).await;
            form.reset();
            if let Some(button) = &button {
                dom::remove_classes(button, &[LOADING_CLASS]);
                button.set_disabled(false);
                button.set_text_content(original_text.as_deref());
            }
            complete(&mut state.borrow_mut(), notifier);
        });
    });
}
