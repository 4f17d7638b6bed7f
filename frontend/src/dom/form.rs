use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use super::listener::Listener;
use super::{query, Bindings};
use crate::components::notification::{show_notification, NotificationKind};
use crate::error::MountError;
use crate::utils::validation::{ContactForm, SUCCESS_MESSAGE};

const CONTACT_FORM: &str = ".contact-form";

fn read_form(form: &HtmlFormElement) -> Option<ContactForm> {
    let data = FormData::new_with_form(form).ok()?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Some(ContactForm {
        name: field("name"),
        email: field("email"),
        phone: field("phone"),
        message: field("message"),
    })
}

/// Checks the contact form before pretending to send it; the page has no
/// backend, so a valid submission only gets a confirmation toast.
pub fn contact_form() -> Result<Bindings, MountError> {
    let form = query(CONTACT_FORM)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| MountError::MissingElement(CONTACT_FORM))?;
    let target = form.clone();
    let listener = Listener::new(&form, "submit", move |e| {
        e.prevent_default();
        let Some(submission) = read_form(&target) else {
            return;
        };
        match submission.validate() {
            Ok(()) => {
                show_notification(SUCCESS_MESSAGE, NotificationKind::Success);
                target.reset();
            }
            Err(e) => show_notification(e.to_string(), NotificationKind::Error),
        }
    });
    Ok(Bindings {
        listeners: vec![listener],
        ..Bindings::default()
    })
}
