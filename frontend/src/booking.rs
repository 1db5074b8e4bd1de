use std::cell::RefCell;
use std::rc::Rc;

use crate::config;
use crate::error::BookingError;

pub const OTHER_SERVICE: &str = "Other";

/// Intake form state for the free consultation page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub additional_info: String,
    // set semantics, kept in selection order so the notes line is stable
    interested_services: Vec<String>,
    other_service_description: String,
    other_service_error: Option<BookingError>,
}

/// What the user submitted, frozen for the booking view.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingSnapshot {
    pub name: String,
    pub email: String,
    pub interested_services: Vec<String>,
    pub other_service_description: Option<String>,
    pub additional_info: Option<String>,
    pub scheduling_url: String,
}

impl BookingForm {
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            interested_services: vec![service.into()],
            ..Self::default()
        }
    }

    pub fn interested_services(&self) -> &[String] {
        &self.interested_services
    }

    pub fn is_selected(&self, service: &str) -> bool {
        self.interested_services.iter().any(|s| s == service)
    }

    pub fn other_service_description(&self) -> &str {
        &self.other_service_description
    }

    pub fn other_service_error(&self) -> Option<&BookingError> {
        self.other_service_error.as_ref()
    }

    pub fn toggle_service(&mut self, service: &str) {
        if self.is_selected(service) {
            self.interested_services.retain(|s| s != service);
            if service == OTHER_SERVICE {
                self.other_service_description.clear();
                self.other_service_error = None;
            }
        } else {
            self.interested_services.push(service.to_string());
        }
    }

    /// Stores the "Other" description and re-validates it. An empty field is
    /// not flagged while typing; `submit` catches that case.
    pub fn set_other_service_description(&mut self, text: impl Into<String>) {
        self.other_service_description = text.into();
        let len = self.other_service_description.chars().count();
        self.other_service_error = if len > 0 && len < config::OTHER_SERVICE_MIN_CHARS {
            Some(too_short())
        } else {
            None
        };
    }

    /// Validates the form and freezes it for the scheduling hand-off.
    pub fn submit(&mut self) -> Result<BookingSnapshot, BookingError> {
        if self.is_selected(OTHER_SERVICE)
            && self.other_service_description.chars().count() < config::OTHER_SERVICE_MIN_CHARS
        {
            let err = too_short();
            self.other_service_error = Some(err.clone());
            return Err(err);
        }

        let other_service_description = (self.is_selected(OTHER_SERVICE)
            && !self.other_service_description.is_empty())
        .then(|| self.other_service_description.clone());
        let additional_info =
            (!self.additional_info.is_empty()).then(|| self.additional_info.clone());

        Ok(BookingSnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            interested_services: self.interested_services.clone(),
            other_service_description,
            additional_info,
            scheduling_url: self.scheduling_url(),
        })
    }

    /// Notes passed to the scheduler: services line, optional other-service
    /// line, then the additional information line.
    pub fn notes(&self) -> String {
        let mut notes = format!(
            "Interested Services: {}",
            self.interested_services.join(", ")
        );
        if self.is_selected(OTHER_SERVICE) {
            notes.push_str("\nOther Service: ");
            notes.push_str(&self.other_service_description);
        }
        notes.push_str("\nAdditional Information: ");
        notes.push_str(&self.additional_info);
        notes
    }

    /// Deep link into the scheduler with name, email and notes prefilled.
    ///
    /// `urlencoding` leaves only `A-Z a-z 0-9 - . _ ~` bare, so `!'()*` come
    /// out escaped too. Browsers decode them back to the same characters.
    pub fn scheduling_url(&self) -> String {
        format!(
            "{}?name={}&email={}&notes={}",
            config::SCHEDULING_URL,
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.email),
            urlencoding::encode(&self.notes()),
        )
    }
}

fn too_short() -> BookingError {
    BookingError::OtherServiceTooShort {
        min: config::OTHER_SERVICE_MIN_CHARS,
    }
}

/// Single-use message slot from the services page to the booking form.
///
/// Clones share the slot. Whatever is offered is handed out by exactly one
/// `take`.
#[derive(Clone, Default)]
pub struct Handoff(Rc<RefCell<Option<String>>>);

impl Handoff {
    pub fn offer(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = Some(value.into());
    }

    pub fn take(&self) -> Option<String> {
        self.0.borrow_mut().take()
    }
}

impl PartialEq for Handoff {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_other(description: &str) -> BookingForm {
        let mut form = BookingForm::default();
        form.toggle_service(OTHER_SERVICE);
        form.set_other_service_description(description);
        form
    }

    #[test]
    fn short_other_description_blocks_submit() {
        for len in 1..config::OTHER_SERVICE_MIN_CHARS {
            let mut form = form_with_other(&"x".repeat(len));
            assert!(form.other_service_error().is_some());
            assert_eq!(
                form.submit(),
                Err(BookingError::OtherServiceTooShort { min: 10 })
            );
            assert!(form.other_service_error().is_some());
        }
    }

    #[test]
    fn error_clears_when_description_is_long_enough_or_empty() {
        let mut form = form_with_other("short");
        assert!(form.other_service_error().is_some());

        form.set_other_service_description("short but");
        assert!(form.other_service_error().is_some());

        form.set_other_service_description("long enough");
        assert!(form.other_service_error().is_none());

        form.set_other_service_description("abc");
        form.set_other_service_description("");
        assert!(form.other_service_error().is_none());
    }

    #[test]
    fn empty_other_description_still_fails_on_submit() {
        let mut form = form_with_other("");
        assert!(form.other_service_error().is_none());
        assert!(form.submit().is_err());
        assert_eq!(
            form.other_service_error().map(|e| e.to_string()),
            Some("Please provide at least 10 characters".to_string())
        );
    }

    #[test]
    fn unchecking_other_clears_description_and_error() {
        let mut form = form_with_other("nope");
        form.toggle_service(OTHER_SERVICE);
        assert_eq!(form.other_service_description(), "");
        assert!(form.other_service_error().is_none());
        assert!(form.submit().is_ok());
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut form = BookingForm::with_service("AI Voice Agent");
        let before = form.interested_services().to_vec();

        form.toggle_service("AI Chat Assistant");
        form.toggle_service("AI Chat Assistant");
        assert_eq!(form.interested_services(), before.as_slice());

        form.toggle_service("AI Voice Agent");
        form.toggle_service("AI Voice Agent");
        assert_eq!(form.interested_services(), before.as_slice());
    }

    #[test]
    fn notes_and_url_for_simple_booking() {
        let mut form = BookingForm::with_service("AI Chat Assistant");
        form.name = "Jane".to_string();
        form.email = "jane@x.com".to_string();
        form.additional_info = "budget $5k".to_string();

        assert_eq!(
            form.notes(),
            "Interested Services: AI Chat Assistant\nAdditional Information: budget $5k"
        );

        let snapshot = form.submit().expect("valid form");
        let url = snapshot.scheduling_url;
        assert!(url.starts_with("https://cal.com/jay-starvico/secret?"));
        assert!(url.contains("name=Jane"));
        assert!(url.contains("email=jane%40x.com"));
        assert!(url.contains(
            "notes=Interested%20Services%3A%20AI%20Chat%20Assistant%0AAdditional%20Information%3A%20budget%20%245k"
        ));
    }

    #[test]
    fn notes_include_other_service_line() {
        let mut form = BookingForm::with_service("AI Voice Agent");
        form.toggle_service(OTHER_SERVICE);
        form.set_other_service_description("inventory forecasting");

        assert_eq!(
            form.notes(),
            "Interested Services: AI Voice Agent, Other\nOther Service: inventory forecasting\nAdditional Information: "
        );

        let snapshot = form.submit().expect("valid form");
        assert_eq!(
            snapshot.other_service_description.as_deref(),
            Some("inventory forecasting")
        );
        assert_eq!(snapshot.additional_info, None);
    }

    #[test]
    fn handoff_is_read_once() {
        let handoff = Handoff::default();
        let reader = handoff.clone();
        handoff.offer("Custom Solution");

        let form = reader
            .take()
            .map(BookingForm::with_service)
            .unwrap_or_default();
        assert_eq!(form.interested_services(), ["Custom Solution".to_string()]);
        assert_eq!(reader.take(), None);
        assert_eq!(handoff.take(), None);
    }

    #[test]
    fn handoff_clones_compare_equal() {
        let handoff = Handoff::default();
        assert!(handoff == handoff.clone());
        assert!(handoff != Handoff::default());
    }

    #[test]
    fn url_escapes_reserved_punctuation() {
        let mut form = BookingForm::with_service("AI Chat Assistant");
        form.name = "O'Brien (Acme)!".to_string();
        form.email = "ob@x.com".to_string();

        let url = form.scheduling_url();
        assert!(url.contains("name=O%27Brien%20%28Acme%29%21&"));

        let (_, query) = url.split_once('?').expect("query string");
        let name = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("name="))
            .expect("name parameter");
        assert_eq!(urlencoding::decode(name).expect("utf-8"), "O'Brien (Acme)!");
    }
}
