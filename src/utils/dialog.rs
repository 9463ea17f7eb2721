use std::rc::Rc;

/// Blocking user dialogs behind a seam so components never call the browser
/// directly and tests can script the answers.
pub trait UserDialogs {
    /// Ask the user to confirm a destructive action.
    fn confirm(&self, message: &str) -> bool;
    /// Show the user a message.
    fn notify(&self, message: &str);
}

/// Cloneable handle passed through Leptos context.
#[derive(Clone)]
pub struct Dialogs(Rc<dyn UserDialogs>);

impl Dialogs {
    pub fn new(inner: Rc<dyn UserDialogs>) -> Self {
        Self(inner)
    }

    pub fn confirm(&self, message: &str) -> bool {
        self.0.confirm(message)
    }

    pub fn notify(&self, message: &str) {
        self.0.notify(message)
    }
}

impl Default for Dialogs {
    fn default() -> Self {
        Self(Rc::new(BrowserDialogs))
    }
}

/// `window.confirm` / `window.alert`. Outside a browser (server render,
/// native tests) there is no window; confirm answers false and notify is
/// dropped.
pub struct BrowserDialogs;

impl UserDialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Scripted dialog double: answers `confirm` from a fixed response and
    /// records every prompt it was shown.
    pub struct RecordingDialogs {
        pub confirm_answer: bool,
        pub confirms: RefCell<Vec<String>>,
        pub notices: RefCell<Vec<String>>,
    }

    impl RecordingDialogs {
        pub fn answering(confirm_answer: bool) -> Rc<Self> {
            Rc::new(Self {
                confirm_answer,
                confirms: RefCell::new(Vec::new()),
                notices: RefCell::new(Vec::new()),
            })
        }
    }

    impl UserDialogs for RecordingDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.confirm_answer
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingDialogs;
    use super::*;

    #[test]
    fn declining_confirmation_is_observable() {
        let recorder = RecordingDialogs::answering(false);
        let dialogs = Dialogs::new(recorder.clone());

        assert!(!dialogs.confirm("Delete review?"));
        assert_eq!(recorder.confirms.borrow().as_slice(), ["Delete review?"]);
    }

    #[test]
    fn notifications_are_recorded_in_order() {
        let recorder = RecordingDialogs::answering(true);
        let dialogs = Dialogs::new(recorder.clone());

        dialogs.notify("Please select a customer");
        dialogs.notify("Failed to save customer");
        assert_eq!(
            recorder.notices.borrow().as_slice(),
            ["Please select a customer", "Failed to save customer"]
        );
    }

    #[test]
    fn browser_dialogs_answer_false_without_a_window() {
        // Native test environment has no window; the destructive path must
        // stay closed rather than default open.
        assert!(!BrowserDialogs.confirm("Delete review?"));
        BrowserDialogs.notify("ignored");
    }
}
