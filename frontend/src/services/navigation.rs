use gloo::history::{BrowserHistory, History};
use shared::DiaryRoute;

/// Route changes requested by the views.
pub trait Navigator {
    fn navigate_to(&self, path: &str);

    fn navigate(&self, route: &DiaryRoute) {
        self.navigate_to(&route.path());
    }
}

/// Pushes onto the browser history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, path: &str) {
        BrowserHistory::new().push(path.to_string());
    }
}

/// Path of the current location, e.g. `/diary/20240305`.
pub fn current_path() -> String {
    BrowserHistory::new().location().path().to_string()
}
