use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

use crate::services::navigation::current_path;

/// Current location path, re-rendering on push and back/forward.
#[hook]
pub fn use_current_path() -> String {
    let path = use_state(current_path);

    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let history = BrowserHistory::new();
            let source = history.clone();
            let listener = history.listen(move || {
                path.set(source.location().path().to_string());
            });
            move || drop(listener)
        });
    }

    (*path).clone()
}
