use std::rc::Rc;

use shared::{DraftField, LedgerBook, LedgerError};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "ledger";

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerAction {
    UpdateField { field: DraftField, value: String },
    Commit,
    Remove(String),
}

/// The account book plus the message of the last rejected action.
#[derive(Debug, Clone, Default)]
pub struct LedgerModel {
    pub book: LedgerBook,
    pub error: Option<String>,
}

impl Reducible for LedgerModel {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result: Result<(), LedgerError> = match action {
            LedgerAction::UpdateField { field, value } => next.book.update_draft_field(field, &value),
            LedgerAction::Commit => next.book.commit_draft().map(|_| ()),
            LedgerAction::Remove(id) => {
                next.book.remove_row(&id);
                Ok(())
            }
        };

        next.error = result.err().map(|e| {
            Logger::warn_with_component(COMPONENT, &e.to_string());
            e.to_string()
        });
        Rc::new(next)
    }
}

pub struct UseLedgerResult {
    pub state: Rc<LedgerModel>,
    pub actions: UseLedgerActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLedgerActions {
    /// Change handler shared by every draft input; the field is taken from
    /// the element's `name`.
    pub on_field_change: Callback<Event>,
    pub on_commit: Callback<MouseEvent>,
    pub on_remove: Callback<String>,
}

/// Name and value of the input or select that fired `event`.
fn field_input(event: &Event) -> Option<(String, String)> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[hook]
pub fn use_ledger() -> UseLedgerResult {
    let ledger = use_reducer(LedgerModel::default);

    let on_field_change = {
        let ledger = ledger.clone();
        use_callback((), move |event: Event, _| {
            let Some((name, value)) = field_input(&event) else {
                return;
            };
            match name.parse::<DraftField>() {
                Ok(field) => ledger.dispatch(LedgerAction::UpdateField { field, value }),
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_commit = {
        let ledger = ledger.clone();
        use_callback((), move |_: MouseEvent, _| {
            ledger.dispatch(LedgerAction::Commit);
        })
    };

    let on_remove = {
        let ledger = ledger.clone();
        use_callback((), move |id: String, _| {
            ledger.dispatch(LedgerAction::Remove(id));
        })
    };

    let state = Rc::new((*ledger).clone());

    let actions = UseLedgerActions {
        on_field_change,
        on_commit,
        on_remove,
    };

    UseLedgerResult { state, actions }
}
