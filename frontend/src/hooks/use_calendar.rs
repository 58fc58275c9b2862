use std::rc::Rc;

use chrono::NaiveDate;
use shared::{CalendarAction, CalendarState, CalendarView, FetchError, MonthKey};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::AppServices;

const COMPONENT: &str = "calendar";

/// App-wide calendar state, wrapped so Yew can drive it with `use_reducer`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarModel {
    pub state: CalendarState,
}

impl Reducible for CalendarModel {
    type Action = CalendarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        state.apply(action);
        Rc::new(Self { state })
    }
}

/// Handle provided through `ContextProvider` to every calendar consumer.
pub type CalendarContext = UseReducerHandle<CalendarModel>;

#[hook]
pub fn use_calendar_store(initial_month: NaiveDate) -> CalendarContext {
    use_reducer(move || CalendarModel {
        state: CalendarState::new(initial_month),
    })
}

pub struct UseCalendarResult {
    pub view: CalendarView,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub go_to_today: Callback<MouseEvent>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select_day: Callback<NaiveDate>,
}

#[hook]
pub fn use_calendar(store: &CalendarContext, services: &AppServices) -> UseCalendarResult {
    // Fetch whenever the displayed month key changes
    use_effect_with(store.state.month_key(), {
        let store = store.clone();
        let services = services.clone();
        move |key: &MonthKey| {
            fetch_month(store, services, key.clone());
            || ()
        }
    });

    let go_to_today = {
        let store = store.clone();
        use_callback((), move |_: MouseEvent, _| {
            store.dispatch(CalendarAction::GoToToday { today: today() });
        })
    };

    let prev_month = {
        let store = store.clone();
        use_callback((), move |_: MouseEvent, _| {
            store.dispatch(CalendarAction::PreviousMonth);
        })
    };

    let next_month = {
        let store = store.clone();
        use_callback((), move |_: MouseEvent, _| {
            store.dispatch(CalendarAction::NextMonth);
        })
    };

    let select_day = {
        let store = store.clone();
        let navigator = services.navigator.clone();
        use_callback((), move |day: NaiveDate, _| {
            let (action, route) = CalendarAction::select_day(day);
            store.dispatch(action);
            navigator.navigate(&route);
        })
    };

    let view = store.state.view(today());

    let actions = UseCalendarActions {
        go_to_today,
        prev_month,
        next_month,
        select_day,
    };

    UseCalendarResult { view, actions }
}

fn fetch_month(store: CalendarContext, services: AppServices, key: MonthKey) {
    if !store.state.should_fetch(&key) {
        Logger::debug_with_component(COMPONENT, &format!("{key} already in flight"));
        return;
    }

    let request = match services
        .api_client
        .month_calendar_request(&key, services.credentials.as_ref())
    {
        Ok(request) => request,
        Err(FetchError::MissingToken) => {
            Logger::debug_with_component(COMPONENT, "no token stored, skipping summary fetch");
            return;
        }
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Failed to build request: {e}"));
            return;
        }
    };

    store.dispatch(CalendarAction::FetchStarted(key));
    let api_client = services.api_client;
    spawn_local(async move {
        let key = request.month_key().clone();
        match api_client.get_month_calendar(&request).await {
            Ok(summaries) => {
                store.dispatch(CalendarAction::SummariesLoaded { key, summaries });
            }
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("Failed to fetch calendar data for {key}: {e}"));
                store.dispatch(CalendarAction::FetchFailed { key });
            }
        }
    });
}
