mod components;
mod config;
mod hooks;
mod services;

use shared::DiaryRoute;
use yew::prelude::*;

use components::calendar::Calendar;
use components::diary_page::DiaryPage;
use config::AppConfig;
use hooks::use_calendar::{use_calendar_store, CalendarContext};
use hooks::use_location::use_current_path;
use services::date_utils::today;
use services::logging::Logger;
use services::AppServices;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let services = use_memo(props.config.clone(), AppServices::from_config);
    let calendar = use_calendar_store(today());
    let path = use_current_path();

    let page = match DiaryRoute::from_path(&path) {
        Ok(route) => html! { <DiaryPage {route} /> },
        Err(_) => html! { <Calendar /> },
    };

    html! {
        <ContextProvider<AppServices> context={(*services).clone()}>
            <ContextProvider<CalendarContext> context={calendar}>
                <main class="diary-app">
                    {page}
                </main>
            </ContextProvider<CalendarContext>>
        </ContextProvider<AppServices>>
    }
}

fn main() {
    let config = AppConfig::from_env();
    Logger::init(config.log_level);
    Logger::info_with_component("app", &format!("starting with API base {:?}", config.api_base_url));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
