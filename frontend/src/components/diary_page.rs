use shared::DiaryRoute;
use yew::prelude::*;

use super::account_book::AccountBook;
use crate::services::date_utils::format_diary_heading;
use crate::services::AppServices;

#[derive(Properties, PartialEq)]
pub struct DiaryPageProps {
    pub route: DiaryRoute,
}

/// Detail view of one diary day.
#[function_component(DiaryPage)]
pub fn diary_page(props: &DiaryPageProps) -> Html {
    let services = use_context::<AppServices>();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(services) = &services {
            services.navigator.navigate_to("/");
        }
    });

    let heading = props
        .route
        .date()
        .map(format_diary_heading)
        .unwrap_or_else(|_| props.route.diary_id.clone());

    html! {
        <div class="diary-page">
            <div class="diary-header">
                <button class="btn btn-basic" onclick={on_back}>{"달력"}</button>
                <h2>{heading}</h2>
            </div>
            <AccountBook key={props.route.diary_id.clone()} />
        </div>
    }
}
