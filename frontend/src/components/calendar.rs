use shared::{DayCell, WEEKDAY_LABELS};
use yew::prelude::*;

use crate::hooks::use_calendar::{use_calendar, CalendarContext};
use crate::services::logging::Logger;
use crate::services::AppServices;

/// Reads the app providers and hands them to [`CalendarBody`], so the
/// calendar hooks always run in the same order.
#[function_component(Calendar)]
pub fn calendar() -> Html {
    let store = use_context::<CalendarContext>();
    let services = use_context::<AppServices>();

    match (store, services) {
        (Some(store), Some(services)) => html! { <CalendarBody {store} {services} /> },
        _ => {
            Logger::error_with_component("calendar", "Calendar rendered outside the app providers");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarBodyProps {
    pub store: CalendarContext,
    pub services: AppServices,
}

#[function_component(CalendarBody)]
pub fn calendar_body(props: &CalendarBodyProps) -> Html {
    let calendar = use_calendar(&props.store, &props.services);
    let view = &calendar.view;
    let actions = &calendar.actions;

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <div>
                    <span class="calendar-year">{&view.year_label}</span>
                    <span class="calendar-month">{&view.month_label}</span>
                </div>
                <div class="calendar-nav">
                    <button class="btn btn-basic" onclick={actions.go_to_today.clone()}>{"오늘"}</button>
                    <button class="btn btn-save" onclick={actions.prev_month.clone()}>{"이전"}</button>
                    <button class="btn btn-save" onclick={actions.next_month.clone()}>{"다음"}</button>
                </div>
            </div>

            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="weekday">{*label}</div>
                })}
            </div>

            {for view.weeks.iter().map(|week| html! {
                <div class="calendar-week">
                    {for week.iter().map(|cell| html! {
                        <CalendarDayCell
                            key={cell.diary_id.clone()}
                            cell={cell.clone()}
                            on_select={actions.select_day.clone()}
                        />
                    })}
                </div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarDayCellProps {
    pub cell: DayCell,
    pub on_select: Callback<chrono::NaiveDate>,
}

#[function_component(CalendarDayCell)]
pub fn calendar_day_cell(props: &CalendarDayCellProps) -> Html {
    let cell = &props.cell;
    let onclick = {
        let on_select = props.on_select.clone();
        let date = cell.date;
        Callback::from(move |_: MouseEvent| on_select.emit(date))
    };

    html! {
        <div class={cell.bucket.css_class()} {onclick}>
            <div class="day-number">{&cell.label}</div>
            <div class="summary-box">
                {if let Some(summary) = &cell.summary {
                    html! {
                        <>
                            {if summary.etc {
                                html! { <span class="summary-etc">{"🟢"}</span> }
                            } else { html! {} }}
                            {for summary.emotion.map(|emotion| html! {
                                <div class="summary-emotion" title={emotion.label()}>
                                    {emotion.emoji()}
                                </div>
                            })}
                            {for summary.income.iter().map(|income| html! {
                                <div class="summary-amount income">{income}</div>
                            })}
                            {for summary.expense.iter().map(|expense| html! {
                                <div class="summary-amount expense">{expense}</div>
                            })}
                        </>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
