use shared::summary::group_thousands;
use shared::{category_options, format_expense, format_income, money_flow_options, SelectOption};
use yew::prelude::*;

use crate::hooks::use_ledger::use_ledger;

fn options_html(options: &[SelectOption], selected: &str) -> Html {
    options
        .iter()
        .map(|option| html! {
            <option key={option.value} value={option.value} selected={option.value == selected}>
                {option.label}
            </option>
        })
        .collect()
}

#[function_component(AccountBook)]
pub fn account_book() -> Html {
    let ledger = use_ledger();
    let book = &ledger.state.book;
    let draft = book.draft();
    let actions = &ledger.actions;

    let flow_choices = use_memo((), |_| money_flow_options());
    let category_choices = use_memo((), |_| category_options());
    let totals = book.totals();

    html! {
        <section class="account-book">
            <p>{"오늘 수입/지출을 알려주세요"}</p>

            {if let Some(error) = ledger.state.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="account-form">
                <select name="moneyFlow" onchange={actions.on_field_change.clone()}>
                    {options_html(&flow_choices, draft.money_flow.as_str())}
                </select>
                <select name="category" onchange={actions.on_field_change.clone()}>
                    {options_html(&category_choices, draft.category.as_str())}
                </select>
                <div class="amount-input">
                    <input
                        type="number"
                        min="0"
                        name="amount"
                        placeholder="금액을 입력해주세요"
                        value={draft.amount.clone()}
                        onchange={actions.on_field_change.clone()}
                    />
                    <label for="memo">{"원"}</label>
                </div>
                <input
                    id="memo"
                    type="text"
                    name="memo"
                    placeholder="메모를 입력해주세요"
                    value={draft.memo.clone()}
                    onchange={actions.on_field_change.clone()}
                />
                <button type="button" class="btn btn-save" onclick={actions.on_commit.clone()}>
                    {"추가하기"}
                </button>
            </div>

            <table class="account-table">
                <thead>
                    <tr>
                        <th>{"분류"}</th>
                        <th>{"카테고리"}</th>
                        <th>{"금액"}</th>
                        <th>{"메모"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for book.rows().iter().map(|row| {
                        let on_remove = actions.on_remove.clone();
                        let id = row.id.clone();
                        html! {
                            <tr key={row.id.clone()}>
                                <td>{row.money_flow.label()}</td>
                                <td>{row.category.label()}</td>
                                <td class="amount">{group_thousands(u128::from(row.amount))}</td>
                                <td>{&row.memo}</td>
                                <td>
                                    <button
                                        type="button"
                                        class="btn btn-delete"
                                        onclick={Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))}
                                    >
                                        {"삭제하기"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="5" class="totals">
                            {format_income(totals.income).unwrap_or_default()}
                            {" "}
                            {format_expense(totals.expense).unwrap_or_default()}
                        </td>
                    </tr>
                </tfoot>
            </table>
        </section>
    }
}
