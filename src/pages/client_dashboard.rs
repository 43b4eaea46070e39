use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::format::{format_currency, format_date};
use crate::state::{DateFilters, SummaryAction, SummaryState};
use crate::ui::{page_shell, use_app_config, DateFilterForm, SummaryCard};

#[derive(Properties, PartialEq)]
pub struct ClientDashboardProps {
    pub code: String,
}

#[function_component(ClientDashboardPage)]
pub fn client_dashboard_page(props: &ClientDashboardProps) -> Html {
    let config = use_app_config();
    let state = use_reducer_eq(SummaryState::default);
    let ticket_counter = use_mut_ref(|| 0u32);
    let draft_from = use_state(|| "".to_string());
    let draft_to = use_state(|| "".to_string());
    let filter_error = use_state(|| None::<String>);

    {
        let state = state.clone();
        let config = config.clone();
        let code = props.code.clone();
        let ticket_counter = ticket_counter.clone();
        let key = state.fetch_key();
        use_effect_with_deps(
            move |_| {
                let ticket = {
                    let mut counter = ticket_counter.borrow_mut();
                    *counter += 1;
                    *counter
                };
                state.dispatch(SummaryAction::Started { ticket });
                let from = state.applied.from_param();
                let to = state.applied.to_param();
                let ignore = Rc::new(Cell::new(false));
                let flag = ignore.clone();
                spawn_local(async move {
                    let result =
                        api::get_client_dashboard(&config, &code, from.as_deref(), to.as_deref())
                            .await;
                    if flag.get() {
                        return;
                    }
                    state.dispatch(SummaryAction::Loaded { ticket, result });
                });
                move || ignore.set(true)
            },
            (props.code.clone(), key),
        );
    }

    let on_apply = {
        let draft_from = draft_from.clone();
        let draft_to = draft_to.clone();
        let filter_error = filter_error.clone();
        let state = state.clone();
        Callback::from(move |_| {
            let filters = DateFilters {
                from_date: draft_from.trim().to_string(),
                to_date: draft_to.trim().to_string(),
            };
            if let Err(msg) = filters.validate() {
                filter_error.set(Some(msg));
                return;
            }
            filter_error.set(None);
            state.dispatch(SummaryAction::ApplyFilters(filters));
        })
    };

    let is_not_found = state.is_not_found();
    let title = state
        .data
        .as_ref()
        .map(|d| d.org_client.name.clone())
        .unwrap_or_else(|| "Client Dashboard".to_string());

    html! {
        { page_shell(
            &title,
            "Topups, spend, and remaining balance at a glance.",
            html! {
                <>
                    <DateFilterForm
                        from_date={(*draft_from).clone()}
                        to_date={(*draft_to).clone()}
                        error={(*filter_error).clone()}
                        on_from={Callback::from(move |v| draft_from.set(v))}
                        on_to={Callback::from(move |v| draft_to.set(v))}
                        on_apply={on_apply}
                    />

                    {
                        if let Some(error) = &state.error {
                            html! {
                                <div class="rounded-xl border border-red-200 bg-red-50 p-4 text-sm text-red-600 space-y-1">
                                    <p>{ error.to_string() }</p>
                                    {
                                        if is_not_found {
                                            html! { <p class="text-xs text-red-400">{"Org client code not found. Confirm the code or use the admin preview switcher."}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    {
                        if state.loading && state.data.is_none() {
                            html! { <p class="text-sm text-muted-foreground py-6">{"Loading..."}</p> }
                        } else if let Some(data) = &state.data {
                            let currency = data.summary.currency.as_str();
                            html! {
                                <>
                                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                        <SummaryCard
                                            title="Total Topup"
                                            value={format_currency(data.summary.total_topup, currency)}
                                        />
                                        <SummaryCard
                                            title="Total Spend"
                                            value={format_currency(data.summary.total_spend, currency)}
                                        />
                                        <SummaryCard
                                            title="Sisa Saldo"
                                            value={format_currency(data.summary.sisa_saldo, currency)}
                                        />
                                    </div>

                                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                                        <div class="rounded-xl border border-border bg-white">
                                            <div class="px-4 py-3 border-b border-border">
                                                <h3 class="text-sm font-semibold text-foreground">{"Latest Campaign Reports"}</h3>
                                            </div>
                                            <table class="w-full text-sm text-left border-collapse">
                                                <thead class="bg-muted/60">
                                                    <tr class="text-muted-foreground text-[10px] uppercase tracking-widest">
                                                        <th class="px-4 py-2 font-bold">{"Date"}</th>
                                                        <th class="px-4 py-2 font-bold">{"Account"}</th>
                                                        <th class="px-4 py-2 font-bold text-right">{"Spend"}</th>
                                                    </tr>
                                                </thead>
                                                <tbody class="divide-y divide-border">
                                                    { if data.latest_campaign_reports.is_empty() {
                                                        html! { <tr><td colspan="3" class="px-4 py-6 text-center text-muted-foreground">{"No reports yet."}</td></tr> }
                                                    } else {
                                                        html! {
                                                            <>
                                                                { for data.latest_campaign_reports.iter().map(|row| html! {
                                                                    <tr class="text-sm">
                                                                        <td class="px-4 py-3 text-muted-foreground">{ format_date(Some(row.report_date.as_str())) }</td>
                                                                        <td class="px-4 py-3 text-foreground">{ row.account_id.clone() }</td>
                                                                        <td class="px-4 py-3 text-right font-medium">{ format_currency(row.client_spend, row.currency.as_deref().unwrap_or(currency)) }</td>
                                                                    </tr>
                                                                }) }
                                                            </>
                                                        }
                                                    }}
                                                </tbody>
                                            </table>
                                        </div>

                                        <div class="rounded-xl border border-border bg-white">
                                            <div class="px-4 py-3 border-b border-border">
                                                <h3 class="text-sm font-semibold text-foreground">{"Latest Topups"}</h3>
                                            </div>
                                            <table class="w-full text-sm text-left border-collapse">
                                                <thead class="bg-muted/60">
                                                    <tr class="text-muted-foreground text-[10px] uppercase tracking-widest">
                                                        <th class="px-4 py-2 font-bold">{"Date"}</th>
                                                        <th class="px-4 py-2 font-bold">{"Jenis"}</th>
                                                        <th class="px-4 py-2 font-bold text-right">{"Amount"}</th>
                                                    </tr>
                                                </thead>
                                                <tbody class="divide-y divide-border">
                                                    { if data.latest_topups.is_empty() {
                                                        html! { <tr><td colspan="3" class="px-4 py-6 text-center text-muted-foreground">{"No topups yet."}</td></tr> }
                                                    } else {
                                                        html! {
                                                            <>
                                                                { for data.latest_topups.iter().map(|row| html! {
                                                                    <tr class="text-sm">
                                                                        <td class="px-4 py-3 text-muted-foreground">{ format_date(Some(row.topup_date.as_str())) }</td>
                                                                        <td class="px-4 py-3 text-foreground">{ row.jenis.clone() }</td>
                                                                        <td class="px-4 py-3 text-right font-medium">{ format_currency(row.client_topup, row.currency.as_deref().unwrap_or(currency)) }</td>
                                                                    </tr>
                                                                }) }
                                                            </>
                                                        }
                                                    }}
                                                </tbody>
                                            </table>
                                        </div>
                                    </div>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </>
            },
        ) }
    }
}
