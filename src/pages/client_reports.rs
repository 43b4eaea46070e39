use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::format::{format_currency, format_date};
use crate::models::CampaignReport;
use crate::state::{DateFilters, ListAction, ListState};
use crate::ui::{page_shell, use_app_config, DateFilterForm, PaginationControls};

#[derive(Properties, PartialEq)]
pub struct ClientReportsProps {
    pub code: String,
}

#[function_component(ClientReportsPage)]
pub fn client_reports_page(props: &ClientReportsProps) -> Html {
    let config = use_app_config();
    let state = use_reducer_eq(ListState::<CampaignReport>::default);
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
                state.dispatch(ListAction::Started { ticket });
                let query = state.page_query();
                let ignore = Rc::new(Cell::new(false));
                let flag = ignore.clone();
                spawn_local(async move {
                    let result = api::get_client_campaign_reports(&config, &code, &query).await;
                    if flag.get() {
                        return;
                    }
                    state.dispatch(ListAction::Loaded { ticket, result });
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
            state.dispatch(ListAction::ApplyFilters(filters));
        })
    };

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ListAction::PrevPage))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ListAction::NextPage))
    };

    let is_not_found = state.is_not_found();

    html! {
        { page_shell(
            "Campaign Reports",
            "Transparent view of every recorded spend item.",
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
                        if !is_not_found {
                            html! {
                                <>
                                    <div class="w-full overflow-x-auto rounded-xl border border-border bg-white">
                                        <table class="w-full text-sm text-left border-collapse">
                                            <thead class="bg-muted/60">
                                                <tr class="text-muted-foreground text-[10px] uppercase tracking-widest">
                                                    <th class="px-4 py-2 font-bold">{"Date"}</th>
                                                    <th class="px-4 py-2 font-bold">{"Account ID"}</th>
                                                    <th class="px-4 py-2 font-bold text-right">{"Spend"}</th>
                                                </tr>
                                            </thead>
                                            <tbody class="divide-y divide-border">
                                                { if state.loading {
                                                    html! { <tr><td colspan="3" class="px-4 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                                } else if state.items.is_empty() {
                                                    html! { <tr><td colspan="3" class="px-4 py-6 text-center text-muted-foreground">{"No campaign reports found."}</td></tr> }
                                                } else {
                                                    html! {
                                                        <>
                                                            { for state.items.iter().map(|report| html! {
                                                                <tr key={report.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                                    <td class="px-4 py-3 text-muted-foreground">{ format_date(Some(report.report_date.as_str())) }</td>
                                                                    <td class="px-4 py-3 text-foreground">{ report.account_id.clone() }</td>
                                                                    <td class="px-4 py-3 text-right font-medium">{ format_currency(report.client_spend, report.currency.as_deref().unwrap_or("USD")) }</td>
                                                                </tr>
                                                            }) }
                                                        </>
                                                    }
                                                }}
                                            </tbody>
                                        </table>
                                    </div>
                                    <PaginationControls
                                        page={state.page}
                                        page_count={state.page_count()}
                                        disabled={state.loading}
                                        on_prev={on_prev}
                                        on_next={on_next}
                                    />
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
