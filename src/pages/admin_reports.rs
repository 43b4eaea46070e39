use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, FieldError};
use crate::format::{format_currency, format_date};
use crate::models::{CampaignReport, CreateCampaignReportInput, OrgClient};
use crate::state::{DateFilters, ListAction, ListState};
use crate::ui::{page_shell, use_app_config, DateFilterForm, PaginationControls};

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[function_component(AdminReportsPage)]
pub fn admin_reports_page() -> Html {
    let config = use_app_config();
    let state = use_reducer_eq(ListState::<CampaignReport>::default);
    let ticket_counter = use_mut_ref(|| 0u32);

    let clients = use_state(Vec::<OrgClient>::new);
    let clients_loading = use_state(|| true);
    let roster_error = use_state(|| None::<String>);
    let selected_org = use_state(|| "".to_string());

    let draft_from = use_state(|| "".to_string());
    let draft_to = use_state(|| "".to_string());
    let filter_error = use_state(|| None::<String>);

    let report_date = use_state(today);
    let account_id = use_state(|| "".to_string());
    let client_spend = use_state(|| "".to_string());
    let saving = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let validation_errors = use_state(Vec::<FieldError>::new);

    {
        let config = config.clone();
        let clients = clients.clone();
        let clients_loading = clients_loading.clone();
        let roster_error = roster_error.clone();
        let selected_org = selected_org.clone();
        use_effect_with_deps(
            move |_| {
                let ignore = Rc::new(Cell::new(false));
                let flag = ignore.clone();
                spawn_local(async move {
                    let result = api::get_admin_org_clients(&config, None, Some(true)).await;
                    if flag.get() {
                        return;
                    }
                    clients_loading.set(false);
                    match result {
                        Ok(list) => {
                            if selected_org.is_empty() {
                                if let Some(first) = list.first() {
                                    selected_org.set(first.id.clone());
                                }
                            }
                            clients.set(list);
                        }
                        Err(error) => roster_error.set(Some(error.to_string())),
                    }
                });
                move || ignore.set(true)
            },
            (),
        );
    }

    {
        let state = state.clone();
        let config = config.clone();
        let ticket_counter = ticket_counter.clone();
        let org_id = (*selected_org).clone();
        let key = state.fetch_key();
        use_effect_with_deps(
            move |_| {
                let ignore = Rc::new(Cell::new(false));
                if !org_id.is_empty() {
                    let ticket = {
                        let mut counter = ticket_counter.borrow_mut();
                        *counter += 1;
                        *counter
                    };
                    state.dispatch(ListAction::Started { ticket });
                    let query = state.page_query();
                    let flag = ignore.clone();
                    spawn_local(async move {
                        let result =
                            api::get_admin_campaign_reports(&config, &org_id, &query).await;
                        if flag.get() {
                            return;
                        }
                        state.dispatch(ListAction::Loaded { ticket, result });
                    });
                }
                move || ignore.set(true)
            },
            ((*selected_org).clone(), key),
        );
    }

    let on_org_change = {
        let selected_org = selected_org.clone();
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected_org.set(select.value());
            state.dispatch(ListAction::Refresh);
        })
    };

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

    let on_create = {
        let config = config.clone();
        let state = state.clone();
        let selected_org = selected_org.clone();
        let report_date = report_date.clone();
        let account_id = account_id.clone();
        let client_spend = client_spend.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let validation_errors = validation_errors.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            let org_id = selected_org.trim().to_string();
            let date = report_date.trim().to_string();
            let account = account_id.trim().to_string();
            let spend_raw = client_spend.trim().to_string();
            if org_id.is_empty() || date.is_empty() || account.is_empty() || spend_raw.is_empty() {
                form_error.set(Some("All fields are required.".to_string()));
                return;
            }
            let spend = match spend_raw.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    form_error.set(Some("Client spend must be a number.".to_string()));
                    return;
                }
            };
            saving.set(true);
            form_error.set(None);
            validation_errors.set(Vec::new());

            let input = CreateCampaignReportInput {
                org_client_id: org_id,
                report_date: date,
                account_id: account,
                client_spend: spend,
            };
            let config = config.clone();
            let state = state.clone();
            let account_id = account_id.clone();
            let client_spend = client_spend.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();
            let validation_errors = validation_errors.clone();
            spawn_local(async move {
                let result = api::create_admin_campaign_report(&config, &input).await;
                saving.set(false);
                match result {
                    Ok(_) => {
                        account_id.set("".to_string());
                        client_spend.set("".to_string());
                        state.dispatch(ListAction::Refresh);
                    }
                    Err(error) => {
                        validation_errors.set(error.field_errors().to_vec());
                        form_error.set(Some(error.to_string()));
                    }
                }
            });
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

    html! {
        { page_shell(
            "Campaign Reports",
            "Record daily spend per org client and browse the ledger.",
            html! {
                <>
                    {
                        if let Some(error) = &*roster_error {
                            html! { <div class="rounded-xl border border-red-200 bg-red-50 p-4 text-sm text-red-600">{ error.clone() }</div> }
                        } else {
                            html! {}
                        }
                    }

                    <section class="w-full space-y-4 rounded-xl border border-border bg-white p-4">
                        <div>
                            <h3 class="text-base font-medium text-foreground">{"New Campaign Report"}</h3>
                            <p class="text-xs text-muted-foreground">{"Spend entries post against the selected org client."}</p>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-5 gap-4 items-end">
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Org client"}</label>
                                <select onchange={on_org_change.clone()} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none">
                                    { if *clients_loading {
                                        html! { <option selected={true} disabled={true}>{"Loading..."}</option> }
                                    } else if clients.is_empty() {
                                        html! { <option selected={true} disabled={true}>{"No active org clients"}</option> }
                                    } else {
                                        html! {
                                            <>
                                                { for clients.iter().map(|client| html! {
                                                    <option value={client.id.clone()} selected={client.id == *selected_org}>
                                                        { format!("{} ({})", client.name, client.code) }
                                                    </option>
                                                }) }
                                            </>
                                        }
                                    }}
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Report date"}</label>
                                <input type="date" value={(*report_date).clone()} oninput={{
                                    let report_date = report_date.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        report_date.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Account ID"}</label>
                                <input value={(*account_id).clone()} placeholder="ACC-001" oninput={{
                                    let account_id = account_id.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        account_id.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Client spend"}</label>
                                <input type="number" step="0.01" value={(*client_spend).clone()} placeholder="0.00" oninput={{
                                    let client_spend = client_spend.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        client_spend.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none" />
                            </div>
                            <button onclick={on_create} disabled={*saving} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold w-fit disabled:opacity-50">
                                { if *saving { "Saving..." } else { "Add Report" } }
                            </button>
                        </div>
                        {
                            if let Some(msg) = &*form_error {
                                html! {
                                    <div class="text-sm text-red-500 space-y-1">
                                        <p>{ msg.clone() }</p>
                                        <ul class="text-xs list-disc pl-5">
                                            { for validation_errors.iter().map(|fe| html! { <li>{ fe.label() }</li> }) }
                                        </ul>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </section>

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
                            html! { <div class="rounded-xl border border-red-200 bg-red-50 p-4 text-sm text-red-600">{ error.to_string() }</div> }
                        } else {
                            html! {}
                        }
                    }

                    <div class="w-full overflow-x-auto rounded-xl border border-border bg-white">
                        <table class="w-full text-sm text-left border-collapse">
                            <thead class="bg-muted/60">
                                <tr class="text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-4 py-2 font-bold">{"Date"}</th>
                                    <th class="px-4 py-2 font-bold">{"Account"}</th>
                                    <th class="px-4 py-2 font-bold text-right">{"Spend"}</th>
                                    <th class="px-4 py-2 font-bold">{"Recorded"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { if selected_org.is_empty() {
                                    html! { <tr><td colspan="4" class="px-4 py-6 text-center text-muted-foreground">{"Select an org client to view its reports."}</td></tr> }
                                } else if state.loading {
                                    html! { <tr><td colspan="4" class="px-4 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                } else if state.items.is_empty() {
                                    html! { <tr><td colspan="4" class="px-4 py-6 text-center text-muted-foreground">{"No campaign reports found."}</td></tr> }
                                } else {
                                    html! {
                                        <>
                                            { for state.items.iter().map(|report| html! {
                                                <tr key={report.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                    <td class="px-4 py-3 text-muted-foreground">{ format_date(Some(report.report_date.as_str())) }</td>
                                                    <td class="px-4 py-3 text-foreground">{ report.account_id.clone() }</td>
                                                    <td class="px-4 py-3 text-right font-medium">{ format_currency(report.client_spend, report.currency.as_deref().unwrap_or("USD")) }</td>
                                                    <td class="px-4 py-3 text-muted-foreground">{ format_date(report.created_at.as_deref()) }</td>
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
            },
        ) }
    }
}
