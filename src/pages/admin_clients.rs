use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, FieldError};
use crate::format::format_date;
use crate::models::{CreateOrgClientInput, OrgClient};
use crate::ui::{page_shell, use_app_config};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AdminClientsProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(AdminClientsPage)]
pub fn admin_clients_page(props: &AdminClientsProps) -> Html {
    let config = use_app_config();
    let clients = use_state(Vec::<OrgClient>::new);
    let loading = use_state(|| true);
    let fetch_error = use_state(|| None::<String>);
    // Bumped after a successful create so the roster reloads from the server
    // instead of splicing the response into local state.
    let reload = use_state(|| 0u32);

    let code = use_state(|| "".to_string());
    let name = use_state(|| "".to_string());
    let saving = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let validation_errors = use_state(Vec::<FieldError>::new);

    {
        let config = config.clone();
        let clients = clients.clone();
        let loading = loading.clone();
        let fetch_error = fetch_error.clone();
        use_effect_with_deps(
            move |_| {
                loading.set(true);
                let ignore = Rc::new(Cell::new(false));
                let flag = ignore.clone();
                spawn_local(async move {
                    let result = api::get_admin_org_clients(&config, None, None).await;
                    if flag.get() {
                        return;
                    }
                    loading.set(false);
                    match result {
                        Ok(list) => {
                            fetch_error.set(None);
                            clients.set(list);
                        }
                        Err(error) => fetch_error.set(Some(error.to_string())),
                    }
                });
                move || ignore.set(true)
            },
            (*reload,),
        );
    }

    let on_create = {
        let config = config.clone();
        let code = code.clone();
        let name = name.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let validation_errors = validation_errors.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            let new_code = code.trim().to_string();
            let new_name = name.trim().to_string();
            if new_code.is_empty() || new_name.is_empty() {
                form_error.set(Some("Code and name are required.".to_string()));
                return;
            }
            saving.set(true);
            form_error.set(None);
            validation_errors.set(Vec::new());

            let input = CreateOrgClientInput {
                code: new_code,
                name: new_name,
            };
            let config = config.clone();
            let code = code.clone();
            let name = name.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();
            let validation_errors = validation_errors.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let result = api::create_admin_org_client(&config, &input).await;
                saving.set(false);
                match result {
                    Ok(_) => {
                        code.set("".to_string());
                        name.set("".to_string());
                        reload.set(reload.wrapping_add(1));
                    }
                    Err(error) => {
                        validation_errors.set(error.field_errors().to_vec());
                        form_error.set(Some(error.to_string()));
                    }
                }
            });
        })
    };

    html! {
        { page_shell(
            "Org Clients",
            "Register org clients and open their portal view.",
            html! {
                <>
                    <section class="w-full space-y-4 rounded-xl border border-border bg-white p-4">
                        <div>
                            <h3 class="text-base font-medium text-foreground">{"New Org Client"}</h3>
                            <p class="text-xs text-muted-foreground">{"The code is the handle clients use to open their portal."}</p>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Code"}</label>
                                <input value={(*code).clone()} placeholder="ACME" oninput={{
                                    let code = code.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        code.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Name"}</label>
                                <input value={(*name).clone()} placeholder="Acme Corporation" oninput={{
                                    let name = name.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none" />
                            </div>
                            <button onclick={on_create} disabled={*saving} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold w-fit disabled:opacity-50">
                                { if *saving { "Saving..." } else { "Add Org Client" } }
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

                    {
                        if let Some(error) = &*fetch_error {
                            html! { <div class="rounded-xl border border-red-200 bg-red-50 p-4 text-sm text-red-600">{ error.clone() }</div> }
                        } else {
                            html! {}
                        }
                    }

                    <div class="w-full overflow-x-auto rounded-xl border border-border bg-white">
                        <table class="w-full text-sm text-left border-collapse">
                            <thead class="bg-muted/60">
                                <tr class="text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-4 py-2 font-bold">{"Code"}</th>
                                    <th class="px-4 py-2 font-bold">{"Name"}</th>
                                    <th class="px-4 py-2 font-bold">{"Status"}</th>
                                    <th class="px-4 py-2 font-bold">{"Created"}</th>
                                    <th class="px-4 py-2 font-bold text-right">{"Portal"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { if *loading {
                                    html! { <tr><td colspan="5" class="px-4 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                } else if clients.is_empty() {
                                    html! { <tr><td colspan="5" class="px-4 py-6 text-center text-muted-foreground">{"No org clients yet."}</td></tr> }
                                } else {
                                    html! {
                                        <>
                                            { for clients.iter().map(|client| {
                                                let on_navigate = props.on_navigate.clone();
                                                let portal_code = client.code.clone();
                                                let status = if client.is_active {
                                                    html! { <span class="inline-block px-2 py-0.5 rounded-full bg-emerald-100 text-emerald-700 text-[11px] font-bold">{"Active"}</span> }
                                                } else {
                                                    html! { <span class="inline-block px-2 py-0.5 rounded-full bg-slate-100 text-slate-500 text-[11px] font-bold">{"Inactive"}</span> }
                                                };
                                                html! {
                                                    <tr key={client.id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-4 py-3 font-medium text-foreground">{ client.code.clone() }</td>
                                                        <td class="px-4 py-3 text-foreground">{ client.name.clone() }</td>
                                                        <td class="px-4 py-3">{ status }</td>
                                                        <td class="px-4 py-3 text-muted-foreground">{ format_date(Some(client.created_at.as_str())) }</td>
                                                        <td class="px-4 py-3 text-right">
                                                            <button
                                                                onclick={Callback::from(move |_| on_navigate.emit(Route::ClientDashboard { code: portal_code.clone() }))}
                                                                class="px-3 py-1.5 rounded-lg border border-border text-xs font-bold text-[#173E63] hover:bg-muted/50"
                                                            >
                                                                {"Open"}
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }) }
                                        </>
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                </>
            },
        ) }
    }
}
