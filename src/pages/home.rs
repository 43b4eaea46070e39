use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::ui::use_app_config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomeProps) -> Html {
    let config = use_app_config();
    let sample_codes = use_state(Vec::<String>::new);
    let code = use_state(|| "".to_string());

    // Best effort. The landing page works fine without sample codes, so a
    // failed roster fetch is logged by the api layer and otherwise dropped.
    {
        let config = config.clone();
        let sample_codes = sample_codes.clone();
        use_effect_with_deps(
            move |_| {
                let ignore = Rc::new(Cell::new(false));
                let flag = ignore.clone();
                spawn_local(async move {
                    if let Ok(list) = api::get_admin_org_clients(&config, None, Some(true)).await {
                        if flag.get() {
                            return;
                        }
                        sample_codes.set(
                            list.into_iter().take(3).map(|client| client.code).collect(),
                        );
                    }
                });
                move || ignore.set(true)
            },
            (),
        );
    }

    let on_open_code = {
        let code = code.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            let trimmed = code.trim().to_string();
            if trimmed.is_empty() {
                return;
            }
            on_navigate.emit(Route::ClientDashboard { code: trimmed });
        })
    };

    let on_admin = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::AdminClients))
    };

    html! {
        <div class="min-h-screen bg-background flex items-center justify-center p-6">
            <div class="w-full max-w-3xl space-y-8">
                <div class="text-center space-y-2">
                    <h1 class="text-3xl font-black tracking-tight text-[#173E63]">{"Ads Dashboard"}</h1>
                    <p class="text-sm text-muted-foreground">{"Campaign spend and topup ledgers for ads clients."}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="rounded-2xl border border-border bg-white p-6 space-y-4">
                        <div class="space-y-1">
                            <h2 class="text-lg font-semibold text-foreground">{"Admin Portal"}</h2>
                            <p class="text-sm text-muted-foreground">{"Manage org clients, post campaign reports, and record topups."}</p>
                        </div>
                        <button onclick={on_admin} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold">
                            {"Open Admin"}
                        </button>
                    </div>

                    <div class="rounded-2xl border border-border bg-white p-6 space-y-4">
                        <div class="space-y-1">
                            <h2 class="text-lg font-semibold text-foreground">{"Client Portal"}</h2>
                            <p class="text-sm text-muted-foreground">{"Enter your org code to view balances, spend, and topups."}</p>
                        </div>
                        <div class="flex gap-2">
                            <input
                                placeholder="Org code"
                                value={(*code).clone()}
                                oninput={{
                                    let code = code.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        code.set(input.value());
                                    })
                                }}
                                class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none"
                            />
                            <button onclick={on_open_code} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold">
                                {"Go"}
                            </button>
                        </div>
                        {
                            if sample_codes.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <div class="flex flex-wrap gap-2 items-center">
                                        <span class="text-[11px] text-muted-foreground">{"Try:"}</span>
                                        { for sample_codes.iter().map(|sample| {
                                            let on_navigate = props.on_navigate.clone();
                                            let sample_code = sample.clone();
                                            html! {
                                                <button
                                                    onclick={Callback::from(move |_| on_navigate.emit(Route::ClientDashboard { code: sample_code.clone() }))}
                                                    class="px-2 py-1 rounded-lg bg-[#B2CBDE] text-[#173E63] text-[11px] font-bold"
                                                >
                                                    { sample.clone() }
                                                </button>
                                            }
                                        }) }
                                    </div>
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
