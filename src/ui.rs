use std::rc::Rc;

use web_sys::InputEvent;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::Route;

#[hook]
pub fn use_app_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().unwrap_or_else(|| Rc::new(AppConfig::from_build_env()))
}

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Clients,
    Reports,
    Topups,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ClientTab {
    Dashboard,
    Reports,
    Topups,
}

pub fn page_shell(title: &str, subtitle: &str, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-6xl mx-auto space-y-6">
            <div class="space-y-1 pb-4 border-b border-border">
                <h2 class="text-2xl font-semibold text-foreground">{ title }</h2>
                <p class="text-sm text-muted-foreground">{ subtitle }</p>
            </div>
            { children }
        </div>
    }
}

struct NavEntry {
    label: &'static str,
    icon: fn() -> Html,
    target: Route,
    active: bool,
}

fn sidebar_nav(entries: Vec<NavEntry>, on_navigate: &Callback<Route>) -> Html {
    html! {
        <nav class="flex-1 space-y-2">
            { for entries.into_iter().map(|entry| {
                let class_name = if entry.active {
                    "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                } else {
                    "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                };
                let on_navigate = on_navigate.clone();
                let target = entry.target.clone();
                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| on_navigate.emit(target.clone()))}>
                        <span class="shrink-0">{ (entry.icon)() }</span>
                        <span class="truncate whitespace-nowrap text-left">{ entry.label }</span>
                    </button>
                }
            }) }
        </nav>
    }
}

fn back_to_landing(on_navigate: &Callback<Route>) -> Html {
    let on_navigate = on_navigate.clone();
    html! {
        <button onclick={Callback::from(move |_| on_navigate.emit(Route::Home))} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
            { icon_arrow_left() }
            <span>{"Back to landing"}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminShellProps {
    pub active: AdminTab,
    pub on_navigate: Callback<Route>,
    pub children: Children,
}

#[function_component(AdminShell)]
pub fn admin_shell(props: &AdminShellProps) -> Html {
    let entries = vec![
        NavEntry {
            label: "Org Clients",
            icon: icon_users,
            target: Route::AdminClients,
            active: props.active == AdminTab::Clients,
        },
        NavEntry {
            label: "Campaign Reports",
            icon: icon_bar_chart,
            target: Route::AdminReports,
            active: props.active == AdminTab::Reports,
        },
        NavEntry {
            label: "Topups",
            icon: icon_wallet,
            target: Route::AdminTopups,
            active: props.active == AdminTab::Topups,
        },
    ];

    html! {
        <div class="flex h-screen bg-background">
            <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
                <div class="px-2 mb-8 leading-tight">
                    <p class="text-[10px] uppercase tracking-wide text-slate-500 font-bold">{"Admin"}</p>
                    <span class="text-[#173E63] text-xl font-black tracking-tight">{"Ads Dashboard"}</span>
                </div>
                <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                    { sidebar_nav(entries, &props.on_navigate) }
                    <div class="mt-auto pt-4 space-y-2">
                        <ClientPreviewSwitcher on_navigate={props.on_navigate.clone()} />
                        { back_to_landing(&props.on_navigate) }
                    </div>
                </div>
            </div>
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClientShellProps {
    pub code: String,
    pub active: ClientTab,
    pub on_navigate: Callback<Route>,
    pub children: Children,
}

#[function_component(ClientShell)]
pub fn client_shell(props: &ClientShellProps) -> Html {
    let code = props.code.clone();
    let entries = vec![
        NavEntry {
            label: "Dashboard",
            icon: icon_layout_grid,
            target: Route::ClientDashboard { code: code.clone() },
            active: props.active == ClientTab::Dashboard,
        },
        NavEntry {
            label: "Campaign Reports",
            icon: icon_bar_chart,
            target: Route::ClientReports { code: code.clone() },
            active: props.active == ClientTab::Reports,
        },
        NavEntry {
            label: "Topups",
            icon: icon_wallet,
            target: Route::ClientTopups { code },
            active: props.active == ClientTab::Topups,
        },
    ];

    html! {
        <div class="flex h-screen bg-background">
            <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
                <div class="px-2 mb-8 leading-tight">
                    <p class="text-[10px] uppercase tracking-wide text-slate-500 font-bold">{"Client Portal"}</p>
                    <span class="text-[#173E63] text-xl font-black tracking-tight">{ props.code.clone() }</span>
                </div>
                <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                    { sidebar_nav(entries, &props.on_navigate) }
                    <div class="mt-auto pt-4">
                        { back_to_landing(&props.on_navigate) }
                    </div>
                </div>
            </div>
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ClientPreviewSwitcherProps {
    on_navigate: Callback<Route>,
}

// Lets an admin jump straight into the read-only portal for any org code.
#[function_component(ClientPreviewSwitcher)]
fn client_preview_switcher(props: &ClientPreviewSwitcherProps) -> Html {
    let code = use_state(|| "".to_string());

    let on_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    let on_open = {
        let code = code.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            let trimmed = code.trim().to_string();
            if trimmed.is_empty() {
                return;
            }
            code.set("".to_string());
            on_navigate.emit(Route::ClientDashboard { code: trimmed });
        })
    };

    html! {
        <div class="space-y-1 px-1">
            <label class="text-[9px] font-bold text-slate-400 uppercase tracking-widest">{"Preview client view"}</label>
            <div class="flex gap-1">
                <input
                    placeholder="Org code"
                    value={(*code).clone()}
                    oninput={on_input}
                    class="w-full bg-white/10 text-white rounded-lg px-2 py-1.5 text-[11px] border-none outline-none placeholder:text-slate-400"
                />
                <button onclick={on_open} class="bg-[#B2CBDE] text-[#173E63] px-2 rounded-lg text-[10px] font-bold">{"Go"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DateFilterFormProps {
    pub from_date: String,
    pub to_date: String,
    pub error: Option<String>,
    pub on_from: Callback<String>,
    pub on_to: Callback<String>,
    pub on_apply: Callback<()>,
}

#[function_component(DateFilterForm)]
pub fn date_filter_form(props: &DateFilterFormProps) -> Html {
    let on_from = props.on_from.clone();
    let on_to = props.on_to.clone();
    let on_apply = props.on_apply.clone();

    html! {
        <section class="w-full space-y-4 rounded-xl border border-border bg-white p-4">
            <div>
                <h3 class="text-base font-medium text-foreground">{"Filter"}</h3>
                <p class="text-xs text-muted-foreground">{"Use an optional date window to narrow the results."}</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"From date"}</label>
                    <input type="date" value={props.from_date.clone()} oninput={Callback::from(move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        on_from.emit(input.value());
                    })} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none" />
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"To date"}</label>
                    <input type="date" value={props.to_date.clone()} oninput={Callback::from(move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        on_to.emit(input.value());
                    })} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none" />
                </div>
                <button onclick={Callback::from(move |_| on_apply.emit(()))} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold w-fit">{"Apply Filters"}</button>
            </div>
            {
                if let Some(msg) = &props.error {
                    html! { <p class="text-sm text-red-500">{ msg.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub page: u32,
    pub page_count: u32,
    pub disabled: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let on_prev = props.on_prev.clone();
    let on_next = props.on_next.clone();

    html! {
        <div class="flex flex-col gap-2 md:flex-row md:items-center md:justify-between text-sm">
            <p class="text-muted-foreground">{ format!("Page {} of {}", props.page, props.page_count) }</p>
            <div class="flex gap-2">
                <button
                    onclick={Callback::from(move |_| on_prev.emit(()))}
                    disabled={props.disabled || props.page <= 1}
                    class="px-3 py-1.5 rounded-lg border border-border text-xs font-bold text-[#173E63] disabled:opacity-40"
                >
                    {"Previous"}
                </button>
                <button
                    onclick={Callback::from(move |_| on_next.emit(()))}
                    disabled={props.disabled || props.page >= props.page_count}
                    class="px-3 py-1.5 rounded-lg border border-border text-xs font-bold text-[#173E63] disabled:opacity-40"
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub title: &'static str,
    pub value: String,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div class="flex flex-col justify-between rounded-xl border border-border bg-white p-4">
            <p class="text-xs text-muted-foreground">{ props.title }</p>
            <p class="text-2xl font-semibold text-[#1D617A]">{ props.value.clone() }</p>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_users() -> Html {
    icon_base("M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M13 7a4 4 0 11-8 0 4 4 0 018 0M23 21v-2a4 4 0 00-3-3.87")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_arrow_left() -> Html {
    icon_base("M19 12H5M12 19l-7-7 7-7")
}
