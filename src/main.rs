use std::rc::Rc;

use yew::prelude::*;

mod api;
mod config;
mod format;
mod models;
mod pages;
mod state;
mod ui;

use config::AppConfig;
use pages::{
    AdminClientsPage, AdminReportsPage, AdminTopupsPage, ClientDashboardPage, ClientReportsPage,
    ClientTopupsPage, HomePage,
};
use ui::{AdminShell, AdminTab, ClientShell, ClientTab};

#[derive(Clone, PartialEq, Debug)]
pub enum Route {
    Home,
    AdminClients,
    AdminReports,
    AdminTopups,
    ClientDashboard { code: String },
    ClientReports { code: String },
    ClientTopups { code: String },
}

#[function_component(App)]
fn app() -> Html {
    let route = use_state(|| Route::Home);
    let app_config = use_memo(|_| AppConfig::from_build_env(), ());

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| route.set(next))
    };

    let body = match (*route).clone() {
        Route::Home => html! { <HomePage on_navigate={on_navigate} /> },
        Route::AdminClients => html! {
            <AdminShell active={AdminTab::Clients} on_navigate={on_navigate.clone()}>
                <AdminClientsPage on_navigate={on_navigate} />
            </AdminShell>
        },
        Route::AdminReports => html! {
            <AdminShell active={AdminTab::Reports} on_navigate={on_navigate}>
                <AdminReportsPage />
            </AdminShell>
        },
        Route::AdminTopups => html! {
            <AdminShell active={AdminTab::Topups} on_navigate={on_navigate}>
                <AdminTopupsPage />
            </AdminShell>
        },
        Route::ClientDashboard { code } => html! {
            <ClientShell code={code.clone()} active={ClientTab::Dashboard} on_navigate={on_navigate}>
                <ClientDashboardPage code={code} />
            </ClientShell>
        },
        Route::ClientReports { code } => html! {
            <ClientShell code={code.clone()} active={ClientTab::Reports} on_navigate={on_navigate}>
                <ClientReportsPage code={code} />
            </ClientShell>
        },
        Route::ClientTopups { code } => html! {
            <ClientShell code={code.clone()} active={ClientTab::Topups} on_navigate={on_navigate}>
                <ClientTopupsPage code={code} />
            </ClientShell>
        },
    };

    html! {
        <ContextProvider<Rc<AppConfig>> context={app_config}>
            { body }
        </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
