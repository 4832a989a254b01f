//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{breadcrumb::Breadcrumb, footer::Footer, navbar::Navbar, sidebar::Sidebar};
use crate::nav::context::RouteProvider;
use crate::pages::{
    contracts::ContractsPage,
    dashboard::{AdminDashboardPage, SponsorDashboardPage, StartupDashboardPage},
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    project::{MyProjectsPage, PendingProjectsPage, ProjectDetailPage},
    register::RegisterPage,
    reports::ReportsPage,
    users::UsersPage,
};
use crate::state::{
    auth::{AccountStore, AuthState},
    projects::ProjectStore,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, account and project contexts and sets up client-side
/// routing inside the shared navigation layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    let accounts = RwSignal::new(AccountStore::seeded());
    let projects = RwSignal::new(ProjectStore::seeded());

    provide_context(auth);
    provide_context(accounts);
    provide_context(projects);

    // Effects only run in the browser, so the server renders the resolving
    // state and the client settles it after hydration.
    Effect::new(move || auth.update(|a| a.loading = false));

    view! {
        <Stylesheet id="leptos" href="/pkg/tamweel.css"/>
        <Title text="تمويل"/>

        <Router>
            <RouteProvider>
                <Navbar/>
                <div class="layout">
                    <Sidebar/>
                    <main class="layout__main">
                        <Breadcrumb/>
                        <Routes fallback=NotFoundPage>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("register") view=RegisterPage/>
                            <Route
                                path=(StaticSegment("dashboard"), StaticSegment("startup"))
                                view=StartupDashboardPage
                            />
                            <Route
                                path=(StaticSegment("dashboard"), StaticSegment("sponsor"))
                                view=SponsorDashboardPage
                            />
                            <Route path=(StaticSegment("dashboard"), StaticSegment("admin")) view=AdminDashboardPage/>
                            <Route path=(StaticSegment("projects"), StaticSegment("my")) view=MyProjectsPage/>
                            <Route
                                path=(StaticSegment("projects"), StaticSegment("pending"))
                                view=PendingProjectsPage
                            />
                            <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                            <Route path=StaticSegment("contracts") view=ContractsPage/>
                            <Route path=StaticSegment("users") view=UsersPage/>
                            <Route path=StaticSegment("reports") view=ReportsPage/>
                        </Routes>
                    </main>
                </div>
                <Footer/>
            </RouteProvider>
        </Router>
    }
}
