//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    account::AccountPage, activate::ActivatePage, login::LoginPage, register::RegisterPage,
    reset_finish::ResetFinishPage, reset_password::ResetPasswordPage, sample_detail::SampleDetailPage,
    samples::SamplesPage,
};
use crate::state::{
    auth::AuthState, filter::SampleFilter, samples::SampleQueries, selection::SelectionState, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the shared stores and sets up client-side routing. The session
/// flag starts false on both sides of hydration and is filled from storage
/// once the browser takes over.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let filter = RwSignal::new(SampleFilter::default());
    let selection = RwSignal::new(SelectionState::default());
    let queries = SampleQueries::new();

    provide_context(auth);
    provide_context(ui);
    provide_context(filter);
    provide_context(selection);
    provide_context(queries);

    Effect::new(move || {
        let has_token = crate::util::token::has_token();
        auth.update(|a| a.has_session = has_token);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lithosurfer.css"/>
        <Title text="LithoSurfer"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <Redirect path="/account"/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/account"/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("activate") view=ActivatePage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=(StaticSegment("reset"), StaticSegment("finish")) view=ResetFinishPage/>
                    <Route path=StaticSegment("account") view=AccountPage/>
                    <Route path=StaticSegment("samples") view=SamplesPage/>
                    <Route path=(StaticSegment("samples"), ParamSegment("id")) view=SampleDetailPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
