use leptos::prelude::*;

use crate::domain::analysis::AnalysisPage;
use crate::domain::business::use_business;
use crate::domain::dashboard::DashboardPage;
use crate::domain::order::OrdersReturnsPage;
use crate::domain::product::ProductsPage;
use crate::layout::global_context::use_global_context;
use crate::layout::{Navbar, Page};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Restore the active page from the URL once the shell mounts.
    ctx.init_router_integration();

    // The business registry only loads once a credential exists, which is
    // guaranteed inside the authenticated layout.
    let business = use_business();
    business.refresh();

    view! {
        <Navbar />
        <RequireAuth>
            {move || match ctx.active.get() {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::OrdersReturns => view! { <OrdersReturnsPage /> }.into_any(),
                Page::Products => view! { <ProductsPage /> }.into_any(),
                Page::Analysis => view! { <AnalysisPage /> }.into_any(),
            }}
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
