use leptos::prelude::*;

use crate::domain::business::context::provide_business_context;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Shell state and the business selection are app-wide contexts.
    provide_context(AppGlobalContext::new());
    provide_business_context();

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
