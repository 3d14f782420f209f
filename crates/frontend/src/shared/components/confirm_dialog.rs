//! Two-phase confirmation dialog for destructive actions.

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 50;">
            <div style="background: #fff; padding: 24px; border-radius: 12px; width: 420px; max-width: 90%; box-shadow: 0 8px 24px rgba(0,0,0,0.2);">
                <h2 style="font-size: 1.25rem; font-weight: 700; margin: 0;">{title}</h2>
                <p style="color: #4b5563; font-size: 0.9rem; margin-top: 6px;">{body}</p>
                <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;">
                    <Button on_click=move |_| on_cancel.run(())>"Cancel"</Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </Button>
                </div>
            </div>
        </div>
    }
}
