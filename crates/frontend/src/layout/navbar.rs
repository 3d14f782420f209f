//! Top navigation: page switcher, business selector, add-business modal,
//! user chip and logout.

use contracts::domain::business::NewBusiness;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::global_context::{use_global_context, Page};
use crate::domain::business::{api as business_api, use_business, ALL_BUSINESSES};
use crate::system::auth::{api as auth_api, context as auth_context, storage};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();
    let business = use_business();
    let (auth_state, set_auth_state) = auth_context::use_auth();

    let (show_add_modal, set_show_add_modal) = signal(false);
    let new_business = RwSignal::new(NewBusiness::default());

    let on_logout = move |_| {
        let refresh = storage::get_refresh_token();
        spawn_local(async move {
            if let Some(token) = refresh {
                if let Err(e) = auth_api::logout(token).await {
                    log::error!("Logout error: {}", e);
                }
            }
            auth_context::drop_session(set_auth_state);
        });
    };

    let on_create_business = move |_| {
        let form = new_business.get_untracked();
        spawn_local(async move {
            match business_api::create_business(&form).await {
                Ok(_) => {
                    set_show_add_modal.set(false);
                    new_business.set(NewBusiness::default());
                    business.refresh();
                }
                Err(e) => {
                    log::error!("Failed to create business: {}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Failed to create business");
                    }
                }
            }
        });
    };

    let nav_button = move |page: Page| {
        let style = move || {
            if ctx.active.get() == page {
                "padding: 4px 12px; border: none; border-radius: 9999px; font-size: 0.85rem; background: #1d4ed8; color: #fff; cursor: pointer;"
            } else {
                "padding: 4px 12px; border: none; border-radius: 9999px; font-size: 0.85rem; background: #e5e7eb; cursor: pointer;"
            }
        };
        view! {
            <button style=style on:click=move |_| ctx.activate(page)>
                {page.title()}
            </button>
        }
    };

    let business_field = move |label: &'static str,
                               get: fn(&NewBusiness) -> String,
                               set: fn(&mut NewBusiness, String)| {
        view! {
            <div style="margin-bottom: 8px;">
                <label style="display: block; font-size: 0.8rem; margin-bottom: 2px;">{label}</label>
                <input
                    type="text"
                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 6px;"
                    prop:value=move || new_business.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        new_business.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div style="position: sticky; top: 0; z-index: 40; background: rgba(255,255,255,0.9); border-bottom: 1px solid #e5e7eb; display: flex; height: 56px; padding: 0 16px; align-items: center; gap: 12px;">
            <span style="font-weight: 700; font-size: 1.25rem; white-space: nowrap;">"Track In"</span>

            <div style="display: flex; gap: 8px; margin: 0 auto;">
                {Page::ALL.into_iter().map(nav_button).collect_view()}
            </div>

            <div style="margin-left: auto; display: flex; align-items: center; gap: 12px;">
                <select
                    style="padding: 4px 8px; border: 1px solid #d1d5db; border-radius: 6px; font-size: 0.85rem;"
                    prop:value=move || business.selected.get()
                    on:change=move |ev| business.set_selected(event_target_value(&ev))
                >
                    <option value=ALL_BUSINESSES>"All businesses"</option>
                    {move || {
                        business
                            .businesses
                            .get()
                            .into_iter()
                            .map(|b| {
                                view! {
                                    <option value=b.id.to_string()>{b.display_name()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <Button on_click=move |_| set_show_add_modal.set(true)>"Add Business"</Button>

                {move || {
                    match auth_state.get().username.filter(|u| !u.is_empty()) {
                        Some(username) => {
                            let initial = username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
                            view! {
                                <div style="display: flex; align-items: center; gap: 8px; padding: 4px 8px; border-radius: 9999px; background: #f3f4f6; border: 1px solid #e5e7eb;">
                                    <div style="width: 24px; height: 24px; border-radius: 50%; background: #d1d5db; display: flex; align-items: center; justify-content: center; font-size: 0.7rem; font-weight: 700;">
                                        {initial}
                                    </div>
                                    <span style="font-size: 0.85rem; font-weight: 500;">{username}</span>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <span style="font-size: 0.85rem; opacity: 0.7;">"Not signed in"</span> }.into_any(),
                    }
                }}

                <Button on_click=on_logout>"Logout"</Button>
            </div>
        </div>

        <Show when=move || show_add_modal.get()>
            <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 50;">
                <div style="background: #fff; padding: 24px; border-radius: 12px; width: 420px; max-width: 92%; max-height: 90vh; overflow-y: auto;">
                    <h2 style="font-size: 1.25rem; font-weight: 700; margin: 0 0 12px;">"Add Business"</h2>
                    {business_field("Business Name", |f| f.business_name.clone(), |f, v| f.business_name = v)}
                    {business_field("Business Type", |f| f.business_type.clone(), |f, v| f.business_type = v)}
                    {business_field("Contact Number", |f| f.contact_number.clone(), |f, v| f.contact_number = v)}
                    {business_field("GST / Tax ID", |f| f.gst_tax_id.clone(), |f, v| f.gst_tax_id = v)}
                    {business_field("Business Address", |f| f.business_address.clone(), |f, v| f.business_address = v)}
                    {business_field("Department / Branch", |f| f.department_branch.clone(), |f, v| f.department_branch = v)}

                    <div style="margin-bottom: 8px;">
                        <label style="display: block; font-size: 0.8rem; margin-bottom: 2px;">"Copy catalogue from"</label>
                        <select
                            style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 6px;"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                new_business.update(|f| {
                                    f.copy_from_business = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        >
                            <option value="">"Start empty"</option>
                            {move || {
                                business
                                    .businesses
                                    .get()
                                    .into_iter()
                                    .map(|b| view! { <option value=b.id.to_string()>{b.display_name()}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 12px;">
                        <Button on_click=move |_| set_show_add_modal.set(false)>"Cancel"</Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_create_business>
                            "Create"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
