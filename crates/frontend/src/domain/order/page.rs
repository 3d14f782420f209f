//! Orders & Returns page: calendar-scoped record lists with the order
//! lifecycle actions (create, return, delete, remove-return).

use chrono::NaiveDate;
use contracts::domain::order::Order;
use contracts::domain::product::Product;
use contracts::domain::returns::ReturnRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::api::{self, NewOrderForm};
use crate::domain::business::use_business;
use crate::domain::product::api as product_api;
use crate::shared::calendar::{month_grid, MonthView, WEEKDAYS};
use crate::shared::components::{Banner, ConfirmDialog, MessageBanner};
use crate::shared::date_utils::{format_ymd, today};
use crate::shared::debounce::Debounced;
use crate::shared::error::ApiError;
use crate::shared::list_utils::filter_list;
use crate::system::auth::storage;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ActiveTab {
    Orders,
    Returns,
}

#[component]
pub fn OrdersReturnsPage() -> impl IntoView {
    let business = use_business();
    let banner = Banner::new();

    let (selected_date, set_selected_date) = signal(today());
    let (month_view, set_month_view) = signal(MonthView::containing(today()));

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (returns, set_returns) = signal(Vec::<ReturnRecord>::new());
    let (products, set_products) = signal(Vec::<Product>::new());

    let (active_tab, set_active_tab) = signal(ActiveTab::Orders);
    let (order_search_raw, set_order_search_raw) = signal(String::new());
    let (return_search_raw, set_return_search_raw) = signal(String::new());
    let order_search = Debounced::new();
    let return_search = Debounced::new();

    let (show_add_modal, set_show_add_modal) = signal(false);
    let (confirm_delete_id, set_confirm_delete_id) = signal(Option::<i64>::None);
    let order_form = RwSignal::new(NewOrderForm {
        quantity: "1".to_string(),
        ..Default::default()
    });

    let load_all = move || {
        let date = selected_date.get_untracked();
        let selected = business.selected.get_untracked();
        let order_q = order_search.value.get_untracked();
        let return_q = return_search.value.get_untracked();
        spawn_local(async move {
            match api::fetch_orders(date, &order_q, &selected).await {
                Ok(list) => set_orders.set(list),
                Err(ApiError::NotAuthenticated) => {}
                Err(e) => log::error!("Error fetching orders: {}", e),
            }
            match api::fetch_returns(date, &return_q, &selected).await {
                Ok(list) => set_returns.set(list),
                Err(ApiError::NotAuthenticated) => {}
                Err(e) => log::error!("Error fetching returns: {}", e),
            }
            match product_api::list_products(&selected).await {
                Ok(list) => set_products.set(list),
                Err(ApiError::NotAuthenticated) => {}
                Err(e) => log::error!("Error fetching products: {}", e),
            }
        });
    };

    // Refetch whenever the date, the business, or a settled search term
    // changes. Overlapping fetches are not cancelled: the last response to
    // resolve is what the page shows.
    Effect::new(move |_| {
        selected_date.track();
        business.selected.track();
        order_search.value.track();
        return_search.value.track();
        load_all();
    });

    let on_day_click = move |day: Option<u32>| {
        let Some(day) = day else { return };
        let view = month_view.get_untracked();
        if let Some(date) = NaiveDate::from_ymd_opt(view.year, view.month, day) {
            set_selected_date.set(date);
            banner.clear();
        }
    };

    let on_add_order = move |_| {
        banner.clear();
        if storage::get_access_token().is_none() {
            banner.error("You are not logged in!");
            return;
        }
        let form = order_form.get_untracked();
        let date = selected_date.get_untracked();
        match api::validate_new_order(&form, date, today()) {
            Err(message) => banner.error(message),
            Ok(order) => {
                let selected = business.selected.get_untracked();
                spawn_local(async move {
                    match api::create_order(&order, &selected).await {
                        Ok(()) => {
                            load_all();
                            set_show_add_modal.set(false);
                            order_form.set(NewOrderForm {
                                quantity: "1".to_string(),
                                ..Default::default()
                            });
                            banner.success("Order added and inventory updated successfully!");
                        }
                        Err(e) => banner.error(e.to_string()),
                    }
                });
            }
        }
    };

    let on_return = move |order: Order| {
        banner.clear();
        let date = selected_date.get_untracked();
        let selected = business.selected.get_untracked();
        spawn_local(async move {
            match api::return_order(&order, date, &selected).await {
                Ok(()) => {
                    load_all();
                    banner.success(format!(
                        "Order {} has been returned and inventory updated successfully!",
                        order.order_id
                    ));
                }
                Err(e) => banner.error(e.to_string()),
            }
        });
    };

    let on_delete_request = move |order_id: i64| {
        if storage::get_access_token().is_none() {
            banner.error("You are not logged in!");
            return;
        }
        set_confirm_delete_id.set(Some(order_id));
    };

    let on_confirm_delete = move |order_id: i64| {
        banner.clear();
        spawn_local(async move {
            match api::delete_order(order_id).await {
                Ok(()) => {
                    load_all();
                    banner.success("Order deleted and inventory updated successfully!");
                }
                Err(e) => banner.error(e.to_string()),
            }
            set_confirm_delete_id.set(None);
        });
    };

    let on_remove_return = move |return_id: i64| {
        banner.clear();
        let selected = business.selected.get_untracked();
        spawn_local(async move {
            match api::remove_return(return_id, &selected).await {
                Ok(()) => {
                    load_all();
                    banner.success("Return has been removed and inventory updated successfully!");
                }
                Err(e) => banner.error(e.to_string()),
            }
        });
    };

    let visible_orders = move || {
        let active: Vec<Order> = orders
            .get()
            .into_iter()
            .filter(|o| !o.is_returned)
            .collect();
        filter_list(&active, &order_search.value.get())
    };

    let visible_returns = move || filter_list(&returns.get(), &return_search.value.get());

    let tab_style = move |tab: ActiveTab| {
        if active_tab.get() == tab {
            "padding: 6px 12px; border-radius: 8px; border: none; background: #2563eb; color: #fff; cursor: pointer;"
        } else {
            "padding: 6px 12px; border-radius: 8px; border: none; background: #e5e7eb; cursor: pointer;"
        }
    };

    view! {
        <div style="padding: 20px 48px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 24px;">
                <div>
                    <h1 style="font-weight: 700; font-size: 2rem; margin: 0;">"Orders & Returns"</h1>
                    <p style="opacity: 0.4; margin-top: 4px;">
                        "Manage daily orders, returns, and inventory updates"
                    </p>
                </div>
                <Button on_click=move |_| set_show_add_modal.set(true)>"Add Order"</Button>
            </div>

            <MessageBanner banner=banner />

            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 20px;">
                // Calendar card
                <div style="border: 1px solid #e5e7eb; border-radius: 12px; padding: 20px; background: #fff;">
                    <h2 style="font-size: 1.1rem; font-weight: 600; margin: 0;">"Select Date"</h2>
                    <div style="display: flex; justify-content: space-between; align-items: center; margin: 16px 0 12px; font-size: 0.85rem;">
                        <button
                            style="padding: 6px 12px; background: #e5e7eb; border: none; border-radius: 8px; cursor: pointer;"
                            on:click=move |_| set_month_view.update(|v| *v = v.prev())
                        >
                            "Prev"
                        </button>
                        <span style="font-weight: 500;">{move || month_view.get().label()}</span>
                        <button
                            style="padding: 6px 12px; background: #e5e7eb; border: none; border-radius: 8px; cursor: pointer;"
                            prop:disabled=move || month_view.get().next_disabled(today())
                            on:click=move |_| {
                                let view = month_view.get_untracked();
                                if !view.next_disabled(today()) {
                                    set_month_view.set(view.next());
                                }
                            }
                        >
                            "Next"
                        </button>
                    </div>
                    <div style="display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; text-align: center; font-size: 0.75rem;">
                        {WEEKDAYS
                            .iter()
                            .map(|d| view! { <div style="font-weight: 500; opacity: 0.6; padding: 4px;">{*d}</div> })
                            .collect_view()}
                        {move || {
                            let view = month_view.get();
                            let selected = selected_date.get();
                            month_grid(view)
                                .into_iter()
                                .map(|day| {
                                    let is_selected = day
                                        .map(|d| view.date_string(d) == format_ymd(selected))
                                        .unwrap_or(false);
                                    let style = if is_selected {
                                        "padding: 4px; border-radius: 8px; background: #2563eb; color: #fff;"
                                    } else if day.is_some() {
                                        "padding: 4px; border-radius: 8px; cursor: pointer;"
                                    } else {
                                        "padding: 4px;"
                                    };
                                    view! {
                                        <div style=style on:click=move |_| on_day_click(day)>
                                            {day.map(|d| d.to_string()).unwrap_or_default()}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div style="margin-top: 12px; font-size: 0.75rem; opacity: 0.7;">
                        "Selected: " <b>{move || format_ymd(selected_date.get())}</b>
                    </div>
                </div>

                // Tabbed record lists
                <div style="border: 1px solid #e5e7eb; border-radius: 12px; padding: 20px; background: #fff;">
                    <div style="display: flex; justify-content: space-between; gap: 8px; align-items: center;">
                        <div style="display: flex; gap: 8px;">
                            <button
                                style=move || tab_style(ActiveTab::Orders)
                                on:click=move |_| set_active_tab.set(ActiveTab::Orders)
                            >
                                "Orders"
                            </button>
                            <button
                                style=move || tab_style(ActiveTab::Returns)
                                on:click=move |_| set_active_tab.set(ActiveTab::Returns)
                            >
                                "Returns"
                            </button>
                        </div>
                        <Show
                            when=move || active_tab.get() == ActiveTab::Orders
                            fallback=move || view! {
                                <input
                                    type="search"
                                    placeholder="Search returns by product or customer"
                                    style="border: 1px solid #d1d5db; padding: 8px; border-radius: 8px; width: 60%;"
                                    prop:value=move || return_search_raw.get()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_return_search_raw.set(value.clone());
                                        return_search.input(value);
                                    }
                                />
                            }
                        >
                            <input
                                type="search"
                                placeholder="Search orders by product or customer"
                                style="border: 1px solid #d1d5db; padding: 8px; border-radius: 8px; width: 60%;"
                                prop:value=move || order_search_raw.get()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_order_search_raw.set(value.clone());
                                    order_search.input(value);
                                }
                            />
                        </Show>
                    </div>

                    <div style="margin-top: 12px;">
                        <Show
                            when=move || active_tab.get() == ActiveTab::Orders
                            fallback=move || view! {
                                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;">
                                    {move || {
                                        let list = visible_returns();
                                        if list.is_empty() {
                                            view! {
                                                <div style="grid-column: 1 / -1; text-align: center; opacity: 0.6; padding: 24px 0;">
                                                    "No matching returns"
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            list.into_iter()
                                                .map(|r| {
                                                    view! {
                                                        <div style="border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; background: #fff;">
                                                            <div style="display: flex; justify-content: space-between;">
                                                                <div>
                                                                    <div style="font-weight: 600;">{r.product_name.clone()}</div>
                                                                    <div style="font-size: 0.75rem; opacity: 0.7;">"Customer: " {r.customer_name.clone()}</div>
                                                                    <div style="font-size: 0.75rem; opacity: 0.7;">"Order ID: " {r.order_id.clone()}</div>
                                                                </div>
                                                                <div style="font-size: 0.85rem; font-weight: 500;">"Qty: " {r.quantity}</div>
                                                            </div>
                                                            <div style="display: flex; justify-content: flex-end; margin-top: 8px;">
                                                                <button
                                                                    style="background: #ef4444; color: #fff; border: none; padding: 4px 8px; border-radius: 4px; font-size: 0.75rem; cursor: pointer;"
                                                                    on:click=move |_| on_remove_return(r.id)
                                                                >
                                                                    "Remove"
                                                                </button>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }}
                                </div>
                            }
                        >
                            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;">
                                {move || {
                                    let list = visible_orders();
                                    if list.is_empty() {
                                        view! {
                                            <div style="grid-column: 1 / -1; text-align: center; opacity: 0.6; padding: 24px 0;">
                                                "No matching orders"
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        list.into_iter()
                                            .map(|order| {
                                                let return_order = order.clone();
                                                view! {
                                                    <div style="border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; background: #fff;">
                                                        <div style="display: flex; justify-content: space-between;">
                                                            <div>
                                                                <div style="font-weight: 600;">{order.product_name.clone()}</div>
                                                                <div style="font-size: 0.75rem; opacity: 0.7;">"Customer: " {order.customer_name.clone()}</div>
                                                                <div style="font-size: 0.75rem; opacity: 0.7;">"Order ID: " {order.order_id.clone()}</div>
                                                            </div>
                                                            <div style="font-size: 0.85rem; font-weight: 500;">"Qty: " {order.quantity}</div>
                                                        </div>
                                                        <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 8px;">
                                                            <button
                                                                style="background: #ef4444; color: #fff; border: none; padding: 4px 8px; border-radius: 4px; font-size: 0.75rem; cursor: pointer;"
                                                                on:click=move |_| on_return(return_order.clone())
                                                            >
                                                                "Return"
                                                            </button>
                                                            <button
                                                                style="background: #6b7280; color: #fff; border: none; padding: 4px 8px; border-radius: 4px; font-size: 0.75rem; cursor: pointer;"
                                                                on:click=move |_| on_delete_request(order.id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }
                                }}
                            </div>
                        </Show>
                    </div>
                </div>
            </div>

            // Delete confirmation (two-phase)
            {move || {
                confirm_delete_id.get().map(|order_id| {
                    view! {
                        <ConfirmDialog
                            title="Delete this order?"
                            body="This action will remove the order and restore its stock."
                            confirm_label="Delete"
                            on_confirm=move |_: ()| on_confirm_delete(order_id)
                            on_cancel=move |_: ()| set_confirm_delete_id.set(None)
                        />
                    }
                })
            }}

            // Add order modal
            <Show when=move || show_add_modal.get()>
                <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 50;">
                    <div style="background: #fff; padding: 24px; border-radius: 12px; width: 420px; max-width: 92%; max-height: 90vh; overflow-y: auto;">
                        <h2 style="font-size: 1.25rem; font-weight: 700; margin: 0;">"Add New Order"</h2>
                        <p style="color: #6b7280; font-size: 0.85rem;">
                            "For date: " {move || format_ymd(selected_date.get())}
                        </p>
                        <hr style="margin: 12px 0;" />

                        <div style="margin-bottom: 10px;">
                            <label style="display: block; font-size: 0.85rem; margin-bottom: 2px;">"Product"</label>
                            <select
                                style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                prop:value=move || order_form.with(|f| f.product_name.clone())
                                on:change=move |ev| order_form.update(|f| f.product_name = event_target_value(&ev))
                            >
                                <option value="">"Select product"</option>
                                {move || {
                                    products
                                        .get()
                                        .into_iter()
                                        .map(|p| view! { <option value=p.product_name.clone()>{p.product_name.clone()}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div style="margin-bottom: 10px;">
                            <label style="display: block; font-size: 0.85rem; margin-bottom: 2px;">"Order ID"</label>
                            <input
                                type="text"
                                placeholder="Order Id"
                                style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                prop:value=move || order_form.with(|f| f.order_id.clone())
                                on:input=move |ev| order_form.update(|f| f.order_id = event_target_value(&ev))
                            />
                        </div>
                        <div style="margin-bottom: 10px;">
                            <label style="display: block; font-size: 0.85rem; margin-bottom: 2px;">"Tracking ID"</label>
                            <input
                                type="text"
                                placeholder="Tracking Id"
                                style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                prop:value=move || order_form.with(|f| f.tracking_id.clone())
                                on:input=move |ev| order_form.update(|f| f.tracking_id = event_target_value(&ev))
                            />
                        </div>
                        <div style="margin-bottom: 10px;">
                            <label style="display: block; font-size: 0.85rem; margin-bottom: 2px;">"Quantity"</label>
                            <input
                                type="number"
                                min="1"
                                style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                prop:value=move || order_form.with(|f| f.quantity.clone())
                                on:input=move |ev| order_form.update(|f| f.quantity = event_target_value(&ev))
                            />
                        </div>
                        <div style="margin-bottom: 10px;">
                            <label style="display: block; font-size: 0.85rem; margin-bottom: 2px;">"Customer"</label>
                            <input
                                type="text"
                                placeholder="Customer name"
                                style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                prop:value=move || order_form.with(|f| f.customer_name.clone())
                                on:input=move |ev| order_form.update(|f| f.customer_name = event_target_value(&ev))
                            />
                        </div>

                        <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 12px;">
                            <Button on_click=move |_| {
                                set_show_add_modal.set(false);
                                order_form.set(NewOrderForm { quantity: "1".to_string(), ..Default::default() });
                            }>"Cancel"</Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || products.with(|p| p.is_empty()))
                                on_click=on_add_order
                            >
                                "Add Order"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
