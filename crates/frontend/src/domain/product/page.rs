//! Products page: inventory list with search, category filter, add/edit
//! modal, delete, and the products workbook export.

use std::collections::BTreeMap;

use contracts::domain::product::{category_label, Product, ProductForm, CATEGORY_CHOICES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::api;
use super::form::{filter_products, validate_product};
use crate::domain::business::{use_business, ALL_BUSINESSES};
use crate::shared::components::{Banner, MessageBanner};
use crate::shared::date_utils::format_datetime;
use crate::shared::error::ApiError;
use crate::shared::export::{download_workbook, timestamp_ms};
use crate::shared::report::products as products_report;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let business = use_business();
    let (products, set_products) = signal(Vec::<Product>::new());
    let (search, set_search) = signal(String::new());
    let (category_filter, set_category_filter) = signal("All".to_string());

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<i64>::None);
    let form = RwSignal::new(ProductForm::default());
    let field_errors = RwSignal::new(BTreeMap::<String, String>::new());
    let banner = Banner::new();

    let load = move || {
        let selected = business.selected.get_untracked();
        spawn_local(async move {
            match api::list_products(&selected).await {
                Ok(list) => set_products.set(list),
                Err(ApiError::NotAuthenticated) => {}
                Err(e) => {
                    log::error!("Error fetching products: {}", e);
                }
            }
        });
    };

    // Initial fetch, then again whenever the business selection moves.
    Effect::new(move |_| {
        business.selected.track();
        load();
    });

    let filtered = move || filter_products(&products.get(), &search.get(), &category_filter.get());

    let open_add = move |_| {
        set_editing_id.set(None);
        form.set(ProductForm::default());
        field_errors.set(BTreeMap::new());
        set_show_modal.set(true);
    };

    let open_edit = move |product: Product| {
        set_editing_id.set(Some(product.id));
        form.set(ProductForm::from_product(&product));
        field_errors.set(BTreeMap::new());
        set_show_modal.set(true);
    };

    let on_save = move |_| {
        let data = form.get_untracked();
        let editing = editing_id.get_untracked();
        let errors = validate_product(&data, &products.get_untracked(), editing);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        let selected = business.selected.get_untracked();
        if editing.is_none() && selected == ALL_BUSINESSES {
            banner.error("Please select a specific business (not All) to add a product.");
            return;
        }
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_product(id, &data).await,
                None => api::create_product(&data, &selected).await,
            };
            match result {
                Ok(_) => {
                    load();
                    set_show_modal.set(false);
                    field_errors.set(BTreeMap::new());
                }
                Err(ApiError::ValidationFailed(lines)) => banner.error(lines),
                Err(e) => banner.error(e.to_string()),
            }
        });
    };

    let on_delete = move |sku: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this product?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&sku).await {
                Ok(()) => {
                    set_products.update(|list| list.retain(|p| p.sku != sku));
                }
                Err(e) => {
                    log::error!("Error deleting product: {}", e);
                    banner.error(e.to_string());
                }
            }
        });
    };

    let on_export = move |_| {
        let list = products.get_untracked();
        if list.is_empty() {
            return;
        }
        match products_report::build_workbook(&list) {
            Ok(bytes) => {
                let filename = format!("products_{}.xlsx", timestamp_ms());
                if let Err(e) = download_workbook(&bytes, &filename) {
                    log::error!("Export failed: {}", e);
                    banner.error("Failed to export products");
                }
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                banner.error("Failed to export products");
            }
        }
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors.with(|e| e.get(field).cloned()).map(|msg| {
                view! { <p style="color: #ef4444; font-size: 0.75rem; margin-top: 2px;">{msg}</p> }
            })
        }
    };

    view! {
        <div style="padding: 20px 48px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 24px;">
                <div>
                    <h1 style="font-weight: 700; font-size: 2rem; margin: 0;">"Products"</h1>
                    <p style="opacity: 0.4; margin-top: 4px;">
                        "Manage your inventory items and stock levels"
                    </p>
                </div>
                <div style="display: flex; gap: 8px;">
                    <Button appearance=ButtonAppearance::Primary on_click=on_export>
                        "Export Excel"
                    </Button>
                    <Button on_click=open_add>"Add Product"</Button>
                </div>
            </div>

            <MessageBanner banner=banner />

            <div style="display: flex; gap: 8px; margin-top: 20px;">
                <input
                    type="search"
                    placeholder="Search Products..."
                    style="flex: 1; padding: 8px; border: 1px solid #d1d5db; border-radius: 8px;"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    style="padding: 8px; border-radius: 8px; border: 1px solid #d1d5db;"
                    prop:value=move || category_filter.get()
                    on:change=move |ev| set_category_filter.set(event_target_value(&ev))
                >
                    <option value="All">"All Categories"</option>
                    {CATEGORY_CHOICES
                        .iter()
                        .map(|(key, label)| view! { <option value=*key>{*label}</option> })
                        .collect_view()}
                </select>
            </div>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; margin-top: 20px;">
                {move || {
                    let items = filtered();
                    if items.is_empty() {
                        view! {
                            <div style="grid-column: 1 / -1; text-align: center; color: #6b7280; margin-top: 40px;">
                                "No products yet. " <b>"Add products"</b> " to get started."
                            </div>
                        }
                            .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|item| {
                                let edit_item = item.clone();
                                let delete_sku = item.sku.clone();
                                let stock_dot = if item.is_low_stock() {
                                    "background: #dc2626; border-radius: 50%; width: 8px; height: 8px;"
                                } else {
                                    "background: #16a34a; border-radius: 50%; width: 8px; height: 8px;"
                                };
                                view! {
                                    <div style="border: 1px solid #e5e7eb; border-radius: 12px; padding: 20px; background: #fff;">
                                        <div style="display: flex; justify-content: space-between;">
                                            <div>
                                                <h2 style="font-weight: 700; margin: 0;">{item.product_name.clone()}</h2>
                                                <div style="color: #4b5563;">"SKU: " {item.sku.clone()}</div>
                                            </div>
                                            <div style=stock_dot></div>
                                        </div>
                                        <div style="margin-top: 16px; color: #4b5563; display: flex; flex-direction: column; gap: 4px;">
                                            <div style="display: flex; justify-content: space-between;">
                                                <span>"Category:"</span>
                                                <span>{category_label(&item.category)}</span>
                                            </div>
                                            <div style="display: flex; justify-content: space-between;">
                                                <span>"Current Stock:"</span>
                                                <span>{item.current_stock}</span>
                                            </div>
                                            <div style="display: flex; justify-content: space-between;">
                                                <span>"Min/Max:"</span>
                                                <span>{format!("{}/{}", item.min_stock, item.max_stock)}</span>
                                            </div>
                                            <div style="display: flex; justify-content: space-between;">
                                                <span>"Price:"</span>
                                                <span>{format!("{}", item.price)}</span>
                                            </div>
                                            <div style="display: flex; justify-content: space-between;">
                                                <span>"Supplier:"</span>
                                                <span>{item.supplier.clone()}</span>
                                            </div>
                                            <div style="display: flex; justify-content: space-between;">
                                                <span>"Last Update:"</span>
                                                <span>{format_datetime(&item.updated_at)}</span>
                                            </div>
                                        </div>
                                        <div style="display: flex; gap: 8px; margin-top: 16px;">
                                            <Button on_click=move |_| open_edit(edit_item.clone())>"Edit"</Button>
                                            <Button on_click=move |_| on_delete(delete_sku.clone())>"Delete"</Button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || show_modal.get()>
                <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 50;">
                    <div style="background: #fff; padding: 24px; border-radius: 12px; width: 460px; max-width: 92%; max-height: 90vh; overflow-y: auto;">
                        <h2 style="font-size: 1.25rem; font-weight: 700; margin: 0;">
                            {move || if editing_id.get().is_some() { "Edit Product" } else { "Add Product" }}
                        </h2>
                        <p style="color: #6b7280; font-size: 0.85rem;">
                            {move || {
                                if editing_id.get().is_some() {
                                    "Update the product information. Changes will be saved immediately."
                                } else {
                                    "Fill in the product details to add a new product."
                                }
                            }}
                        </p>
                        <hr style="margin: 12px 0;" />

                        <div style="display: flex; gap: 12px;">
                            <div style="flex: 1;">
                                <label style="font-weight: 500;">"Product Name"</label>
                                <input
                                    type="text"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.product_name.clone())
                                    on:input=move |ev| form.update(|f| f.product_name = event_target_value(&ev))
                                />
                                {field_error("product_name")}
                            </div>
                            <div style="flex: 1;">
                                <label style="font-weight: 500;">"SKU"</label>
                                <input
                                    type="text"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.sku.clone())
                                    prop:disabled=move || editing_id.get().is_some()
                                    on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                                />
                                {field_error("sku")}
                            </div>
                        </div>

                        <div style="margin-top: 12px;">
                            <label style="font-weight: 500;">"Category"</label>
                            <select
                                style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                prop:value=move || form.with(|f| f.category.clone())
                                on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            >
                                <option value="">"Select Category"</option>
                                {CATEGORY_CHOICES
                                    .iter()
                                    .map(|(key, label)| view! { <option value=*key>{*label}</option> })
                                    .collect_view()}
                            </select>
                            {field_error("category")}
                        </div>

                        <div style="display: flex; gap: 12px; margin-top: 12px;">
                            <div style="flex: 1;">
                                <label>"Current Stock"</label>
                                <input
                                    type="number"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.current_stock.to_string())
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse().unwrap_or(0);
                                        form.update(|f| f.current_stock = parsed);
                                    }
                                />
                            </div>
                            <div style="flex: 1;">
                                <label>"Min Stock"</label>
                                <input
                                    type="number"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.min_stock.to_string())
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse().unwrap_or(0);
                                        form.update(|f| f.min_stock = parsed);
                                    }
                                />
                            </div>
                            <div style="flex: 1;">
                                <label>"Max Stock"</label>
                                <input
                                    type="number"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.max_stock.to_string())
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse().unwrap_or(0);
                                        form.update(|f| f.max_stock = parsed);
                                    }
                                />
                            </div>
                        </div>

                        <div style="display: flex; gap: 12px; margin-top: 12px;">
                            <div style="flex: 1;">
                                <label>"Price"</label>
                                <input
                                    type="number"
                                    min="0.01"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.price.to_string())
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                                        form.update(|f| f.price = parsed);
                                    }
                                />
                                {field_error("price")}
                            </div>
                            <div style="flex: 1;">
                                <label>"Selling Price"</label>
                                <input
                                    type="number"
                                    min="0.01"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.selling_price.to_string())
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                                        form.update(|f| f.selling_price = parsed);
                                    }
                                />
                                {field_error("selling_price")}
                            </div>
                            <div style="flex: 1;">
                                <label>"Supplier"</label>
                                <input
                                    type="text"
                                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                    prop:value=move || form.with(|f| f.supplier.clone())
                                    on:input=move |ev| form.update(|f| f.supplier = event_target_value(&ev))
                                />
                                {field_error("supplier")}
                            </div>
                        </div>

                        <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;">
                            <Button on_click=move |_| {
                                set_show_modal.set(false);
                                field_errors.set(BTreeMap::new());
                            }>"Cancel"</Button>
                            <Button appearance=ButtonAppearance::Primary on_click=on_save>
                                "Save"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
