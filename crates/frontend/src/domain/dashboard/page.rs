//! Dashboard page: KPI tiles, top sellers, low stock, daily sales, and the
//! multi-business reconciliation export.

use contracts::domain::dashboard::DashboardSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::api;
use crate::domain::business::{api as business_api, use_business};
use crate::domain::product::api as product_api;
use crate::shared::components::stat_card::{format_money, format_thousands};
use crate::shared::components::StatCard;
use crate::shared::export::{download_workbook, timestamp_ms};
use crate::shared::report::dashboard as dashboard_report;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let business = use_business();
    let (summary, set_summary) = signal(DashboardSummary::default());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_exporting, set_is_exporting) = signal(false);

    Effect::new(move |_| {
        let selected = business.selected.get();
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_summary(&selected).await {
                Ok(data) => {
                    set_summary.set(api::limit_summary(data));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching dashboard: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    });

    let on_export = move |_| {
        let selected = business.selected.get_untracked();
        set_is_exporting.set(true);
        spawn_local(async move {
            let result = async {
                let (products, businesses) = futures::future::try_join(
                    product_api::list_products(&selected),
                    business_api::list_businesses(),
                )
                .await?;
                let activity = api::fetch_business_activity(businesses).await?;
                Ok::<_, crate::shared::error::ApiError>((products, activity))
            }
            .await;

            match result {
                Ok((products, activity)) => {
                    match dashboard_report::build_workbook(&products, &activity) {
                        Ok(bytes) => {
                            let filename = format!("dashboard_report_{}.xlsx", timestamp_ms());
                            if let Err(e) = download_workbook(&bytes, &filename) {
                                log::error!("Export failed: {}", e);
                                alert("Failed to export dashboard report");
                            }
                        }
                        Err(e) => {
                            log::error!("Export failed: {}", e);
                            alert("Failed to export dashboard report");
                        }
                    }
                }
                Err(e) => {
                    log::error!("Export failed: {}", e);
                    alert("Failed to export dashboard report");
                }
            }
            set_is_exporting.set(false);
        });
    };

    view! {
        <div style="padding: 20px 48px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 24px;">
                <div>
                    <h1 style="font-weight: 700; font-size: 2rem; margin: 0;">"Dashboard"</h1>
                    <p style="opacity: 0.4; margin-top: 4px;">
                        "Overview of today's sales, orders, and inventory"
                    </p>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_exporting
                    on_click=on_export
                >
                    {move || if is_exporting.get() { "Exporting..." } else { "Export Excel" }}
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div style="background: #fee2e2; color: #b91c1c; padding: 12px; border-radius: 8px; margin-top: 16px;">
                    "Error: " {e}
                </div>
            })}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p style="margin-top: 24px;">"Loading dashboard..."</p> }
            >
                <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-top: 20px;">
                    <StatCard
                        label="Sales"
                        value=Signal::derive(move || format_money(summary.get().total_sales))
                    />
                    <StatCard
                        label="Total Orders"
                        value=Signal::derive(move || format_thousands(summary.get().total_orders))
                    />
                    <StatCard
                        label="Net Profit"
                        value=Signal::derive(move || format_money(summary.get().net_profit))
                    />
                    <StatCard
                        label="Returns"
                        value=Signal::derive(move || format_thousands(summary.get().total_returns))
                    />
                </div>

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 16px;">
                    <div style="border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px; background: #fff;">
                        <div style="font-weight: 600;">"Top Products"</div>
                        {move || {
                            let items = summary.get().top_sales;
                            if items.is_empty() {
                                view! { <div style="font-size: 0.85rem; color: #6b7280; margin-top: 8px;">"No top products yet"</div> }.into_any()
                            } else {
                                view! {
                                    <ul style="list-style: none; padding: 0; margin: 12px 0 0; display: flex; flex-direction: column; gap: 8px;">
                                        {items
                                            .into_iter()
                                            .map(|p| view! {
                                                <li style="display: flex; justify-content: space-between;">
                                                    <div>
                                                        <div style="font-weight: 500;">{p.product_name.clone()}</div>
                                                        <div style="font-size: 0.75rem; color: #6b7280;">{p.quantity} " sold"</div>
                                                    </div>
                                                    <div style="font-size: 0.85rem; font-weight: 600;">{format_money(p.revenue)}</div>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    <div style="border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px; background: #fff;">
                        <div style="font-weight: 600; color: #7f1d1d;">"Low Stock"</div>
                        {move || {
                            let items = summary.get().low_stock_products;
                            if items.is_empty() {
                                view! { <div style="font-size: 0.85rem; color: #6b7280; margin-top: 8px;">"No low stock products found."</div> }.into_any()
                            } else {
                                view! {
                                    <table style="width: 100%; margin-top: 12px; font-size: 0.85rem;">
                                        <tbody>
                                            {items
                                                .into_iter()
                                                .map(|item| view! {
                                                    <tr>
                                                        <td style="padding: 4px 12px;">{item.product_name.clone()}</td>
                                                        <td style="padding: 4px 12px; color: #ef4444;">{item.current_stock}</td>
                                                        <td style="padding: 4px 12px; color: #9ca3af;">"/ " {item.min_stock}</td>
                                                    </tr>
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>

                <div style="border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px; background: #fff; margin-top: 16px;">
                    <div style="font-weight: 600;">"Daily Sales (Last 30 Days)"</div>
                    {move || {
                        let points = summary.get().sales_chart_data;
                        if points.is_empty() {
                            view! { <div style="font-size: 0.85rem; color: #6b7280; margin-top: 8px;">"No sales data available for the selected period."</div> }.into_any()
                        } else {
                            let max = points.iter().map(|p| p.sales).fold(0.0_f64, f64::max).max(1.0);
                            view! {
                                <div style="display: flex; align-items: flex-end; gap: 3px; height: 160px; margin-top: 12px;">
                                    {points
                                        .into_iter()
                                        .map(|p| {
                                            let height = (p.sales / max * 100.0).round();
                                            let bar = format!(
                                                "flex: 1; background: #8884d8; border-radius: 2px 2px 0 0; height: {}%;",
                                                height.max(1.0)
                                            );
                                            let title = format!("{}: {}", p.date, format_money(p.sales));
                                            view! { <div style=bar title=title></div> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
