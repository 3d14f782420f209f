//! Analysis page: the Gateway-computed reports, downloadable as CSV.
//!
//! The report files are produced server-side; this page only scopes the
//! request (date range + business) and saves the blob under the name the
//! `Content-Disposition` header suggests.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::business::use_business;
use crate::shared::api::{api_url, QueryParams};
use crate::shared::download::download_report;

struct ReportTab {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    endpoint: &'static str,
    fallback_stem: &'static str,
}

static REPORTS: [ReportTab; 5] = [
    ReportTab {
        key: "sales",
        title: "Sales Overview",
        description: "Daily revenue and order volume for the selected period.",
        endpoint: "/analysis/sales-overview-report/",
        fallback_stem: "sales_overview",
    },
    ReportTab {
        key: "returns",
        title: "Returns Analysis",
        description: "Return counts and value, grouped by product.",
        endpoint: "/analysis/returns-analysis-report/",
        fallback_stem: "returns_analysis",
    },
    ReportTab {
        key: "revenue",
        title: "Revenue & Profit",
        description: "Revenue, cost and margin per product.",
        endpoint: "/analysis/revenue-profit-report/",
        fallback_stem: "revenue_profit",
    },
    ReportTab {
        key: "inventory",
        title: "Inventory Analysis",
        description: "Stock levels against min/max thresholds.",
        endpoint: "/analysis/inventory-analysis-report/",
        fallback_stem: "inventory_analysis",
    },
    ReportTab {
        key: "customers",
        title: "Customer & Sales",
        description: "Per-customer order history and totals.",
        endpoint: "/analysis/customer-sales-report/",
        fallback_stem: "customer_sales",
    },
];

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let business = use_business();
    let (active, set_active) = signal("sales");
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (downloading, set_downloading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_download = move |_| {
        let Some(report) = REPORTS.iter().find(|r| r.key == active.get_untracked()) else {
            return;
        };
        let mut query = QueryParams::new();
        let start = start_date.get_untracked();
        let end = end_date.get_untracked();
        if !start.is_empty() && !end.is_empty() {
            query.set("start_date", start);
            query.set("end_date", end);
        }
        query.set("business", business.selected.get_untracked());
        let url = query.append_to(&api_url(report.endpoint));
        let stem = report.fallback_stem;

        set_downloading.set(true);
        set_error.set(None);
        spawn_local(async move {
            if let Err(e) = download_report(&url, stem).await {
                log::error!("Download failed: {}", e);
                set_error.set(Some(format!("Failed to download report: {}", e)));
            }
            set_downloading.set(false);
        });
    };

    let tab_style = move |key: &'static str| {
        if active.get() == key {
            "padding: 8px 16px; border: none; border-radius: 8px; background: #7c3aed; color: #fff; cursor: pointer;"
        } else {
            "padding: 8px 16px; border: none; border-radius: 8px; background: transparent; color: #4b5563; cursor: pointer;"
        }
    };

    view! {
        <div style="padding: 20px 48px;">
            <div style="margin-top: 24px;">
                <h1 style="font-weight: 700; font-size: 2rem; margin: 0;">"Analysis"</h1>
                <p style="opacity: 0.4; margin-top: 4px;">"Downloadable reports computed by the backend"</p>
            </div>

            <div style="display: flex; flex-wrap: wrap; gap: 4px; background: #fff; border-radius: 12px; padding: 8px; margin-top: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                {REPORTS
                    .iter()
                    .map(|r| {
                        let key = r.key;
                        view! {
                            <button style=move || tab_style(key) on:click=move |_| set_active.set(key)>
                                {r.title}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || error.get().map(|e| view! {
                <div style="background: #fee2e2; color: #b91c1c; padding: 12px; border-radius: 8px; margin-top: 16px;">
                    {e}
                </div>
            })}

            <div style="background: #f9fafb; border-radius: 12px; padding: 24px; margin-top: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                {move || {
                    REPORTS.iter().find(|r| r.key == active.get()).map(|r| view! {
                        <div>
                            <h2 style="font-size: 1.25rem; font-weight: 600; margin: 0;">{r.title}</h2>
                            <p style="color: #6b7280; margin-top: 4px;">{r.description}</p>
                        </div>
                    })
                }}

                <div style="display: flex; align-items: flex-end; gap: 12px; margin-top: 16px;">
                    <div>
                        <label style="display: block; font-size: 0.8rem; color: #6b7280;">"Start date"</label>
                        <input
                            type="date"
                            style="border: 1px solid #d1d5db; border-radius: 6px; padding: 6px;"
                            prop:value=move || start_date.get()
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label style="display: block; font-size: 0.8rem; color: #6b7280;">"End date"</label>
                        <input
                            type="date"
                            style="border: 1px solid #d1d5db; border-radius: 6px; padding: 6px;"
                            prop:value=move || end_date.get()
                            on:input=move |ev| set_end_date.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=downloading
                        on_click=on_download
                    >
                        {move || if downloading.get() { "Downloading..." } else { "Download CSV" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
