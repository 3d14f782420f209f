//! KPI tile for the dashboard header row.

use leptos::prelude::*;

/// Group an integer's digits for display (12345 -> "12,345").
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Currency rendering used by the KPI tiles.
pub fn format_money(value: f64) -> String {
    let whole = value.trunc() as i64;
    let cents = ((value - value.trunc()).abs() * 100.0).round() as i64;
    if cents == 0 {
        format!("\u{20B9} {}", format_thousands(whole))
    } else {
        format!("\u{20B9} {}.{:02}", format_thousands(whole), cents)
    }
}

#[component]
pub fn StatCard(
    /// Tag shown above the value
    label: &'static str,
    /// Pre-formatted value text
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div style="padding: 16px; border: 1px solid #e5e7eb; border-radius: 12px; background: #fff;">
            <div style="font-size: 0.8rem; opacity: 0.6;">{label}</div>
            <div style="font-size: 1.5rem; font-weight: 700; margin-top: 4px;">
                {move || value.get()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12345), "12,345");
        assert_eq!(format_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn money_drops_zero_cents() {
        assert_eq!(format_money(1500.0), "\u{20B9} 1,500");
        assert_eq!(format_money(99.5), "\u{20B9} 99.50");
    }
}
