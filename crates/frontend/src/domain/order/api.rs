//! Gateway operations for the order lifecycle: fetch, create, return,
//! delete, and return-removal with its endpoint fallback chain.

use chrono::NaiveDate;
use contracts::domain::order::{NewOrder, Order};
use contracts::domain::returns::{NewReturn, ReturnRecord};
use gloo_net::http::Method;

use crate::domain::business::ALL_BUSINESSES;
use crate::shared::api::{api_url, QueryParams};
use crate::shared::date_utils::format_ymd;
use crate::shared::error::ApiError;
use crate::shared::http;

const METHOD_NOT_ALLOWED: u16 = 405;

/// Query for the order/return list fetches. A non-empty search term drops
/// the date scope so the search spans all dates; an empty one pins the
/// fetch to the selected date.
pub fn records_query(date: NaiveDate, search: &str, business: &str) -> QueryParams {
    let mut query = QueryParams::new();
    if search.trim().is_empty() {
        query.set("date", format_ymd(date));
    }
    query.set("business", business);
    query
}

/// Query used by the mutating endpoints: `business` only when a specific
/// one is selected.
fn scoped_query(business: &str) -> QueryParams {
    let mut query = QueryParams::new();
    if !business.is_empty() && business != ALL_BUSINESSES {
        query.set("business", business);
    }
    query
}

pub async fn fetch_orders(
    date: NaiveDate,
    search: &str,
    business: &str,
) -> Result<Vec<Order>, ApiError> {
    let url = records_query(date, search, business).append_to(&api_url("/orders/"));
    http::get_json(&url).await
}

pub async fn fetch_returns(
    date: NaiveDate,
    search: &str,
    business: &str,
) -> Result<Vec<ReturnRecord>, ApiError> {
    let url = records_query(date, search, business).append_to(&api_url("/returns/"));
    http::get_json(&url).await
}

/// Raw state of the add-order form before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOrderForm {
    pub product_name: String,
    pub quantity: String,
    pub customer_name: String,
    pub order_id: String,
    pub tracking_id: String,
}

/// Local validation for order creation. Nothing goes on the wire unless
/// this passes: product chosen, integer quantity of at least 1, all
/// references present, and no future-dated orders.
pub fn validate_new_order(
    form: &NewOrderForm,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<NewOrder, String> {
    if date > today {
        return Err("Cannot add an order for a future date.".to_string());
    }
    if form.product_name.is_empty() {
        return Err("Please select a product.".to_string());
    }
    let quantity = form.quantity.trim().parse::<i64>().ok().filter(|q| *q >= 1);
    let order = NewOrder {
        order_id: form.order_id.trim().to_string(),
        tracking_id: form.tracking_id.trim().to_string(),
        product_name: form.product_name.clone(),
        quantity: quantity.unwrap_or(0),
        customer_name: form.customer_name.trim().to_string(),
        date,
    };
    if order.order_id.is_empty()
        || order.tracking_id.is_empty()
        || order.customer_name.is_empty()
        || quantity.is_none()
    {
        return Err("Please fill all required fields with valid values".to_string());
    }
    Ok(order)
}

/// POST the order. The Gateway decrements stock; field-level rejections
/// come back as `ValidationFailed` with one `field: message` line each.
pub async fn create_order(order: &NewOrder, business: &str) -> Result<(), ApiError> {
    let url = scoped_query(business).append_to(&api_url("/orders/add/"));
    let response = http::send_json(Method::POST, &url, order).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(http::error_from_response(response).await)
    }
}

/// Record a return for an order: the source order id, its full quantity,
/// and the currently selected date.
pub async fn return_order(order: &Order, date: NaiveDate, business: &str) -> Result<(), ApiError> {
    let payload = NewReturn {
        order: order.id,
        quantity: order.quantity,
        date,
    };
    let url = scoped_query(business).append_to(&api_url("/returns/add/"));
    let response = http::send_json(Method::POST, &url, &payload).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(http::error_from_response(response).await)
    }
}

/// Delete an order. An empty 204 is the only success signal the Gateway
/// gives; anything else is a failure whose message is surfaced.
pub async fn delete_order(order_id: i64) -> Result<(), ApiError> {
    let url = api_url(&format!("/orders/{}/delete/", order_id));
    let response = http::send(Method::DELETE, &url).await?;
    if response.status() == 204 {
        Ok(())
    } else {
        Err(http::error_from_response(response).await)
    }
}

/// One candidate request shape for removing a return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveAttempt {
    pub method: Method,
    pub url: String,
}

/// The ordered fallback chain for return removal. Deployed Gateways differ
/// in which shape they accept; the order must not change.
pub fn remove_return_plan(return_id: i64, business: &str) -> Vec<RemoveAttempt> {
    let id = urlencoding::encode(&return_id.to_string()).into_owned();

    let first = scoped_query(business).append_to(&api_url(&format!("/returns/remove/{}/", id)));
    let second = scoped_query(business).append_to(&api_url(&format!("/returns/{}/delete/", id)));
    let mut third_query = QueryParams::new();
    third_query.set("id", return_id);
    if !business.is_empty() && business != ALL_BUSINESSES {
        third_query.set("business", business);
    }
    let third = third_query.append_to(&api_url("/returns/"));

    vec![
        RemoveAttempt {
            method: Method::POST,
            url: first,
        },
        RemoveAttempt {
            method: Method::POST,
            url: second,
        },
        RemoveAttempt {
            method: Method::DELETE,
            url: third,
        },
    ]
}

/// Walk the fallback chain: a method-not-allowed reply moves on to the
/// next shape, any other reply settles the operation.
pub async fn remove_return(return_id: i64, business: &str) -> Result<(), ApiError> {
    let plan = remove_return_plan(return_id, business);
    let last = plan.len() - 1;
    for (i, attempt) in plan.into_iter().enumerate() {
        let response = http::send(attempt.method, &attempt.url).await?;
        if response.status() == METHOD_NOT_ALLOWED && i < last {
            continue;
        }
        return if response.ok() {
            Ok(())
        } else {
            Err(http::error_from_response(response).await)
        };
    }
    Err(ApiError::RequestFailed("empty removal plan".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form(quantity: &str) -> NewOrderForm {
        NewOrderForm {
            product_name: "Widget".into(),
            quantity: quantity.into(),
            customer_name: "Acme".into(),
            order_id: "O-1".into(),
            tracking_id: "T-1".into(),
        }
    }

    #[test]
    fn empty_search_scopes_by_date() {
        let query = records_query(date(2024, 3, 1), "", "all");
        assert_eq!(
            query.append_to("/orders/"),
            "/orders/?date=2024-03-01&business=all"
        );
    }

    #[test]
    fn whitespace_search_still_scopes_by_date() {
        let query = records_query(date(2024, 3, 1), "   ", "2");
        assert!(query.contains("date"));
    }

    #[test]
    fn nonempty_search_drops_the_date_scope() {
        let query = records_query(date(2024, 3, 1), "widget", "2");
        assert!(!query.contains("date"));
        assert_eq!(query.append_to("/orders/"), "/orders/?business=2");
    }

    #[test]
    fn valid_order_passes_and_is_trimmed() {
        let mut f = form("3");
        f.customer_name = "  Acme  ".into();
        let order = validate_new_order(&f, date(2024, 3, 1), date(2024, 3, 1)).unwrap();
        assert_eq!(order.quantity, 3);
        assert_eq!(order.customer_name, "Acme");
        assert_eq!(order.date, date(2024, 3, 1));
    }

    #[test]
    fn zero_negative_and_fractional_quantities_fail_locally() {
        let today = date(2024, 3, 1);
        for bad in ["0", "-2", "1.5", "three", ""] {
            assert!(
                validate_new_order(&form(bad), today, today).is_err(),
                "quantity {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn future_dates_are_rejected() {
        let err = validate_new_order(&form("1"), date(2024, 3, 2), date(2024, 3, 1)).unwrap_err();
        assert_eq!(err, "Cannot add an order for a future date.");
    }

    #[test]
    fn missing_references_are_rejected() {
        let today = date(2024, 3, 1);
        let mut f = form("1");
        f.order_id = "  ".into();
        assert!(validate_new_order(&f, today, today).is_err());
        let mut f = form("1");
        f.product_name.clear();
        assert_eq!(
            validate_new_order(&f, today, today).unwrap_err(),
            "Please select a product."
        );
    }

    #[test]
    fn remove_plan_tries_the_three_shapes_in_order() {
        let plan = remove_return_plan(42, "7");
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].method, Method::POST);
        assert!(plan[0].url.ends_with("/returns/remove/42/?business=7"));
        assert_eq!(plan[1].method, Method::POST);
        assert!(plan[1].url.ends_with("/returns/42/delete/?business=7"));
        assert_eq!(plan[2].method, Method::DELETE);
        assert!(plan[2].url.ends_with("/returns/?id=42&business=7"));
    }

    #[test]
    fn remove_plan_omits_business_when_viewing_all() {
        let plan = remove_return_plan(42, "all");
        assert!(plan[0].url.ends_with("/returns/remove/42/"));
        assert!(plan[2].url.ends_with("/returns/?id=42"));
    }
}
