//! Login and signup page. Signup is a two-step form: account first, then
//! the first business's profile. All field checks run locally before
//! anything is sent.

use std::collections::BTreeMap;

use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::system::auth::{api, context};

pub fn validate_login(username: &str, password: &str) -> Option<String> {
    if username.trim().is_empty() || password.is_empty() {
        Some("Enter both username & password".to_string())
    } else {
        None
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Account-step checks; keys match the input names.
pub fn validate_account_step(form: &RegisterRequest) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    if form.full_name.trim().is_empty() {
        errors.insert("full_name".into(), "Full name is required".into());
    }
    if form.username.trim().is_empty() {
        errors.insert("username".into(), "Username is required".into());
    }
    if form.email.trim().is_empty() {
        errors.insert("email".into(), "Email is required".into());
    } else if !looks_like_email(form.email.trim()) {
        errors.insert("email".into(), "Invalid email".into());
    }
    if form.password.is_empty() {
        errors.insert("password".into(), "Password is required".into());
    } else {
        if form.password.len() < 6 {
            errors.insert(
                "password".into(),
                "Password must be at least 6 characters".into(),
            );
        }
        if !form.password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.insert("password".into(), "Password must include 1 uppercase".into());
        }
        if !form.password.chars().any(|c| c.is_ascii_digit()) {
            errors.insert("password".into(), "Password must include 1 number".into());
        }
    }
    if form.confirm_password.is_empty() {
        errors.insert(
            "confirm_password".into(),
            "Confirm password is required".into(),
        );
    } else if form.password != form.confirm_password {
        errors.insert("confirm_password".into(), "Passwords do not match".into());
    }
    if form.role.is_empty() {
        errors.insert("role".into(), "Role is required".into());
    }
    errors
}

/// Business-step checks.
pub fn validate_business_step(form: &RegisterRequest) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    if form.business_name.trim().is_empty() {
        errors.insert("business_name".into(), "Business name is required".into());
    }
    if form.business_type.trim().is_empty() {
        errors.insert("business_type".into(), "Business type is required".into());
    }
    if form.contact_number.trim().is_empty() {
        errors.insert(
            "contact_number".into(),
            "Contact number is required".into(),
        );
    }
    errors
}

#[component]
fn FieldError(errors: RwSignal<BTreeMap<String, String>>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).cloned()).map(|message| {
            view! { <p style="color: #ef4444; font-size: 0.75rem; margin-top: 2px;">{message}</p> }
        })
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (is_login, set_is_login) = signal(true);
    let (step, set_step) = signal(1u8);
    let (is_loading, set_is_loading) = signal(false);
    let (message, set_message) = signal(Option::<String>::None);

    let form = RwSignal::new(RegisterRequest::default());
    let field_errors = RwSignal::new(BTreeMap::<String, String>::new());

    let (_, set_auth_state) = context::use_auth();

    let on_login = move |_| {
        let data = form.get_untracked();
        if let Some(msg) = validate_login(&data.username, &data.password) {
            set_message.set(Some(msg));
            return;
        }
        set_is_loading.set(true);
        set_message.set(None);
        spawn_local(async move {
            match api::login(data.username, data.password).await {
                Ok(response) => {
                    context::store_session(
                        set_auth_state,
                        &response.access_token,
                        &response.refresh_token,
                        &response.username,
                    );
                }
                Err(e) => set_message.set(Some(format!("Login failed: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    let next_step = move |_| {
        let errors = validate_account_step(&form.get_untracked());
        let ok = errors.is_empty();
        field_errors.set(errors);
        if ok {
            set_step.set(2);
        }
    };

    let on_signup = move |_| {
        let data = form.get_untracked();
        let account_errors = validate_account_step(&data);
        if !account_errors.is_empty() {
            field_errors.set(account_errors);
            set_step.set(1);
            return;
        }
        let business_errors = validate_business_step(&data);
        if !business_errors.is_empty() {
            field_errors.set(business_errors);
            set_step.set(2);
            return;
        }
        field_errors.set(BTreeMap::new());
        set_is_loading.set(true);
        spawn_local(async move {
            match api::signup(&data).await {
                Ok(response) => {
                    context::store_session(
                        set_auth_state,
                        &response.access_token,
                        &response.refresh_token,
                        &response.username,
                    );
                }
                Err(e) => set_message.set(Some(format!("Signup failed: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    let text_input = move |label: &'static str,
                           field: &'static str,
                           input_type: &'static str,
                           get: fn(&RegisterRequest) -> String,
                           set: fn(&mut RegisterRequest, String)| {
        view! {
            <div style="margin-bottom: 10px;">
                <label style="display: block; font-size: 0.85rem; margin-bottom: 2px;">{label}</label>
                <input
                    type=input_type
                    style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                        field_errors.update(|e| {
                            e.remove(field);
                        });
                    }
                />
                <FieldError errors=field_errors field=field />
            </div>
        }
    };

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #111827;">
            <div style="background: #1f2937; color: #f9fafb; padding: 32px; border-radius: 16px; width: 420px; max-width: 92%;">
                <h1 style="font-size: 1.5rem; font-weight: 700;">"Track In"</h1>
                <p style="opacity: 0.6; font-size: 0.85rem; margin-bottom: 16px;">
                    {move || if is_login.get() { "Sign in to your dashboard" } else { "Create your account" }}
                </p>

                {move || message.get().map(|m| view! {
                    <div style="background: #7f1d1d; color: #fecaca; padding: 10px; border-radius: 8px; margin-bottom: 12px; font-size: 0.85rem;">
                        {m}
                    </div>
                })}

                <Show
                    when=move || is_login.get()
                    fallback=move || view! {
                        <div>
                            <Show
                                when=move || step.get() == 1
                                fallback=move || view! {
                                    <div>
                                        {text_input("Business Name", "business_name", "text", |f| f.business_name.clone(), |f, v| f.business_name = v)}
                                        {text_input("Business Type", "business_type", "text", |f| f.business_type.clone(), |f, v| f.business_type = v)}
                                        {text_input("Contact Number", "contact_number", "text", |f| f.contact_number.clone(), |f, v| f.contact_number = v)}
                                        {text_input("GST / Tax ID", "gst_tax_id", "text", |f| f.gst_tax_id.clone(), |f, v| f.gst_tax_id = v)}
                                        {text_input("Business Address", "business_address", "text", |f| f.business_address.clone(), |f, v| f.business_address = v)}
                                        {text_input("Department / Branch", "department_branch", "text", |f| f.department_branch.clone(), |f, v| f.department_branch = v)}
                                        <div style="display: flex; gap: 8px; margin-top: 12px;">
                                            <Button on_click=move |_| set_step.set(1)>"Back"</Button>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=is_loading
                                                on_click=on_signup
                                            >
                                                {move || if is_loading.get() { "Loading..." } else { "Sign Up" }}
                                            </Button>
                                        </div>
                                    </div>
                                }
                            >
                                <div>
                                    {text_input("Full Name", "full_name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                                    {text_input("Username", "username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                                    {text_input("Email", "email", "text", |f| f.email.clone(), |f, v| f.email = v)}
                                    {text_input("Password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                                    {text_input("Confirm Password", "confirm_password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                                    <div style="margin-bottom: 10px;">
                                        <label style="display: block; font-size: 0.85rem; margin-bottom: 2px;">"Role"</label>
                                        <select
                                            style="width: 100%; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px;"
                                            prop:value=move || form.with(|f| f.role.clone())
                                            on:change=move |ev| {
                                                form.update(|f| f.role = event_target_value(&ev));
                                                field_errors.update(|e| { e.remove("role"); });
                                            }
                                        >
                                            <option value="">"Select Role"</option>
                                            <option value="admin">"Admin"</option>
                                        </select>
                                        <FieldError errors=field_errors field="role" />
                                    </div>
                                    <Button appearance=ButtonAppearance::Primary on_click=next_step>
                                        "Next"
                                    </Button>
                                </div>
                            </Show>
                        </div>
                    }
                >
                    <div>
                        {text_input("Username", "username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                        {text_input("Password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=is_loading
                            on_click=on_login
                        >
                            {move || if is_loading.get() { "Loading..." } else { "Login" }}
                        </Button>
                    </div>
                </Show>

                <p style="margin-top: 16px; font-size: 0.85rem; opacity: 0.7;">
                    {move || if is_login.get() { "No account yet? " } else { "Already registered? " }}
                    <a
                        href="#"
                        style="color: #93c5fd;"
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_is_login.update(|v| *v = !*v);
                            set_step.set(1);
                            set_message.set(None);
                            field_errors.set(BTreeMap::new());
                        }
                    >
                        {move || if is_login.get() { "Sign up" } else { "Login" }}
                    </a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            full_name: "Ada Lovelace".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            role: "admin".into(),
            ..Default::default()
        }
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("", "secret").is_some());
        assert!(validate_login("ada", "").is_some());
        assert!(validate_login("ada", "secret").is_none());
    }

    #[test]
    fn password_rules_are_enforced() {
        let weak = validate_account_step(&account("short", "short"));
        assert!(weak.contains_key("password"));

        let no_upper = validate_account_step(&account("longenough1", "longenough1"));
        assert!(no_upper.contains_key("password"));

        let ok = validate_account_step(&account("Longenough1", "Longenough1"));
        assert!(!ok.contains_key("password"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let errors = validate_account_step(&account("Longenough1", "Different1"));
        assert_eq!(errors.get("confirm_password").unwrap(), "Passwords do not match");
    }

    #[test]
    fn email_shape_is_checked() {
        let mut form = account("Longenough1", "Longenough1");
        form.email = "not-an-email".into();
        assert_eq!(
            validate_account_step(&form).get("email").unwrap(),
            "Invalid email"
        );
    }

    #[test]
    fn business_step_requires_profile_basics() {
        let form = account("Longenough1", "Longenough1");
        let errors = validate_business_step(&form);
        assert!(errors.contains_key("business_name"));
        assert!(errors.contains_key("business_type"));
        assert!(errors.contains_key("contact_number"));

        let filled = RegisterRequest {
            business_name: "North Depot".into(),
            business_type: "Retail".into(),
            contact_number: "555-0100".into(),
            ..form
        };
        assert!(validate_business_step(&filled).is_empty());
    }
}
