use std::collections::HashMap;

use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// Top-level pages of the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    OrdersReturns,
    Products,
    Analysis,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::OrdersReturns,
        Page::Products,
        Page::Analysis,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::OrdersReturns => "orders-returns",
            Page::Products => "products",
            Page::Analysis => "analysis",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::OrdersReturns => "Orders & Returns",
            Page::Products => "Products",
            Page::Analysis => "Analysis",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
        }
    }

    pub fn activate(&self, page: Page) {
        self.active.set(page);
    }

    /// Mirror the active page into the URL query (`?page=`), and restore it
    /// from there on startup, so a reload lands on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                key.to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(Page::from_key("settings"), None);
    }
}
