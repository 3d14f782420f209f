//! Selection context: which business's data is in view.
//!
//! A context of signals shared by every data-fetching page. The selection
//! survives reloads via localStorage; consumers re-render through the
//! signal subscription.

use contracts::domain::business::Business;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Sentinel selection meaning "no business scoping".
pub const ALL_BUSINESSES: &str = "all";

const SELECTED_KEY: &str = "business_selected";

#[derive(Clone, Copy)]
pub struct BusinessContext {
    pub businesses: RwSignal<Vec<Business>>,
    /// `"all"` or a business id in string form.
    pub selected: RwSignal<String>,
}

/// A selection pointing at a business that no longer exists falls back to
/// "all". An empty list proves nothing (it may be a scoping quirk), so the
/// selection is left alone.
pub fn resolve_selection(selected: &str, businesses: &[Business]) -> String {
    if selected != ALL_BUSINESSES
        && !businesses.is_empty()
        && !businesses.iter().any(|b| b.id.to_string() == selected)
    {
        ALL_BUSINESSES.to_string()
    } else {
        selected.to_string()
    }
}

fn stored_selection() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(SELECTED_KEY).ok().flatten())
        .unwrap_or_else(|| ALL_BUSINESSES.to_string())
}

fn persist_selection(selected: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SELECTED_KEY, selected);
    }
}

impl BusinessContext {
    pub fn new() -> Self {
        Self {
            businesses: RwSignal::new(Vec::new()),
            selected: RwSignal::new(stored_selection()),
        }
    }

    pub fn set_selected(&self, id: impl Into<String>) {
        let id = id.into();
        persist_selection(&id);
        self.selected.set(id);
    }

    /// Refetch the business list. Failures leave the current list alone:
    /// the page keeps rendering whatever it already had.
    pub fn refresh(&self) {
        let ctx = *self;
        spawn_local(async move {
            match api::list_businesses().await {
                Ok(list) => {
                    let current = ctx.selected.get_untracked();
                    let resolved = resolve_selection(&current, &list);
                    ctx.businesses.set(list);
                    if resolved != current {
                        ctx.set_selected(resolved);
                    }
                }
                Err(e) => {
                    log::error!("Failed to fetch businesses: {}", e);
                }
            }
        });
    }
}

impl Default for BusinessContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_business_context() {
    provide_context(BusinessContext::new());
}

pub fn use_business() -> BusinessContext {
    use_context::<BusinessContext>().expect("BusinessContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn businesses(ids: &[i64]) -> Vec<Business> {
        ids.iter()
            .map(|id| Business {
                id: *id,
                business_name: format!("Biz {}", id),
                business_type: String::new(),
                contact_number: String::new(),
                gst_tax_id: String::new(),
                business_address: String::new(),
                department_branch: String::new(),
            })
            .collect()
    }

    #[test]
    fn unknown_selection_resets_to_all() {
        assert_eq!(resolve_selection("7", &businesses(&[1, 2])), "all");
    }

    #[test]
    fn known_selection_is_kept() {
        assert_eq!(resolve_selection("2", &businesses(&[1, 2])), "2");
    }

    #[test]
    fn all_is_always_kept() {
        assert_eq!(resolve_selection("all", &businesses(&[1])), "all");
        assert_eq!(resolve_selection("all", &[]), "all");
    }

    #[test]
    fn empty_list_does_not_reset() {
        assert_eq!(resolve_selection("2", &[]), "2");
    }
}
