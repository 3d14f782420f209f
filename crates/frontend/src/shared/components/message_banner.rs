//! Dismissable success/error banner shown under a page heading.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Handle the page logic writes messages through.
#[derive(Clone, Copy)]
pub struct Banner {
    state: RwSignal<Option<(String, MessageKind)>>,
}

impl Banner {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(None),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.state.set(Some((message.into(), MessageKind::Success)));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.state.set(Some((message.into(), MessageKind::Error)));
    }

    pub fn clear(&self) {
        self.state.set(None);
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn MessageBanner(banner: Banner) -> impl IntoView {
    move || {
        banner.state.get().map(|(message, kind)| {
            let style = match kind {
                MessageKind::Success => {
                    "background: #dcfce7; color: #15803d; padding: 12px; border-radius: 8px; display: flex; justify-content: space-between; align-items: flex-start; margin-top: 16px;"
                }
                MessageKind::Error => {
                    "background: #fee2e2; color: #b91c1c; padding: 12px; border-radius: 8px; display: flex; justify-content: space-between; align-items: flex-start; margin-top: 16px;"
                }
            };
            view! {
                <div style=style>
                    <span style="white-space: pre-line; padding-right: 12px;">{message}</span>
                    <button
                        style="background: none; border: none; cursor: pointer; opacity: 0.7;"
                        on:click=move |_| banner.clear()
                    >
                        "\u{2715}"
                    </button>
                </div>
            }
        })
    }
}
