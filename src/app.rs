//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! start-up logic that resolves the access token.

use leptos::prelude::*;
use leptos_use::use_media_query;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;

use crate::components::{Dashboard, Login};
use crate::config::PREFERS_LIGHT_QUERY;
use crate::core::{auth, theme};
use crate::models::Theme;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// The access token doubles as the session switch: while it is `Some`, a
/// dashboard (and with it a session cache) exists for that token.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Access token of the logged-in user.
    pub token: RwSignal<Option<String>>,

    /// Current color scheme.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            token: RwSignal::new(None),
            theme: RwSignal::new(theme),
        }
    }

    /// Start a session with `token`.
    pub fn login(&self, token: String) {
        self.token.set(Some(token));
    }

    /// End the session: forget the token here and in storage.
    ///
    /// Dropping the token unmounts the dashboard, which drops its cache.
    pub fn logout(&self) {
        if self.token.with_untracked(Option::is_some) {
            info!("logging out");
            self.token.set(None);
        }
        auth::clear_session();
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Resolve the initial token: an OAuth callback first, then a stored token.
fn restore_session(ctx: AppContext) {
    if let Some(code) = dom::query_param("code") {
        spawn_local(async move {
            match auth::complete_login(&code).await {
                Ok(token) => ctx.login(token),
                Err(e) => error!(error = %e, "login failed"),
            }
        });
    } else if let Some(token) = auth::stored_token() {
        ctx.login(token);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps the body class and stored theme in sync with the theme signal
/// - Renders the Login screen or the Dashboard for the current token
#[component]
pub fn App() -> impl IntoView {
    let prefers_light = use_media_query(PREFERS_LIGHT_QUERY);
    let ctx = AppContext::new(theme::initial(prefers_light.get_untracked()));
    provide_context(ctx);

    restore_session(ctx);

    Effect::new(move |_| theme::apply(ctx.theme.get()));

    // Memo so that re-setting the same token does not rebuild the session.
    let token = Memo::new(move |_| ctx.token.get());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <div class="app">
                {move || match token.get() {
                    Some(token) => view! { <Dashboard token=token /> }.into_any(),
                    None => view! { <Login /> }.into_any(),
                }}
            </div>
        </ErrorBoundary>
    }
}
