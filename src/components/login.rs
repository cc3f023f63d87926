//! Login screen.

use leptos::prelude::*;
use leptos_icons::Icon;
use tracing::error;

use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::core::auth;

stylance::import_crate_style!(css, "src/components/login.module.css");

/// Landing page shown while no token is available.
#[component]
pub fn Login() -> impl IntoView {
    let failure = RwSignal::new(None::<String>);

    let on_login = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = auth::begin_login() {
            error!(error = %e, "could not start login");
            failure.set(Some(e.to_string()));
        }
    };

    view! {
        <div class=css::container>
            <span class=css::logo><Icon icon=ic::MUSIC /></span>
            <h1>{APP_NAME}</h1>
            <p>{APP_TAGLINE}</p>
            <button class=css::loginButton on:click=on_login>
                "Log in with Spotify"
            </button>
            {move || failure.get().map(|msg| view! { <p class=css::error>{msg}</p> })}
        </div>
    }
}
