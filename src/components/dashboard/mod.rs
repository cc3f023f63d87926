//! Top-items dashboard.
//!
//! Owns the logged-in [`Session`]: it is created when the dashboard mounts
//! for a token and dropped with the component on logout, taking the query
//! cache with it. Selection changes are fed to a [`ViewConsumer`], which
//! writes the visible list and loading flag back into signals.

mod card;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::ThemeToggle;
use crate::components::icons as ic;
use crate::core::{Session, SpotifyClient, ViewConsumer, ViewSink, prefetch};
use crate::models::{Category, QueryKey, ResultList, TimeWindow};
use crate::utils::BrowserSpawner;
use card::ItemCard;

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

/// Visible selection state backed by signals.
#[derive(Clone, Copy)]
struct SignalSink {
    loading: RwSignal<bool>,
    items: RwSignal<ResultList>,
}

impl ViewSink for SignalSink {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_items(&self, _key: QueryKey, items: ResultList) {
        self.items.set(items);
    }
}

/// Button class, highlighted when `active`.
fn toggle_class(active: bool) -> String {
    if active {
        format!("{} {}", css::toggleButton, css::active)
    } else {
        css::toggleButton.to_string()
    }
}

#[component]
pub fn Dashboard(token: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let category = RwSignal::new(Category::default());
    let window = RwSignal::new(TimeWindow::default());
    let loading = RwSignal::new(false);
    let items = RwSignal::new(ResultList::default());

    let client = SpotifyClient::default();
    let session = Rc::new(Session::new(
        token.clone(),
        Rc::new(client.clone()),
        Rc::new(BrowserSpawner),
    ));
    let consumer = ViewConsumer::new(
        Rc::clone(&session),
        SignalSink { loading, items },
        move || ctx.logout(),
    );
    prefetch::schedule(&session);
    let consumer = StoredValue::new_local(consumer);

    // Re-runs on every selection change.
    Effect::new(move |_| {
        let key = QueryKey::new(category.get(), window.get());
        consumer.with_value(|c| c.select(key));
    });
    on_cleanup(move || consumer.with_value(|c| c.teardown()));

    let profile = LocalResource::new(move || {
        let client = client.clone();
        let token = token.clone();
        async move { client.profile(&token).await.ok() }
    });
    let user_name = move || {
        profile
            .get()
            .flatten()
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class=css::dashboard>
            <header class=css::header>
                <h1>{move || category.get().title()}</h1>
                <div class=css::headerActions>
                    <span class=css::user>
                        <Icon icon=ic::USER />
                        {user_name}
                    </span>
                    <ThemeToggle />
                    <button class=css::logoutButton on:click=move |_| ctx.logout()>
                        <Icon icon=ic::LOGOUT />
                        "Logout"
                    </button>
                </div>
            </header>

            <div class=css::controls>
                <div class=css::toggleGroup>
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! {
                            <button
                                class=move || toggle_class(category.get() == c)
                                on:click=move |_| category.set(c)
                            >
                                {c.label()}
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class=css::toggleGroup>
                    {TimeWindow::ALL
                        .into_iter()
                        .map(|w| view! {
                            <button
                                class=move || toggle_class(window.get() == w)
                                on:click=move |_| window.set(w)
                            >
                                {w.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            {move || if loading.get() {
                view! { <div class=css::loading>"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div class=css::grid>
                        {items
                            .get()
                            .iter()
                            .enumerate()
                            .map(|(index, item)| view! {
                                <ItemCard item=item.clone() rank={index + 1} />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
