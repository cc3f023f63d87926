//! Ranked item card.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::CARD_ANIMATION_STEP_SECS;
use crate::models::TopItem;

stylance::import_crate_style!(css, "src/components/dashboard/card.module.css");

/// One entry of the grid: rank badge, artwork, name and subtitle.
///
/// `rank` is 1-based. Cards fade in one after another, staggered by rank.
#[component]
pub fn ItemCard(item: TopItem, rank: usize) -> impl IntoView {
    let delay = format!(
        "animation-delay: {:.2}s",
        (rank - 1) as f64 * CARD_ANIMATION_STEP_SECS
    );
    let name = item.name().to_string();
    let subtitle = item.subtitle();
    let image = item.image_url().map(str::to_string);

    view! {
        <div class=css::card style=delay>
            <div class=css::rank>{format!("#{rank}")}</div>
            {match image {
                Some(src) => view! { <img src=src alt=name.clone() /> }.into_any(),
                None => view! {
                    <div class=css::placeholder><Icon icon=ic::MUSIC /></div>
                }
                .into_any(),
            }}
            <div class=css::info>
                <h3>{name}</h3>
                <p>{subtitle}</p>
            </div>
        </div>
    }
}
