use chrono::Utc;
use gloo_net::http::Request;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::feed::{self, FeedError, FeedOutcome};

async fn fetch_feed() -> Result<FeedOutcome, FeedError> {
    let response = Request::get(&config::get_feed_url())
        .send()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;
    feed::parse_feed(&body, Utc::now())
}

#[function_component(BlueskyFeed)]
pub fn bluesky_feed() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(container) = dom::query("#bluesky-feed") {
                spawn_local(async move {
                    let result = fetch_feed().await;
                    match &result {
                        Ok(FeedOutcome::Posts(posts)) => info!("Loaded {} Bluesky posts", posts.len()),
                        Ok(FeedOutcome::Empty) => info!("Bluesky feed is empty"),
                        Err(err) => debug!("Hiding Bluesky feed: {}", err),
                    }
                    container.set_inner_html(&feed::render_feed(&result));
                });
            }
            || ()
        },
        (),
    );

    html! {
        <section class="bluesky" aria-labelledby="bluesky-heading">
            <h2 id="bluesky-heading">{"Latest from Bluesky"}</h2>
            <div id="bluesky-feed" class="bluesky-feed" aria-live="polite"></div>
            <a
                class="bluesky-follow"
                href={format!("{}/{}", config::POST_PERMALINK_BASE, config::FEED_HANDLE)}
                target="_blank"
                rel="noopener"
            >
                {"Follow @"}{config::FEED_HANDLE}
            </a>
        </section>
    }
}
