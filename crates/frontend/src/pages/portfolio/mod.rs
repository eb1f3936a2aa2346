//! Portfolio landing page. Purely presentational: no state, no dependency on
//! the shopping list beyond links to it.

pub mod content;

use crate::routes::routes::APP_PATH;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use content::{AUTHOR, CORE_TILES, FEATURES, TECH_DETAILS, TECH_STACK};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Badge, BadgeAppearance};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="page page--portfolio">
            <nav class="portfolio-nav">
                <div class="portfolio-nav__inner">
                    <div class="portfolio-nav__brand">
                        <div class="icon-badge">{icon("user")}</div>
                        <h2>{format!("{}'s Portfolio", AUTHOR)}</h2>
                    </div>
                    <A href=APP_PATH>
                        <span class="button button--primary">"Try the App"{icon("arrow-right")}</span>
                    </A>
                </div>
            </nav>

            <div class="page__container">
                <Hero />
                <Features />
                <TechnicalDetails />
                <CallToAction />

                <footer class="portfolio-footer">
                    <p>{format!("Built by {} • Showcasing modern web development practices", AUTHOR)}</p>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="icon-badge icon-badge--xl">{icon("shopping-cart")}</div>
            <h1 class="hero__title">"Smart Shopping List"</h1>
            <p class="hero__lead">
                "A modern, intuitive shopping list application built with Rust and Leptos. "
                "Track items, manage budgets, and never forget what to buy again."
            </p>
            <div class="hero__badges">
                {TECH_STACK
                    .iter()
                    .map(|tech| view! { <Badge appearance=BadgeAppearance::Tint>{*tech}</Badge> })
                    .collect_view()}
            </div>
            <A href=APP_PATH>
                <span class="button button--primary button--lg">{icon("smartphone")}"Launch Application"</span>
            </A>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <h2 class="section-title">"Key Features"</h2>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| view! {
                        <CardAnimated class="feature-card" delay_ms={i as u32 * 80}>
                            <div class="feature-card__header">
                                <div class="icon-badge">{icon(feature.icon)}</div>
                                <h3>{feature.title}</h3>
                            </div>
                            <p class="muted">{feature.description}</p>
                        </CardAnimated>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TechnicalDetails() -> impl IntoView {
    view! {
        <CardAnimated class="tech-card" style="margin-bottom: 4rem;">
            <div class="tech-card__header">
                <div class="icon-badge">{icon("code")}</div>
                <h2>"Technical Implementation"</h2>
            </div>
            <div class="tech-card__columns">
                {TECH_DETAILS
                    .iter()
                    .map(|detail| view! {
                        <div>
                            <h4>{detail.heading}</h4>
                            <ul class="bullet-list">
                                {detail.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="tech-card__core">
                <h4>"Core Functionality"</h4>
                <div class="tech-card__tiles">
                    {CORE_TILES
                        .iter()
                        .map(|tile| view! {
                            <div class="tile">
                                <h5>{tile.title}</h5>
                                <p class="muted">{tile.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </CardAnimated>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <CardAnimated class="cta-card">
            <h3>"Ready to Experience It?"</h3>
            <p class="muted">
                "Try out the shopping list application and see how it can simplify your shopping experience."
            </p>
            <A href=APP_PATH>
                <span class="button button--primary button--lg">{icon("shopping-cart")}"Start Shopping"</span>
            </A>
        </CardAnimated>
    }
}
