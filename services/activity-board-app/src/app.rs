//! Main App component

use std::sync::Arc;

use activity_board::{ActivityBoard, BoardView, ReqwestHttpClient};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};

use crate::components::activity_card::ActivityCardView;
use crate::components::signup_form::SignupForm;
use crate::page;
use crate::surface::SignalSurface;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let surface = SignalSurface::new();
    let board_view = surface.view;

    let board = match ActivityBoard::new(
        &page::board_config(),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(surface),
    ) {
        Ok(board) => Some(board),
        Err(e) => {
            tracing::error!("Activity board is misconfigured: {}", e);
            board_view.set(BoardView::LoadError(e.to_string()));
            None
        }
    };
    let board = StoredValue::new(board);

    if let Some(board) = board.get_value() {
        spawn_local(async move { board.load_activities().await });
    }

    let on_signup = Callback::new(move |activity: String| {
        if let Some(board) = board.get_value() {
            spawn_local(async move {
                board.sign_up(&activity).await.ok();
            });
        }
    });

    let on_unregister = Callback::new(move |(activity, email): (String, String)| {
        if let Some(board) = board.get_value() {
            spawn_local(async move {
                board.unregister(&activity, &email).await.ok();
            });
        }
    });

    view! {
        <Title text="Mergington High School Activities" />
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <header>
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>
            <SignupForm email=surface.email />
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                {move || match board_view.get() {
                    BoardView::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                    BoardView::LoadError(message) => {
                        view! { <p class="error" style="color: #721c24;">{message}</p> }.into_any()
                    }
                    BoardView::Cards(cards) if cards.is_empty() => {
                        view! { <p>"No activities available."</p> }.into_any()
                    }
                    BoardView::Cards(cards) => {
                        view! {
                            <div id="activities-list">
                                {cards
                                    .into_iter()
                                    .map(|card| {
                                        view! {
                                            <ActivityCardView
                                                card=card
                                                on_signup=on_signup
                                                on_unregister=on_unregister
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </main>
    }
}
