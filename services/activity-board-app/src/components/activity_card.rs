//! Activity card component

use activity_board::{ActivityCard, Roster, NO_PARTICIPANTS};
use leptos::prelude::*;

use crate::components::capacity_badge::CapacityBadge;

/// One activity with its roster, a sign-up button, and an unregister button per participant
#[component]
pub fn ActivityCardView(
    card: ActivityCard,
    on_signup: Callback<String>,
    on_unregister: Callback<(String, String)>,
) -> impl IntoView {
    let ActivityCard {
        name,
        description,
        schedule,
        capacity,
        roster,
    } = card;

    let roster_view = match roster {
        Roster::Empty => view! {
            <p class="no-participants"><em>{NO_PARTICIPANTS}</em></p>
        }
        .into_any(),
        Roster::Participants(emails) => {
            let items = emails
                .into_iter()
                .map(|email| {
                    let activity = name.clone();
                    let label = email.clone();
                    view! {
                        <li style="display: flex; justify-content: space-between; align-items: center;">
                            <span>{label}</span>
                            <button
                                class="unregister-btn"
                                title="Unregister"
                                on:click=move |_| on_unregister.run((activity.clone(), email.clone()))
                            >
                                "Unregister"
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>();
            view! { <ul class="participants-list">{items}</ul> }.into_any()
        }
    };

    let signup_name = name.clone();

    view! {
        <div class="activity-card" style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem; margin-bottom: 1rem;">
            <h4>{name}</h4>
            <p>{description}</p>
            <p><strong>"Schedule: "</strong>{schedule}</p>
            <p><strong>"Capacity: "</strong><CapacityBadge capacity=capacity /></p>
            <div class="participants-section">
                <h5>"Participants"</h5>
                {roster_view}
            </div>
            <button class="signup-btn" on:click=move |_| on_signup.run(signup_name.clone())>
                "Sign Up"
            </button>
        </div>
    }
}
