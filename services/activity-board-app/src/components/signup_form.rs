//! The shared email field

use leptos::prelude::*;

/// Email input shared by every card's sign-up button
#[component]
pub fn SignupForm(email: RwSignal<String>) -> impl IntoView {
    view! {
        <section id="signup-container">
            <h3>"Sign Up for an Activity"</h3>
            <label for="email">"Student Email: "</label>
            <input
                type="email"
                id="email"
                placeholder="your-email@mergington.edu"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <p style="font-size: 0.85em; color: #6c757d;">
                "Enter your email, then press \"Sign Up\" on an activity."
            </p>
        </section>
    }
}
