//! Top navigation bar with the signed-in user's name and logout.

use leptos::prelude::*;
use session::SessionStore;

use crate::state::auth::AuthState;

/// Collapsible navigation bar rendered above every route.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = StoredValue::new(expect_context::<SessionStore>());
    let auth = expect_context::<RwSignal<AuthState>>();
    let collapsed = RwSignal::new(true);

    let links_class = move || {
        if collapsed.get() { "nav__links nav__links--collapsed" } else { "nav__links" }
    };

    view! {
        <nav class="nav">
            <a href="/home" class="nav__brand">"Login Demo"</a>
            <button
                class="nav__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| collapsed.update(|c| *c = !*c)
            >
                "☰"
            </button>
            <div class=links_class>
                <Show
                    when=move || auth.get().user.is_some()
                    fallback=|| view! { <a href="/login" class="nav__link">"Login"</a> }
                >
                    <span class="nav__user">{move || auth.get().display_name().unwrap_or_default()}</span>
                    <button class="btn nav__logout" on:click=move |_| session.with_value(SessionStore::logout)>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
