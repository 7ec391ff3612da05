//! Navigation header component

use leptos::prelude::*;

#[component]
pub fn Navbar(
    /// account address shown on the right, rendered as-is; empty when omitted
    #[prop(into, default = Signal::stored(String::new()))]
    wallet_address: Signal<String>,
) -> impl IntoView {
    view! {
        <header>
            <nav class="navbar">
                <div class="nav-brand">
                    <span class="brand-icon">"🏦"</span>
                    <p class="logo">"DecentralBank"</p>
                </div>
                <div class="nav-account">
                    <strong class="account-label">
                        "User: "
                        <strong class="account-address">{move || wallet_address.get()}</strong>
                    </strong>
                </div>
            </nav>
        </header>
    }
}
