//! ==============================================================================
//! lib.rs - DecentralBank Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm frontend for the decentralbank staking demo.
//!     renders the navigation header with the connected account address
//!     and hosts the page shell around it.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - the account address is owned by the app shell and passed down
//!       to components as a signal
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

pub mod components;

use components::Navbar;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // connected account, empty until one is supplied
    let (wallet_address, set_wallet_address) = signal(String::new());

    view! {
        <Title text="DecentralBank"/>
        <Navbar wallet_address=wallet_address/>
        <div class="container">
            <div class="card">
                <h2>"💰 Account"</h2>
                <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                    "Paste an account address to show it in the header."
                </p>
                <div class="input-group">
                    <input
                        type="text"
                        placeholder="0x..."
                        prop:value=move || wallet_address.get()
                        on:input=move |ev| set_wallet_address.set(event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}
