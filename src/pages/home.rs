use crate::pages::footer::Footer;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Footer/>
        </div>
    }
}
