use leptos::prelude::*;

use crate::constants::{FooterLink, ATTRIBUTION, COPYRIGHT, FOOTER_LINKS, LOGO_ALT, LOGO_SRC};

/// Page footer: attribution and logo, a separator, then the copyright notice
/// and one anchor per entry of `links`, in the order given.
///
/// Items are not keyed by label, so repeated labels still render as separate
/// entries.
#[component]
pub fn Footer(#[prop(default = FOOTER_LINKS.to_vec())] links: Vec<FooterLink>) -> impl IntoView {
    let items = links
        .into_iter()
        .map(|FooterLink { label, link }| {
            view! {
                <li>
                    <a href=link>{label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer>
            <div class="info">
                <p>{ATTRIBUTION}</p>
                <img src=LOGO_SRC alt=LOGO_ALT/>
            </div>

            <hr/>

            <div class="links">
                <p>{COPYRIGHT}</p>

                <ul>{items}</ul>
            </div>
        </footer>
    }
}
