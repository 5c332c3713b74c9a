use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const ATTRIBUTION: &str = "Made with Love by Mausam Kar";
pub const LOGO_SRC: &str = "/logo.svg";
pub const LOGO_ALT: &str = "Apple logo";
pub const COPYRIGHT: &str = "Copyright © 2024 Apple Inc. All rights reserved.";

/// One navigable item in the footer's link list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub link: String,
}

impl FooterLink {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// Links shown in the page footer, in display order.
pub static FOOTER_LINKS: Lazy<Vec<FooterLink>> = Lazy::new(|| {
    vec![
        FooterLink::new("Privacy Policy", "/privacy"),
        FooterLink::new("Terms of Use", "/terms"),
        FooterLink::new("Sales Policy", "/sales-policy"),
        FooterLink::new("Legal", "/legal"),
        FooterLink::new("Site Map", "/sitemap"),
    ]
});
