use crate::configs::{
    BOOKING_URL, CONTACT_EMAIL, PROFILE_IMAGE_URL, PROFILE_NAME, SOCIAL_LINKS, STATUS_TEXT,
    TAGLINE, YOUTUBE_SUBSCRIBE_URL,
};
use crate::utils::{persist, ThemeMode};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let mut theme = use_context::<Signal<ThemeMode>>();

    let social_icons = SOCIAL_LINKS.iter().enumerate().map(|(index, link)| {
        // Icons pop in one after another, after the row itself has risen.
        let stagger = format!("animation-delay: {:.1}s;", 1.5 + index as f32 * 0.1);
        rsx! {
            a {
                key: "{link.label}",
                class: "social-icon",
                style: stagger,
                href: link.url,
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: link.label,
                i { class: link.icon }
            }
        }
    });

    rsx! {
        div { class: "content",
            button {
                class: "theme-toggle",
                aria_label: "Toggle theme",
                onclick: move |_| {
                    let next = theme().toggle();
                    theme.set(next);
                    persist(next);
                },
                if theme() == ThemeMode::Dark { "🌞" } else { "🌙" }
            }

            img {
                class: "profile-image",
                src: PROFILE_IMAGE_URL,
                alt: PROFILE_NAME,
            }

            h1 { class: "title", {PROFILE_NAME} }

            p { class: "subtitle", {TAGLINE} }

            div { class: "status", {STATUS_TEXT} }

            div { class: "cta-row",
                a {
                    class: "cta cta-booking",
                    href: BOOKING_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Book an Appointment"
                }
                a {
                    class: "cta cta-youtube",
                    href: YOUTUBE_SUBSCRIBE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Subscribe to YouTube"
                }
            }

            div { class: "social-row", {social_icons} }

            a {
                class: "email-link",
                href: "mailto:{CONTACT_EMAIL}",
                i { class: "fa-solid fa-envelope" }
                {CONTACT_EMAIL}
            }
        }
    }
}
