//! Dashboard chrome shared by the three role dashboards: the navigation
//! drawer and the notification bell.

use api::Notification;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaBell, FaRightFromBracket, FaUser};
use dioxus_free_icons::Icon;

/// Side drawer listing the dashboard's panels, with profile and logout at the
/// bottom. Collapses behind a hamburger on narrow screens.
#[component]
pub fn NavDrawer(
    title: String,
    user_name: String,
    items: Vec<String>,
    selected: usize,
    on_select: EventHandler<usize>,
    on_profile: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: "drawer-toggle",
            onclick: move |_| open.toggle(),
            Icon { icon: FaBars }
        }
        nav { class: if open() { "drawer drawer-open" } else { "drawer" },
            div { class: "drawer-header",
                h2 { "{title}" }
                p { class: "drawer-user", "{user_name}" }
            }
            ul { class: "drawer-items",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}",
                        button {
                            class: if index == selected { "drawer-item drawer-item-active" } else { "drawer-item" },
                            onclick: move |_| {
                                open.set(false);
                                on_select.call(index);
                            },
                            "{item}"
                        }
                    }
                }
            }
            div { class: "drawer-footer",
                button {
                    class: "drawer-item",
                    onclick: move |_| on_profile.call(()),
                    Icon { icon: FaUser }
                    span { "Mon profil" }
                }
                button {
                    class: "drawer-item",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket }
                    span { "Déconnexion" }
                }
            }
        }
    }
}

/// Bell with an unread badge and a dropdown of the five most recent
/// notifications. Deleting emits the id; the parent performs the API call
/// and removes the entry only once it succeeds.
#[component]
pub fn NotificationMenu(
    notifications: Vec<Notification>,
    on_delete: EventHandler<i64>,
    on_view_all: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);
    let count = notifications.len();

    rsx! {
        div { class: "notif-menu",
            button {
                class: "notif-bell",
                onclick: move |_| open.toggle(),
                Icon { icon: FaBell }
                if count > 0 {
                    span { class: "notif-badge", "{count}" }
                }
            }
            if open() {
                div { class: "notif-dropdown",
                    if notifications.is_empty() {
                        p { class: "notif-empty", "Aucune notification" }
                    }
                    for notification in notifications.iter().take(5) {
                        div { key: "{notification.id}", class: "notif-entry",
                            div { class: "notif-body",
                                p { "{notification.message}" }
                                span { class: "notif-date", "{notification.date_creation}" }
                            }
                            button {
                                class: "notif-delete",
                                onclick: {
                                    let id = notification.id;
                                    move |_| on_delete.call(id)
                                },
                                "×"
                            }
                        }
                    }
                    button {
                        class: "notif-view-all",
                        onclick: move |_| {
                            open.set(false);
                            on_view_all.call(());
                        },
                        "Voir toutes les notifications"
                    }
                }
            }
        }
    }
}
