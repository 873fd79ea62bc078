use dioxus::prelude::*;

use crate::model::guild::{GuildDto, MemberDto};

/// Page shell with the guild navigation and the flashed error, if any.
///
/// `active_guild` is the selected guild's id, or 0 when none is selected. An empty
/// `error` renders no banner.
#[component]
pub fn Layout(
    title: String,
    guilds: Vec<GuildDto>,
    active_guild: u64,
    error: String,
    children: Element,
) -> Element {
    rsx! {
        html {
            lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title}" }
            }
            body {
                class: "flex min-h-screen",
                nav {
                    class: "w-64 p-4 border-r",
                    a { class: "text-lg font-semibold", href: "/", "Guilds" }
                    ul {
                        class: "menu mt-4",
                        if guilds.is_empty() {
                            li { class: "opacity-60", "The bot is not in any guild yet" }
                        }
                        for guild in guilds.iter() {
                            GuildLink {
                                key: "{guild.id}",
                                active: guild.id == active_guild,
                                guild: guild.clone(),
                            }
                        }
                    }
                }
                main {
                    class: "flex-1 p-6",
                    if !error.is_empty() {
                        ErrorBanner { message: error.clone() }
                    }
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn GuildLink(guild: GuildDto, active: bool) -> Element {
    let class = if active { "active" } else { "" };

    rsx! {
        li {
            a {
                class: "{class}",
                href: "/team?guild_id={guild.id}",
                if let Some(icon_url) = guild.icon_url.clone() {
                    img { class: "w-6 h-6 rounded-full", src: "{icon_url}", alt: "" }
                }
                "{guild.name}"
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "alert alert-error mb-4",
            "{message}"
        }
    }
}

/// One member row with its kick and ban forms.
#[component]
pub fn MemberRow(guild_id: u64, member: MemberDto) -> Element {
    rsx! {
        tr {
            td {
                div {
                    class: "flex items-center gap-3",
                    img { class: "w-10 h-10 rounded-full", src: "{member.avatar_url}", alt: "" }
                    div {
                        div { class: "font-semibold", "{member.display_name}" }
                        div { class: "text-sm opacity-60", "{member.username}" }
                    }
                    if member.is_bot {
                        span { class: "badge badge-info", "Bot" }
                    }
                    if member.is_admin {
                        span { class: "badge badge-warning", "Admin" }
                    }
                }
                if let Some(banner_url) = member.banner_url.clone() {
                    img { class: "h-8 mt-2 rounded", src: "{banner_url}", alt: "" }
                }
            }
            td { "{member.status}" }
            td {
                for role in member.roles.iter() {
                    span { class: "badge badge-outline mr-1", "{role}" }
                }
            }
            td {
                for badge in member.badges.iter() {
                    if let Some(icon_url) = badge.icon_url.clone() {
                        img { class: "w-5 h-5 inline", src: "{icon_url}", alt: "{badge.label}", title: "{badge.label}" }
                    } else {
                        span { class: "badge badge-ghost mr-1", "{badge.label}" }
                    }
                }
            }
            td {
                class: "flex gap-2",
                form {
                    method: "post",
                    action: "/kick",
                    input { r#type: "hidden", name: "guild_id", value: "{guild_id}" }
                    input { r#type: "hidden", name: "member_id", value: "{member.id}" }
                    button { class: "btn btn-sm btn-warning", r#type: "submit", "Kick" }
                }
                form {
                    method: "post",
                    action: "/ban",
                    input { r#type: "hidden", name: "guild_id", value: "{guild_id}" }
                    input { r#type: "hidden", name: "member_id", value: "{member.id}" }
                    button { class: "btn btn-sm btn-error", r#type: "submit", "Ban" }
                }
            }
        }
    }
}
