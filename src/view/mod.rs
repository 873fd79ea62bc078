//! Server-rendered HTML pages.
//!
//! Pages are plain functions from view-model DTOs to an HTML document, rendered with
//! `dioxus-ssr`. They hold no state and perform no I/O.

pub mod component;

use dioxus::prelude::*;

use crate::{
    model::guild::{GuildDto, TeamDto},
    view::component::{Layout, MemberRow},
};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Renders the guild list.
pub fn render_home(guilds: Vec<GuildDto>, error: Option<String>) -> String {
    let body = dioxus_ssr::render_element(rsx! {
        Layout {
            title: "Guildboard".to_string(),
            guilds,
            active_guild: 0,
            error: error.unwrap_or_default(),
            h1 { class: "text-2xl mb-4", "Guilds" }
            p { "Pick a guild to manage its members." }
        }
    });

    format!("{}{}", DOCTYPE, body)
}

/// Renders the team page of one guild.
pub fn render_team(guilds: Vec<GuildDto>, team: TeamDto, error: Option<String>) -> String {
    let TeamDto {
        guild,
        members,
        search_query,
    } = team;
    let search_query = search_query.unwrap_or_default();

    let body = dioxus_ssr::render_element(rsx! {
        Layout {
            title: "{guild.name} | Guildboard",
            guilds,
            active_guild: guild.id,
            error: error.unwrap_or_default(),
            div {
                class: "flex items-center justify-between mb-4",
                div {
                    h1 { class: "text-2xl", "{guild.name}" }
                    p { class: "text-sm opacity-60", "{guild.id}" }
                }
                a {
                    class: "btn btn-sm btn-error",
                    href: "/leave/{guild.id}",
                    "Leave guild"
                }
            }
            form {
                class: "flex gap-2 mb-4",
                method: "get",
                action: "/team",
                input { r#type: "hidden", name: "guild_id", value: "{guild.id}" }
                input {
                    class: "input input-bordered",
                    r#type: "search",
                    name: "search_query",
                    placeholder: "Search members",
                    value: "{search_query}",
                }
                button { class: "btn", r#type: "submit", "Search" }
            }
            if members.is_empty() {
                p { class: "opacity-60", "No members found" }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Member" }
                            th { "Status" }
                            th { "Roles" }
                            th { "Badges" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for member in members.iter() {
                            MemberRow { key: "{member.id}", guild_id: guild.id, member: member.clone() }
                        }
                    }
                }
            }
        }
    });

    format!("{}{}", DOCTYPE, body)
}
