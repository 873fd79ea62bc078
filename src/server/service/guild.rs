use crate::{
    model::guild::{BadgeDto, GuildDto, MemberDto, TeamDto},
    server::{
        error::AppError,
        gateway::GatewayClient,
        model::discord::{GuildSnapshot, MemberSnapshot},
        util::parse::parse_snowflake,
    },
};

/// Read-only views over the gateway cache for the dashboard pages.
pub struct GuildService<'a> {
    gateway: &'a GatewayClient,
}

impl<'a> GuildService<'a> {
    pub fn new(gateway: &'a GatewayClient) -> Self {
        Self { gateway }
    }

    /// Every guild the bot is in, in cache order.
    pub fn list_guilds(&self) -> Vec<GuildDto> {
        self.gateway
            .list_guilds()
            .iter()
            .map(|guild| guild_dto(guild))
            .collect()
    }

    /// Builds the team page for one guild.
    ///
    /// # Arguments
    /// - `guild_id` - Raw `guild_id` query parameter
    /// - `search_query` - Optional case-insensitive filter on member display names
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The guild and its members, filtered when a query was given
    /// - `Err(AppError::NotFound)` - No guild id was given
    /// - `Err(AppError::BadRequest)` - The guild id is malformed
    /// - `Err(AppError::GatewayErr(GuildNotFound))` - The bot is not in the guild
    pub fn get_team(
        &self,
        guild_id: Option<&str>,
        search_query: Option<&str>,
    ) -> Result<TeamDto, AppError> {
        if matches!(guild_id, None | Some("")) {
            return Err(AppError::NotFound("Guild not provided".to_string()));
        }
        let guild_id = parse_snowflake(guild_id, "Guild")?;
        let guild = self.gateway.get_guild(guild_id)?;

        let members = filter_members(&guild, search_query)
            .into_iter()
            .map(|member| member_dto(&guild, member))
            .collect();

        Ok(TeamDto {
            guild: guild_dto(&guild),
            members,
            search_query: normalize_query(search_query).map(str::to_string),
        })
    }
}

/// Members whose display name contains `query`, ignoring case, in guild order.
///
/// A missing or blank query keeps every member.
pub fn filter_members<'g>(guild: &'g GuildSnapshot, query: Option<&str>) -> Vec<&'g MemberSnapshot> {
    let Some(query) = normalize_query(query) else {
        return guild.members.values().collect();
    };
    let query = query.to_lowercase();

    guild
        .members
        .values()
        .filter(|member| member.display_name.to_lowercase().contains(&query))
        .collect()
}

fn normalize_query(query: Option<&str>) -> Option<&str> {
    query.map(str::trim).filter(|query| !query.is_empty())
}

fn guild_dto(guild: &GuildSnapshot) -> GuildDto {
    GuildDto {
        id: guild.guild_id,
        name: guild.name.clone(),
        icon_url: guild.icon_url.clone(),
    }
}

fn member_dto(guild: &GuildSnapshot, member: &MemberSnapshot) -> MemberDto {
    MemberDto {
        id: member.user_id,
        username: member.username.clone(),
        display_name: member.display_name.clone(),
        is_bot: member.is_bot,
        is_admin: guild.is_administrator(member),
        avatar_url: member.avatar_url.clone(),
        banner_url: member.banner_url.clone(),
        status: member.status.label().to_string(),
        roles: guild
            .member_roles(member)
            .into_iter()
            .map(|role| role.name.clone())
            .collect(),
        badges: member
            .badges
            .iter()
            .map(|badge| BadgeDto {
                label: badge.label().to_string(),
                icon_url: badge.icon_url().map(str::to_string),
            })
            .collect(),
    }
}
