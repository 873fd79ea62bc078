/// A guild entry in the navigation list.
#[derive(Debug, PartialEq, Clone)]
pub struct GuildDto {
    pub id: u64,
    pub name: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BadgeDto {
    pub label: String,
    pub icon_url: Option<String>,
}

/// One row of the team page's member table.
#[derive(Debug, PartialEq, Clone)]
pub struct MemberDto {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub is_bot: bool,
    pub is_admin: bool,
    pub avatar_url: String,
    pub banner_url: Option<String>,
    /// Capitalised presence status, e.g. "Online".
    pub status: String,
    /// Role names, lowest position first, without the everyone role.
    pub roles: Vec<String>,
    pub badges: Vec<BadgeDto>,
}

/// The selected guild on the team page with its (possibly filtered) members.
#[derive(Debug, PartialEq, Clone)]
pub struct TeamDto {
    pub guild: GuildDto,
    pub members: Vec<MemberDto>,
    /// Search query the member list was filtered by, if any.
    pub search_query: Option<String>,
}
