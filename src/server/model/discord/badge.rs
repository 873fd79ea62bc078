//! Profile badges derived from a user's public flags.

use serenity::all::UserPublicFlags;

/// A badge shown on a member's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Staff,
    Partner,
    HypeSquadEvents,
    BugHunter,
    BugHunterGold,
    HypeSquadBravery,
    HypeSquadBrilliance,
    HypeSquadBalance,
    EarlySupporter,
    VerifiedBot,
    VerifiedBotDeveloper,
    CertifiedModerator,
    ActiveDeveloper,
}

/// Flag to badge table, in the order badges are displayed.
const FLAG_BADGES: [(UserPublicFlags, Badge); 13] = [
    (UserPublicFlags::DISCORD_EMPLOYEE, Badge::Staff),
    (UserPublicFlags::PARTNERED_SERVER_OWNER, Badge::Partner),
    (UserPublicFlags::HYPESQUAD_EVENTS, Badge::HypeSquadEvents),
    (UserPublicFlags::BUG_HUNTER_LEVEL_1, Badge::BugHunter),
    (UserPublicFlags::BUG_HUNTER_LEVEL_2, Badge::BugHunterGold),
    (UserPublicFlags::HOUSE_BRAVERY, Badge::HypeSquadBravery),
    (UserPublicFlags::HOUSE_BRILLIANCE, Badge::HypeSquadBrilliance),
    (UserPublicFlags::HOUSE_BALANCE, Badge::HypeSquadBalance),
    (UserPublicFlags::EARLY_SUPPORTER, Badge::EarlySupporter),
    (UserPublicFlags::VERIFIED_BOT, Badge::VerifiedBot),
    (
        UserPublicFlags::EARLY_VERIFIED_BOT_DEVELOPER,
        Badge::VerifiedBotDeveloper,
    ),
    (
        UserPublicFlags::DISCORD_CERTIFIED_MODERATOR,
        Badge::CertifiedModerator,
    ),
    (UserPublicFlags::ACTIVE_DEVELOPER, Badge::ActiveDeveloper),
];

impl Badge {
    /// Collects the badges for every known flag that is set. Unknown bits are ignored.
    pub fn from_flags(flags: UserPublicFlags) -> Vec<Badge> {
        FLAG_BADGES
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .map(|(_, badge)| *badge)
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Staff => "Discord Staff",
            Self::Partner => "Partnered Server Owner",
            Self::HypeSquadEvents => "HypeSquad Events",
            Self::BugHunter => "Bug Hunter",
            Self::BugHunterGold => "Bug Hunter Gold",
            Self::HypeSquadBravery => "HypeSquad Bravery",
            Self::HypeSquadBrilliance => "HypeSquad Brilliance",
            Self::HypeSquadBalance => "HypeSquad Balance",
            Self::EarlySupporter => "Early Supporter",
            Self::VerifiedBot => "Verified Bot",
            Self::VerifiedBotDeveloper => "Early Verified Bot Developer",
            Self::CertifiedModerator => "Moderator Programs Alumni",
            Self::ActiveDeveloper => "Active Developer",
        }
    }

    /// Icon shown for the badge, when one is available.
    pub fn icon_url(self) -> Option<&'static str> {
        match self {
            Self::HypeSquadBalance => Some("https://discordresources.com/img/hypesquadbalance.svg"),
            Self::VerifiedBot => Some("https://discordresources.com/img/special/VerifiedBot.svg"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that each set flag yields its badge in display order.
    ///
    /// Expected: [HypeSquadBalance, VerifiedBot]
    #[test]
    fn maps_set_flags_to_badges() {
        let flags = UserPublicFlags::VERIFIED_BOT | UserPublicFlags::HOUSE_BALANCE;

        assert_eq!(
            Badge::from_flags(flags),
            vec![Badge::HypeSquadBalance, Badge::VerifiedBot]
        );
    }

    /// Tests that a user without flags has no badges.
    ///
    /// Expected: empty list
    #[test]
    fn no_flags_no_badges() {
        assert!(Badge::from_flags(UserPublicFlags::empty()).is_empty());
    }

    /// Tests that only badges with known artwork expose an icon.
    ///
    /// Expected: icons for Balance and VerifiedBot, none for Staff
    #[test]
    fn icons_only_for_known_artwork() {
        assert!(Badge::HypeSquadBalance.icon_url().is_some());
        assert!(Badge::VerifiedBot.icon_url().is_some());
        assert_eq!(Badge::Staff.icon_url(), None);
    }
}
