use serenity::all::OnlineStatus;

/// Presence status shown next to a member.
///
/// Invisible members are reported as offline, the same as Discord shows them to others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresenceStatus {
    Online,
    Idle,
    Dnd,
    #[default]
    Offline,
}

impl PresenceStatus {
    /// Capitalised label used on the team page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Idle => "Idle",
            Self::Dnd => "Dnd",
            Self::Offline => "Offline",
        }
    }
}

impl From<OnlineStatus> for PresenceStatus {
    fn from(status: OnlineStatus) -> Self {
        match status {
            OnlineStatus::Online => Self::Online,
            OnlineStatus::Idle => Self::Idle,
            OnlineStatus::DoNotDisturb => Self::Dnd,
            _ => Self::Offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests mapping of gateway statuses to display statuses.
    ///
    /// Expected: invisible collapses to Offline, others map one to one
    #[test]
    fn maps_online_status() {
        let cases = [
            (OnlineStatus::Online, "Online"),
            (OnlineStatus::Idle, "Idle"),
            (OnlineStatus::DoNotDisturb, "Dnd"),
            (OnlineStatus::Invisible, "Offline"),
            (OnlineStatus::Offline, "Offline"),
        ];

        for (status, label) in cases {
            assert_eq!(PresenceStatus::from(status).label(), label);
        }
    }
}
