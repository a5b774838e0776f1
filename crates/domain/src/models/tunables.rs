//! Numeric gameplay tunables read by the game backend from `stats_global`.

use serde::{Deserialize, Serialize};

use super::whole_number;

/// Settings store name of the tunables document.
pub const TUNABLES_CONFIGURATION_NAME: &str = "tunables";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TunablesConfiguration {
    pub social: SocialTunables,
    pub inactivity: InactivityTunables,
    pub matchmaking: MatchmakingTunables,
}

/// Crew and friend list limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialTunables {
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub max_members_per_crew: i64,
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub max_pending_crew_invites: i64,
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub max_friends_per_user: i64,
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub max_blocks_per_user: i64,
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub max_pending_friend_requests: i64,
}

/// Idle kick timeouts, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactivityTunables {
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub solo_inactivity_seconds: i64,
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub group_inactivity_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingTunables {
    pub match_xp_multiplier: f64,
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub quickplay_bots_start_seconds: i64,
}

/// Operator document as stored; any group or field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialTunablesConfiguration {
    pub social: Option<PartialSocialTunables>,
    pub inactivity: Option<PartialInactivityTunables>,
    pub matchmaking: Option<PartialMatchmakingTunables>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSocialTunables {
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub max_members_per_crew: Option<i64>,
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub max_pending_crew_invites: Option<i64>,
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub max_friends_per_user: Option<i64>,
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub max_blocks_per_user: Option<i64>,
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub max_pending_friend_requests: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialInactivityTunables {
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub solo_inactivity_seconds: Option<i64>,
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub group_inactivity_seconds: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialMatchmakingTunables {
    #[serde(default)]
    pub match_xp_multiplier: Option<f64>,
    #[serde(default, deserialize_with = "whole_number::deserialize_option")]
    pub quickplay_bots_start_seconds: Option<i64>,
}

impl Default for TunablesConfiguration {
    fn default() -> Self {
        Self {
            social: SocialTunables {
                max_members_per_crew: 32,
                max_pending_crew_invites: 100,
                max_friends_per_user: 2000,
                max_blocks_per_user: 1000,
                max_pending_friend_requests: 100,
            },
            inactivity: InactivityTunables {
                solo_inactivity_seconds: 600,
                group_inactivity_seconds: 600,
            },
            matchmaking: MatchmakingTunables {
                match_xp_multiplier: 1.0,
                quickplay_bots_start_seconds: 120,
            },
        }
    }
}

impl TunablesConfiguration {
    /// Merge a stored document over `defaults`.
    ///
    /// Each group is rebuilt field by field, so a field missing from a
    /// stored group keeps its default.
    pub fn merge(defaults: &Self, stored: PartialTunablesConfiguration) -> Self {
        let mut merged = defaults.clone();
        merged.social = defaults.social.overridden_by(stored.social.unwrap_or_default());
        merged.inactivity = defaults
            .inactivity
            .overridden_by(stored.inactivity.unwrap_or_default());
        merged.matchmaking = defaults
            .matchmaking
            .overridden_by(stored.matchmaking.unwrap_or_default());
        merged
    }
}

impl SocialTunables {
    fn overridden_by(&self, stored: PartialSocialTunables) -> Self {
        Self {
            max_members_per_crew: stored
                .max_members_per_crew
                .unwrap_or(self.max_members_per_crew),
            max_pending_crew_invites: stored
                .max_pending_crew_invites
                .unwrap_or(self.max_pending_crew_invites),
            max_friends_per_user: stored
                .max_friends_per_user
                .unwrap_or(self.max_friends_per_user),
            max_blocks_per_user: stored
                .max_blocks_per_user
                .unwrap_or(self.max_blocks_per_user),
            max_pending_friend_requests: stored
                .max_pending_friend_requests
                .unwrap_or(self.max_pending_friend_requests),
        }
    }
}

impl InactivityTunables {
    fn overridden_by(&self, stored: PartialInactivityTunables) -> Self {
        Self {
            solo_inactivity_seconds: stored
                .solo_inactivity_seconds
                .unwrap_or(self.solo_inactivity_seconds),
            group_inactivity_seconds: stored
                .group_inactivity_seconds
                .unwrap_or(self.group_inactivity_seconds),
        }
    }
}

impl MatchmakingTunables {
    fn overridden_by(&self, stored: PartialMatchmakingTunables) -> Self {
        Self {
            match_xp_multiplier: stored
                .match_xp_multiplier
                .unwrap_or(self.match_xp_multiplier),
            quickplay_bots_start_seconds: stored
                .quickplay_bots_start_seconds
                .unwrap_or(self.quickplay_bots_start_seconds),
        }
    }
}
