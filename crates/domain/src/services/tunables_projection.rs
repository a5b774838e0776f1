//! Projection of tunables onto well-known `stats_global` keys.

use crate::models::{StatUpdate, TunablesConfiguration};

pub const MAX_CREW_MEMBERS_KEY: &str = "k_backend_tunable_max_crew_members";
pub const MAX_CREW_INVITES_KEY: &str = "k_backend_tunable_max_crew_invites";
pub const MAX_FRIENDS_KEY: &str = "k_backend_tunable_max_friends";
pub const MAX_FRIEND_REQUESTS_KEY: &str = "k_backend_tunable_max_friend_requests";
pub const MAX_BLOCKS_KEY: &str = "k_backend_tunable_max_blocks";
pub const SOLO_INACTIVITY_SECONDS_KEY: &str = "k_backend_tunable_solo_inactivity_seconds";
pub const GROUP_INACTIVITY_SECONDS_KEY: &str = "k_backend_tunable_group_inactivity_seconds";
pub const MATCH_XP_MULTIPLIER_KEY: &str = "k_backend_tunable_match_xp_multiplier";
pub const QUICKPLAY_BOTS_START_SECONDS_KEY: &str =
    "k_backend_tunable_quickplay_bots_start_seconds";

/// Every key written by [`project_tunables`], in update order.
pub const TUNABLE_KEYS: [&str; 9] = [
    MAX_CREW_MEMBERS_KEY,
    MAX_CREW_INVITES_KEY,
    MAX_FRIENDS_KEY,
    MAX_FRIEND_REQUESTS_KEY,
    MAX_BLOCKS_KEY,
    SOLO_INACTIVITY_SECONDS_KEY,
    GROUP_INACTIVITY_SECONDS_KEY,
    MATCH_XP_MULTIPLIER_KEY,
    QUICKPLAY_BOTS_START_SECONDS_KEY,
];

/// Map each tunable leaf to its `stats_global` key.
///
/// Values are stored as double precision. Integer tunables are limited to
/// 2^53 - 1 in magnitude when parsed, so the conversions below are exact.
pub fn project_tunables(config: &TunablesConfiguration) -> [StatUpdate; 9] {
    let social = &config.social;
    let inactivity = &config.inactivity;
    let matchmaking = &config.matchmaking;

    [
        update(MAX_CREW_MEMBERS_KEY, social.max_members_per_crew as f64),
        update(MAX_CREW_INVITES_KEY, social.max_pending_crew_invites as f64),
        update(MAX_FRIENDS_KEY, social.max_friends_per_user as f64),
        update(
            MAX_FRIEND_REQUESTS_KEY,
            social.max_pending_friend_requests as f64,
        ),
        update(MAX_BLOCKS_KEY, social.max_blocks_per_user as f64),
        update(
            SOLO_INACTIVITY_SECONDS_KEY,
            inactivity.solo_inactivity_seconds as f64,
        ),
        update(
            GROUP_INACTIVITY_SECONDS_KEY,
            inactivity.group_inactivity_seconds as f64,
        ),
        update(MATCH_XP_MULTIPLIER_KEY, matchmaking.match_xp_multiplier),
        update(
            QUICKPLAY_BOTS_START_SECONDS_KEY,
            matchmaking.quickplay_bots_start_seconds as f64,
        ),
    ]
}

fn update(key: &'static str, value: f64) -> StatUpdate {
    StatUpdate { key, value }
}
