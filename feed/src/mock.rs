//! Bundled mock feeds. Swap in a real `FeedProvider` to go live.

use crate::{
    BasketballPerformer, FeedRecord, FootballPerformer, KeyMoment, MatchStatus, Matchup,
    MomentKind, Performers, ScorePair, Side, Sport, TeamStat, VideoDescriptor,
};

pub fn football_feed() -> FeedRecord {
    FeedRecord {
        league: "Premier League".into(),
        matchup: Matchup {
            home: "Arsenal".into(),
            away: "Chelsea".into(),
        },
        score: ScorePair { home: 2, away: 1 },
        period: "90'".into(),
        clock: "90:00".into(),
        status: MatchStatus::FullTime,
        possession: Side::Away,
        key_moments: vec![
            moment("23'", MomentKind::Goal, "Odegaard", Side::Home),
            moment("67'", MomentKind::Goal, "Sterling", Side::Away),
            moment("89'", MomentKind::Goal, "Jesus", Side::Home),
        ],
        performers: Performers::Football(vec![
            FootballPerformer {
                name: "M. Ødegaard".into(),
                team: "ARS".into(),
                rating: 8.7,
                goals: 1,
                assists: 1,
                xg: 0.6,
                shots: 3,
            },
            FootballPerformer {
                name: "R. Sterling".into(),
                team: "CHE".into(),
                rating: 8.2,
                goals: 1,
                assists: 0,
                xg: 0.4,
                shots: 2,
            },
        ]),
        team_stats: vec![
            TeamStat::new("xG", 1.8, 1.2),
            TeamStat::new("Shots", 12.0, 8.0),
            TeamStat::new("On Target", 6.0, 4.0),
            TeamStat::new("Possession", 58.0, 42.0).with_unit("%"),
            TeamStat::new("Passes", 487.0, 362.0),
            TeamStat::new("Pass Accuracy", 88.0, 84.0).with_unit("%"),
        ],
    }
}

pub fn basketball_feed() -> FeedRecord {
    FeedRecord {
        league: "NBA".into(),
        matchup: Matchup {
            home: "Lakers".into(),
            away: "Warriors".into(),
        },
        score: ScorePair {
            home: 118,
            away: 112,
        },
        period: "Q4".into(),
        clock: "00:00".into(),
        status: MatchStatus::Final,
        possession: Side::Home,
        key_moments: vec![
            moment("Q1 8:45", MomentKind::Dunk, "LeBron", Side::Home),
            moment("Q3 2:15", MomentKind::ThreePointer, "Curry", Side::Away),
            moment("Q4 0:24", MomentKind::Dunk, "Davis", Side::Home),
        ],
        performers: Performers::Basketball(vec![
            BasketballPerformer {
                name: "L. James".into(),
                team: "LAL".into(),
                points: 32,
                rebounds: 8,
                assists: 11,
            },
            BasketballPerformer {
                name: "S. Curry".into(),
                team: "GSW".into(),
                points: 28,
                rebounds: 4,
                assists: 7,
            },
        ]),
        team_stats: vec![
            TeamStat::new("FG%", 48.0, 44.0).with_unit("%"),
            TeamStat::new("3PT%", 38.0, 42.0).with_unit("%"),
            TeamStat::new("REB", 46.0, 39.0),
            TeamStat::new("AST", 27.0, 22.0),
            TeamStat::new("TOV", 12.0, 15.0),
        ],
    }
}

pub fn sample_videos() -> Vec<VideoDescriptor> {
    vec![
        VideoDescriptor::new(
            "football",
            "Arsenal vs Chelsea",
            "https://cdn.coverr.co/videos/coverr-soccer-dribble-9602/1080p.mp4",
            Sport::Football,
        ),
        VideoDescriptor::new(
            "basketball",
            "Lakers vs Warriors",
            "https://cdn.coverr.co/videos/coverr-basketball-shoot-9992/1080p.mp4",
            Sport::Basketball,
        ),
    ]
}

fn moment(time: &str, kind: MomentKind, player: &str, team: Side) -> KeyMoment {
    KeyMoment {
        time: time.into(),
        kind,
        player: player.into(),
        team,
    }
}
