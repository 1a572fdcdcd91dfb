use highlights_feed::Performers;

/// One top-performer row, already formatted for the feed's sport.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformerRow {
    pub name: String,
    pub team: String,
    pub summary: String,
}

pub fn performer_rows(performers: &Performers) -> Vec<PerformerRow> {
    match performers {
        Performers::Football(players) => players
            .iter()
            .map(|p| PerformerRow {
                name: p.name.clone(),
                team: p.team.clone(),
                summary: format!(
                    "★{}  {}G  {}xG  {}SH",
                    p.rating,
                    p.goals,
                    p.xg,
                    p.shots
                ),
            })
            .collect(),
        Performers::Basketball(players) => players
            .iter()
            .map(|p| PerformerRow {
                name: p.name.clone(),
                team: p.team.clone(),
                summary: format!("{}pts  {}reb  {}ast", p.points, p.rebounds, p.assists),
            })
            .collect(),
    }
}
