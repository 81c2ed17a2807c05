//! Plain-text rendering for the terminal.

use league_core::{
    Fixture, GroupTable, Match, QualificationStatus, SimulationStats, Team, TeamId,
};

fn short_name(teams: &[Team], id: TeamId) -> String {
    teams
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.short_name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn display_name(teams: &[Team], id: TeamId) -> String {
    teams.iter().find(|t| t.id == id).map(|t| t.name.clone()).unwrap_or_else(|| id.to_string())
}

pub fn teams_table(teams: &[Team]) -> String {
    let mut out = format!(
        "{:>3}  {:<22} {:<4} {:>3} {:>3} {:>3} {:>3} {:>3}  {}\n",
        "ID", "Team", "", "ATT", "MID", "DEF", "GK", "OVR", "Tier"
    );
    for t in teams {
        out.push_str(&format!(
            "{:>3}  {:<22} {:<4} {:>3} {:>3} {:>3} {:>3} {:>3}  {}\n",
            t.id.0,
            t.name,
            t.short_name,
            t.attack(),
            t.midfield(),
            t.defense(),
            t.goalkeeper(),
            t.overall_rating(),
            t.tier().label()
        ));
    }
    out
}

pub fn schedule(fixtures: &[Fixture], teams: &[Team]) -> String {
    let mut out = String::new();
    let mut round = 0;
    for f in fixtures {
        if f.round != round {
            round = f.round;
            out.push_str(&format!("Round {}\n", round));
        }
        out.push_str(&format!(
            "  {:<22} vs  {}\n",
            display_name(teams, f.home),
            display_name(teams, f.away)
        ));
    }
    out
}

pub fn match_line(m: &Match, teams: &[Team]) -> String {
    format!(
        "R{:<2} {:>4} {:^7} {:<4}",
        m.round(),
        short_name(teams, m.home()),
        m.score_line(),
        short_name(teams, m.away())
    )
}

pub fn standings_table(table: &GroupTable, teams: &[Team]) -> String {
    let mut out = format!(
        "{:>3}  {:<22} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>3}\n",
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    for s in &table.standings {
        out.push_str(&format!(
            "{:>3}  {:<22} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>+4} {:>3}\n",
            s.position,
            display_name(teams, s.team),
            s.played,
            s.won,
            s.drawn,
            s.lost,
            s.goals_for,
            s.goals_against,
            s.goal_difference(),
            s.points
        ));
    }
    out
}

pub fn qualification(statuses: &[(TeamId, QualificationStatus)], teams: &[Team]) -> String {
    statuses
        .iter()
        .map(|(id, status)| format!("  {:<22} {}\n", display_name(teams, *id), status.label()))
        .collect()
}

pub fn stats(stats: &SimulationStats) -> String {
    format!(
        "Matches played: {}/{}\nGoals: {} ({:.2} per match)\nHome wins: {}  Away wins: {}  Draws: {} ({:.1}%)\n",
        stats.played_matches,
        stats.total_matches,
        stats.total_goals,
        stats.average_goals_per_match,
        stats.home_wins,
        stats.away_wins,
        stats.draws,
        stats.draw_percentage
    )
}
