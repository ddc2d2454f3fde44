use serde::Deserialize;

/// Status codes the provider uses while a half is being played.
const IN_PLAY_STATUSES: [&str; 2] = ["1H", "2H"];

/// The parts of a `/fixtures` element the scoreboard needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureSummary {
    #[serde(default)]
    pub fixture: FixtureInfo,
    #[serde(default)]
    pub league: FixtureLeague,
    #[serde(default)]
    pub teams: FixtureTeams,
    #[serde(default)]
    pub goals: FixtureGoals,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureInfo {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureStatus {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub elapsed: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureLeague {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureTeams {
    #[serde(default)]
    pub home: FixtureTeam,
    #[serde(default)]
    pub away: FixtureTeam,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureTeam {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureGoals {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

impl FixtureSummary {
    pub fn league_name(&self) -> &str {
        self.league.name.as_deref().unwrap_or("Other")
    }

    pub fn home_name(&self) -> &str {
        self.teams.home.name.as_deref().unwrap_or("TBD")
    }

    pub fn away_name(&self) -> &str {
        self.teams.away.name.as_deref().unwrap_or("TBD")
    }

    /// `"h - a"` once the home score is known, `"vs"` before kick-off.
    pub fn score_display(&self) -> String {
        match self.goals.home {
            Some(home) => format!("{} - {}", home, self.goals.away.unwrap_or(0)),
            None => "vs".to_string(),
        }
    }

    pub fn status_short(&self) -> &str {
        self.fixture.status.short.as_deref().unwrap_or("")
    }

    /// Elapsed minutes, only while a half is in play.
    pub fn live_minute(&self) -> Option<u32> {
        if IN_PLAY_STATUSES.contains(&self.status_short()) {
            self.fixture.status.elapsed
        } else {
            None
        }
    }
}
