use crate::data_fetcher::models::FixtureSummary;

/// Fixtures of one league, in the order the provider listed them.
#[derive(Debug, Clone)]
pub struct LeagueGroup {
    pub league_name: String,
    pub fixtures: Vec<FixtureSummary>,
}

/// Groups fixtures by league name. Groups appear in the order their first
/// fixture appears in the input.
pub fn group_fixtures_by_league(fixtures: Vec<FixtureSummary>) -> Vec<LeagueGroup> {
    let mut groups: Vec<LeagueGroup> = Vec::new();

    for fixture in fixtures {
        let name = fixture.league_name().to_string();
        match groups.iter_mut().find(|group| group.league_name == name) {
            Some(group) => group.fixtures.push(fixture),
            None => groups.push(LeagueGroup {
                league_name: name,
                fixtures: vec![fixture],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{FixtureLeague, FixtureSummary};

    fn in_league(name: &str, id: u64) -> FixtureSummary {
        let mut summary = FixtureSummary {
            league: FixtureLeague {
                name: Some(name.to_string()),
                ..FixtureLeague::default()
            },
            ..FixtureSummary::default()
        };
        summary.fixture.id = Some(id);
        summary
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let groups = group_fixtures_by_league(vec![
            in_league("La Liga", 1),
            in_league("Premier League", 2),
            in_league("La Liga", 3),
            in_league("Serie A", 4),
            in_league("Premier League", 5),
        ]);

        let names: Vec<&str> = groups.iter().map(|g| g.league_name.as_str()).collect();
        assert_eq!(names, vec!["La Liga", "Premier League", "Serie A"]);

        let la_liga: Vec<Option<u64>> = groups[0].fixtures.iter().map(|f| f.fixture.id).collect();
        assert_eq!(la_liga, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_fixtures_by_league(vec![]).is_empty());
    }
}
