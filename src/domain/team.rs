use crate::domain::cadence::Cadence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCadence {
    pub name: String,
    pub cadence: Cadence,
}

/// The teams to forecast, in the order they were configured.
#[derive(Debug, Clone, Default)]
pub struct TeamConfig {
    pub teams: Vec<TeamCadence>,
}

impl TeamConfig {
    pub fn new() -> Self {
        Self { teams: Vec::new() }
    }

    /// Adds `name`, or updates its cadence in place when already present.
    pub fn add_team(&mut self, name: impl Into<String>, cadence: Cadence) {
        let name = name.into();
        match self.teams.iter_mut().find(|team| team.name == name) {
            Some(team) => team.cadence = cadence,
            None => self.teams.push(TeamCadence { name, cadence }),
        }
    }

    pub fn cadence_of(&self, team: &str) -> Option<Cadence> {
        self.teams
            .iter()
            .find(|candidate| candidate.name == team)
            .map(|candidate| candidate.cadence)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.cadence_of(team).is_some()
    }
}
