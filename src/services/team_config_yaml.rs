use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::cadence::Cadence;
use crate::domain::team::TeamConfig;

#[derive(Error, Debug)]
pub enum TeamConfigYamlError {
    #[error("failed to read team config yaml file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse team config yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("team config yaml file {0} lists no teams")]
    NoTeams(PathBuf),
    #[error("invalid cadence for team {team} in {path}: {value}")]
    InvalidCadence {
        path: PathBuf,
        team: String,
        value: String,
    },
    #[error("team {team} is listed more than once in {path}")]
    DuplicateTeam { path: PathBuf, team: String },
}

#[derive(Debug, Deserialize)]
struct TeamConfigRecord {
    teams: Option<Vec<TeamRecord>>,
}

#[derive(Debug, Deserialize)]
struct TeamRecord {
    name: String,
    cadence: String,
}

/// Loads the forecast team list from a YAML file of the form
///
/// ```yaml
/// teams:
///   - name: Connect Partner API
///     cadence: Weekly
///   - name: Mobile
///     cadence: Biweekly
/// ```
///
/// Teams keep the order in which they are listed.
///
/// # Errors
/// - Returns an error on I/O or parse failures.
/// - Returns an error when no team is listed, a cadence is unknown or a team
///   appears twice.
pub fn load_team_config_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<TeamConfig, TeamConfigYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| TeamConfigYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_team_config_from_yaml_str(&contents, path)
}

fn deserialize_team_config_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<TeamConfig, TeamConfigYamlError> {
    let record: TeamConfigRecord =
        serde_yaml::from_str(input).map_err(|source| TeamConfigYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let teams = record.teams.unwrap_or_default();
    if teams.is_empty() {
        return Err(TeamConfigYamlError::NoTeams(origin_path.to_path_buf()));
    }

    let mut config = TeamConfig::new();
    for team in teams {
        let cadence = parse_cadence(&team, origin_path)?;
        if config.contains(&team.name) {
            return Err(TeamConfigYamlError::DuplicateTeam {
                path: origin_path.to_path_buf(),
                team: team.name,
            });
        }
        config.add_team(team.name, cadence);
    }
    Ok(config)
}

fn parse_cadence(team: &TeamRecord, origin_path: &Path) -> Result<Cadence, TeamConfigYamlError> {
    team.cadence
        .parse()
        .map_err(|_| TeamConfigYamlError::InvalidCadence {
            path: origin_path.to_path_buf(),
            team: team.name.clone(),
            value: team.cadence.clone(),
        })
}
