use crate::error::{SynResult, SynastryError};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which placements take part in aspect scoring. House overlays always
/// use the five core placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlacementSet {
    /// Rising, moon, sun, mars and mercury only.
    #[default]
    Core,
    /// The core five plus every optional placement a person carries.
    Extended,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub teams: TeamParams,
    #[command(flatten)]
    #[serde(default)]
    pub scoring: ScoringParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamParams {
    /// May be fractional; rounded up.
    #[arg(long)]
    pub number_of_teams: Option<f64>,
    #[arg(long)]
    pub max_count_per_team: Option<usize>,
    /// Keep distributing once every team is full instead of leaving persons out.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub split_remaining: bool,
    #[arg(long, default_value_t = 100)]
    pub iterations: usize,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Stop starting new iterations after this many seconds. Iteration 0
    /// always runs.
    #[arg(long)]
    pub max_time: Option<u64>,
}

impl Default for TeamParams {
    fn default() -> Self {
        Self {
            number_of_teams: None,
            max_count_per_team: None,
            split_remaining: true,
            iterations: 100,
            seed: None,
            max_time: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    #[arg(long, value_enum, default_value_t = PlacementSet::Core)]
    pub placements: PlacementSet,
    /// Multiplier applied to every house overlay stat when reducing a pair.
    #[arg(long, default_value_t = 20.0)]
    pub overlay_scale: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            placements: PlacementSet::Core,
            overlay_scale: 20.0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SynResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the flags typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.teams.merge_from_cli(&cli.teams, matches);
        self.scoring.merge_from_cli(&cli.scoring, matches);
    }
}

macro_rules! update_if_present {
    ($target:ident, $source:ident, $matches:ident, $field:ident) => {
        if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
            $target.$field = $source.$field.clone();
        }
    };
}

impl TeamParams {
    pub fn merge_from_cli(&mut self, cli: &TeamParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, number_of_teams);
        update_if_present!(self, cli, matches, max_count_per_team);
        update_if_present!(self, cli, matches, split_remaining);
        update_if_present!(self, cli, matches, iterations);
        update_if_present!(self, cli, matches, seed);
        update_if_present!(self, cli, matches, max_time);
    }

    pub fn validate(&self) -> SynResult<()> {
        if self.number_of_teams.is_none() && self.max_count_per_team.is_none() {
            return Err(missing_team_size());
        }
        if let Some(n) = self.number_of_teams {
            if !n.is_finite() || n <= 0.0 {
                return Err(SynastryError::Config(format!(
                    "number_of_teams must be a positive number, got {}",
                    n
                )));
            }
        }
        if self.max_count_per_team == Some(0) {
            return Err(SynastryError::Config(
                "max_count_per_team must be at least 1".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(SynastryError::Config(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of team seeds for a population. A fractional count is rounded
    /// up and the result never exceeds the population.
    pub fn resolve_team_count(&self, population: usize) -> SynResult<usize> {
        self.validate()?;

        let raw = match (self.number_of_teams, self.max_count_per_team) {
            (Some(n), _) => n,
            (None, Some(max)) => population as f64 / max as f64,
            (None, None) => return Err(missing_team_size()),
        };

        Ok((raw.ceil() as usize).min(population))
    }
}

fn missing_team_size() -> SynastryError {
    SynastryError::Config("Must specify number_of_teams or max_count_per_team".to_string())
}

impl ScoringParams {
    pub fn merge_from_cli(&mut self, cli: &ScoringParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, placements);
        update_if_present!(self, cli, matches, overlay_scale);
    }
}
