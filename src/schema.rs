use chrono::NaiveDate;
use derive_more::{AsRef, Display, From};
use getset::Getters;
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_with::SerializeDisplay;
use typed_builder::TypedBuilder;

/// Format of the single top-level key of [`DailyReport`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize)]
#[as_ref(forward)]
pub struct TeamName(String);

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize)]
#[as_ref(forward)]
pub struct GoalieName(String);

/// Serialized as `"AWAY @ HOME"`.
#[derive(Clone, PartialEq, Eq, Debug, Display, Getters, SerializeDisplay)]
#[display("{away} @ {home}")]
#[getset(get = "pub")]
pub struct Matchup {
    away: TeamName,
    home: TeamName,
}
impl Matchup {
    pub fn new(away: TeamName, home: TeamName) -> Self {
        Self { away, home }
    }

    /// Case-insensitive substring match against either team.
    pub fn involves(&self, team: &str) -> bool {
        let team = team.to_lowercase();
        [&self.away, &self.home].into_iter().any(|name| {
            let name: &str = name.as_ref();
            name.to_lowercase().contains(&team)
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Getters, TypedBuilder, Serialize)]
#[getset(get = "pub")]
pub struct ProbableStartingGoalies {
    #[builder(default)]
    away: Option<GoalieName>,
    #[builder(default)]
    home: Option<GoalieName>,
}

#[derive(Clone, PartialEq, Eq, Debug, Getters, TypedBuilder, Serialize)]
#[getset(get = "pub")]
pub struct GameRecord {
    game: Matchup,
    probable_starting_goalies: ProbableStartingGoalies,
}

/// Every game found on the page, keyed by the day the page was read.
#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct DailyReport {
    date: NaiveDate,
    games: Vec<GameRecord>,
}
impl DailyReport {
    pub fn new(date: NaiveDate, games: Vec<GameRecord>) -> Self {
        Self { date, games }
    }

    /// Keeps the games involving at least one of `teams`.
    /// An empty list keeps everything.
    pub fn retain_teams<S: AsRef<str>>(&mut self, teams: &[S]) {
        if teams.is_empty() {
            return;
        }
        self.games
            .retain(|record| teams.iter().any(|team| record.game.involves(team.as_ref())));
    }
}
impl Serialize for DailyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date.format(DATE_FORMAT).to_string(), &self.games)?;
        map.end()
    }
}
