use itertools::Itertools;
use log::{debug, warn};
use scraper::{ElementRef, Html};
use starting_goalies_utils::selector;

use crate::schema::{GameRecord, GoalieName, Matchup, ProbableStartingGoalies};

pub const GAME_CONTAINER: &str = "div.game-lineup-container";
pub const MATCHUP_DIV: &str = "div.matchup";
pub const GOALIE_DIV: &str = "div.goalie";

/// Extracts one record per well-formed game container, in document order.
///
/// Containers whose matchup cannot be read are skipped without an error,
/// and goalies that are not listed come out as `None`.
pub fn parse(html: &Html) -> Vec<GameRecord> {
    let containers = html.select(selector!(GAME_CONTAINER)).collect_vec();
    debug!("Found {} game containers", containers.len());
    let records = containers.into_iter().filter_map(parse_game).collect_vec();
    debug!("Extracted {} games", records.len());
    records
}

fn parse_game(container: ElementRef) -> Option<GameRecord> {
    let Some(matchup_div) = container.select(selector!(MATCHUP_DIV)).next() else {
        debug!("Matchup div not found; skipping this container");
        return None;
    };
    let text = normalized_text(matchup_div);
    let Some(game) = parse_matchup(&text) else {
        debug!("Skipping container with unexpected matchup text: {text:?}");
        return None;
    };

    // Away goalie is listed first.  Anything after the second one is ignored.
    let mut goalies = container
        .select(selector!(GOALIE_DIV))
        .map(|div| GoalieName::from(normalized_text(div)));
    let probable_starting_goalies = ProbableStartingGoalies::builder()
        .away(goalies.next())
        .home(goalies.next())
        .build();

    Some(
        GameRecord::builder()
            .game(game)
            .probable_starting_goalies(probable_starting_goalies)
            .build(),
    )
}

/// Splits `"AWAY @ HOME"` into its two trimmed halves.
pub fn parse_matchup(text: &str) -> Option<Matchup> {
    let (away, home) = text.split_once('@')?;
    if home.contains('@') {
        warn!("More than one `@` in matchup text: {text:?}");
        return None;
    }
    Some(Matchup::new(
        away.trim().to_owned().into(),
        home.trim().to_owned().into(),
    ))
}

/// Every descendant text node, trimmed, with the empty ones dropped.
fn normalized_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use scraper::Html;

    use super::{parse, parse_matchup};
    use crate::schema::GameRecord;

    fn parse_str(html: &str) -> Vec<GameRecord> {
        parse(&Html::parse_document(html))
    }

    fn goalies(record: &GameRecord) -> [Option<String>; 2] {
        let goalies = record.probable_starting_goalies();
        [goalies.away(), goalies.home()].map(|g| g.as_ref().map(|g| g.to_string()))
    }

    #[test]
    fn split_matchup() {
        for (text, away, home) in [
            (
                "Colorado Avalanche @ Detroit Red Wings",
                "Colorado Avalanche",
                "Detroit Red Wings",
            ),
            ("COL@DET", "COL", "DET"),
            (
                "  Boston Bruins   @Toronto Maple Leafs ",
                "Boston Bruins",
                "Toronto Maple Leafs",
            ),
            ("@", "", ""),
        ] {
            let matchup = parse_matchup(text).unwrap();
            assert_eq!(matchup.away().to_string(), away, "{text:?}");
            assert_eq!(matchup.home().to_string(), home, "{text:?}");
        }
    }

    #[test]
    fn matchup_without_exactly_one_at_sign() {
        for text in [
            "Postponed",
            "",
            "Colorado Avalanche vs Detroit Red Wings",
            "A @ B @ C",
        ] {
            assert_eq!(parse_matchup(text), None, "{text:?}");
        }
    }

    #[test]
    fn fixture_keeps_valid_games_in_order() {
        let records = parse_str(include_str!("../fixtures/starting_goalies.html"));
        assert_eq!(
            records.iter().map(|r| r.game().to_string()).collect_vec(),
            [
                "Colorado Avalanche @ Detroit Red Wings",
                "Edmonton Oilers @ Calgary Flames",
                "Vegas Golden Knights @ Seattle Kraken",
            ]
        );
        assert_eq!(
            goalies(&records[0]),
            [Some("Alexandar Georgiev".into()), Some("Ville Husso".into())]
        );
        assert_eq!(goalies(&records[1]), [Some("Stuart Skinner".into()), None]);
        assert_eq!(goalies(&records[2]), [None, None]);
    }

    #[test]
    fn invalid_matchup_is_dropped() {
        let records = parse_str(
            r#"
            <div class="game-lineup-container"><div class="matchup">A @ B</div></div>
            <div class="game-lineup-container"><div class="matchup">no games today</div></div>
            <div class="game-lineup-container"><div class="matchup">C @ D</div></div>
            "#,
        );
        assert_eq!(
            records.iter().map(|r| r.game().to_string()).collect_vec(),
            ["A @ B", "C @ D"]
        );
    }

    #[test]
    fn container_without_matchup_is_dropped() {
        let records = parse_str(
            r#"
            <div class="game-lineup-container"><div class="goalie">Nobody</div></div>
            <div class="game-lineup-container"><div class="matchup">A @ B</div></div>
            "#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].game().away().to_string(), "A");
    }

    #[test]
    fn goalie_counts() {
        let records = parse_str(
            r#"
            <div class="game-lineup-container">
              <div class="matchup">A @ B</div>
            </div>
            <div class="game-lineup-container">
              <div class="matchup">C @ D</div>
              <div class="goalie">Only One</div>
            </div>
            <div class="game-lineup-container">
              <div class="matchup">E @ F</div>
              <div class="goalie">First</div>
              <div class="goalie">Second</div>
              <div class="goalie">Third</div>
            </div>
            "#,
        );
        assert_eq!(records.len(), 3);
        assert_eq!(goalies(&records[0]), [None, None]);
        assert_eq!(goalies(&records[1]), [Some("Only One".into()), None]);
        assert_eq!(
            goalies(&records[2]),
            [Some("First".into()), Some("Second".into())]
        );
    }

    #[test]
    fn nested_text_is_trimmed_and_joined() {
        let records = parse_str(
            r##"
            <div class="game-lineup-container">
              <div class="matchup">
                <span>  New York </span><span>Rangers</span>
                @
                <span>New Jersey Devils</span>
              </div>
              <div class="goalie"><a href="#"> Igor </a><span>Shesterkin</span></div>
            </div>
            "##,
        );
        assert_eq!(records.len(), 1);
        // Pieces are joined without a separator.
        assert_eq!(records[0].game().to_string(), "New YorkRangers @ New Jersey Devils");
        assert_eq!(goalies(&records[0]), [Some("IgorShesterkin".into()), None]);
    }

    #[test]
    fn no_containers() {
        assert!(parse_str("<html><body><p>Nothing here</p></body></html>").is_empty());
        assert!(parse_str("").is_empty());
    }
}
