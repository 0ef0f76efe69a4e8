//! Proposition input files.
//!
//! Accepts either a bare JSON array of propositions or an object with a
//! `propositions` array. `-` reads from stdin.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Proposition, Side};
use crate::error::Result;

#[derive(Deserialize)]
#[serde(untagged)]
enum Slate {
    List(Vec<Proposition>),
    Wrapped { propositions: Vec<Proposition> },
}

/// Load propositions from `path`, filling `date` where a record has none.
pub fn load(path: &Path, date: Option<NaiveDate>) -> Result<Vec<Proposition>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    let props = parse(&content, date)?;
    debug!(path = %path.display(), count = props.len(), "Loaded propositions");
    Ok(props)
}

/// Parse propositions from JSON text.
pub fn parse(content: &str, date: Option<NaiveDate>) -> Result<Vec<Proposition>> {
    let slate: Slate = serde_json::from_str(content)?;
    let mut props = match slate {
        Slate::List(props) | Slate::Wrapped { propositions: props } => props,
    };
    if let Some(date) = date {
        for prop in props.iter_mut().filter(|p| p.date.is_none()) {
            prop.date = Some(date);
        }
    }
    Ok(props)
}

/// Keep only propositions on `side`, parsed from its CLI spelling.
pub fn filter_side(props: Vec<Proposition>, side: Option<&str>) -> Result<Vec<Proposition>> {
    let Some(side) = side else {
        return Ok(props);
    };
    let side: Side = side.parse()?;
    Ok(props.into_iter().filter(|p| p.side == side).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let props = parse(
            r#"[{"player":"A","stat":"points","line":20.5,"side":"over"}]"#,
            None,
        )
        .unwrap();
        assert_eq!(props.len(), 1);
        assert!(props[0].date.is_none());
    }

    #[test]
    fn parses_wrapped_object_and_fills_missing_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let props = parse(
            r#"{"propositions":[
                {"player":"A","stat":"points","line":20.5,"side":"over"},
                {"player":"B","stat":"assists","line":6.5,"side":"under","date":"2025-01-14"}
            ]}"#,
            Some(date),
        )
        .unwrap();
        assert_eq!(props[0].date, Some(date));
        assert_eq!(props[1].date, NaiveDate::from_ymd_opt(2025, 1, 14));
    }

    #[test]
    fn side_filter_keeps_matching_propositions() {
        let props = parse(
            r#"[{"player":"A","stat":"points","line":20.5,"side":"over"},
                {"player":"B","stat":"points","line":18.5,"side":"under"}]"#,
            None,
        )
        .unwrap();
        let unders = filter_side(props.clone(), Some("UNDER")).unwrap();
        assert_eq!(unders.len(), 1);
        assert_eq!(unders[0].player.as_str(), "B");
        assert_eq!(filter_side(props, None).unwrap().len(), 2);
    }

    #[test]
    fn side_filter_rejects_unknown_side() {
        let result = filter_side(Vec::new(), Some("sideways"));
        assert!(matches!(result, Err(crate::error::Error::Domain(_))));
    }

    #[test]
    fn rejects_unknown_side() {
        let result = parse(
            r#"[{"player":"A","stat":"points","line":20.5,"side":"sideways"}]"#,
            None,
        );
        assert!(result.is_err());
    }
}
