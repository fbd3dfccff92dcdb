use crate::chart::{Element, Person, Placement};
use crate::error::{SynResult, SynastryError};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Loads persons from a `.json` or `.csv` roster.
pub fn load_roster<P: AsRef<Path>>(path: P) -> SynResult<Vec<Person>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let file = File::open(path)?;
    let persons = match ext.as_deref() {
        Some("json") => load_json(file)?,
        Some("csv") => load_csv(file)?,
        _ => {
            return Err(SynastryError::Config(format!(
                "unsupported roster format '{}', expected .json or .csv",
                path.display()
            )))
        }
    };

    info!(path = %path.display(), persons = persons.len(), "roster loaded");
    Ok(persons)
}

/// A JSON array of persons.
pub fn load_json<R: Read>(reader: R) -> SynResult<Vec<Person>> {
    let persons: Vec<Person> = serde_json::from_reader(reader)?;
    for person in &persons {
        person.validate()?;
    }
    Ok(persons)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    rising: String,
    moon: String,
    sun: String,
    mars: String,
    mercury: String,
    house_2: String,
    house_3: String,
    house_6: String,
    house_10: String,
    house_11: String,

    #[serde(default)]
    jupiter: Option<String>,
    #[serde(default)]
    mc: Option<String>,
    #[serde(default)]
    neptune: Option<String>,
    #[serde(default)]
    pluto: Option<String>,
    #[serde(default)]
    saturn: Option<String>,
    #[serde(default)]
    uranus: Option<String>,
    #[serde(default)]
    venus: Option<String>,

    #[serde(default)]
    house_1: Option<String>,
    #[serde(default)]
    house_4: Option<String>,
    #[serde(default)]
    house_5: Option<String>,
    #[serde(default)]
    house_7: Option<String>,
    #[serde(default)]
    house_8: Option<String>,
    #[serde(default)]
    house_9: Option<String>,
    #[serde(default)]
    house_12: Option<String>,
}

fn parse_sign(cell: &str) -> SynResult<Element> {
    Element::from_str(cell.trim())
        .map_err(|_| SynastryError::Validation(format!("unknown sign '{}'", cell.trim())))
}

/// Parses a `"<Sign> <degrees>"` cell.
fn parse_placement(cell: &str) -> SynResult<Placement> {
    let mut parts = cell.split_whitespace();
    let (Some(sign), Some(degrees), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(SynastryError::Validation(format!(
            "placement '{}' is not in the form '<Sign> <degrees>'",
            cell
        )));
    };
    let degrees: f64 = degrees.parse().map_err(|_| {
        SynastryError::Validation(format!("placement '{}' has an invalid degree value", cell))
    })?;
    Ok(Placement::new(parse_sign(sign)?, degrees))
}

fn optional<T>(cell: Option<String>, parse: fn(&str) -> SynResult<T>) -> SynResult<Option<T>> {
    match cell {
        Some(c) if !c.trim().is_empty() => parse(&c).map(Some),
        _ => Ok(None),
    }
}

impl RosterRow {
    fn into_person(self) -> SynResult<Person> {
        Ok(Person {
            name: self.name,
            rising: parse_placement(&self.rising)?,
            moon: parse_placement(&self.moon)?,
            sun: parse_placement(&self.sun)?,
            mars: parse_placement(&self.mars)?,
            mercury: parse_placement(&self.mercury)?,
            jupiter: optional(self.jupiter, parse_placement)?,
            mc: optional(self.mc, parse_placement)?,
            neptune: optional(self.neptune, parse_placement)?,
            pluto: optional(self.pluto, parse_placement)?,
            saturn: optional(self.saturn, parse_placement)?,
            uranus: optional(self.uranus, parse_placement)?,
            venus: optional(self.venus, parse_placement)?,
            house_2: parse_sign(&self.house_2)?,
            house_3: parse_sign(&self.house_3)?,
            house_6: parse_sign(&self.house_6)?,
            house_10: parse_sign(&self.house_10)?,
            house_11: parse_sign(&self.house_11)?,
            house_1: optional(self.house_1, parse_sign)?,
            house_4: optional(self.house_4, parse_sign)?,
            house_5: optional(self.house_5, parse_sign)?,
            house_7: optional(self.house_7, parse_sign)?,
            house_8: optional(self.house_8, parse_sign)?,
            house_9: optional(self.house_9, parse_sign)?,
            house_12: optional(self.house_12, parse_sign)?,
        })
    }
}

/// One person per row, see `RosterRow` for the columns.
pub fn load_csv<R: Read>(reader: R) -> SynResult<Vec<Person>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut persons = Vec::new();
    for (row_idx, result) in rdr.deserialize::<RosterRow>().enumerate() {
        let person = result?.into_person().map_err(|e| match e {
            SynastryError::Validation(msg) => {
                SynastryError::Validation(format!("row {}: {}", row_idx + 1, msg))
            }
            other => other,
        })?;
        person.validate()?;
        persons.push(person);
    }
    Ok(persons)
}
