use crate::date::parse_date;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Deserialize;

pub type PersonId = i64;

/// A charted individual. Loaded once, immutable afterwards.
///
/// The birth date is mandatory: the vertical axis encodes birth year, so a
/// person without one has no defined position. The death date only widens the
/// year range of the chart.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: NaiveDate,
    pub death: Option<NaiveDate>,
    pub dynasty: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    FatherChild,
    MotherChild,
    /// Any other relation type on the wire (`spouse`, ...). Carried through
    /// decoding but never drawn.
    Other,
}

impl RelationKind {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "father-child" => Self::FatherChild,
            "mother-child" => Self::MotherChild,
            _ => Self::Other,
        }
    }

    pub fn is_parental(self) -> bool {
        matches!(self, Self::FatherChild | Self::MotherChild)
    }
}

/// A directed parent→child (or other) relation between two persons.
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub source: PersonId,
    pub target: PersonId,
    pub kind: RelationKind,
}

/// A horizontal position specification, decided once at parse time.
///
/// On the wire this is a string: a bare number is an absolute coordinate on
/// the normalized 0..=1000 scale, an explicit leading `+` or `-` marks a
/// signed offset from the father's resolved position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionSpec {
    Absolute(f64),
    Relative(f64),
}

impl PositionSpec {
    pub fn parse(person_id: PersonId, raw: &str) -> Result<Self> {
        let t = raw.trim();
        let relative = t.starts_with('+') || t.starts_with('-');
        let value = t
            .parse::<f64>()
            .map_err(|_| Error::InvalidPositionSpec {
                person_id,
                value: raw.to_string(),
            })?;
        Ok(if relative {
            Self::Relative(value)
        } else {
            Self::Absolute(value)
        })
    }

    pub fn is_relative(self) -> bool {
        matches!(self, Self::Relative(_))
    }
}

/// Per-person position specifications, keyed by person id.
#[derive(Debug, Clone, Default)]
pub struct PositionSpecs {
    by_person: FxHashMap<PersonId, PositionSpec>,
}

impl PositionSpecs {
    pub fn insert(&mut self, person_id: PersonId, spec: PositionSpec) {
        self.by_person.insert(person_id, spec);
    }

    pub fn get(&self, person_id: PersonId) -> Option<PositionSpec> {
        self.by_person.get(&person_id).copied()
    }

    /// Like [`get`](Self::get), but a missing entry is a data-integrity error.
    pub fn require(&self, person_id: PersonId) -> Result<PositionSpec> {
        self.get(person_id)
            .ok_or(Error::MissingPositionSpec { person_id })
    }

    pub fn len(&self) -> usize {
        self.by_person.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_person.is_empty()
    }
}

impl FromIterator<(PersonId, PositionSpec)> for PositionSpecs {
    fn from_iter<T: IntoIterator<Item = (PersonId, PositionSpec)>>(iter: T) -> Self {
        Self {
            by_person: iter.into_iter().collect(),
        }
    }
}

/// Display settings for one dynasty (line color of relations sourced from it).
#[derive(Debug, Clone, Deserialize)]
pub struct DynastyStyle {
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PersonRecord {
    id: PersonId,
    name: String,
    #[serde(rename = "birthDate", default)]
    birth_date: Option<String>,
    #[serde(rename = "deathDate", default)]
    death_date: Option<String>,
    #[serde(default)]
    dynasty: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RelationEnd {
    id: PersonId,
}

#[derive(Debug, Clone, Deserialize)]
struct RelationRecord {
    source: RelationEnd,
    target: RelationEnd,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PersonSettingRecord {
    x: String,
}

/// The immutable snapshot one render pass consumes.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub persons: Vec<Person>,
    pub relations: Vec<Relation>,
    pub specs: PositionSpecs,
    pub dynasties: IndexMap<String, DynastyStyle>,
    person_index: FxHashMap<PersonId, usize>,
}

impl ChartData {
    /// Builds a snapshot from typed parts, checking the invariants the layout
    /// relies on: every parental relation endpoint must name a known person
    /// (other relation kinds are never drawn, so their endpoints stay
    /// unchecked and malformed entries cannot fail a render).
    pub fn new(
        persons: Vec<Person>,
        relations: Vec<Relation>,
        specs: PositionSpecs,
        dynasties: IndexMap<String, DynastyStyle>,
    ) -> Result<Self> {
        let mut person_index = FxHashMap::default();
        for (i, p) in persons.iter().enumerate() {
            person_index.entry(p.id).or_insert(i);
        }
        for r in &relations {
            if !r.kind.is_parental() {
                continue;
            }
            for end in [r.source, r.target] {
                if !person_index.contains_key(&end) {
                    return Err(Error::UnknownPerson { person_id: end });
                }
            }
        }
        Ok(Self {
            persons,
            relations,
            specs,
            dynasties,
            person_index,
        })
    }

    /// Decodes the four JSON documents of the chart wire format
    /// (`persons.json`, `relations.json`, `person-settings.json` and the
    /// optional `dynasty-settings.json`).
    pub fn from_json_strs(
        persons: &str,
        relations: &str,
        settings: &str,
        dynasties: Option<&str>,
    ) -> Result<Self> {
        let person_records: Vec<PersonRecord> = serde_json::from_str(persons)?;
        let relation_records: Vec<RelationRecord> = serde_json::from_str(relations)?;
        let setting_records: IndexMap<PersonId, PersonSettingRecord> =
            serde_json::from_str(settings)?;
        let dynasties: IndexMap<String, DynastyStyle> = match dynasties {
            Some(s) => serde_json::from_str(s)?,
            None => IndexMap::new(),
        };

        let persons = person_records
            .into_iter()
            .map(person_from_record)
            .collect::<Result<Vec<_>>>()?;

        let relations = relation_records
            .into_iter()
            .map(|r| Relation {
                source: r.source.id,
                target: r.target.id,
                kind: RelationKind::from_wire(&r.kind),
            })
            .collect();

        let specs = setting_records
            .into_iter()
            .map(|(id, rec)| Ok((id, PositionSpec::parse(id, &rec.x)?)))
            .collect::<Result<PositionSpecs>>()?;

        Self::new(persons, relations, specs, dynasties)
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.person_index.get(&id).map(|&i| &self.persons[i])
    }
}

fn person_from_record(record: PersonRecord) -> Result<Person> {
    let birth_raw = record.birth_date.unwrap_or_default();
    let birth = match non_empty(&birth_raw).and_then(parse_date) {
        Some(d) => d,
        None => {
            return Err(Error::UnparseableDate {
                person_id: record.id,
                field: "birthDate",
                value: birth_raw,
            });
        }
    };

    // An absent or empty death date is legal (the person may still be alive,
    // or the record incomplete); a present-but-garbled one is not.
    let death_raw = record.death_date.unwrap_or_default();
    let death = match non_empty(&death_raw) {
        Some(raw) => match parse_date(raw) {
            Some(d) => Some(d),
            None => {
                return Err(Error::UnparseableDate {
                    person_id: record.id,
                    field: "deathDate",
                    value: death_raw,
                });
            }
        },
        None => None,
    };

    Ok(Person {
        id: record.id,
        name: record.name,
        birth,
        death,
        dynasty: record.dynasty.filter(|d| !d.trim().is_empty()),
    })
}

fn non_empty(s: &str) -> Option<&str> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t) }
}
