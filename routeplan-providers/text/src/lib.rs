//! Text provider for tab-separated road maps.
//!
//! The first non-blank line names the query as `start<TAB>end`. Every later
//! line describes one road as `point1<TAB>point2<TAB>length<TAB>id`.

use std::collections::HashMap;
use std::io::BufRead;

use routeplan_core::{Connection, PointName, RoutePlanner};
use tracing::{Span, field, instrument, warn};

mod errors;

pub use errors::RoadMapError;

const ROAD_FIELDS: usize = 4;

/// A parsed road map: the requested query and the validated roads.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadMap {
    start: PointName,
    end: PointName,
    connections: Vec<Connection>,
}

impl RoadMap {
    /// Parses a road map held in memory.
    ///
    /// # Errors
    /// See [`RoadMap::from_reader`].
    ///
    /// # Examples
    /// ```
    /// use routeplan_providers_text::RoadMap;
    ///
    /// let map = RoadMap::parse("A\tC\nA\tB\t4\t1\nB\tC\t2\t2\n")?;
    /// assert_eq!(&**map.start(), "A");
    /// assert_eq!(map.connections().len(), 2);
    /// # Ok::<(), routeplan_providers_text::RoadMapError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, RoadMapError> {
        Self::from_reader(text.as_bytes())
    }

    /// Reads a road map line by line.
    ///
    /// Surrounding whitespace is trimmed from every line and field, and blank
    /// lines are ignored. Road lines with fewer than four fields are skipped
    /// with a warning.
    ///
    /// # Errors
    /// - [`RoadMapError::MissingQuery`] when the input has no non-blank line.
    /// - [`RoadMapError::MalformedQuery`] when the query line lacks an end point.
    /// - [`RoadMapError::InvalidNumber`] when a length is not a `u32` or an id
    ///   is not an `i64`.
    /// - [`RoadMapError::Connection`] when a road has zero length or a blank
    ///   endpoint.
    /// - [`RoadMapError::DuplicateId`] when two roads share an id.
    /// - [`RoadMapError::Io`] when the reader fails.
    #[instrument(
        name = "providers.text.read",
        skip_all,
        fields(connections = field::Empty, skipped = field::Empty),
    )]
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RoadMapError> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|text| (index + 1, text)));

        let (start, end) = loop {
            let Some(next) = lines.next() else {
                return Err(RoadMapError::MissingQuery);
            };
            let (line, text) = next?;
            let text = text.trim();
            if !text.is_empty() {
                break parse_query(line, text)?;
            }
        };

        let mut connections = Vec::new();
        let mut first_lines = HashMap::new();
        let mut skipped = 0_usize;
        for next in lines {
            let (line, text) = next?;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            match parse_road(line, text)? {
                Some(connection) => {
                    if let Some(&first_line) = first_lines.get(&connection.id()) {
                        return Err(RoadMapError::DuplicateId {
                            line,
                            id: connection.id(),
                            first_line,
                        });
                    }
                    first_lines.insert(connection.id(), line);
                    connections.push(connection);
                }
                None => {
                    skipped += 1;
                    warn!(line, "skipping road with fewer than {ROAD_FIELDS} fields");
                }
            }
        }

        let span = Span::current();
        span.record("connections", connections.len());
        span.record("skipped", skipped);

        Ok(Self {
            start,
            end,
            connections,
        })
    }

    /// Returns the query start point.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &PointName { &self.start }

    /// Returns the query end point.
    #[must_use]
    #[rustfmt::skip]
    pub fn end(&self) -> &PointName { &self.end }

    /// Returns the roads in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn connections(&self) -> &[Connection] { &self.connections }

    /// Splits the map into a planner over its roads and the query endpoints.
    #[must_use]
    pub fn into_planner(self) -> (RoutePlanner, PointName, PointName) {
        (RoutePlanner::new(self.connections), self.start, self.end)
    }
}

fn parse_query(line: usize, text: &str) -> Result<(PointName, PointName), RoadMapError> {
    let mut fields = text.split('\t').map(str::trim);
    match (fields.next(), fields.next()) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
            Ok((start.into(), end.into()))
        }
        _ => Err(RoadMapError::MalformedQuery { line }),
    }
}

fn parse_road(line: usize, text: &str) -> Result<Option<Connection>, RoadMapError> {
    let fields: Vec<&str> = text.split('\t').map(str::trim).collect();
    let [from, to, length, id, ..] = fields.as_slice() else {
        return Ok(None);
    };
    let weight = u64::from(parse_number::<u32>(line, "length", length)?);
    let id = parse_number::<i64>(line, "id", id)?;
    Connection::new(*from, *to, weight, id)
        .map(Some)
        .map_err(|source| RoadMapError::Connection { line, source })
}

fn parse_number<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<T, RoadMapError> {
    value.parse().map_err(|_| RoadMapError::InvalidNumber {
        line,
        field,
        value: value.to_owned(),
    })
}
