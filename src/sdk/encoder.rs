//! Serialization of rallying points as datastore commands.
use std::io::{self, Write};

/// A city retained as a rallying point.
#[derive(Debug, Clone, PartialEq)]
pub struct RallyingPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Writes `GEOADD rallying_point <lat> <lon> <name> ` lines, one per point.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoAddEncoder;

impl GeoAddEncoder {
    pub const COMMAND: &'static str = "GEOADD";
    pub const KEY: &'static str = "rallying_point";

    pub fn encode(&self, point: &RallyingPoint) -> String {
        // The trailing space before the newline is part of the format
        format!(
            "{} {} {} {} {} \n",
            Self::COMMAND,
            Self::KEY,
            format_coordinate(point.latitude),
            format_coordinate(point.longitude),
            point.name
        )
    }

    pub fn write<W: Write>(&self, out: &mut W, point: &RallyingPoint) -> io::Result<()> {
        out.write_all(self.encode(point).as_bytes())
    }
}

/// Shortest round-trip form, keeping `.0` on integral values.
fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64, name: &str) -> RallyingPoint {
        RallyingPoint {
            latitude,
            longitude,
            name: name.to_string(),
        }
    }

    #[test]
    fn encodes_geoadd_line() {
        let line = GeoAddEncoder.encode(&point(45.4333, 4.4, "Saint_Étienne"));
        assert_eq!(line, "GEOADD rallying_point 45.4333 4.4 Saint_Étienne \n");
    }

    #[test]
    fn integral_coordinates_keep_decimal() {
        let line = GeoAddEncoder.encode(&point(45.0, -1.0, "X"));
        assert_eq!(line, "GEOADD rallying_point 45.0 -1.0 X \n");
    }

    #[test]
    fn write_appends_to_sink() {
        let mut buf = Vec::new();
        GeoAddEncoder.write(&mut buf, &point(1.5, 2.25, "A")).unwrap();
        GeoAddEncoder.write(&mut buf, &point(3.5, 4.75, "B")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "GEOADD rallying_point 1.5 2.25 A \nGEOADD rallying_point 3.5 4.75 B \n"
        );
    }
}
