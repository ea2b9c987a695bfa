//! Whole-table export: JSON, plain text and reStructuredText listings

use std::io::{self, Write};

use serde::ser::{SerializeMap, SerializeTuple, Serializer};
use serde::Serialize;

use crate::unit::{UnitDef, UnitTypeDef};

/// Serializes a table as `{type: {primary: [datum, [synonyms]]}}`, keeping
/// table order
#[derive(Debug, Clone, Copy)]
pub struct TableDump<'a>(pub &'a [UnitTypeDef]);

struct UnitsDump<'a>(&'a [UnitDef]);

struct UnitEntry<'a>(&'a UnitDef);

impl Serialize for TableDump<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for unit_type in self.0 {
            map.serialize_entry(unit_type.name, &UnitsDump(unit_type.units))?;
        }
        map.end()
    }
}

impl Serialize for UnitsDump<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for unit in self.0 {
            map.serialize_entry(unit.name, &UnitEntry(unit))?;
        }
        map.end()
    }
}

impl Serialize for UnitEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_tuple(2)?;
        entry.serialize_element(&self.0.datum)?;
        entry.serialize_element(self.0.synonyms)?;
        entry.end()
    }
}

pub fn write_json<W: Write>(
    table: &[UnitTypeDef],
    writer: W,
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, &TableDump(table))
    } else {
        serde_json::to_writer(writer, &TableDump(table))
    }
}

pub fn to_json(table: &[UnitTypeDef], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(&TableDump(table))
    } else {
        serde_json::to_string(&TableDump(table))
    }
}

/// Plain listing: a `Type:` header per unit type, each primary name
/// indented four spaces and its synonyms on the next line at eight
pub fn write_text<W: Write>(table: &[UnitTypeDef], mut writer: W) -> io::Result<()> {
    for unit_type in table {
        writeln!(writer, "\n{}:", unit_type.name)?;
        for unit in unit_type.units {
            writeln!(writer, "    {}", unit.name)?;
            writeln!(writer, "        {}", unit.synonyms.join(", "))?;
        }
    }
    Ok(())
}

/// reStructuredText listing: unit types as `-` sections, units as `.`
/// subsections
pub fn write_rst<W: Write>(table: &[UnitTypeDef], mut writer: W) -> io::Result<()> {
    for unit_type in table {
        let title = format!("{}:", unit_type.name);
        writeln!(writer, "\n{title}")?;
        writeln!(writer, "{}\n", "-".repeat(title.chars().count()))?;
        for unit in unit_type.units {
            writeln!(writer, "{}", unit.name)?;
            writeln!(writer, "{}\n", ".".repeat(unit.name.chars().count()))?;
            writeln!(writer, "    {}\n", unit.synonyms.join(", "))?;
        }
    }
    Ok(())
}

pub fn to_text(table: &[UnitTypeDef]) -> io::Result<String> {
    render(|buf| write_text(table, buf))
}

pub fn to_rst(table: &[UnitTypeDef]) -> io::Result<String> {
    render(|buf| write_rst(table, buf))
}

fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> io::Result<String> {
    let mut buf = Vec::new();
    write(&mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
