//! MySQL/MariaDB default tables.
//!
//! Ranges follow the MySQL 8.0 reference manual (numeric type storage and
//! string type storage requirements). Compatible with MariaDB 10.2+.

use super::tables::{
    BoundPair, DialectTables, FormatMap, JsonType, LengthBounds, LengthMap, LengthTypeMap,
    PatternMap, RangeKeywords, TypeMap,
};

const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
const DATETIME_PATTERN: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(\.\d{1,6})?$";
const TIME_PATTERN: &str = r"^-?\d{2,3}:\d{2}:\d{2}(\.\d{1,6})?$";
const YEAR_PATTERN: &str = r"^\d{4}$";

/// Build the MySQL default tables.
pub fn tables() -> DialectTables {
    DialectTables {
        type_map: type_map(),
        length_map: length_map(),
        length_type_map: length_type_map(),
        pattern_map: pattern_map(),
        format_map: format_map(),
    }
}

fn type_map() -> TypeMap {
    let entries: &[(&str, JsonType)] = &[
        // String family
        ("char", JsonType::String),
        ("varchar", JsonType::String),
        ("binary", JsonType::String),
        ("varbinary", JsonType::String),
        ("blob", JsonType::String),
        ("text", JsonType::String),
        ("mediumtext", JsonType::String),
        ("tinytext", JsonType::String),
        // Temporal types travel as strings
        ("date", JsonType::String),
        ("datetime", JsonType::String),
        ("timestamp", JsonType::String),
        ("time", JsonType::String),
        ("year", JsonType::String),
        // Integer family
        ("integer", JsonType::Integer),
        ("int", JsonType::Integer),
        ("smallint", JsonType::Integer),
        ("tinyint", JsonType::Integer),
        ("mediumint", JsonType::Integer),
        ("bigint", JsonType::Integer),
        ("bit", JsonType::Integer),
        // Fixed and floating point
        ("decimal", JsonType::Number),
        ("float", JsonType::Number),
        ("double", JsonType::Number),
        ("double precision", JsonType::Number),
        ("numeric", JsonType::Number),
        // Member lists
        ("enum", JsonType::Enum),
        ("set", JsonType::Enum),
        ("json", JsonType::Object),
    ];
    entries
        .iter()
        .map(|(name, ty)| (name.to_string(), *ty))
        .collect()
}

fn flat(min: i64, max: u64) -> LengthBounds {
    LengthBounds::Flat(BoundPair(min, max))
}

fn signed(signed: (i64, u64), unsigned: (i64, u64)) -> LengthBounds {
    LengthBounds::Signed {
        signed: BoundPair(signed.0, signed.1),
        unsigned: BoundPair(unsigned.0, unsigned.1),
    }
}

fn length_map() -> LengthMap {
    let int = signed((-2_147_483_648, 2_147_483_647), (0, 4_294_967_295));
    let entries: Vec<(&str, LengthBounds)> = vec![
        // Byte/character widths
        ("char", flat(0, 255)),
        ("varchar", flat(0, 65_535)),
        ("binary", flat(0, 255)),
        ("varbinary", flat(0, 65_535)),
        ("blob", flat(0, 65_535)),
        ("text", flat(0, 65_535)),
        ("mediumtext", flat(0, 16_777_215)),
        ("tinytext", flat(0, 255)),
        // Integer ranges
        ("tinyint", signed((-128, 127), (0, 255))),
        ("smallint", signed((-32_768, 32_767), (0, 65_535))),
        ("mediumint", signed((-8_388_608, 8_388_607), (0, 16_777_215))),
        ("integer", int),
        ("int", int),
        (
            "bigint",
            signed(
                (i64::MIN, i64::MAX as u64),
                (0, u64::MAX),
            ),
        ),
        ("bit", signed((0, 1), (0, 1))),
    ];
    entries
        .into_iter()
        .map(|(name, bounds)| (name.to_string(), bounds))
        .collect()
}

fn length_type_map() -> LengthTypeMap {
    LengthTypeMap::from([
        (JsonType::String, RangeKeywords::new("minLength", "maxLength")),
        (JsonType::Number, RangeKeywords::new("minimum", "maximum")),
        (JsonType::Integer, RangeKeywords::new("minimum", "maximum")),
    ])
}

fn pattern_map() -> PatternMap {
    PatternMap::from([
        ("date".to_string(), DATE_PATTERN.to_string()),
        ("datetime".to_string(), DATETIME_PATTERN.to_string()),
        ("timestamp".to_string(), DATETIME_PATTERN.to_string()),
        ("time".to_string(), TIME_PATTERN.to_string()),
        ("year".to_string(), YEAR_PATTERN.to_string()),
    ])
}

// Empty by default: the temporal types above carry MySQL's own literal
// layout as a pattern, which is stricter than RFC 3339 `format` values.
fn format_map() -> FormatMap {
    FormatMap::new()
}
