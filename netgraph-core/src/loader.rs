//! Edge-list text format.
//!
//! The format is a whitespace-separated stream of records, each made of five
//! fields: `source_id source_name dest_id dest_name weight`. Line breaks carry
//! no meaning, although [`write_edges`] emits one record per line.
//!
//! A record is accepted only when all five fields are present and well formed;
//! a truncated trailing record is an error rather than a partially filled edge.

use crate::error::{GraphError, Result};
use crate::types::{Edge, RawEdge};

/// Number of fields per record.
pub const FIELDS_PER_RECORD: usize = 5;

const FIELD_NAMES: [&str; FIELDS_PER_RECORD] = [
    "source id",
    "source name",
    "destination id",
    "destination name",
    "weight",
];

/// Parse edge-list text into raw records, preserving input order.
pub fn parse_edges(input: &str) -> Result<Vec<RawEdge>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut records = Vec::with_capacity(tokens.len() / FIELDS_PER_RECORD);

    for (i, chunk) in tokens.chunks(FIELDS_PER_RECORD).enumerate() {
        let record = i + 1;
        if chunk.len() < FIELDS_PER_RECORD {
            return Err(GraphError::construction(
                record,
                format!(
                    "incomplete record: expected {} fields, found {} (missing {})",
                    FIELDS_PER_RECORD,
                    chunk.len(),
                    FIELD_NAMES[chunk.len()]
                ),
            ));
        }

        let source_id = parse_int(record, 0, chunk[0])?;
        let dest_id = parse_int(record, 2, chunk[2])?;
        let weight = parse_int(record, 4, chunk[4])?;

        records.push((
            source_id,
            chunk[1].to_string(),
            dest_id,
            chunk[3].to_string(),
            weight,
        ));
    }

    tracing::debug!("Parsed {} edge records", records.len());
    Ok(records)
}

fn parse_int(record: usize, field: usize, token: &str) -> Result<i64> {
    token.parse().map_err(|_| {
        GraphError::construction(
            record,
            format!("{} '{}' is not an integer", FIELD_NAMES[field], token),
        )
    })
}

/// Serialize edges back into the text format, one record per line.
pub fn write_edges<'a, I>(edges: I) -> String
where
    I: IntoIterator<Item = &'a Edge>,
{
    let mut output = String::new();
    for edge in edges {
        output.push_str(&format!(
            "{} {} {} {} {}\n",
            edge.source_id, edge.source_name, edge.dest_id, edge.dest_name, edge.weight
        ));
    }
    output
}
