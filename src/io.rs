//! Instance and solution file I/O, plus JSON round-trips for graphs.

use crate::error::{Result, VcError};
use crate::topology::{Graph, VertexId, MAX_VERTICES};
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads a graph instance.
///
/// The format is a `N M W` header (the third field is carried by the
/// format but unused), then one line per vertex listing its 1-based
/// neighbors. The file lists each edge on both endpoints' lines; the two
/// listings collapse onto one canonical key.
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let open_err = |source| VcError::Input {
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| VcError::InvalidFormat("missing header line".into()))?
        .map_err(open_err)?;
    let mut fields = header.split_whitespace().map(|tok| {
        tok.parse::<u64>()
            .map_err(|e| VcError::InvalidFormat(format!("header token '{}': {}", tok, e)))
    });
    let mut next_field = |name: &str| -> Result<u64> {
        fields
            .next()
            .transpose()?
            .ok_or_else(|| VcError::InvalidFormat(format!("header is missing {}", name)))
    };
    let num_vertices = next_field("the vertex count")?;
    let num_edges = next_field("the edge count")?;
    let _weighted = next_field("the weight flag")?;
    if num_vertices > MAX_VERTICES {
        return Err(VcError::SizeExceeded {
            vertices: num_vertices,
            max: MAX_VERTICES,
        });
    }

    let num_vertices = num_vertices as usize;
    let mut edges = Vec::new();
    for i in 0..num_vertices {
        // Trailing isolated vertices may be cut off with the final newline.
        let Some(line) = lines.next() else { break };
        let line = line.map_err(open_err)?;
        for tok in line.split_whitespace() {
            let j: usize = tok.parse().map_err(|e| {
                VcError::InvalidFormat(format!("vertex {} neighbor '{}': {}", i + 1, tok, e))
            })?;
            if j < 1 || j > num_vertices {
                return Err(VcError::InvalidFormat(format!(
                    "vertex {} lists neighbor {} outside 1..={}",
                    i + 1,
                    j,
                    num_vertices
                )));
            }
            if j - 1 == i {
                return Err(VcError::InvalidFormat(format!("self-loop on vertex {}", j)));
            }
            edges.push((i, j - 1));
        }
    }

    let graph = Graph::new(num_vertices, edges);
    info!(
        "instance loaded: |V| = {}, |E| = {} (header claimed {})",
        graph.num_vertices(),
        graph.num_edges(),
        num_edges
    );
    Ok(graph)
}

/// Output stem for an instance path: the file name with its trailing six
/// characters (a ".graph"-style extension) removed.
pub fn instance_stem<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let keep = name.chars().count().saturating_sub(6);
    name.chars().take(keep).collect()
}

/// Writes a solution file: the cover size on the first line, then the
/// comma-separated 1-based vertex ids.
pub fn write_solution<P: AsRef<Path>>(path: P, cover: &[VertexId]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", cover.len())?;
    for (i, v) in cover.iter().enumerate() {
        if i != 0 {
            write!(out, ",")?;
        }
        write!(out, "{}", v + 1)?;
    }
    out.flush()?;
    Ok(())
}

/// Serializes a value to a pretty JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a value from a JSON string.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Writes a value to a JSON file.
pub fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

/// Reads a value from a JSON file.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VcError::Input {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
#[path = "unit_tests/io.rs"]
mod tests;
