use geo_types::LineString;

use crate::error::Result;
use crate::kernel;

/// Geometric pass: node the raw traces contributed by the input
/// geometries into a maximal simple arrangement of line strings.
///
/// Skips the union/merge round trip for a single input trace, since a
/// lone line string is already noded against nothing. This mirrors the
/// original geometric-processing fast path for `len(entries) == 1`.
pub fn geometric_process(entries: &[LineString<f64>]) -> Result<Vec<LineString<f64>>> {
    if entries.len() == 1 {
        return Ok(entries.to_vec());
    }
    let merged = kernel::merge_lines(entries)?;
    Ok(merged.0)
}
