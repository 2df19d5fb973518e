//! Contiguity grouping of boundary vertices and closed-polyline construction.

use crate::records::{BorderSegment, ConstellationGroup, LineStyle, Vertex};

/// Splits vertices into runs of equal constellation code.
///
/// A new group starts whenever the code differs from the previous vertex.
/// Input order is kept, so a code that reappears later starts a second group.
pub fn group_by_constellation(vertices: &[Vertex]) -> Vec<ConstellationGroup> {
    vertices.iter().fold(Vec::new(), |mut groups: Vec<ConstellationGroup>, v| {
        match groups.last_mut() {
            Some(group) if group.constellation == v.constellation => group.vertices.push(v.clone()),
            _ => groups.push(ConstellationGroup {
                constellation: v.constellation.clone(),
                vertices: vec![v.clone()],
            }),
        }
        groups
    })
}

/// Closed loop over a group: segment `i → (i + 1) mod n` for every vertex.
///
/// A single-vertex group yields one zero-length segment.
pub fn border_segments(group: &ConstellationGroup, style: LineStyle, include_code: bool) -> Vec<BorderSegment> {
    let n = group.vertices.len();
    (0..n)
        .map(|i| {
            let a = &group.vertices[i];
            let b = &group.vertices[(i + 1) % n];
            let segment = BorderSegment::new((a.ra, a.dec), (b.ra, b.dec), style);
            if include_code {
                segment.with_constellation(&group.constellation)
            } else {
                segment
            }
        })
        .collect()
}

pub fn borders_from_vertices(vertices: &[Vertex], style: LineStyle, include_code: bool) -> Vec<BorderSegment> {
    let groups = group_by_constellation(vertices);
    tracing::debug!(vertices = vertices.len(), groups = groups.len(), "grouped boundary vertices");
    groups
        .iter()
        .flat_map(|g| border_segments(g, style, include_code))
        .collect()
}
