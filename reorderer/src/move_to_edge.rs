use crate::{Area, Axis, Edge, Position};

#[derive(Clone, Copy, Debug)]
pub struct MoveToEdgeArgs<'a> {
    pub source: &'a Area,
    pub source_edge: Edge,
    pub destination: &'a Area,
    pub destination_edge: Edge,
    pub destination_axis: Axis,
}

/// Returns the center `source` would have if its `source_edge` lined up with the
/// `destination_edge` of `destination`.
///
/// On the cross axis the two boxes are aligned on their cross-axis start.
pub fn move_to_edge(args: MoveToEdgeArgs<'_>) -> Position {
    let axis = args.destination_axis;
    let corner = |area: &Area, edge: Edge| {
        Position::patch(axis, area.edge(axis, edge), area.cross_start(axis))
    };

    let destination_corner = corner(args.destination, args.destination_edge);
    let center_diff = args
        .source
        .center
        .subtract(corner(args.source, args.source_edge))
        .absolute();

    // Aligning the end edge pulls the center back toward the start.
    let main = match args.source_edge {
        Edge::Start => center_diff.main(axis),
        Edge::End => -center_diff.main(axis),
    };
    let signed = Position::patch(axis, main, center_diff.cross(axis));

    destination_corner.add(signed)
}
