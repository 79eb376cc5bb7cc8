use geo::Area;
use geo_types::{line_string, polygon, Geometry};
use planargraph::{Config, PlanarGraphBuilder};

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Geometry<f64> {
    Geometry::Polygon(polygon![
        (x: x0, y: y0), (x: x1, y: y0), (x: x1, y: y1), (x: x0, y: y1), (x: x0, y: y0),
    ])
}

#[test]
fn single_square_has_one_face_one_ring_four_nodes() {
    let mut builder = PlanarGraphBuilder::new(Config::new(false, false, true, false));
    builder.add_geometry(&square(0.0, 0.0, 4.0, 4.0)).unwrap();
    let graph = builder.finalize().unwrap();

    assert_eq!(graph.faces().len(), 1);
    assert_eq!(graph.rings().len(), 1);
    assert_eq!(graph.nodes().len(), 4);
    assert_eq!(graph.edges().len(), 4);
    assert_eq!(graph.faces()[0].intrings().len(), 0);
}

#[test]
fn two_adjacent_squares_share_one_edge() {
    let mut builder = PlanarGraphBuilder::new(Config::new(false, false, true, false));
    builder.add_geometry(&square(0.0, 0.0, 4.0, 4.0)).unwrap();
    builder.add_geometry(&square(4.0, 0.0, 8.0, 4.0)).unwrap();
    let graph = builder.finalize().unwrap();

    assert_eq!(graph.faces().len(), 2);
    // 4 + 4 sides minus the one shared edge, noded into a single edge.
    assert_eq!(graph.edges().len(), 7);

    let shared = graph
        .edges()
        .iter()
        .find(|edge| edge.left_face().is_some() && edge.right_face().is_some())
        .expect("exactly one edge should border both faces");
    assert_ne!(shared.left_face(), shared.right_face());
}

#[test]
fn square_with_a_hole_filled_by_one_inner_square() {
    let mut builder = PlanarGraphBuilder::new(Config::new(false, false, true, false));
    builder.add_geometry(&square(0.0, 0.0, 10.0, 10.0)).unwrap();
    builder.add_geometry(&square(3.0, 3.0, 6.0, 6.0)).unwrap();
    let graph = builder.finalize().unwrap();

    assert_eq!(graph.faces().len(), 2);
    let outer = graph
        .faces()
        .iter()
        .max_by(|a, b| a.geom().unsigned_area().total_cmp(&b.geom().unsigned_area()))
        .unwrap();
    assert_eq!(outer.intrings().len(), 1);
}

#[test]
fn square_hole_filled_by_two_adjacent_rectangles() {
    let mut builder = PlanarGraphBuilder::new(Config::new(false, false, true, false));
    builder.add_geometry(&square(0.0, 0.0, 10.0, 10.0)).unwrap();
    builder.add_geometry(&square(3.0, 3.0, 5.0, 6.0)).unwrap();
    builder.add_geometry(&square(5.0, 3.0, 7.0, 6.0)).unwrap();
    let graph = builder.finalize().unwrap();

    assert_eq!(graph.faces().len(), 3);
    let outer = graph
        .faces()
        .iter()
        .max_by(|a, b| a.geom().unsigned_area().total_cmp(&b.geom().unsigned_area()))
        .unwrap();
    assert_eq!(outer.intrings().len(), 1);
}

#[test]
fn crossing_line_strings_attribute_sources_per_segment() {
    let mut builder = PlanarGraphBuilder::new(Config::new(false, false, false, true));
    builder
        .add_geometry(&Geometry::LineString(line_string![
            (x: 0.0, y: 5.0), (x: 10.0, y: 5.0),
        ]))
        .unwrap();
    builder
        .add_geometry(&Geometry::LineString(line_string![
            (x: 5.0, y: 0.0), (x: 5.0, y: 10.0),
        ]))
        .unwrap();
    let graph = builder.finalize().unwrap();

    assert_eq!(graph.edges().len(), 4);
    for edge in graph.edges() {
        assert_eq!(edge.sources().len(), 1);
    }
}

#[test]
fn edge_fully_inside_a_face_is_a_floating_edge() {
    let mut builder = PlanarGraphBuilder::new(Config::new(false, false, true, false));
    builder.add_geometry(&square(0.0, 0.0, 10.0, 10.0)).unwrap();
    builder
        .add_geometry(&Geometry::LineString(line_string![
            (x: 2.0, y: 2.0), (x: 4.0, y: 4.0),
        ]))
        .unwrap();
    let graph = builder.finalize().unwrap();

    assert_eq!(graph.faces().len(), 1);
    let floating = graph
        .edges()
        .iter()
        .find(|edge| edge.geom().0.len() == 2)
        .expect("the floating segment survives as its own edge");
    assert_eq!(floating.left_face(), floating.right_face());
    assert!(floating.left_face().is_some());
}
