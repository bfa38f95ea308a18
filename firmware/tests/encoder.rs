use hackpad_control::input::QuadratureEncoder;
use hackpad_firmware::system::inputs::{Line, Lines};

fn decode(edges: &[(Line, bool)]) -> i32 {
    let mut lines = Lines::default();
    let mut decoder = QuadratureEncoder::new(100);
    for &(line, active) in edges {
        lines.apply(line, active);
        decoder.update(lines.a, lines.b);
    }
    decoder.current_steps()
}

const DETENT_UP: [(Line, bool); 4] = [
    (Line::A, true),
    (Line::B, true),
    (Line::A, false),
    (Line::B, false),
];

const DETENT_DOWN: [(Line, bool); 4] = [
    (Line::B, true),
    (Line::A, true),
    (Line::B, false),
    (Line::A, false),
];

#[test]
fn per_line_edges_in_queue_order_count_every_detent() {
    let edges: Vec<_> = DETENT_UP.iter().copied().cycle().take(4 * 20).collect();
    assert_eq!(decode(&edges), 20);

    let edges: Vec<_> = DETENT_DOWN.iter().copied().cycle().take(4 * 7).collect();
    assert_eq!(decode(&edges), -7);
}

#[test]
fn repeated_edge_of_one_line_does_not_lose_the_detent() {
    let edges = [
        (Line::A, true),
        (Line::A, true),
        (Line::B, true),
        (Line::A, false),
        (Line::B, false),
        (Line::B, false),
    ];
    assert_eq!(decode(&edges), 1);
}

#[test]
fn applying_an_edge_changes_only_its_line() {
    let mut lines = Lines::default();
    lines.apply(Line::B, true);
    assert_eq!(lines, Lines { a: false, b: true });
    lines.apply(Line::A, true);
    lines.apply(Line::B, false);
    assert_eq!(lines, Lines { a: true, b: false });
}
