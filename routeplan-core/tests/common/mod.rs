use routeplan_core::Connection;

/// Builds a connection from fixture literals.
#[must_use]
pub fn road(from: &str, to: &str, weight: u64, id: i64) -> Connection {
    Connection::new(from, to, weight, id).expect("fixture connection must be valid")
}

/// Four points, five roads; shortest A to D is A-C-D (5), reduced weight 9 of 25.
#[must_use]
pub fn diamond() -> Vec<Connection> {
    vec![
        road("A", "B", 4, 1),
        road("B", "D", 6, 2),
        road("A", "C", 2, 3),
        road("C", "D", 3, 4),
        road("A", "D", 10, 5),
    ]
}

/// Two triangles with no road between them.
#[must_use]
pub fn two_islands() -> Vec<Connection> {
    vec![
        road("A", "B", 1, 1),
        road("B", "C", 2, 2),
        road("A", "C", 4, 3),
        road("X", "Y", 1, 4),
        road("Y", "Z", 1, 5),
        road("X", "Z", 3, 6),
    ]
}

#[must_use]
pub fn ids(connections: &[Connection]) -> Vec<i64> {
    connections.iter().map(Connection::id).collect()
}
