// Geometry helpers shared by the tracker and classifier
use crate::model::ContactPoint;

/// Euclidean distance between two contact points.
pub fn distance(a: ContactPoint, b: ContactPoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Midpoint between two contact points.
pub fn midpoint(a: ContactPoint, b: ContactPoint) -> ContactPoint {
    ContactPoint {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}
