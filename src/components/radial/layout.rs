//! Angular placement of items around a hub.

/// Items start at the top of the orbit.
pub const DEFAULT_START_ANGLE_DEG: f64 = -90.0;

/// Orbit path the nodes sit on. A circle is an ellipse with both radii equal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OrbitShape {
	#[default]
	Circle,
	/// Vertical radius as a fraction of the horizontal one.
	Ellipse { y_ratio: f64 },
}

impl OrbitShape {
	pub fn radii(self, orbit_radius: f64) -> (f64, f64) {
		match self {
			Self::Circle => (orbit_radius, orbit_radius),
			Self::Ellipse { y_ratio } => (orbit_radius, orbit_radius * y_ratio),
		}
	}
}

/// Angle in degrees of slot `index` out of `total`. Computed from the index
/// so consecutive slots never accumulate drift.
pub fn angle_for(index: usize, total: usize, start_angle_deg: f64) -> f64 {
	start_angle_deg + index as f64 * (360.0 / total as f64)
}

/// Offset from the hub center of slot `index` out of `total`.
///
/// `total` must be at least 1; a category without items renders its hub only
/// and never asks for positions.
pub fn position(
	index: usize,
	total: usize,
	radius_x: f64,
	radius_y: f64,
	start_angle_deg: f64,
) -> (f64, f64) {
	debug_assert!(total >= 1, "position() needs at least one slot");
	let angle = angle_for(index, total, start_angle_deg).to_radians();
	(angle.cos() * radius_x, angle.sin() * radius_y)
}

pub fn orbit_positions(
	total: usize,
	radius_x: f64,
	radius_y: f64,
	start_angle_deg: f64,
) -> Vec<(f64, f64)> {
	(0..total)
		.map(|i| position(i, total, radius_x, radius_y, start_angle_deg))
		.collect()
}

/// Distance between neighbouring node centers on a circular orbit.
pub fn min_node_separation(total: usize, radius: f64) -> f64 {
	match total {
		0 | 1 => f64::INFINITY,
		n => 2.0 * radius * (std::f64::consts::PI / n as f64).sin(),
	}
}

/// Closest pair of node centers on a possibly elliptical orbit. On a flattened
/// orbit the tightest gap is near the ends of the long axis, not at the start.
pub fn min_orbit_separation(total: usize, radius_x: f64, radius_y: f64) -> f64 {
	let points = orbit_positions(total, radius_x, radius_y, DEFAULT_START_ANGLE_DEG);
	let mut min = f64::INFINITY;
	for (i, a) in points.iter().enumerate() {
		for b in &points[i + 1..] {
			min = min.min((a.0 - b.0).hypot(a.1 - b.1));
		}
	}
	min
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
	}

	#[test]
	fn three_items_on_unit_hundred_orbit() {
		let half_root3 = 100.0 * 3f64.sqrt() / 2.0;
		assert!(close(position(0, 3, 100.0, 100.0, -90.0), (0.0, -100.0)));
		assert!(close(position(1, 3, 100.0, 100.0, -90.0), (half_root3, 50.0)));
		assert!(close(position(2, 3, 100.0, 100.0, -90.0), (-half_root3, 50.0)));
	}

	#[test]
	fn angles_are_evenly_spaced() {
		for total in 1..=24 {
			let step = 360.0 / total as f64;
			for i in 1..total {
				let gap = angle_for(i, total, DEFAULT_START_ANGLE_DEG)
					- angle_for(i - 1, total, DEFAULT_START_ANGLE_DEG);
				assert!((gap - step).abs() < EPS, "total={total} i={i}");
			}
			// wraps back to the start slot
			let wrap = angle_for(total, total, 0.0).rem_euclid(360.0);
			assert!(wrap.abs() < EPS || (wrap - 360.0).abs() < EPS);
		}
	}

	#[test]
	fn single_item_sits_at_start_angle() {
		assert!(close(position(0, 1, 80.0, 80.0, -90.0), (0.0, -80.0)));
		let start = 45f64.to_radians();
		assert!(close(
			position(0, 1, 80.0, 40.0, 45.0),
			(start.cos() * 80.0, start.sin() * 40.0)
		));
	}

	#[test]
	fn empty_orbit_has_no_positions() {
		assert!(orbit_positions(0, 100.0, 100.0, -90.0).is_empty());
	}

	#[test]
	fn ellipse_squashes_vertical_axis() {
		let (rx, ry) = OrbitShape::Ellipse { y_ratio: 0.5 }.radii(120.0);
		assert_eq!((rx, ry), (120.0, 60.0));
		let points = orbit_positions(4, rx, ry, -90.0);
		assert!(close(points[0], (0.0, -60.0)));
		assert!(close(points[1], (120.0, 0.0)));
	}

	#[test]
	fn separation_shrinks_with_density() {
		assert!(min_node_separation(1, 100.0).is_infinite());
		assert!((min_node_separation(2, 100.0) - 200.0).abs() < EPS);
		assert!(min_node_separation(12, 100.0) < min_node_separation(6, 100.0));
	}

	#[test]
	fn circular_orbit_separation_matches_chord() {
		for total in 2..=12 {
			let chord = min_node_separation(total, 100.0);
			assert!((min_orbit_separation(total, 100.0, 100.0) - chord).abs() < 1e-6);
		}
		assert!(min_orbit_separation(1, 100.0, 100.0).is_infinite());
	}

	#[test]
	fn flattened_orbit_crowds_the_long_axis() {
		// twelve slots: the pair at -30 and 0 degrees is the tightest
		let sep = min_orbit_separation(12, 100.0, 50.0);
		let (a, b) = (position(2, 12, 100.0, 50.0, -90.0), position(3, 12, 100.0, 50.0, -90.0));
		assert!((sep - (a.0 - b.0).hypot(a.1 - b.1)).abs() < 1e-9);
		assert!(sep < min_node_separation(12, 100.0));
	}
}
