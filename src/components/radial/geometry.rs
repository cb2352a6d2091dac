//! Breakpoint-driven sizing for the wheel.
//!
//! Every profile is the same shape scaled to its container: the hub, orbit and
//! node sizes are fixed fractions of the container size. The default table is
//! generated from those fractions rather than listed by hand, and any custom
//! table is checked once against the same invariants.

use thiserror::Error;

use super::layout::{OrbitShape, min_node_separation, min_orbit_separation};
use super::types::MAX_ITEMS_PER_CATEGORY;

/// Largest allowed difference between two profiles' size ratios.
pub const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
	Mobile,
	Sm,
	Lg,
	Xl,
	Xxl,
}

impl Breakpoint {
	pub const ALL: [Breakpoint; 5] = [Self::Mobile, Self::Sm, Self::Lg, Self::Xl, Self::Xxl];

	/// Inclusive lower bound of the viewport width, in px.
	pub fn min_width(self) -> f64 {
		match self {
			Self::Mobile => 0.0,
			Self::Sm => 640.0,
			Self::Lg => 1024.0,
			Self::Xl => 1280.0,
			Self::Xxl => 1536.0,
		}
	}

	pub fn container_size(self) -> f64 {
		match self {
			Self::Mobile => 300.0,
			Self::Sm => 400.0,
			Self::Lg => 520.0,
			Self::Xl => 600.0,
			Self::Xxl => 680.0,
		}
	}

	/// Compact layouts swap the wheel for the accordion.
	pub fn is_compact(self) -> bool {
		self == Self::Mobile
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Mobile => "mobile",
			Self::Sm => "sm",
			Self::Lg => "lg",
			Self::Xl => "xl",
			Self::Xxl => "2xl",
		}
	}
}

/// Sizes as fractions of the container size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryRatios {
	pub hub: f64,
	pub orbit: f64,
	pub node: f64,
}

impl Default for GeometryRatios {
	fn default() -> Self {
		Self {
			hub: 0.28,
			orbit: 0.38,
			node: 0.16,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryProfile {
	pub breakpoint: Breakpoint,
	pub container_size: f64,
	pub hub_size: f64,
	pub orbit_radius: f64,
	pub node_size: f64,
}

impl GeometryProfile {
	pub fn scaled(breakpoint: Breakpoint, ratios: GeometryRatios) -> Self {
		let container_size = breakpoint.container_size();
		Self {
			breakpoint,
			container_size,
			hub_size: container_size * ratios.hub,
			orbit_radius: container_size * ratios.orbit,
			node_size: container_size * ratios.node,
		}
	}

	pub fn ratios(&self) -> GeometryRatios {
		GeometryRatios {
			hub: self.hub_size / self.container_size,
			orbit: self.orbit_radius / self.container_size,
			node: self.node_size / self.container_size,
		}
	}

	pub fn center(&self) -> f64 {
		self.container_size / 2.0
	}

	/// Clearance between the hub edge and the inner edge of a node.
	pub fn hub_clearance(&self) -> f64 {
		self.orbit_radius - self.node_size / 2.0 - self.hub_size / 2.0
	}

	fn check(&self) -> Result<(), GeometryError> {
		let bp = self.breakpoint.name();
		let sizes = [
			self.container_size,
			self.hub_size,
			self.orbit_radius,
			self.node_size,
		];
		if sizes.iter().any(|s| !s.is_finite() || *s <= 0.0) {
			return Err(GeometryError::NonPositive(bp));
		}
		if self.hub_clearance() <= 0.0 {
			return Err(GeometryError::Overlap(bp));
		}
		if self.orbit_radius + self.node_size / 2.0 > self.center() {
			return Err(GeometryError::Overflow(bp));
		}
		if min_node_separation(MAX_ITEMS_PER_CATEGORY, self.orbit_radius) < self.node_size {
			return Err(GeometryError::Crowded(bp));
		}
		Ok(())
	}

	/// Same checks as [`Self::check`] along both axes of `orbit`, for every
	/// node count up to the maximum.
	fn check_orbit(&self, orbit: OrbitShape) -> Result<(), GeometryError> {
		if let OrbitShape::Ellipse { y_ratio } = orbit {
			if !y_ratio.is_finite() || y_ratio <= 0.0 {
				return Err(GeometryError::InvalidShape);
			}
		}
		let bp = self.breakpoint.name();
		let (rx, ry) = orbit.radii(self.orbit_radius);
		if rx.min(ry) - self.node_size / 2.0 - self.hub_size / 2.0 <= 0.0 {
			return Err(GeometryError::Overlap(bp));
		}
		if rx.max(ry) + self.node_size / 2.0 > self.center() {
			return Err(GeometryError::Overflow(bp));
		}
		if (2..=MAX_ITEMS_PER_CATEGORY).any(|n| min_orbit_separation(n, rx, ry) < self.node_size) {
			return Err(GeometryError::Crowded(bp));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
	#[error("geometry table has no profiles")]
	Empty,
	#[error("profile `{0}` has a non-positive size")]
	NonPositive(&'static str),
	#[error("profile `{0}`: orbit radius lets nodes overlap the hub")]
	Overlap(&'static str),
	#[error("profile `{0}`: nodes extend past the container")]
	Overflow(&'static str),
	#[error("profile `{0}`: nodes overlap each other at full density")]
	Crowded(&'static str),
	#[error("profiles out of order at `{0}`")]
	Unsorted(&'static str),
	#[error("profile `{0}` shrinks below a smaller breakpoint")]
	NotMonotonic(&'static str),
	#[error("profile `{0}` drifts out of ratio with `{1}`")]
	RatioDrift(&'static str, &'static str),
	#[error("orbit ellipse needs a finite, positive vertical ratio")]
	InvalidShape,
}

/// Ordered breakpoint table, ascending by threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryTable {
	profiles: Vec<GeometryProfile>,
}

impl Default for GeometryTable {
	fn default() -> Self {
		Self::generate(GeometryRatios::default())
	}
}

impl GeometryTable {
	fn generate(ratios: GeometryRatios) -> Self {
		Self {
			profiles: Breakpoint::ALL
				.iter()
				.map(|&bp| GeometryProfile::scaled(bp, ratios))
				.collect(),
		}
	}

	pub fn from_ratios(ratios: GeometryRatios) -> Result<Self, GeometryError> {
		let table = Self::generate(ratios);
		table.validate()?;
		Ok(table)
	}

	pub fn from_profiles(profiles: Vec<GeometryProfile>) -> Result<Self, GeometryError> {
		let table = Self { profiles };
		table.validate()?;
		Ok(table)
	}

	pub fn profiles(&self) -> &[GeometryProfile] {
		&self.profiles
	}

	pub fn validate(&self) -> Result<(), GeometryError> {
		if self.profiles.is_empty() {
			return Err(GeometryError::Empty);
		}
		for profile in &self.profiles {
			profile.check()?;
		}
		for pair in self.profiles.windows(2) {
			let (lo, hi) = (&pair[0], &pair[1]);
			let name = hi.breakpoint.name();
			if hi.breakpoint.min_width() <= lo.breakpoint.min_width() {
				return Err(GeometryError::Unsorted(name));
			}
			if hi.container_size <= lo.container_size
				|| hi.hub_size < lo.hub_size
				|| hi.node_size < lo.node_size
			{
				return Err(GeometryError::NotMonotonic(name));
			}
		}
		for (i, a) in self.profiles.iter().enumerate() {
			for b in &self.profiles[i + 1..] {
				let (ra, rb) = (a.ratios(), b.ratios());
				let drift = (ra.hub - rb.hub)
					.abs()
					.max((ra.orbit - rb.orbit).abs())
					.max((ra.node - rb.node).abs());
				if drift > RATIO_TOLERANCE {
					return Err(GeometryError::RatioDrift(
						b.breakpoint.name(),
						a.breakpoint.name(),
					));
				}
			}
		}
		Ok(())
	}

	/// [`Self::validate`], then checks that nodes laid out on `orbit` keep
	/// clear of the hub, the container edge and each other in every profile.
	pub fn validate_for(&self, orbit: OrbitShape) -> Result<(), GeometryError> {
		self.validate()?;
		for profile in &self.profiles {
			profile.check_orbit(orbit)?;
		}
		Ok(())
	}

	/// Profile of the largest threshold not above `width`; anything narrower
	/// than the first threshold gets the first profile.
	pub fn resolve(&self, width: f64) -> &GeometryProfile {
		self.profiles
			.iter()
			.rev()
			.find(|p| width >= p.breakpoint.min_width())
			.unwrap_or(&self.profiles[0])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_table_is_valid() {
		assert_eq!(GeometryTable::default().validate(), Ok(()));
	}

	#[test]
	fn threshold_is_inclusive() {
		let table = GeometryTable::default();
		assert_eq!(table.resolve(639.0).breakpoint, Breakpoint::Mobile);
		assert_eq!(table.resolve(640.0).breakpoint, Breakpoint::Sm);
		assert_eq!(table.resolve(1024.0).breakpoint, Breakpoint::Lg);
		assert_eq!(table.resolve(1535.9).breakpoint, Breakpoint::Xl);
		assert_eq!(table.resolve(4000.0).breakpoint, Breakpoint::Xxl);
	}

	#[test]
	fn narrow_or_bogus_widths_fall_back_to_smallest() {
		let table = GeometryTable::from_profiles(vec![
			GeometryProfile::scaled(Breakpoint::Sm, GeometryRatios::default()),
			GeometryProfile::scaled(Breakpoint::Lg, GeometryRatios::default()),
		])
		.unwrap();
		assert_eq!(table.resolve(320.0).breakpoint, Breakpoint::Sm);
		assert_eq!(table.resolve(f64::NAN).breakpoint, Breakpoint::Sm);
		assert_eq!(table.resolve(-5.0).breakpoint, Breakpoint::Sm);
	}

	#[test]
	fn ratios_match_across_breakpoints() {
		let table = GeometryTable::default();
		for a in table.profiles() {
			for b in table.profiles() {
				let (ra, rb) = (a.ratios(), b.ratios());
				assert!((ra.hub - rb.hub).abs() < RATIO_TOLERANCE);
				assert!((ra.orbit - rb.orbit).abs() < RATIO_TOLERANCE);
				assert!((ra.node - rb.node).abs() < RATIO_TOLERANCE);
			}
		}
	}

	#[test]
	fn no_forced_overlap_at_max_density() {
		for p in GeometryTable::default().profiles() {
			assert!(p.orbit_radius - p.node_size / 2.0 > p.hub_size / 2.0);
			assert!(min_node_separation(MAX_ITEMS_PER_CATEGORY, p.orbit_radius) >= p.node_size);
		}
	}

	#[test]
	fn orbit_shapes_are_checked_per_profile() {
		let table = GeometryTable::default();
		assert_eq!(table.validate_for(OrbitShape::Circle), Ok(()));
		assert_eq!(table.validate_for(OrbitShape::Ellipse { y_ratio: 0.85 }), Ok(()));
		// twelve nodes crowd together near the long axis
		assert_eq!(
			table.validate_for(OrbitShape::Ellipse { y_ratio: 0.62 }),
			Err(GeometryError::Crowded("mobile"))
		);
		assert_eq!(
			table.validate_for(OrbitShape::Ellipse { y_ratio: 0.4 }),
			Err(GeometryError::Overlap("mobile"))
		);
		assert_eq!(
			table.validate_for(OrbitShape::Ellipse { y_ratio: 1.2 }),
			Err(GeometryError::Overflow("mobile"))
		);
		for y_ratio in [0.0, -0.5, f64::NAN] {
			assert_eq!(
				table.validate_for(OrbitShape::Ellipse { y_ratio }),
				Err(GeometryError::InvalidShape)
			);
		}
	}

	#[test]
	fn sizes_grow_with_container() {
		let profiles = GeometryTable::default().profiles().to_vec();
		for pair in profiles.windows(2) {
			assert!(pair[1].container_size > pair[0].container_size);
			assert!(pair[1].hub_size >= pair[0].hub_size);
			assert!(pair[1].node_size >= pair[0].node_size);
		}
	}

	#[test]
	fn rejects_overlapping_ratios() {
		let ratios = GeometryRatios {
			hub: 0.5,
			orbit: 0.3,
			node: 0.16,
		};
		assert_eq!(
			GeometryTable::from_ratios(ratios),
			Err(GeometryError::Overlap("mobile"))
		);
	}

	#[test]
	fn rejects_hand_authored_drift() {
		let ratios = GeometryRatios::default();
		let mut lg = GeometryProfile::scaled(Breakpoint::Lg, ratios);
		lg.hub_size += 20.0;
		let err = GeometryTable::from_profiles(vec![
			GeometryProfile::scaled(Breakpoint::Sm, ratios),
			lg,
		])
		.unwrap_err();
		assert_eq!(err, GeometryError::RatioDrift("lg", "sm"));
	}

	#[test]
	fn rejects_unsorted_and_empty_tables() {
		let ratios = GeometryRatios::default();
		assert_eq!(
			GeometryTable::from_profiles(vec![]),
			Err(GeometryError::Empty)
		);
		assert_eq!(
			GeometryTable::from_profiles(vec![
				GeometryProfile::scaled(Breakpoint::Xl, ratios),
				GeometryProfile::scaled(Breakpoint::Sm, ratios),
			]),
			Err(GeometryError::Unsorted("sm"))
		);
	}

	#[test]
	fn only_mobile_is_compact() {
		let compact: Vec<_> = Breakpoint::ALL.iter().filter(|b| b.is_compact()).collect();
		assert_eq!(compact, vec![&Breakpoint::Mobile]);
	}
}
