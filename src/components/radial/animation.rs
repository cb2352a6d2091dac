//! Per-node animation targets derived from interaction state.
//!
//! Targets (scale, opacity, emphasis) depend only on the interaction state.
//! Reduced motion only zeroes the timing fields, so both modes settle on the
//! same picture.

use thiserror::Error;

use super::state::InteractionState;

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
	/// Stagger between consecutive nodes' entrances.
	pub unit_delay_ms: f64,
	pub entrance_ms: f64,
	/// Duration of scale/opacity changes after hover or selection.
	pub transition_ms: f64,
	pub active_scale: f64,
	pub hover_scale: f64,
	pub idle_opacity: f64,
}

impl Default for AnimationConfig {
	fn default() -> Self {
		Self {
			unit_delay_ms: 60.0,
			entrance_ms: 420.0,
			transition_ms: 240.0,
			active_scale: 1.12,
			hover_scale: 1.06,
			idle_opacity: 0.55,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
	#[error("scales must satisfy 1 < hover ({hover}) < active ({active})")]
	Scales { hover: f64, active: f64 },
	#[error("durations must be finite and non-negative")]
	Duration,
	#[error("idle opacity {0} outside 0..=1")]
	Opacity(f64),
}

impl AnimationConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(1.0 < self.hover_scale && self.hover_scale < self.active_scale) {
			return Err(ConfigError::Scales {
				hover: self.hover_scale,
				active: self.active_scale,
			});
		}
		let durations = [self.unit_delay_ms, self.entrance_ms, self.transition_ms];
		if durations.iter().any(|d| !d.is_finite() || *d < 0.0) {
			return Err(ConfigError::Duration);
		}
		if !(0.0..=1.0).contains(&self.idle_opacity) {
			return Err(ConfigError::Opacity(self.idle_opacity));
		}
		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
	Active,
	Hovered,
	Idle,
}

/// What is being animated: the hub, or the orbit node at `index`. A node
/// belongs to `category_id`; for a category node that is its own id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeTarget<'a> {
	Hub,
	Node {
		index: usize,
		category_id: &'a str,
		node_id: &'a str,
	},
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeAnimation {
	pub entrance_delay_ms: f64,
	pub entrance_duration_ms: f64,
	pub transition_ms: f64,
	pub scale: f64,
	pub opacity: f64,
	pub emphasis: Emphasis,
}

impl NodeAnimation {
	/// Target values only, timing stripped.
	pub fn end_state(&self) -> (f64, f64, Emphasis) {
		(self.scale, self.opacity, self.emphasis)
	}
}

pub fn animation_for(
	target: NodeTarget<'_>,
	state: &InteractionState,
	reduced_motion: bool,
	config: &AnimationConfig,
) -> NodeAnimation {
	let (delay, emphasis) = match target {
		NodeTarget::Hub => (0.0, Emphasis::Active),
		NodeTarget::Node {
			index,
			category_id,
			node_id,
		} => {
			let emphasis = if category_id == state.active_category_id {
				Emphasis::Active
			} else if state.hovered_node_id.as_deref() == Some(node_id) {
				Emphasis::Hovered
			} else {
				Emphasis::Idle
			};
			(index as f64 * config.unit_delay_ms, emphasis)
		}
	};

	let (scale, opacity) = match (target, emphasis) {
		(NodeTarget::Hub, _) => (1.0, 1.0),
		(_, Emphasis::Active) => (config.active_scale, 1.0),
		(_, Emphasis::Hovered) => (config.hover_scale, 1.0),
		(_, Emphasis::Idle) => (1.0, config.idle_opacity),
	};

	let (entrance_delay_ms, entrance_duration_ms, transition_ms) = if reduced_motion {
		(0.0, 0.0, 0.0)
	} else {
		(delay, config.entrance_ms, config.transition_ms)
	};

	NodeAnimation {
		entrance_delay_ms,
		entrance_duration_ms,
		transition_ms,
		scale,
		opacity,
		emphasis,
	}
}

/// Eased reveal progress in `0..=1`, `elapsed_ms` counted from the start of
/// the entrance sequence.
pub fn entrance_progress(elapsed_ms: f64, animation: &NodeAnimation) -> f64 {
	let since = elapsed_ms - animation.entrance_delay_ms;
	if since < 0.0 {
		return 0.0;
	}
	if animation.entrance_duration_ms <= 0.0 {
		return 1.0;
	}
	ease_out_cubic((since / animation.entrance_duration_ms).min(1.0))
}

/// A single eased value moving toward a target. Retargeting mid-flight starts
/// from wherever the value currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
	from: f64,
	to: f64,
	elapsed_ms: f64,
	duration_ms: f64,
}

impl Tween {
	pub fn settled(value: f64) -> Self {
		Self {
			from: value,
			to: value,
			elapsed_ms: 0.0,
			duration_ms: 0.0,
		}
	}

	/// A zero duration snaps to `to`, finishing any transition in flight even
	/// when the target is unchanged.
	pub fn retarget(&mut self, to: f64, duration_ms: f64) {
		if duration_ms <= 0.0 {
			*self = Self::settled(to);
			return;
		}
		if to == self.to {
			return;
		}
		self.from = self.value();
		self.to = to;
		self.elapsed_ms = 0.0;
		self.duration_ms = duration_ms;
	}

	pub fn advance(&mut self, dt_ms: f64) {
		self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
	}

	pub fn is_settled(&self) -> bool {
		self.elapsed_ms >= self.duration_ms
	}

	pub fn value(&self) -> f64 {
		if self.is_settled() {
			return self.to;
		}
		let t = ease_out_cubic(self.elapsed_ms / self.duration_ms);
		self.from + (self.to - self.from) * t
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state(active: &str, hovered: Option<&str>) -> InteractionState {
		InteractionState {
			active_category_id: active.into(),
			hovered_node_id: hovered.map(Into::into),
			expanded_category_id: None,
		}
	}

	fn node<'a>(index: usize, category_id: &'a str, node_id: &'a str) -> NodeTarget<'a> {
		NodeTarget::Node {
			index,
			category_id,
			node_id,
		}
	}

	#[test]
	fn default_config_is_valid() {
		assert_eq!(AnimationConfig::default().validate(), Ok(()));
		let flipped = AnimationConfig {
			hover_scale: 1.2,
			..AnimationConfig::default()
		};
		assert!(matches!(flipped.validate(), Err(ConfigError::Scales { .. })));
	}

	#[test]
	fn entrance_is_staggered_and_hub_goes_first() {
		let config = AnimationConfig::default();
		let s = state("ppr", None);
		let hub = animation_for(NodeTarget::Hub, &s, false, &config);
		assert_eq!(hub.entrance_delay_ms, 0.0);
		for i in 0..5 {
			let a = animation_for(node(i, "ppr", "x"), &s, false, &config);
			assert_eq!(a.entrance_delay_ms, i as f64 * config.unit_delay_ms);
		}
	}

	#[test]
	fn emphasis_ranks_active_over_hover() {
		let config = AnimationConfig::default();
		let s = state("ppr", Some("sdr11"));

		let active = animation_for(node(0, "ppr", "sdr11"), &s, false, &config);
		assert_eq!(active.emphasis, Emphasis::Active);
		assert_eq!(active.scale, config.active_scale);

		let hovered = animation_for(node(0, "pe", "sdr11"), &s, false, &config);
		assert_eq!(hovered.emphasis, Emphasis::Hovered);
		assert_eq!(hovered.scale, config.hover_scale);

		let idle = animation_for(node(1, "pe", "pn10"), &s, false, &config);
		assert_eq!(idle.emphasis, Emphasis::Idle);
		assert_eq!(idle.scale, 1.0);
		assert_eq!(idle.opacity, config.idle_opacity);
	}

	#[test]
	fn reduced_motion_keeps_end_state() {
		let config = AnimationConfig::default();
		let states = [
			state("ppr", None),
			state("ppr", Some("sdr11")),
			state("pe", Some("sdr11")),
		];
		let targets = [
			NodeTarget::Hub,
			node(0, "ppr", "sdr11"),
			node(3, "pe", "pn10"),
			node(2, "pe", "sdr11"),
		];
		for s in &states {
			for &t in &targets {
				let animated = animation_for(t, s, false, &config);
				let instant = animation_for(t, s, true, &config);
				assert_eq!(animated.end_state(), instant.end_state());
				assert_eq!(instant.entrance_delay_ms, 0.0);
				assert_eq!(instant.transition_ms, 0.0);
				assert_eq!(entrance_progress(0.0, &instant), 1.0);
			}
		}
	}

	#[test]
	fn entrance_progress_waits_for_delay() {
		let config = AnimationConfig::default();
		let a = animation_for(node(2, "ppr", "x"), &state("ppr", None), false, &config);
		assert_eq!(entrance_progress(100.0, &a), 0.0);
		assert!(entrance_progress(200.0, &a) > 0.0);
		assert_eq!(entrance_progress(120.0 + config.entrance_ms, &a), 1.0);
	}

	#[test]
	fn tween_eases_and_retargets_from_current_value() {
		let mut tween = Tween::settled(1.0);
		tween.retarget(2.0, 100.0);
		assert_eq!(tween.value(), 1.0);
		tween.advance(50.0);
		let mid = tween.value();
		assert!(mid > 1.5 && mid < 2.0);

		tween.retarget(1.0, 100.0);
		assert_eq!(tween.value(), mid);
		tween.advance(500.0);
		assert!(tween.is_settled());
		assert_eq!(tween.value(), 1.0);
	}

	#[test]
	fn zero_duration_tween_jumps() {
		let mut tween = Tween::settled(1.0);
		tween.retarget(1.12, 0.0);
		assert!(tween.is_settled());
		assert_eq!(tween.value(), 1.12);
	}

	#[test]
	fn zero_duration_finishes_a_running_tween() {
		let mut tween = Tween::settled(1.0);
		tween.retarget(1.06, 240.0);
		tween.advance(10.0);
		assert!(tween.value() < 1.06);
		tween.retarget(1.06, 0.0);
		assert!(tween.is_settled());
		assert_eq!(tween.value(), 1.06);
	}
}
