use crate::entity::{EntityKind, Handle};
use crate::vec;
use crate::world::World;
use crate::V2;

/// Nearest mass or spring within `radius` of `point`, in simulation
/// space. Masses measure from their position, springs from their
/// midpoint; muscles have no position and are skipped. First-created
/// entity wins ties.
pub fn pick_nearest(world: &World, point: V2, radius: f64) -> Option<Handle> {
	let mut min_id = None;
	let mut min_dist = f64::INFINITY;
	for id in world.ids() {
		let dist = match world.kind_of(id) {
			Some(EntityKind::Mass) => {
				let mass = world.mass(id).expect("kind mismatch");
				(point - mass.pos).magnitude()
			}
			Some(EntityKind::Spring) => {
				let spring = world.spring(id).expect("kind mismatch");
				let pa =
					world.mass(spring.a).expect("spring endpoint missing").pos;
				let pb =
					world.mass(spring.b).expect("spring endpoint missing").pos;
				(point - vec::midpoint(pa, pb)).magnitude()
			}
			_ => continue,
		};
		if dist < min_dist {
			min_dist = dist;
			min_id = Some(id);
		}
	}
	if min_dist < radius {
		min_id
	} else {
		None
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Selection {
	#[default]
	Idle,
	Hovering(Handle),
	Pinned(Handle),
}

/// Pointer-driven selection state. While pinned, hover candidates are
/// not re-evaluated and every move parks the pinned mass at the pointer.
pub struct Picker {
	pub radius: f64,
	state: Selection,
}

impl Picker {
	pub fn new(radius: f64) -> Self {
		Self {
			radius,
			state: Selection::Idle,
		}
	}

	pub fn state(&self) -> Selection {
		self.state
	}

	pub fn pointer_moved(&mut self, world: &mut World, point: V2) {
		match self.state {
			Selection::Pinned(h) => {
				// dragging a pinned spring moves nothing
				let _ = world.pin_mass(h, point);
			}
			_ => {
				self.state = match pick_nearest(world, point, self.radius) {
					Some(h) => Selection::Hovering(h),
					None => Selection::Idle,
				};
			}
		}
	}

	pub fn pressed(&mut self) {
		if let Selection::Hovering(h) = self.state {
			self.state = Selection::Pinned(h);
		}
	}

	pub fn released(&mut self) {
		if let Selection::Pinned(_) = self.state {
			self.state = Selection::Idle;
		}
	}
}
