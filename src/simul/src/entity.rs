use crate::V2;

/// Opaque registry id, one counter shared across all entity kinds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Handle(u64);

impl Handle {
	pub(crate) fn new(raw: u64) -> Self {
		Self(raw)
	}

	pub fn raw(self) -> u64 {
		self.0
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntityKind {
	Mass,
	Spring,
	Muscle,
}

#[derive(Clone, Debug)]
pub struct Mass {
	pub pos: V2,
	pub vel: V2,
	// transient accumulator, zeroed after every integration pass
	pub force: V2,
	pub m: f64,
}

#[derive(Clone, Debug)]
pub struct Spring {
	pub a: Handle,
	pub b: Handle,
	pub rest_length: f64,
	pub k: f64,
}

/// Periodic actuator driving one spring's rest length.
#[derive(Clone, Debug)]
pub struct Muscle {
	pub spring: Handle,
	pub base_radius: f64,
	pub amplitude: f64,
	pub phase: f64,
}
