use std::collections::{HashMap, HashSet};

use protocol::pr_model::{PrMass, PrModel, PrSpring};

use crate::config::Config;
use crate::entity::{EntityKind, Handle, Mass, Muscle, Spring};
use crate::error::SimError;
use crate::V2;

/// Entity registry. `ids` keeps creation order, which is the canonical
/// iteration order for both the physics passes and picking.
#[derive(Clone, Debug)]
pub struct World {
	pub(crate) ids: Vec<Handle>,
	pub(crate) masses: HashMap<Handle, Mass>,
	pub(crate) springs: HashMap<Handle, Spring>,
	pub(crate) muscles: HashMap<Handle, Muscle>,
	pub(crate) wave_time: f64,
	pub config: Config,
	next_id: u64,
}

impl Default for World {
	fn default() -> Self {
		Self::new(Config::default())
	}
}

impl World {
	pub fn new(config: Config) -> Self {
		Self {
			ids: Vec::new(),
			masses: HashMap::new(),
			springs: HashMap::new(),
			muscles: HashMap::new(),
			wave_time: 0f64,
			config,
			next_id: 0,
		}
	}

	fn alloc(&mut self) -> Handle {
		let h = Handle::new(self.next_id);
		self.next_id += 1;
		self.ids.push(h);
		h
	}

	pub fn add_mass(&mut self, pos: V2, vel: V2, m: f64) -> Handle {
		let h = self.alloc();
		self.masses.insert(
			h,
			Mass {
				pos,
				vel,
				force: V2::zeros(),
				m,
			},
		);
		h
	}

	pub fn add_spring(
		&mut self,
		a: Handle,
		b: Handle,
		rest_length: f64,
		k: f64,
	) -> Result<Handle, SimError> {
		if !self.masses.contains_key(&a) {
			return Err(SimError::InvalidReference(a));
		}
		if !self.masses.contains_key(&b) {
			return Err(SimError::InvalidReference(b));
		}
		let h = self.alloc();
		self.springs.insert(h, Spring { a, b, rest_length, k });
		Ok(h)
	}

	pub fn add_muscle(
		&mut self,
		spring: Handle,
		base_radius: f64,
		amplitude: f64,
		phase: f64,
	) -> Result<Handle, SimError> {
		if !self.springs.contains_key(&spring) {
			return Err(SimError::InvalidReference(spring));
		}
		let h = self.alloc();
		self.muscles.insert(
			h,
			Muscle {
				spring,
				base_radius,
				amplitude,
				phase,
			},
		);
		Ok(h)
	}

	pub fn mass(&self, h: Handle) -> Result<&Mass, SimError> {
		self.masses.get(&h).ok_or(SimError::NotFound(h))
	}

	pub fn spring(&self, h: Handle) -> Result<&Spring, SimError> {
		self.springs.get(&h).ok_or(SimError::NotFound(h))
	}

	pub fn muscle(&self, h: Handle) -> Result<&Muscle, SimError> {
		self.muscles.get(&h).ok_or(SimError::NotFound(h))
	}

	pub fn kind_of(&self, h: Handle) -> Option<EntityKind> {
		if self.masses.contains_key(&h) {
			Some(EntityKind::Mass)
		} else if self.springs.contains_key(&h) {
			Some(EntityKind::Spring)
		} else if self.muscles.contains_key(&h) {
			Some(EntityKind::Muscle)
		} else {
			None
		}
	}

	pub fn ids(&self) -> impl Iterator<Item = Handle> + '_ {
		self.ids.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn wave_time(&self) -> f64 {
		self.wave_time
	}

	/// External drag path: park a mass at `pos` and kill its velocity,
	/// overriding whatever the last integration pass computed.
	pub fn pin_mass(&mut self, h: Handle, pos: V2) -> Result<(), SimError> {
		let mass = self.masses.get_mut(&h).ok_or(SimError::NotFound(h))?;
		mass.pos = pos;
		mass.vel = V2::zeros();
		Ok(())
	}

	pub fn pr_model(&self) -> PrModel {
		let driven: HashSet<Handle> =
			self.muscles.values().map(|m| m.spring).collect();
		let mut masses = HashMap::new();
		let mut springs = Vec::new();
		for h in self.ids() {
			if let Some(mass) = self.masses.get(&h) {
				masses.insert(
					h.raw(),
					PrMass {
						pos: [mass.pos[0], mass.pos[1]],
					},
				);
			} else if let Some(spring) = self.springs.get(&h) {
				let a = self.masses.get(&spring.a).expect("spring endpoint missing");
				let b = self.masses.get(&spring.b).expect("spring endpoint missing");
				springs.push(PrSpring {
					id: h.raw(),
					ends: [[a.pos[0], a.pos[1]], [b.pos[0], b.pos[1]]],
					muscle: driven.contains(&h),
				});
			}
		}
		PrModel { masses, springs }
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_handles_unique_across_kinds() {
		let mut world = World::default();
		let a = world.add_mass(V2::zeros(), V2::zeros(), 1.);
		let b = world.add_mass(V2::new(10., 0.), V2::zeros(), 1.);
		let s = world.add_spring(a, b, 10., 5.).unwrap();
		let m = world.add_muscle(s, 10., 0.5, 0.).unwrap();
		let mut seen = vec![a, b, s, m];
		seen.dedup();
		assert_eq!(seen.len(), 4);
		assert_eq!(world.ids().collect::<Vec<_>>(), vec![a, b, s, m]);
		assert_eq!(world.kind_of(a), Some(EntityKind::Mass));
		assert_eq!(world.kind_of(s), Some(EntityKind::Spring));
		assert_eq!(world.kind_of(m), Some(EntityKind::Muscle));
	}

	#[test]
	fn test_spring_rejects_dead_endpoint() {
		let mut world = World::default();
		let a = world.add_mass(V2::zeros(), V2::zeros(), 1.);
		let b = world.add_mass(V2::new(10., 0.), V2::zeros(), 1.);
		let s = world.add_spring(a, b, 10., 5.).unwrap();
		let before = world.len();
		// a spring handle is not a mass handle
		let r = world.add_spring(a, s, 10., 5.);
		assert_eq!(r, Err(SimError::InvalidReference(s)));
		assert_eq!(world.len(), before);
		assert_eq!(world.springs.len(), 1);
	}

	#[test]
	fn test_muscle_rejects_non_spring() {
		let mut world = World::default();
		let a = world.add_mass(V2::zeros(), V2::zeros(), 1.);
		let before = world.len();
		let r = world.add_muscle(a, 10., 0.5, 0.);
		assert_eq!(r, Err(SimError::InvalidReference(a)));
		assert_eq!(world.len(), before);
		assert!(world.muscles.is_empty());
	}

	#[test]
	fn test_typed_lookup_kind_mismatch() {
		let mut world = World::default();
		let a = world.add_mass(V2::zeros(), V2::zeros(), 1.);
		assert_eq!(world.spring(a).unwrap_err(), SimError::NotFound(a));
		assert!(world.mass(a).is_ok());
	}

	#[test]
	fn test_pin_mass() {
		let mut world = World::default();
		let a = world.add_mass(V2::zeros(), V2::new(3., 3.), 1.);
		world.pin_mass(a, V2::new(7., 8.)).unwrap();
		let mass = world.mass(a).unwrap();
		assert_eq!(mass.pos, V2::new(7., 8.));
		assert_eq!(mass.vel, V2::zeros());
	}

	#[test]
	fn test_pr_model_marks_muscles() {
		let mut world = World::default();
		let a = world.add_mass(V2::zeros(), V2::zeros(), 1.);
		let b = world.add_mass(V2::new(10., 0.), V2::zeros(), 1.);
		let s0 = world.add_spring(a, b, 10., 5.).unwrap();
		let s1 = world.add_spring(a, b, 10., 5.).unwrap();
		world.add_muscle(s1, 10., 0.5, 0.).unwrap();
		let model = world.pr_model();
		assert_eq!(model.masses.len(), 2);
		assert_eq!(model.springs.len(), 2);
		let muscled: Vec<u64> = model
			.springs
			.iter()
			.filter(|s| s.muscle)
			.map(|s| s.id)
			.collect();
		assert_eq!(muscled, vec![s1.raw()]);
		assert!(model.springs.iter().any(|s| s.id == s0.raw() && !s.muscle));
	}
}
