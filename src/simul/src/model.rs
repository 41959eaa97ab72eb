use std::f64::consts::TAU;

use log::info;

use crate::entity::Handle;
use crate::error::SimError;
use crate::world::World;
use crate::V2;

#[derive(Clone, Debug)]
pub struct MassTemplate {
	pub pos: V2,
	pub m: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct MuscleTemplate {
	pub amplitude: f64,
	pub phase: f64,
}

#[derive(Clone, Debug)]
pub struct SpringTemplate {
	pub ends: [usize; 2],
	pub rest_length: f64,
	pub k: f64,
	pub muscle: Option<MuscleTemplate>,
}

/// Creature blueprint: masses indexed locally, springs by local index.
/// Instantiation maps local indices to fresh registry handles.
#[derive(Clone, Debug, Default)]
pub struct Model {
	pub masses: Vec<MassTemplate>,
	pub springs: Vec<SpringTemplate>,
}

impl Model {
	fn link(&mut self, a: usize, b: usize, k: f64, muscle: Option<MuscleTemplate>) {
		let rest_length = (self.masses[a].pos - self.masses[b].pos).magnitude();
		self.springs.push(SpringTemplate {
			ends: [a, b],
			rest_length,
			k,
			muscle,
		});
	}

	/// Rectangular lattice with shear diagonals.
	pub fn new_block(mass: f64, x: usize, y: usize, size: f64, k: f64) -> Self {
		let mut model = Self::default();
		for idx in 0..x {
			for idy in 0..y {
				model.masses.push(MassTemplate {
					pos: V2::new(size * idx as f64, size * idy as f64),
					m: mass,
				});
			}
		}
		let at = |idx: usize, idy: usize| idx * y + idy;
		for idx in 1..x {
			for idy in 0..y {
				model.link(at(idx, idy), at(idx - 1, idy), k, None);
			}
		}
		for idx in 0..x {
			for idy in 1..y {
				model.link(at(idx, idy), at(idx, idy - 1), k, None);
			}
		}
		for idx in 1..x {
			for idy in 1..y {
				model.link(at(idx - 1, idy), at(idx, idy - 1), k, None);
				model.link(at(idx - 1, idy - 1), at(idx, idy), k, None);
			}
		}
		model
	}

	/// Ring of masses around a hub, rim springs passive, spokes muscled
	/// with phases spread around the circle so the body crawls.
	pub fn new_ring(mass: f64, n: usize, radius: f64, k: f64, amplitude: f64) -> Self {
		let mut model = Self::default();
		model.masses.push(MassTemplate {
			pos: V2::zeros(),
			m: mass,
		});
		for i in 0..n {
			let angle = TAU * i as f64 / n as f64;
			model.masses.push(MassTemplate {
				pos: radius * V2::new(angle.cos(), angle.sin()),
				m: mass,
			});
		}
		for i in 0..n {
			model.link(i + 1, (i + 1) % n + 1, k, None);
		}
		for i in 0..n {
			let phase = TAU * i as f64 / n as f64;
			model.link(0, i + 1, k, Some(MuscleTemplate { amplitude, phase }));
		}
		model
	}

	/// Add every template entity to `world`, offset by `offset`.
	/// Returns the mass handles in template order.
	pub fn instantiate(
		&self,
		world: &mut World,
		offset: V2,
	) -> Result<Vec<Handle>, SimError> {
		info!(
			"add model: {} masses, {} springs",
			self.masses.len(),
			self.springs.len()
		);
		let mut id_map = Vec::new();
		for mt in &self.masses {
			id_map.push(world.add_mass(mt.pos + offset, V2::zeros(), mt.m));
		}
		for st in &self.springs {
			let s = world.add_spring(
				id_map[st.ends[0]],
				id_map[st.ends[1]],
				st.rest_length,
				st.k,
			)?;
			if let Some(mt) = st.muscle {
				world.add_muscle(s, st.rest_length, mt.amplitude, mt.phase)?;
			}
		}
		Ok(id_map)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::entity::EntityKind;

	#[test]
	fn test_block_counts() {
		let model = Model::new_block(1., 3, 2, 10., 5.);
		assert_eq!(model.masses.len(), 6);
		// 4 horizontal + 3 vertical + 4 diagonal
		assert_eq!(model.springs.len(), 11);
		assert!(model.springs.iter().all(|s| s.muscle.is_none()));
	}

	#[test]
	fn test_ring_instantiates() {
		let model = Model::new_ring(1., 8, 40., 0.5, 0.3);
		let mut world = World::default();
		let ids = model.instantiate(&mut world, V2::new(512., 260.)).unwrap();
		assert_eq!(ids.len(), 9);
		let kinds: Vec<_> =
			world.ids().filter_map(|h| world.kind_of(h)).collect();
		assert_eq!(
			kinds.iter().filter(|k| **k == EntityKind::Mass).count(),
			9
		);
		assert_eq!(
			kinds.iter().filter(|k| **k == EntityKind::Spring).count(),
			16
		);
		assert_eq!(
			kinds.iter().filter(|k| **k == EntityKind::Muscle).count(),
			8
		);
		// rim rest lengths match the chord, spokes match the radius
		for h in world.ids() {
			if let Ok(muscle) = world.muscle(h) {
				assert!((muscle.base_radius - 40.).abs() < 1e-9);
			}
		}
	}
}
