use std::f64::consts::TAU;

use crate::config::Config;
use crate::entity::Mass;
use crate::vec;
use crate::world::World;
use crate::V2;

/// Advance the world by one tick. Five passes, all walking `ids` in
/// creation order: actuation, force accumulation, integration, wall
/// collision, wave clock. Nothing observes the world mid-step.
pub fn step(world: &mut World, dt: f64) {
	actuate(world);
	accumulate(world);
	integrate(world, dt);
	collide(world);
	world.wave_time += world.config.wave_step;
	if world.wave_time >= TAU {
		world.wave_time -= TAU;
	}
}

// Rewrite every driven spring's rest length before forces are read.
fn actuate(world: &mut World) {
	let World {
		ids,
		springs,
		muscles,
		wave_time,
		..
	} = world;
	for id in ids.iter() {
		if let Some(muscle) = muscles.get(id) {
			let spring = springs
				.get_mut(&muscle.spring)
				.expect("muscle without spring");
			spring.rest_length = muscle.base_radius
				* (1. + muscle.amplitude * (*wave_time + muscle.phase).sin());
		}
	}
}

fn accumulate(world: &mut World) {
	let World {
		ids,
		masses,
		springs,
		config,
		..
	} = world;
	for id in ids.iter() {
		if let Some(spring) = springs.get(id) {
			let pa = masses.get(&spring.a).expect("spring endpoint missing").pos;
			let pb = masses.get(&spring.b).expect("spring endpoint missing").pos;
			let r = pa - pb;
			let f = spring.k * (r.magnitude() - spring.rest_length)
				* vec::normalize(r);
			// Newton's third law, both ends pulled toward rest length
			masses.get_mut(&spring.a).expect("spring endpoint missing").force -= f;
			masses.get_mut(&spring.b).expect("spring endpoint missing").force += f;
		}
		if let Some(mass) = masses.get_mut(id) {
			mass.force += -config.f * mass.vel + mass.m * config.g;
		}
	}
}

// Semi-implicit Euler: velocity first, then position from the new velocity.
fn integrate(world: &mut World, dt: f64) {
	let World { ids, masses, .. } = world;
	for id in ids.iter() {
		if let Some(mass) = masses.get_mut(id) {
			mass.vel += dt * mass.force / mass.m;
			mass.pos += dt * mass.vel;
			mass.force = V2::zeros();
		}
	}
}

fn collide(world: &mut World) {
	let World {
		ids,
		masses,
		config,
		..
	} = world;
	for id in ids.iter() {
		if let Some(mass) = masses.get_mut(id) {
			// X fully resolved before Y; corner hits are sequential,
			// not a simultaneous time-of-impact solve.
			collide_axis(mass, 0, config.width, config);
			collide_axis(mass, 1, config.height, config);
		}
	}
}

fn collide_axis(mass: &mut Mass, axis: usize, extent: f64, config: &Config) {
	if mass.vel[axis] == 0f64 {
		// no crossing can be attributed to this axis
		return;
	}
	let penetration = if mass.pos[axis] < 0f64 {
		mass.pos[axis]
	} else if mass.pos[axis] > extent {
		mass.pos[axis] - extent
	} else {
		return;
	};
	// negative: how long ago the wall was crossed, linear estimate
	let t = -penetration / mass.vel[axis];
	let cpos = mass.pos + t * mass.vel;
	let other = 1 - axis;
	let damp = 1. - config.slip * (mass.vel[axis] / mass.vel.magnitude()).abs();
	let mut vel = V2::zeros();
	vel[axis] = -config.bounce * mass.vel[axis];
	vel[other] = damp * mass.vel[other];
	mass.vel = vel;
	mass.pos = cpos - t * mass.vel;
}
