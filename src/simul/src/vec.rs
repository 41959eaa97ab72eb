use crate::V2;

/// Zero-guarded normalize: a zero vector maps to zero instead of NaN.
pub fn normalize(v: V2) -> V2 {
	let m = v.magnitude();
	if m == 0f64 {
		V2::zeros()
	} else {
		v / m
	}
}

pub fn midpoint(a: V2, b: V2) -> V2 {
	(a + b) * 0.5
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_normalize_zero() {
		let v = normalize(V2::zeros());
		assert_eq!(v, V2::zeros());
		assert!(v[0].is_finite() && v[1].is_finite());
	}

	#[test]
	fn test_normalize_unit() {
		let v = normalize(V2::new(3., 4.));
		assert!((v.magnitude() - 1.).abs() < 1e-12);
		assert!((v[0] - 0.6).abs() < 1e-12);
		assert!((v[1] - 0.8).abs() < 1e-12);
	}

	#[test]
	fn test_midpoint() {
		let m = midpoint(V2::new(0., 2.), V2::new(4., 0.));
		assert_eq!(m, V2::new(2., 1.));
	}
}
