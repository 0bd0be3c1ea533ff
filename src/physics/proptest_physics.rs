//! Property-based tests for the physics core using proptest.
//!
//! These tests check invariants that must hold for any input in range:
//! merge conservation laws, Newton's third law, and rotation round trips.

use proptest::prelude::*;

use crate::body::Body;
use crate::math::{Quaternion, Vector3};
use crate::physics::{compute_forces, semi_implicit_euler, KinematicState};
use crate::test_utils::{assertions, fixtures};
use crate::types::G;

fn vector(range: f64) -> impl Strategy<Value = Vector3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Mass is summed exactly and momentum is conserved by a merge.
    #[test]
    fn prop_merge_conserves_mass_and_momentum(
        m1 in 1.0f64..1e24,
        m2 in 1.0f64..1e24,
        m3 in 1.0f64..1e24,
        v1 in vector(5e4),
        v2 in vector(5e4),
        v3 in vector(5e4),
    ) {
        let a = fixtures::asteroid("a", m1, 1.0, Vector3::ZERO, v1);
        let b = fixtures::asteroid("b", m2, 2.0, Vector3::X, v2);
        let c = fixtures::asteroid("c", m3, 3.0, Vector3::Y, v3);

        let merged = Body::merge(&[&a, &b, &c]).unwrap();

        prop_assert_eq!(merged.mass(), m1 + m2 + m3);

        let before = a.momentum() + b.momentum() + c.momentum();
        let after = merged.momentum();
        let scale = a.momentum().length() + b.momentum().length() + c.momentum().length() + 1.0;
        prop_assert!(
            (after - before).length() <= scale * 1e-12,
            "momentum changed from {:?} to {:?}", before, after
        );
    }

    /// Merged volume equals the summed volumes.
    #[test]
    fn prop_merge_preserves_volume(r1 in 1.0f64..1e7, r2 in 1.0f64..1e7) {
        let a = fixtures::asteroid("a", 1.0, r1, Vector3::ZERO, Vector3::ZERO);
        let b = fixtures::asteroid("b", 1.0, r2, Vector3::X, Vector3::ZERO);

        let merged = Body::merge(&[&a, &b]).unwrap();
        let drift = assertions::relative_drift(a.volume() + b.volume(), merged.volume());
        prop_assert!(drift < 1e-12, "volume drift {}", drift);
        // Never smaller than the largest member, up to rounding
        prop_assert!(merged.radius() >= r1.max(r2) * (1.0 - 1e-12));
    }

    /// Pairwise forces always cancel.
    #[test]
    fn prop_forces_sum_to_zero(
        p1 in vector(1e9),
        p2 in vector(1e9),
        p3 in vector(1e9),
        m1 in 1e10f64..1e26,
        m2 in 1e10f64..1e26,
        m3 in 1e10f64..1e26,
    ) {
        let bodies = vec![
            fixtures::asteroid("a", m1, 1.0, p1, Vector3::ZERO),
            fixtures::asteroid("b", m2, 1.0, p2, Vector3::ZERO),
            fixtures::asteroid("c", m3, 1.0, p3, Vector3::ZERO),
        ];
        let forces = compute_forces(&bodies, G, 1e-6);

        let net: Vector3 = forces.iter().copied().sum();
        let scale: f64 = forces.iter().map(|f| f.length()).sum::<f64>() + f64::MIN_POSITIVE;
        prop_assert!(net.length() <= scale * 1e-12, "net force {:?}", net);
    }

    /// Rotating by q and then by q⁻¹ returns the original vector.
    #[test]
    fn prop_rotation_roundtrip(
        angle in -10.0f64..10.0,
        axis in vector(10.0),
        v in vector(1e6),
    ) {
        prop_assume!(axis.length() > 1e-6);
        let q = Quaternion::from_axis_angle(angle, axis).unwrap();

        let rotated = q.rotate(v).unwrap();
        let back = q.inverse().unwrap().rotate(rotated).unwrap();

        assertions::assert_vec_close(back, v, 1e-6);
        // Rotation preserves length
        let drift = assertions::relative_drift(v.length(), rotated.length());
        prop_assert!(drift < 1e-12);
    }

    /// The angle between two vectors is always a valid angle.
    #[test]
    fn prop_angle_between_in_range(a in vector(1e3), b in vector(1e3)) {
        prop_assume!(a.length() > 1e-9 && b.length() > 1e-9);
        let angle = a.angle_between(b).unwrap();
        prop_assert!((0.0..=std::f64::consts::PI).contains(&angle));
    }

    /// A forward step followed by a backward step with no force is exact.
    #[test]
    fn prop_force_free_steps_reverse(
        p in vector(1e9),
        v in vector(1e4),
        dt in 1.0f64..1e4,
    ) {
        let start = KinematicState::new(p, v);
        let there = semi_implicit_euler(start, Vector3::ZERO, 1.0, dt);
        let back = semi_implicit_euler(there, Vector3::ZERO, 1.0, -dt);
        assertions::assert_vec_close(back.position, p, 1e-3);
        prop_assert_eq!(back.velocity, v);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_unit_merge() {
        let a = fixtures::asteroid("a", 1.0, 1.0, Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
        let b = fixtures::asteroid("b", 3.0, 1.0, Vector3::X, Vector3::ZERO);
        let merged = Body::merge(&[&a, &b]).unwrap();

        assert_eq!(merged.mass(), 4.0);
        assert_eq!(merged.velocity(), Vector3::new(0.25, 0.0, 0.0));
        assert_relative_eq!(merged.radius(), 2f64.cbrt(), max_relative = 1e-12);
    }
}
