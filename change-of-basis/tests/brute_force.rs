//! Checks the change-of-basis operations against explicit linear algebra performed
//! by [`nalgebra`], for every pair of frames.

use nalgebra as na;
use pretty_assertions::assert_eq;

use change_of_basis::euclid::{Rotation3D, Vector3D};
use change_of_basis::util::for_each_frame_pair;
use change_of_basis::{AxisDirection::*, CaseNumber, Frame, Matrix3};

fn to_na(m: Matrix3<f64>) -> na::Matrix3<f64> {
    na::Matrix3::from_fn(|row, column| m.entry(row, column))
}

fn from_na(m: &na::Matrix3<f64>) -> Matrix3<f64> {
    Matrix3::from_rows([0, 1, 2].map(|r| [m[(r, 0)], m[(r, 1)], m[(r, 2)]]))
}

/// An asymmetric matrix whose elements are all distinct, so any misplaced element
/// is detected.
fn test_matrix() -> Matrix3<f64> {
    Matrix3::from_rows([
        [900., 901., 902.],
        [910., 911., 912.],
        [920., 921., 922.],
    ])
}

#[test]
fn matrix_equals_conjugation() {
    let m = test_matrix();
    for_each_frame_pair(|from, to| {
        let case = CaseNumber::from_frames(from, to);
        let p = to_na(case.to_matrix());
        let expected = p * to_na(m) * p.transpose();
        assert_eq!(to_na(case.transform_matrix(m)), expected, "case {case}");
    });
}

#[test]
fn vector_equals_product() {
    let v = [1.5, -20.25, 300.125];
    for_each_frame_pair(|from, to| {
        let case = CaseNumber::from_frames(from, to);
        let expected = to_na(case.to_matrix()) * na::Vector3::from(v);
        let actual = case.transform_vector(Vector3D::<f64, ()>::from(v));
        assert_eq!(na::Vector3::from(actual.to_array()), expected, "case {case}");
    });
}

/// Converting the quaternion to a matrix, transforming the matrix, and converting back
/// gives the same rotation as transforming the quaternion directly.
#[test]
fn quaternion_equals_matrix_round_trip() {
    let q = na::UnitQuaternion::from_axis_angle(
        &na::Unit::new_normalize(na::Vector3::new(1.0, 2.0, 3.0)),
        23f64.to_radians(),
    );
    let rotation = from_na(q.to_rotation_matrix().matrix());

    for_each_frame_pair(|from, to| {
        let case = CaseNumber::from_frames(from, to);
        let expected = na::UnitQuaternion::from_rotation_matrix(
            &na::Rotation3::from_matrix_unchecked(to_na(case.transform_matrix(rotation))),
        );

        let actual =
            case.transform_quaternion(Rotation3D::<f64, (), ()>::quaternion(q.i, q.j, q.k, q.w));
        assert_eq!(actual.r, q.w, "real part must be unchanged");

        // Quaternions q and -q are the same rotation.
        let actual = na::Quaternion::new(actual.r, actual.i, actual.j, actual.k);
        let error = (actual.coords - expected.coords)
            .amax()
            .min((actual.coords + expected.coords).amax());
        assert!(
            error < 1e-12,
            "case {case}: expected {expected:?}, got {actual:?}"
        );
    });
}

/// Swapping the forward and right axes turns a rotation about X into a rotation
/// about Y, in the opposite direction since the swap reverses handedness.
#[test]
fn rotation_about_x_becomes_rotation_about_y() {
    let angle = 33f64.to_radians();
    let about_x = from_na(na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), angle).matrix());

    assert_eq!(CaseNumber::IDENTITY.transform_matrix(about_x), about_x);

    let case = CaseNumber::from_frames(Frame::new(Right, Forward, Up), Frame::new(Forward, Right, Up));
    assert_eq!(case.index(), 16);
    let expected = na::Rotation3::from_axis_angle(&na::Vector3::y_axis(), -angle);
    let actual = to_na(case.transform_matrix(about_x));
    assert!(
        (actual - expected.matrix()).amax() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

/// A→B followed by B→C has the same effect as A→C, for every kind of value.
#[test]
fn composition_of_effects() {
    let m = test_matrix();
    let v = [1.5, -20.25, 300.125];
    let q = Rotation3D::<f64, (), ()>::quaternion(0.125, -0.25, 0.5, 0.8);
    for_each_frame_pair(|a, b| {
        let ab = CaseNumber::from_frames(a, b);
        let m_via_b = ab.transform_matrix(m);
        let v_via_b = ab.transform_components(v);
        let q_via_b = ab.transform_quaternion(q);
        for c in Frame::ALL {
            let bc = CaseNumber::from_frames(b, c);
            let ac = CaseNumber::from_frames(a, c);
            assert_eq!(bc.transform_matrix(m_via_b), ac.transform_matrix(m), "via {b} to {c}");
            assert_eq!(bc.transform_components(v_via_b), ac.transform_components(v), "via {b} to {c}");
            assert_eq!(
                bc.transform_quaternion(q_via_b),
                ac.transform_quaternion(q),
                "via {b} to {c}"
            );
        }
    });
}

#[test]
fn there_and_back_again() {
    let m = test_matrix();
    let xyz = [0.125, -0.5, 0.75];
    for from in Frame::ALL {
        for to in Frame::ALL {
            let there = CaseNumber::from_frames(from, to);
            let back = CaseNumber::from_frames(to, from);
            assert_eq!(back.transform_matrix(there.transform_matrix(m)), m);
            assert_eq!(back.transform_quaternion_xyz(there.transform_quaternion_xyz(xyz)), xyz);
        }
    }
}
