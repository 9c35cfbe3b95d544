#![no_main]
use libfuzzer_sys::fuzz_target;

use change_of_basis::{CaseNumber, EulerAngles, EulerCase, Frame, Matrix3};
use pretty_assertions::assert_eq;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    a: Frame,
    b: Frame,
    c: Frame,
    vector: [i32; 3],
    matrix: [[i32; 3]; 3],
    angles: [i32; 3],
}

fuzz_target!(|input: Input| {
    let Input { a, b, c, vector, matrix, angles } = input;
    // Negating i32::MIN would overflow.
    let clamp = |x: i32| x.max(-i32::MAX);
    let vector = vector.map(clamp);
    let matrix = Matrix3::from_rows(matrix.map(|row| row.map(clamp)));
    let angles = EulerAngles::from(angles.map(clamp));

    let ab = CaseNumber::from_frames(a, b);
    let bc = CaseNumber::from_frames(b, c);
    let ac = CaseNumber::from_frames(a, c);

    assert_eq!(ab.transform_frame(a), b);
    assert_eq!(bc * ab, ac);
    assert_eq!(ab.inverse(), CaseNumber::from_frames(b, a));
    assert_eq!(ab.is_reflection(), a.handedness() != b.handedness());

    assert_eq!(bc.transform_components(ab.transform_components(vector)), ac.transform_components(vector));
    assert_eq!(bc.transform_matrix(ab.transform_matrix(matrix)), ac.transform_matrix(matrix));
    assert_eq!(bc.transform_quaternion_xyz(ab.transform_quaternion_xyz(vector)), ac.transform_quaternion_xyz(vector));
    assert_eq!(ab.inverse().transform_quaternion_xyz(ab.transform_quaternion_xyz(vector)), vector);

    let euler_ab = EulerCase::from_frames(a, b);
    assert_eq!(EulerCase::from_frames(b, c) * euler_ab, EulerCase::from_frames(a, c));
    assert_eq!(angles.change_basis(a, b).change_basis(b, a), angles);
});
