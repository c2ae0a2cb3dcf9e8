use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use super::traits::FrameTransform;
use crate::utils::{deg_to_rad, rad_to_deg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    Body, // Aircraft Body frame: x-forward, y-right, z-down
    NED,  // North-East-Down frame: x-north, y-east, z-down
}

/// Attitude of the body relative to NED as a 3-2-1 (yaw, pitch, roll) Euler sequence.
///
/// Angles are radians and are not normalised to any canonical range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Roll angle φ (rad)
    pub roll: f64,
    /// Pitch angle θ (rad)
    pub pitch: f64,
    /// Yaw angle ψ (rad)
    pub yaw: f64,
}

impl EulerAngles {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn level() -> Self {
        Self::default()
    }

    pub fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(deg_to_rad(roll), deg_to_rad(pitch), deg_to_rad(yaw))
    }

    /// Angles as `[roll, pitch, yaw]` in degrees
    pub fn to_degrees(&self) -> [f64; 3] {
        [
            rad_to_deg(self.roll),
            rad_to_deg(self.pitch),
            rad_to_deg(self.yaw),
        ]
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.roll, self.pitch, self.yaw)
    }

    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Body-to-NED rotation `Rz(ψ)·Ry(θ)·Rx(φ)` used by the equations of motion.
    ///
    /// Unlike [`BodyNedDcm`] the yaw is not negated, so the last row is
    /// `[−sθ, sφcθ, cφcθ]` and gravity resolves to `g·[−sθ, sφcθ, cφcθ]`.
    pub fn body_to_ned(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(self.roll, self.pitch, self.yaw)
    }
}

/// Direction cosine matrix between the body frame and the NED navigation frame.
///
/// The matrix is rebuilt from the Euler angles every time one is constructed;
/// nothing is cached across attitudes.
///
/// Aerospace convention takes positive yaw as clockwise looking down, while
/// `sin`/`cos` assume counter-clockwise positive angles. Yaw is therefore
/// negated before its sine and cosine are evaluated. Every caller relies on
/// this sign flip: a yaw of +90° must rotate body-forward onto East.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyNedDcm {
    angles: EulerAngles,
    matrix: Matrix3<f64>,
}

impl BodyNedDcm {
    pub fn new(angles: EulerAngles) -> Self {
        Self {
            angles,
            matrix: Self::body_to_ned(&angles),
        }
    }

    fn body_to_ned(angles: &EulerAngles) -> Matrix3<f64> {
        let (sin_phi, cos_phi) = angles.roll.sin_cos();
        let (sin_theta, cos_theta) = angles.pitch.sin_cos();
        // Yaw sign flip, see type docs
        let (sin_psi, cos_psi) = (-angles.yaw).sin_cos();

        let mut matrix = Matrix3::new(
            cos_theta * cos_psi,
            cos_theta * sin_psi,
            -sin_theta,
            sin_phi * sin_theta * cos_psi - cos_phi * sin_psi,
            sin_phi * sin_theta * sin_psi + cos_phi * cos_psi,
            sin_phi * cos_theta,
            cos_phi * sin_theta * cos_psi + sin_phi * sin_psi,
            cos_phi * sin_theta * sin_psi - sin_phi * cos_psi,
            cos_phi * cos_theta,
        );

        // -0.0 == 0.0, so this rewrites negative zeros as positive zeros
        for entry in matrix.iter_mut() {
            if *entry == 0.0 {
                *entry = 0.0;
            }
        }

        matrix
    }

    pub fn angles(&self) -> EulerAngles {
        self.angles
    }

    /// The body-to-NED rotation matrix
    pub fn matrix(&self) -> Matrix3<f64> {
        self.matrix
    }

    /// The NED-to-body rotation matrix
    pub fn transpose(&self) -> Matrix3<f64> {
        self.matrix.transpose()
    }

    /// Checks `M·Mᵗ ≈ I` entry by entry.
    ///
    /// Diagnostic only; the transforms assume orthogonality without checking.
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        let product = self.matrix * self.matrix.transpose();
        let identity = Matrix3::<f64>::identity();
        product
            .iter()
            .zip(identity.iter())
            .all(|(actual, expected)| (actual - expected).abs() <= tolerance)
    }

    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }
}

impl FrameTransform for BodyNedDcm {
    fn transform_from_body(&self, body: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * body
    }

    fn transform_to_body(&self, ned: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transpose() * ned
    }
}

impl From<EulerAngles> for BodyNedDcm {
    fn from(angles: EulerAngles) -> Self {
        Self::new(angles)
    }
}
