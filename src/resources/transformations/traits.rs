use nalgebra::{Rotation3, Vector3};

use super::Frame;

/// Trait for rotating vectors between the body and navigation frames
pub trait FrameTransform {
    /// Rotate a body-frame vector into the NED frame
    fn transform_from_body(&self, body: &Vector3<f64>) -> Vector3<f64>;

    /// Rotate a NED-frame vector into the body frame
    fn transform_to_body(&self, ned: &Vector3<f64>) -> Vector3<f64>;

    /// Rotate a vector between any two supported frames
    fn transform(&self, vector: &Vector3<f64>, from: Frame, to: Frame) -> Vector3<f64> {
        match (from, to) {
            (Frame::Body, Frame::NED) => self.transform_from_body(vector),
            (Frame::NED, Frame::Body) => self.transform_to_body(vector),
            _ => *vector,
        }
    }
}

impl FrameTransform for Rotation3<f64> {
    fn transform_from_body(&self, body: &Vector3<f64>) -> Vector3<f64> {
        self * body
    }

    fn transform_to_body(&self, ned: &Vector3<f64>) -> Vector3<f64> {
        self.inverse_transform_vector(ned)
    }
}
