use num::Float;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

/// A 3D vector generic over any floating point type.
///
/// Used for body-centered positions and inertial velocities. The z-axis is the
/// rotation axis of the reference body.
///
/// # Type Parameters
/// * `T` - The floating point type of the components.
#[derive(Debug, PartialEq, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Vec3D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
    /// The z-component of the vector.
    z: T,
}

impl<T: Copy> Vec3D<T> {
    /// Creates a new vector with the given components.
    pub const fn new(x: T, y: T, z: T) -> Self { Self { x, y, z } }

    pub const fn x(&self) -> T { self.x }
    pub const fn y(&self) -> T { self.y }
    pub const fn z(&self) -> T { self.z }
}

impl<T: Float> Vec3D<T> {
    /// Creates a zero vector.
    pub fn zero() -> Self { Self::new(T::zero(), T::zero(), T::zero()) }

    /// Computes the magnitude (absolute value) of the vector.
    ///
    /// # Returns
    /// The magnitude of the vector as a scalar of type `T`.
    pub fn abs(&self) -> T { self.dot(*self).sqrt() }

    /// Computes the dot product of the current vector with another vector.
    ///
    /// ```text
    /// dot_product = (x1 * x2) + (y1 * y2) + (z1 * z2)
    /// ```
    pub fn dot(self, other: Vec3D<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product `self x other`.
    pub fn cross(self, other: Vec3D<T>) -> Vec3D<T> {
        Vec3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Normalizes the vector to have a magnitude of 1.
    /// If the magnitude is zero, the original vector is returned unmodified.
    pub fn normalize(self) -> Self {
        let magnitude = self.abs();
        if magnitude.is_zero() { self } else { self / magnitude }
    }

    /// Splits the vector into its component along `axis` and the magnitude of the
    /// remainder orthogonal to it.
    ///
    /// # Arguments
    /// * `axis` - The reference direction, does not need to be normalized.
    ///
    /// # Returns
    /// A tuple `(parallel, orthogonal)` of scalar magnitudes, `parallel` being signed.
    pub fn decompose(self, axis: Vec3D<T>) -> (T, T) {
        let unit = axis.normalize();
        let parallel = self.dot(unit);
        let orthogonal = (self - unit * parallel).abs();
        (parallel, orthogonal)
    }
}

impl<T: Float> Add for Vec3D<T> {
    type Output = Vec3D<T>;

    fn add(self, rhs: Vec3D<T>) -> Self::Output {
        Vec3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Float> Sub for Vec3D<T> {
    type Output = Vec3D<T>;

    fn sub(self, rhs: Vec3D<T>) -> Self::Output {
        Vec3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Float> Mul<T> for Vec3D<T> {
    type Output = Vec3D<T>;

    /// Implements the `*` operator for a `Vec3D` and a scalar.
    fn mul(self, rhs: T) -> Self::Output { Vec3D::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}

impl<T: Float> Div<T> for Vec3D<T> {
    type Output = Vec3D<T>;

    /// Implements the `/` operator for a `Vec3D` and a scalar.
    fn div(self, rhs: T) -> Self::Output { Vec3D::new(self.x / rhs, self.y / rhs, self.z / rhs) }
}

impl<T: Display> Display for Vec3D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
