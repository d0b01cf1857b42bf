/*!
   Numeric traits used by the field evaluation and the triangulators
*/

use std::fmt::Debug;

use num::Float;

/**
Trait that must be implemented for coordinates (x/y/z)
It mostly has to be a float with a conversion from grid indices
*/
pub trait Coordinate: Float + Default + Debug + Send + Sync + 'static {
    /**
    A value of this type representing the grid index `i`
    */
    fn from_index(i: usize) -> Self;
}

/**
Trait that must be implemented for a type to be used as a field value by the algorithm.
Field values and coordinates share the same float type.
*/
pub trait Density: Coordinate {
    /// Epsilon value (use for float comparisons)
    const EPSILON: Self;
    /// Value for 0.5
    const HALF: Self;
    /// Value for 0
    const ZERO: Self;
    /// Finite value standing for "infinitely inside", used when a sample sits exactly on a blob center
    const SATURATED: Self;

    /// How to determine whether a point with a given field value is inside or outside the mesh.
    /// A value equal to the threshold is outside.
    fn inside(&self, threshold: &Self) -> bool {
        self > threshold
    }

    /// Interpolate to determine where between A and B the threshold is crossed
    fn interp(a: Self, b: Self, threshold: Self) -> Self {
        if (b - a).abs() > Self::EPSILON {
            (threshold - a) / (b - a)
        } else {
            Self::HALF
        }
    }

    /// Addition that never goes past [Density::SATURATED]
    fn saturating_add(self, other: Self) -> Self {
        let sum = self + other;
        if sum >= Self::SATURATED {
            Self::SATURATED
        } else {
            sum
        }
    }

    /// Lossy conversion used for error reports
    fn report(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! float_impl_coordinate {
    ($T:ident) => {
        impl Coordinate for $T {
            fn from_index(i: usize) -> Self {
                i as $T
            }
        }
    };
}

float_impl_coordinate!(f32);
float_impl_coordinate!(f64);

macro_rules! float_impl_density {
    ($T:ident) => {
        impl Density for $T {
            const EPSILON: Self = $T::EPSILON;
            const HALF: Self = 0.5;
            const ZERO: Self = 0.0;
            const SATURATED: Self = $T::MAX;
        }
    };
}

float_impl_density!(f32);
float_impl_density!(f64);

/**
Bound put on blob types by the rebuild entry points.
Same as `Sync` with the `parallel` feature (slabs read the blobs from several threads), no bound otherwise,
so that blobs can be read through `Rc`/`RefCell` handles in single-threaded builds
*/
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}

#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// Bound put on blob types by the rebuild entry points: none without the `parallel` feature
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}

#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}
