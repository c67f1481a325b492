//! Immutable container descriptor.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::units::Units;

/// Fixed description of a container. Today this is only the capacity.
///
/// Capacity never changes after construction; resizing means building a new
/// `Properties` and a new container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Properties<U> {
    capacity: U,
}

impl<U: Units> Properties<U> {
    /// Build properties, clamping a negative or NaN capacity up to zero.
    pub fn new(capacity: U) -> Self {
        Self {
            capacity: capacity.non_negative(),
        }
    }

    /// Build properties, rejecting a negative or NaN capacity.
    pub fn try_new(capacity: U) -> Result<Self> {
        if !capacity.is_non_negative() {
            return Err(Error::InvalidCapacity(format!("{capacity:?}")));
        }
        Ok(Self { capacity })
    }

    /// Maximum fill of a container built from these properties.
    #[inline]
    pub fn capacity(&self) -> U {
        self.capacity
    }
}

// Decoding goes through `try_new` so a stored negative capacity is rejected.
impl<'de, U> Deserialize<'de> for Properties<U>
where
    U: Units + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            capacity: T,
        }

        let raw = Raw::<U>::deserialize(deserializer)?;
        Properties::try_new(raw.capacity).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_negative_capacity() {
        assert_eq!(Properties::new(-10.0f32).capacity(), 0.0);
        assert_eq!(Properties::new(f64::NAN).capacity(), 0.0);
        assert_eq!(Properties::new(255.0f32).capacity(), 255.0);
    }

    #[test]
    fn try_new_rejects_invalid_capacity() {
        assert!(Properties::try_new(-1i32).is_err());
        assert!(Properties::try_new(f32::NAN).is_err());
        let p = Properties::try_new(0u32).expect("zero capacity is valid");
        assert_eq!(p.capacity(), 0);
    }

    #[test]
    fn serde_shape_is_flat() {
        let p = Properties::new(12.5f64);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"capacity":12.5}"#);
    }

    #[test]
    fn decode_rejects_negative_capacity() {
        let err = serde_json::from_str::<Properties<f32>>(r#"{"capacity":-5.0}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid capacity"));

        let p: Properties<f32> = serde_json::from_str(r#"{"capacity":255.0}"#).unwrap();
        assert_eq!(p.capacity(), 255.0);
    }
}
