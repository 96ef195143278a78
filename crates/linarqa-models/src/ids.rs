//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend identifies records with opaque strings (UUIDs in practice, but
//! nothing here relies on that). Wrapping them per entity prevents passing a
//! `StudentId` where a `CourseId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use linarqa_models::ids::{CourseId, StudentId};
//!
//! fn enrollments_of(course: &CourseId) { /* ... */ }
//!
//! let course = CourseId::from("c1");
//! let student = StudentId::from("s1");
//!
//! enrollments_of(&course);     // OK
//! // enrollments_of(&student); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Macro to define a strongly-typed ID newtype over `String`.
///
/// Serializes transparently, so `"c1"` in JSON is `CourseId("c1")` in Rust.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from any string-like value.
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner String.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Identifier of an extra-curricular course.
    CourseId
);

define_id!(
    /// Identifier of a student (kindergarten or extra-course).
    StudentId
);

define_id!(
    /// Identifier of a course enrollment.
    EnrollmentId
);

define_id!(
    /// Identifier of a payment bill.
    PaymentId
);

define_id!(
    /// Identifier of a staff member.
    StaffId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_serde_is_transparent() {
        let id = CourseId::new("c1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""c1""#);
        let back: CourseId = serde_json::from_str(r#""c1""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_debug_and_display() {
        let id = StudentId::from("s-42");
        assert_eq!(format!("{:?}", id), "StudentId(s-42)");
        assert_eq!(id.to_string(), "s-42");
    }

    #[test]
    fn test_compare_with_str() {
        let id = PaymentId::from("p1");
        assert!(id == "p1");
        assert_eq!(id.as_str(), "p1");
    }

    #[test]
    fn test_borrow_allows_str_lookup() {
        let mut counts: HashMap<CourseId, usize> = HashMap::new();
        counts.insert(CourseId::from("c1"), 2);
        assert_eq!(counts.get("c1"), Some(&2));
        assert_eq!(counts.get("c2"), None);
    }
}
