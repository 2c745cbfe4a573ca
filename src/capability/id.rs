use serde::Serialize;
use std::fmt::{Debug, Display};
use strum_macros::Display as StrumDisplay;

/// Shape of the `{id}` path segment an identifier type accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum IdKind {
    /// Any non-empty segment.
    Text,
    /// Digits only.
    Integer,
}

/// Identifier of an item within a resource.
///
/// The identifier is written as a JSON object key in every response, so
/// `Display` must produce the same text `Serialize` does for map keys.
pub trait ResourceId:
    Clone + Ord + Debug + Display + Serialize + Send + Sync + 'static
{
    const KIND: IdKind;

    /// Parses the `{id}` path segment. `None` rejects the request before the
    /// controller is called.
    fn from_segment(segment: &str) -> Option<Self>;
}

impl ResourceId for String {
    const KIND: IdKind = IdKind::Text;

    fn from_segment(segment: &str) -> Option<Self> {
        if segment.is_empty() {
            return None;
        }
        Some(segment.to_owned())
    }
}

macro_rules! integer_id {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ResourceId for $ty {
                const KIND: IdKind = IdKind::Integer;

                fn from_segment(segment: &str) -> Option<Self> {
                    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    // Overflow is rejected by parse.
                    segment.parse().ok()
                }
            }
        )*
    };
}

integer_id!(u8, u16, u32, u64, usize, i32, i64);
