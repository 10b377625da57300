//! Theme - the variant/size tag system.
//!
//! The engine never interprets style tokens; it only maps declared variant
//! tags to the class strings a styling pipeline supplied. See [`variant`].

mod variant;

pub use variant::VariantRule;
