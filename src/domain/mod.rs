// ============================================================================
// Domain Module
// Value objects for significant-figure analysis
// ============================================================================

pub mod canonical;
pub mod number;
pub mod precision;

pub use canonical::CanonicalDecimal;
pub use number::Number;
pub use precision::Precision;
