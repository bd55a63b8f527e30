use num::BigUint;

use crate::nums512::DomainParameters;

/// Seam to the elliptic-curve group-law engine consuming a parameter set.
///
/// The constant table never performs point arithmetic itself; the subgroup
/// order check needs a scalar multiplication, so the engine supplies it
/// through this trait.
pub trait GroupEngine {
    /// Scalar-multiplies the table's generator by `k` and reports whether
    /// the result is the group identity.
    fn mul_generator_is_identity(&self, params: &DomainParameters, k: &BigUint) -> bool;
}
