use thiserror;

/// Table-validation failures. All of them are raised while constructing a
/// parameter set, never by arithmetic on an already validated one; a set
/// that fails any check is unusable as a whole.
#[derive(thiserror::Error, Debug)]
pub enum ParamError {
    #[error("modulus is not an odd prime")]
    InvalidModulus,

    #[error("stored montgomery constant disagrees with the modulus")]
    InconsistentMontgomeryConstant,

    #[error("generator does not satisfy the curve equation")]
    PointNotOnCurve,

    #[error("generator subgroup order check failed")]
    WrongSubgroupOrder,

    #[error("limb-width encodings decode to different integers")]
    MismatchedEncodings,
}

pub type Result<T> = core::result::Result<T, ParamError>;
