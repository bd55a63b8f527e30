//! The nums512 parameter set: entity types, one-shot construction and the
//! validation that makes the ROM trustworthy. A set is either fully valid
//! or unusable; there is no partial mode.

pub mod rom;

use num::BigUint;

use crate::arith;
use crate::error::{ParamError, Result};
use crate::limb::LimbWidth;
use crate::traits::GroupEngine;

/// Curves this ROM knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveId {
    Nums512,
}

/// Prime-field parameters an arithmetic engine needs for Montgomery work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldParameters {
    pub modulus: BigUint,
    /// (2^(base_bits * nlimbs))^2 mod modulus.
    pub r2modp: BigUint,
    /// -modulus^-1 mod 2^base_bits.
    pub mconst: u64,
    pub width: LimbWidth,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    pub x: BigUint,
    pub y: BigUint,
}

/// Weierstrass curve parameters over one [`FieldParameters`] instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    pub a: i64,
    /// Curve coefficient B as a small integer.
    pub b_i: i64,
    /// The same coefficient, full width.
    pub b: BigUint,
    pub cofactor: u64,
    pub order: BigUint,
    pub generator: Generator,
}

/// A validated, immutable parameter set. Construct once, publish, then
/// share freely; readers need no synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParameters {
    pub field: FieldParameters,
    pub curve: CurveParameters,
}

/// Decodes and validates the tables for `width`.
///
/// Deterministic and side-effect free; a failure is permanent for a given
/// build of the tables, retrying cannot change the outcome.
pub fn construct(curve: CurveId, width: LimbWidth) -> Result<DomainParameters> {
    cross_check(curve)?;
    let params = decode_table(curve, width);
    params.validate()?;
    Ok(params)
}

/// [`construct`], plus the subgroup-order check an external group-law
/// engine has to perform on the table's behalf.
pub fn construct_with_engine<E: GroupEngine>(
    curve: CurveId,
    width: LimbWidth,
    engine: &E,
) -> Result<DomainParameters> {
    let params = construct(curve, width)?;
    params.check_order(engine)?;
    Ok(params)
}

impl DomainParameters {
    /// Revalidates this set against its own modulus: primality, Montgomery
    /// constants recomputed from scratch, and the generator against the
    /// curve equation.
    pub fn validate(&self) -> Result<()> {
        let f = &self.field;
        let p = &f.modulus;
        if p <= &BigUint::from(1u32) || !arith::is_probable_prime(p) {
            return Err(ParamError::InvalidModulus);
        }
        if f.r2modp != arith::mont_r2(p, f.width.base_bits(), f.width.nlimbs()) {
            return Err(ParamError::InconsistentMontgomeryConstant);
        }
        if arith::mont_neg_inv(p, f.width.base_bits()) != Some(f.mconst) {
            return Err(ParamError::InconsistentMontgomeryConstant);
        }

        let c = &self.curve;
        if c.b != arith::small_residue(c.b_i, p) {
            return Err(ParamError::PointNotOnCurve);
        }
        let g = &c.generator;
        if g.x >= *p || g.y >= *p || !arith::on_curve(&g.x, &g.y, c.a, &c.b, p) {
            return Err(ParamError::PointNotOnCurve);
        }
        Ok(())
    }

    /// Asks `engine` whether order * G is the identity.
    pub fn check_order<E: GroupEngine>(&self, engine: &E) -> Result<()> {
        if engine.mul_generator_is_identity(self, &self.curve.order) {
            Ok(())
        } else {
            Err(ParamError::WrongSubgroupOrder)
        }
    }
}

fn decode_table(curve: CurveId, width: LimbWidth) -> DomainParameters {
    let tab = match curve {
        CurveId::Nums512 => rom::raw(width),
    };
    DomainParameters {
        field: FieldParameters {
            modulus: width.encode(&tab.modulus),
            r2modp: width.encode(&tab.r2modp),
            mconst: tab.mconst,
            width,
        },
        curve: CurveParameters {
            a: rom::CURVE_A,
            b_i: rom::CURVE_B_I,
            b: width.encode(&tab.b),
            cofactor: rom::CURVE_COF,
            order: width.encode(&tab.order),
            generator: Generator {
                x: width.encode(&tab.gx),
                y: width.encode(&tab.gy),
            },
        },
    }
}

// The two hand-maintained encodings can drift apart under maintenance;
// require them to decode to the same integers before either is usable.
fn cross_check(curve: CurveId) -> Result<()> {
    let narrow = decode_table(curve, LimbWidth::Narrow);
    let wide = decode_table(curve, LimbWidth::Wide);
    if narrow.field.modulus != wide.field.modulus
        || narrow.curve.b != wide.curve.b
        || narrow.curve.order != wide.curve.order
        || narrow.curve.generator != wide.curve.generator
    {
        return Err(ParamError::MismatchedEncodings);
    }
    Ok(())
}
