//! nums512 constant tables, one per limb width. The two encodings carry
//! the same integers; construction cross-checks them against each other
//! and against the modulus before the table may be used.

use alloc::vec::Vec;

use crate::limb::LimbWidth;

// nums512 Weierstrass curve, y^2 = x^3 - 3x + 121243 over GF(2^512 - 569).
pub const CURVE_A: i64 = -3;
pub const CURVE_B_I: i64 = 121243;
pub const CURVE_COF: u64 = 1;

/// Base bits = 29
pub mod narrow {
    pub const BASE_BITS: u32 = 29;
    pub const NLIMBS: usize = 18;

    pub const MODULUS: [u32; NLIMBS] = [
        0x1FFFFDC7, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF,
        0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF,
        0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x7FFFF,
    ];
    // (2^522)^2 mod p
    pub const R2MODP: [u32; NLIMBS] = [
        0xB100000, 0x278, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
        0x0, 0x0,
    ];
    // -p^-1 mod 2^29
    pub const MCONST: u32 = 0xE0F4C09;

    pub const CURVE_B: [u32; NLIMBS] = [
        0x1D99B, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
        0x0,
    ];
    pub const CURVE_ORDER: [u32; NLIMBS] = [
        0x433555D, 0x10A9F9C8, 0x1F3490F3, 0xD166CC0, 0xBDC63B5, 0xC76CBE8, 0xC6D3F09,
        0x1F729CF0, 0x1F5B3CA4, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF,
        0x1FFFFFFF, 0x1FFFFFFF, 0x1FFFFFFF, 0x7FFFF,
    ];
    pub const CURVE_GX: [u32; NLIMBS] = [
        0xCABAE57, 0x4143CAC, 0x1BD778B7, 0x1AC026FA, 0x15831D5, 0x14312AB, 0x167A4DE5,
        0xA20ED66, 0x195021A1, 0x129836CF, 0x1141B830, 0xA03ED0A, 0xCAD83BB, 0x1E9DA94C,
        0xDC00A80, 0x1527B45, 0x1447141D, 0x1D601,
    ];
    pub const CURVE_GY: [u32; NLIMBS] = [
        0x183527A6, 0x1D043B01, 0x1F43FA48, 0x16B83C99, 0x5602CF2, 0x1420592D, 0x17A70486,
        0x1B5161DD, 0x14A28415, 0x3DE8A78, 0x3D2C983, 0x17797719, 0x197DBDEA, 0x15D88025,
        0x1BBB718F, 0xAD679C1, 0x14CA29AD, 0x4A1D2,
    ];
}

/// Base bits = 60
pub mod wide {
    pub const BASE_BITS: u32 = 60;
    pub const NLIMBS: usize = 9;

    pub const MODULUS: [u64; NLIMBS] = [
        0xFFFFFFFFFFFFDC7,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFF,
    ];
    // (2^540)^2 mod p
    pub const R2MODP: [u64; NLIMBS] = [0x100000000000000, 0x4F0B, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0];
    // -p^-1 mod 2^60
    pub const MCONST: u64 = 0x8A1F7E6CE0F4C09;

    pub const CURVE_B: [u64; NLIMBS] = [0x1D99B, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0];
    pub const CURVE_ORDER: [u64; NLIMBS] = [
        0xE153F390433555D,
        0x568B36607CD243C,
        0x258ED97D0BDC63B,
        0xA4FB94E7831B4FC,
        0xFFFFFFFFFFF5B3C,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFF,
        0xFFFFFFFF,
    ];
    pub const CURVE_GX: [u64; NLIMBS] = [
        0xC8287958CABAE57,
        0x5D60137D6F5DE2D,
        0x94286255615831D,
        0xA151076B359E937,
        0xC25306D9F95021,
        0x3BB501F6854506E,
        0x2A03D3B5298CAD8,
        0x141D0A93DA2B700,
        0x3AC03447,
    ];
    pub const CURVE_GY: [u64; NLIMBS] = [
        0x3A08760383527A6,
        0x2B5C1E4CFD0FE92,
        0x1A840B25A5602CF,
        0x15DA8B0EEDE9C12,
        0x60C7BD14F14A284,
        0xDEABBCBB8C8F4B2,
        0xC63EBB1004B97DB,
        0x29AD56B3CE0EEED,
        0x943A54CA,
    ];
}

/// One width's tables widened to u64 limbs for uniform decoding.
pub(crate) struct RawTable {
    pub modulus: Vec<u64>,
    pub r2modp: Vec<u64>,
    pub mconst: u64,
    pub b: Vec<u64>,
    pub order: Vec<u64>,
    pub gx: Vec<u64>,
    pub gy: Vec<u64>,
}

pub(crate) fn raw(width: LimbWidth) -> RawTable {
    match width {
        LimbWidth::Narrow => RawTable {
            modulus: widen(&narrow::MODULUS),
            r2modp: widen(&narrow::R2MODP),
            mconst: narrow::MCONST as u64,
            b: widen(&narrow::CURVE_B),
            order: widen(&narrow::CURVE_ORDER),
            gx: widen(&narrow::CURVE_GX),
            gy: widen(&narrow::CURVE_GY),
        },
        LimbWidth::Wide => RawTable {
            modulus: wide::MODULUS.to_vec(),
            r2modp: wide::R2MODP.to_vec(),
            mconst: wide::MCONST,
            b: wide::CURVE_B.to_vec(),
            order: wide::CURVE_ORDER.to_vec(),
            gx: wide::CURVE_GX.to_vec(),
            gy: wide::CURVE_GY.to_vec(),
        },
    }
}

fn widen(limbs: &[u32]) -> Vec<u64> {
    limbs.iter().map(|&l| l as u64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use num::BigUint;

    const WIDTHS: [LimbWidth; 2] = [LimbWidth::Narrow, LimbWidth::Wide];

    #[test]
    fn test_table_shape() {
        assert_eq!(narrow::BASE_BITS, LimbWidth::Narrow.base_bits());
        assert_eq!(narrow::NLIMBS, LimbWidth::Narrow.nlimbs());
        assert_eq!(wide::BASE_BITS, LimbWidth::Wide.base_bits());
        assert_eq!(wide::NLIMBS, LimbWidth::Wide.nlimbs());
    }

    #[test]
    fn test_limb_bounds() {
        for w in WIDTHS {
            let tab = raw(w);
            for limbs in [&tab.modulus, &tab.r2modp, &tab.b, &tab.order, &tab.gx, &tab.gy] {
                assert_eq!(limbs.len(), w.nlimbs());
                assert!(limbs.iter().all(|&l| l <= w.limb_mask()));
            }
            assert!(tab.mconst <= w.limb_mask());
        }
    }

    // The canonical cross-configuration check: both encodings of each
    // quantity decode to the same 512-bit hexadecimal value.
    #[test]
    fn test_canonical_values() {
        let p = BigUint::from_bytes_be(&hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7"
        ));
        let order = BigUint::from_bytes_be(&hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "5B3CA4FB94E7831B4FC258ED97D0BDC63B568B36607CD243CE153F390433555D"
        ));
        let gx = BigUint::from_bytes_be(&hex!(
            "3AC03447141D0A93DA2B7002A03D3B5298CAD83BB501F6854506E0C25306D9F9"
            "5021A151076B359E93794286255615831D5D60137D6F5DE2DC8287958CABAE57"
        ));
        let gy = BigUint::from_bytes_be(&hex!(
            "943A54CA29AD56B3CE0EEEDC63EBB1004B97DBDEABBCBB8C8F4B260C7BD14F14"
            "A28415DA8B0EEDE9C121A840B25A5602CF2B5C1E4CFD0FE923A08760383527A6"
        ));
        assert_eq!(p, (BigUint::from(1u32) << 512) - 569u32);
        for w in WIDTHS {
            let tab = raw(w);
            assert_eq!(w.encode(&tab.modulus), p, "{w:?} modulus");
            assert_eq!(w.encode(&tab.order), order, "{w:?} order");
            assert_eq!(w.encode(&tab.gx), gx, "{w:?} gx");
            assert_eq!(w.encode(&tab.gy), gy, "{w:?} gy");
            assert_eq!(w.encode(&tab.b), BigUint::from(CURVE_B_I as u64), "{w:?} b");
        }
    }
}
