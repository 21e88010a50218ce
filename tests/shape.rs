use msa_vm::prelude::*;

type Unit = MsaUnit<[Word; 32]>;

type ShapeOp =
    fn(&mut Unit, DataFormat, RegisterId, RegisterId, RegisterId) -> Result<(), Exception>;

const A: u128 = 0x1f1e1d1c_1b1a1918_17161514_13121110;
const B: u128 = 0x2f2e2d2c_2b2a2928_27262524_23222120;

/// Shape helpers must behave identically whether the three register
/// operands are distinct or fully aliased.
fn assert_alias_safe(op: ShapeOp, df: DataFormat, value: u128) {
    let mut distinct = Unit::new([0; 32]);
    *distinct.vreg_mut(0) = VectorReg::from(value);
    *distinct.vreg_mut(1) = VectorReg::from(value);
    *distinct.vreg_mut(2) = VectorReg::from(value);
    op(&mut distinct, df, 0, 1, 2).expect("in-range shuffle cannot trap");

    let mut aliased = Unit::new([0; 32]);
    *aliased.vreg_mut(0) = VectorReg::from(value);
    op(&mut aliased, df, 0, 0, 0).expect("in-range shuffle cannot trap");

    assert_eq!(distinct.vreg(0), aliased.vreg(0));
}

#[test]
fn shuffles_are_alias_safe() {
    let ops: [ShapeOp; 7] = [
        Unit::ilvev,
        Unit::ilvod,
        Unit::ilvl,
        Unit::ilvr,
        Unit::pckev,
        Unit::pckod,
        Unit::vshf,
    ];
    let value = 0x0706_0504_0302_0100_0f0e_0d0c_0b0a_0908u128;

    for op in ops {
        for df in [
            DataFormat::Byte,
            DataFormat::Half,
            DataFormat::Word,
            DataFormat::Double,
        ] {
            assert_alias_safe(op, df, value);
        }
    }
}

#[test]
fn slide_and_splat_are_alias_safe() {
    for df in [
        DataFormat::Byte,
        DataFormat::Half,
        DataFormat::Word,
        DataFormat::Double,
    ] {
        for n in 0..df.elements() {
            let mut distinct = Unit::new([0; 32]);
            *distinct.vreg_mut(0) = VectorReg::from(A);
            *distinct.vreg_mut(1) = VectorReg::from(A);
            distinct.sldi(df, 0, 1, n).unwrap();

            let mut aliased = Unit::new([0; 32]);
            *aliased.vreg_mut(0) = VectorReg::from(A);
            aliased.sldi(df, 0, 0, n).unwrap();

            assert_eq!(distinct.vreg(0), aliased.vreg(0));

            let mut vm = Unit::new([0; 32]);
            *vm.vreg_mut(0) = VectorReg::from(B);
            vm.splati(df, 0, 0, n).unwrap();
            let expect = VectorReg::from(B).lane_unsigned(df, n);
            for i in 0..df.elements() {
                assert_eq!(vm.vreg(0).lane_unsigned(df, i), expect);
            }
        }
    }
}

#[test]
fn shf_0x1b_reverses_each_word_group() {
    let mut vm = Unit::new([0; 32]);
    *vm.vreg_mut(1) = VectorReg::from(A);

    vm.shf(DataFormat::Word, 0, 1, 0x1b).unwrap();

    assert_eq!(
        u128::from(*vm.vreg(0)),
        0x13121110_17161514_1b1a1918_1f1e1d1c
    );
}

#[test]
fn vshf_selector_high_bits_force_zero() {
    let mut vm = Unit::new([0; 32]);
    *vm.vreg_mut(1) = VectorReg::from(A);
    *vm.vreg_mut(2) = VectorReg::from(B);

    // every selector byte 0xc0: output must be zero regardless of sources
    *vm.vreg_mut(0) = VectorReg::from(0xc0c0c0c0_c0c0c0c0_c0c0c0c0_c0c0c0c0u128);
    vm.vshf(DataFormat::Byte, 0, 1, 2).unwrap();
    assert_eq!(u128::from(*vm.vreg(0)), 0);
}

#[test]
fn vshf_indexes_the_register_pair() {
    let mut vm = Unit::new([0; 32]);
    *vm.vreg_mut(1) = VectorReg::from(A);
    *vm.vreg_mut(2) = VectorReg::from(B);

    // byte selectors: k < 16 pick wt lanes, 16..31 pick ws lanes
    let mut selectors = VectorReg::zeroed();
    for i in 0..16 {
        selectors.set_lane(DataFormat::Byte, i, if i % 2 == 0 { i as Word } else { 16 + i as Word });
    }
    *vm.vreg_mut(0) = selectors;

    vm.vshf(DataFormat::Byte, 0, 1, 2).unwrap();

    let a = VectorReg::from(A);
    let b = VectorReg::from(B);
    for i in 0..16 {
        let want = if i % 2 == 0 {
            b.lane_unsigned(DataFormat::Byte, i)
        } else {
            a.lane_unsigned(DataFormat::Byte, i)
        };
        assert_eq!(vm.vreg(0).lane_unsigned(DataFormat::Byte, i), want);
    }
}

#[test]
fn pack_then_interleave_reconstructs_both_sources() {
    for df in [
        DataFormat::Byte,
        DataFormat::Half,
        DataFormat::Word,
        DataFormat::Double,
    ] {
        let mut vm = Unit::new([0; 32]);
        *vm.vreg_mut(1) = VectorReg::from(A);
        *vm.vreg_mut(2) = VectorReg::from(B);

        vm.pckev(df, 4, 1, 2).unwrap();
        vm.pckod(df, 5, 1, 2).unwrap();

        // evens in the low half of w4, odds in the low half of w5
        vm.ilvr(df, 6, 5, 4).unwrap();
        assert_eq!(u128::from(*vm.vreg(6)), B);

        vm.ilvl(df, 7, 5, 4).unwrap();
        assert_eq!(u128::from(*vm.vreg(7)), A);
    }
}

#[test]
fn splat_out_of_range_gpr_values_reduce_modulo_lanes() {
    let mut gprs = [0u64; 32];
    gprs[7] = 7;
    gprs[8] = 2;
    let mut vm = MsaUnit::new(gprs);
    *vm.vreg_mut(1) = VectorReg::from(A);

    // 7 mod 2 = 1: splats the upper double lane, no trap
    vm.splat(DataFormat::Double, 0, 1, 7).unwrap();
    let hi = VectorReg::from(A).lane_unsigned(DataFormat::Double, 1);
    assert_eq!(vm.vreg(0).lane_unsigned(DataFormat::Double, 0), hi);
    assert_eq!(vm.vreg(0).lane_unsigned(DataFormat::Double, 1), hi);

    // 2 mod 2 = 0: also in range after reduction
    vm.splat(DataFormat::Double, 0, 1, 8).unwrap();
    let lo = VectorReg::from(A).lane_unsigned(DataFormat::Double, 0);
    assert_eq!(vm.vreg(0).lane_unsigned(DataFormat::Double, 1), lo);
}

#[test]
fn sld_reads_the_count_from_the_gpr_file() {
    let mut gprs = [0u64; 32];
    gprs[5] = 19; // 19 mod 16 = 3
    let mut vm = MsaUnit::new(gprs);
    *vm.vreg_mut(0) = VectorReg::from(B);
    *vm.vreg_mut(1) = VectorReg::from(A);

    vm.sld(DataFormat::Byte, 0, 1, 5).unwrap();

    let mut expect = [0u8; 16];
    let a = VectorReg::from(A);
    let b = VectorReg::from(B);
    for j in 0..16 {
        expect[j] = if j + 3 < 16 {
            a.as_bytes()[j + 3]
        } else {
            b.as_bytes()[j + 3 - 16]
        };
    }
    assert_eq!(vm.vreg(0).as_bytes(), &expect);
}

#[test]
fn byte_slide_matches_a_wide_concatenation_reference() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(2322u64);

    // at byte format the whole register slides: the result is the
    // 256-bit [wd : ws] concatenation shifted down n bytes
    for _ in 0..64 {
        let ws: u128 = rng.gen();
        let wd: u128 = rng.gen();
        let n = rng.gen_range(0..16);

        let mut vm = Unit::new([0; 32]);
        *vm.vreg_mut(0) = VectorReg::from(wd);
        *vm.vreg_mut(1) = VectorReg::from(ws);
        vm.sldi(DataFormat::Byte, 0, 1, n).unwrap();

        let concat_lo = ws;
        let concat_hi = wd;
        let shifted = if n == 0 {
            concat_lo
        } else {
            (concat_lo >> (8 * n)) | (concat_hi << (128 - 8 * n))
        };

        assert_eq!(u128::from(*vm.vreg(0)), shifted);
    }
}

#[test]
fn every_slide_count_completes_without_trapping() {
    // guest-supplied counts reduce modulo the lane count before the
    // bounds check, so no value of the source register can trap
    for df in [
        DataFormat::Byte,
        DataFormat::Half,
        DataFormat::Word,
        DataFormat::Double,
    ] {
        for raw in [0u64, 1, 15, 16, 17, 63, 64, u64::MAX] {
            let mut gprs = [0u64; 32];
            gprs[9] = raw;
            let mut vm = MsaUnit::new(gprs);
            *vm.vreg_mut(1) = VectorReg::from(A);

            assert_eq!(vm.sld(df, 0, 1, 9), Ok(()));
            assert_eq!(vm.splat(df, 0, 1, 9), Ok(()));
        }
    }
}
