//! Lane-wise multiply/accumulate, division, remainder, dot products and
//! horizontal add/subtract.
//!
//! The halved-operand families (`dotp`, `dpadd`, `dpsub`, `hadd`,
//! `hsub`) split each lane into two half-width values; they have no byte
//! encoding, so a byte format here is a decoder-contract violation.

use super::MsaUnit;
use crate::data_format::{max_uint_of, DataFormat};
use crate::error::Exception;
use crate::{RegisterId, Word};

/// Low half of a lane, sign-extended to 64 bits.
fn signed_even(df: DataFormat, a: i64) -> i64 {
    let half = df.bits() / 2;
    (a << (64 - half)) >> (64 - half)
}

/// High half of a lane, sign-extended to 64 bits.
fn signed_odd(df: DataFormat, a: i64) -> i64 {
    let width = df.bits();
    (a << (64 - width)) >> (64 - width / 2)
}

/// Low half of a lane, zero-extended.
fn unsigned_even(df: DataFormat, a: Word) -> Word {
    a & max_uint_of(df.bits() / 2)
}

/// High half of a lane, zero-extended.
fn unsigned_odd(df: DataFormat, a: Word) -> Word {
    let width = df.bits();
    (a << (64 - width)) >> (64 - width / 2)
}

fn mulv(_df: DataFormat, a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

fn maddv(_df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_add(a.wrapping_mul(b))
}

fn msubv(_df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_sub(a.wrapping_mul(b))
}

// Division corner cases have architected results: the quotient of the
// most negative value by minus one is the dividend again, and division
// by zero yields zero rather than a trap.
fn div_s(df: DataFormat, a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else if a == df.min_int() && b == -1 {
        df.min_int()
    } else {
        a / b
    }
}

fn div_u(_df: DataFormat, a: Word, b: Word) -> Word {
    if b == 0 {
        0
    } else {
        a / b
    }
}

fn mod_s(df: DataFormat, a: i64, b: i64) -> i64 {
    if b == 0 || (a == df.min_int() && b == -1) {
        0
    } else {
        a % b
    }
}

fn mod_u(_df: DataFormat, a: Word, b: Word) -> Word {
    if b == 0 {
        0
    } else {
        a % b
    }
}

fn dotp_s(df: DataFormat, a: i64, b: i64) -> i64 {
    (signed_odd(df, a) * signed_odd(df, b))
        .wrapping_add(signed_even(df, a) * signed_even(df, b))
}

fn dotp_u(df: DataFormat, a: Word, b: Word) -> Word {
    (unsigned_odd(df, a) * unsigned_odd(df, b))
        .wrapping_add(unsigned_even(df, a) * unsigned_even(df, b))
}

fn dpadd_s(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_add(dotp_s(df, a, b))
}

fn dpadd_u(df: DataFormat, dest: Word, a: Word, b: Word) -> Word {
    dest.wrapping_add(dotp_u(df, a, b))
}

fn dpsub_s(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_sub(dotp_s(df, a, b))
}

fn dpsub_u(df: DataFormat, dest: Word, a: Word, b: Word) -> Word {
    dest.wrapping_sub(dotp_u(df, a, b))
}

fn hadd_s(df: DataFormat, a: i64, b: i64) -> i64 {
    signed_odd(df, a) + signed_even(df, b)
}

fn hadd_u(df: DataFormat, a: Word, b: Word) -> Word {
    unsigned_odd(df, a) + unsigned_even(df, b)
}

fn hsub_s(df: DataFormat, a: i64, b: i64) -> i64 {
    signed_odd(df, a) - signed_even(df, b)
}

fn hsub_u(df: DataFormat, a: Word, b: Word) -> Word {
    unsigned_odd(df, a).wrapping_sub(unsigned_even(df, b))
}

impl<G> MsaUnit<G> {
    /// `MULV.df` — lane-wise wrapping multiply.
    pub fn mulv(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_s(df, wd, ws, wt, mulv)
    }

    /// `MADDV.df` — multiply and accumulate into `wd`.
    pub fn maddv(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_ternary_s(df, wd, ws, wt, maddv)
    }

    /// `MSUBV.df` — multiply and subtract from `wd`.
    pub fn msubv(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_ternary_s(df, wd, ws, wt, msubv)
    }

    /// `DIV_S.df` — signed truncated division.
    pub fn div_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_s(df, wd, ws, wt, div_s)
    }

    /// `DIV_U.df` — unsigned truncated division.
    pub fn div_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_u(df, wd, ws, wt, div_u)
    }

    /// `MOD_S.df` — signed remainder, sign of the dividend.
    pub fn mod_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_s(df, wd, ws, wt, mod_s)
    }

    /// `MOD_U.df` — unsigned remainder.
    pub fn mod_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_u(df, wd, ws, wt, mod_u)
    }

    /// `DOTP_S.df` — signed dot product of lane halves.
    pub fn dotp_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_binary_s(df, wd, ws, wt, dotp_s)
    }

    /// `DOTP_U.df` — unsigned dot product of lane halves.
    pub fn dotp_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_binary_u(df, wd, ws, wt, dotp_u)
    }

    /// `DPADD_S.df` — accumulate a signed dot product into `wd`.
    pub fn dpadd_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_ternary_s(df, wd, ws, wt, dpadd_s)
    }

    /// `DPADD_U.df` — accumulate an unsigned dot product into `wd`.
    pub fn dpadd_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_ternary_u(df, wd, ws, wt, dpadd_u)
    }

    /// `DPSUB_S.df` — subtract a signed dot product from `wd`.
    pub fn dpsub_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_ternary_s(df, wd, ws, wt, dpsub_s)
    }

    /// `DPSUB_U.df` — subtract an unsigned dot product from `wd`.
    pub fn dpsub_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_ternary_u(df, wd, ws, wt, dpsub_u)
    }

    /// `HADD_S.df` — odd half of `ws` plus even half of `wt`, signed.
    pub fn hadd_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_binary_s(df, wd, ws, wt, hadd_s)
    }

    /// `HADD_U.df` — odd half of `ws` plus even half of `wt`, unsigned.
    pub fn hadd_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_binary_u(df, wd, ws, wt, hadd_u)
    }

    /// `HSUB_S.df` — odd half of `ws` minus even half of `wt`, signed.
    pub fn hsub_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_binary_s(df, wd, ws, wt, hsub_s)
    }

    /// `HSUB_U.df` — odd half of `ws` minus even half of `wt`, unsigned.
    pub fn hsub_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Byte);
        self.vec_binary_u(df, wd, ws, wt, hsub_u)
    }
}
