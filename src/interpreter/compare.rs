//! Lane-wise comparisons.
//!
//! A true comparison yields all ones at the lane width (−1), false
//! yields zero, so the results double as select masks.

use super::MsaUnit;
use crate::data_format::DataFormat;
use crate::error::Exception;
use crate::{RegisterId, Word};

const ALL_ONES: i64 = -1;

fn ceq(_df: DataFormat, a: i64, b: i64) -> i64 {
    if a == b {
        ALL_ONES
    } else {
        0
    }
}

fn clt_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    if a < b {
        ALL_ONES
    } else {
        0
    }
}

fn cle_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    if a <= b {
        ALL_ONES
    } else {
        0
    }
}

fn clt_u(_df: DataFormat, a: Word, b: Word) -> Word {
    if a < b {
        ALL_ONES as Word
    } else {
        0
    }
}

fn cle_u(_df: DataFormat, a: Word, b: Word) -> Word {
    if a <= b {
        ALL_ONES as Word
    } else {
        0
    }
}

impl<G> MsaUnit<G> {
    /// `CEQ.df` — lane equality mask.
    pub fn ceq(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_s(df, wd, ws, wt, ceq)
    }

    /// `CEQI.df` — lane equality mask against a broadcast immediate.
    pub fn ceqi(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: i64,
    ) -> Result<(), Exception> {
        self.vec_imm_s(df, wd, ws, imm, ceq)
    }

    /// `CLT_S.df` — signed less-than mask.
    pub fn clt_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_s(df, wd, ws, wt, clt_s)
    }

    /// `CLTI_S.df` — signed less-than mask against a broadcast immediate.
    pub fn clti_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: i64,
    ) -> Result<(), Exception> {
        self.vec_imm_s(df, wd, ws, imm, clt_s)
    }

    /// `CLT_U.df` — unsigned less-than mask.
    pub fn clt_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_u(df, wd, ws, wt, clt_u)
    }

    /// `CLTI_U.df` — unsigned less-than mask against a broadcast
    /// immediate.
    pub fn clti_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: Word,
    ) -> Result<(), Exception> {
        self.vec_imm_u(df, wd, ws, imm, clt_u)
    }

    /// `CLE_S.df` — signed less-or-equal mask.
    pub fn cle_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_s(df, wd, ws, wt, cle_s)
    }

    /// `CLEI_S.df` — signed less-or-equal mask against a broadcast
    /// immediate.
    pub fn clei_s(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: i64,
    ) -> Result<(), Exception> {
        self.vec_imm_s(df, wd, ws, imm, cle_s)
    }

    /// `CLE_U.df` — unsigned less-or-equal mask.
    pub fn cle_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        self.vec_binary_u(df, wd, ws, wt, cle_u)
    }

    /// `CLEI_U.df` — unsigned less-or-equal mask against a broadcast
    /// immediate.
    pub fn clei_u(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: Word,
    ) -> Result<(), Exception> {
        self.vec_imm_u(df, wd, ws, imm, cle_u)
    }
}
