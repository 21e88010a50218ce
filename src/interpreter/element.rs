//! Element access substrate and per-family dispatch loops.
//!
//! Every lane read or write funnels through the accessors here: the index
//! is reduced modulo the lane count, then checked, then converted with
//! explicit endianness by [`VectorReg`]. The `vec_*` combinators drive a
//! scalar kernel across all lanes of the selected format and maintain the
//! modified-register bitmap after the last store.

use super::MsaUnit;
use crate::data_format::DataFormat;
use crate::error::Exception;
use crate::register::VectorReg;
use crate::{RegisterId, Word};

use tracing::trace;

impl<G> MsaUnit<G> {
    /// Reject element indices outside the lane range of `df`.
    ///
    /// Reachable with guest-controlled values only through the slide and
    /// splat entry points; everything else supplies loop indices.
    pub(crate) fn check_index(df: DataFormat, n: usize) -> Result<(), Exception> {
        if n >= df.elements() {
            trace!(?df, index = n, "element index outside lane range");
            return Err(Exception::ReservedInstruction);
        }

        Ok(())
    }

    /// Lane `i` of register `reg`, zero-extended to 64 bits.
    pub(crate) fn load_unsigned(
        &self,
        reg: RegisterId,
        df: DataFormat,
        i: usize,
    ) -> Result<Word, Exception> {
        let i = i % df.elements();
        Self::check_index(df, i)?;

        Ok(self.registers[reg].lane_unsigned(df, i))
    }

    /// Lane `i` of register `reg`, sign-extended to 64 bits.
    pub(crate) fn load_signed(
        &self,
        reg: RegisterId,
        df: DataFormat,
        i: usize,
    ) -> Result<i64, Exception> {
        let i = i % df.elements();
        Self::check_index(df, i)?;

        Ok(self.registers[reg].lane_signed(df, i))
    }

    /// Store the low `df.bits()` bits of `value` into lane `i` of `reg`.
    pub(crate) fn store(
        &mut self,
        reg: RegisterId,
        df: DataFormat,
        i: usize,
        value: Word,
    ) -> Result<(), Exception> {
        let i = i % df.elements();
        Self::check_index(df, i)?;

        self.registers[reg].set_lane(df, i, value);

        Ok(())
    }

    /// Record a completed write of `wd` while write-protect tracking is
    /// enabled.
    pub(crate) fn mark_modified(&mut self, wd: RegisterId) {
        if self.wrp_enabled() {
            self.msamodify |= 1 << wd;
        }
    }

    /// Replace `wd` with an accumulated scratch vector.
    ///
    /// Shape helpers build their result off to the side so that aliased
    /// source and destination registers observe a single atomic update.
    pub(crate) fn commit(&mut self, wd: RegisterId, scratch: VectorReg) {
        self.registers[wd] = scratch;
        self.mark_modified(wd);
    }

    pub(crate) fn vec_binary_s<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, i64, i64) -> i64,
    {
        for i in 0..df.elements() {
            let a = self.load_signed(ws, df, i)?;
            let b = self.load_signed(wt, df, i)?;

            self.store(wd, df, i, f(df, a, b) as Word)?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    pub(crate) fn vec_binary_u<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, Word, Word) -> Word,
    {
        for i in 0..df.elements() {
            let a = self.load_unsigned(ws, df, i)?;
            let b = self.load_unsigned(wt, df, i)?;

            self.store(wd, df, i, f(df, a, b))?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    /// Binary loop that also feeds the previous destination lane to the
    /// kernel, for the accumulating families.
    pub(crate) fn vec_ternary_s<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, i64, i64, i64) -> i64,
    {
        for i in 0..df.elements() {
            let dest = self.load_signed(wd, df, i)?;
            let a = self.load_signed(ws, df, i)?;
            let b = self.load_signed(wt, df, i)?;

            self.store(wd, df, i, f(df, dest, a, b) as Word)?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    pub(crate) fn vec_ternary_u<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, Word, Word, Word) -> Word,
    {
        for i in 0..df.elements() {
            let dest = self.load_unsigned(wd, df, i)?;
            let a = self.load_unsigned(ws, df, i)?;
            let b = self.load_unsigned(wt, df, i)?;

            self.store(wd, df, i, f(df, dest, a, b))?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    /// Binary loop with the second operand replaced by a broadcast
    /// immediate, pre-extended to 64 bits by the decoder.
    pub(crate) fn vec_imm_s<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: i64,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, i64, i64) -> i64,
    {
        for i in 0..df.elements() {
            let a = self.load_signed(ws, df, i)?;

            self.store(wd, df, i, f(df, a, imm) as Word)?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    pub(crate) fn vec_imm_u<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: Word,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, Word, Word) -> Word,
    {
        for i in 0..df.elements() {
            let a = self.load_unsigned(ws, df, i)?;

            self.store(wd, df, i, f(df, a, imm))?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    /// Immediate loop that also feeds the previous destination lane, for
    /// the immediate bit-insert forms.
    pub(crate) fn vec_imm_ternary_u<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: Word,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, Word, Word, Word) -> Word,
    {
        for i in 0..df.elements() {
            let dest = self.load_unsigned(wd, df, i)?;
            let a = self.load_unsigned(ws, df, i)?;

            self.store(wd, df, i, f(df, dest, a, imm))?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    pub(crate) fn vec_unary_u<F>(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(DataFormat, Word) -> Word,
    {
        for i in 0..df.elements() {
            let a = self.load_unsigned(ws, df, i)?;

            self.store(wd, df, i, f(df, a))?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    /// Whole-register bitwise loop over the two 64-bit halves.
    pub(crate) fn vec_bitwise<F>(
        &mut self,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(Word, Word) -> Word,
    {
        self.vec_binary_u(DataFormat::Double, wd, ws, wt, |_, a, b| f(a, b))
    }

    /// Whole-register bitwise loop that also reads the previous
    /// destination, for the bit-move and bit-select family.
    pub(crate) fn vec_bitwise_ternary<F>(
        &mut self,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
        f: F,
    ) -> Result<(), Exception>
    where
        F: Fn(Word, Word, Word) -> Word,
    {
        self.vec_ternary_u(DataFormat::Double, wd, ws, wt, |_, dest, a, b| {
            f(dest, a, b)
        })
    }
}
