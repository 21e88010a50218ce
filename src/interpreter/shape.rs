//! Cross-lane operations: interleave, pack, shuffle, slide, splat and
//! broadcast.
//!
//! Source and destination registers may alias, so every operation here
//! accumulates into a scratch vector and commits it in one step.

use super::{GeneralRegisters, MsaUnit};
use crate::data_format::DataFormat;
use crate::error::Exception;
use crate::register::VectorReg;
use crate::{RegisterId, Word};

impl<G> MsaUnit<G> {
    /// `ILVEV.df` — interleave the even lanes of `wt` (even output
    /// positions) and `ws` (odd output positions).
    pub fn ilvev(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        let mut out = VectorReg::zeroed();

        for i in 0..df.elements() / 2 {
            out.set_lane(df, 2 * i, self.load_unsigned(wt, df, 2 * i)?);
            out.set_lane(df, 2 * i + 1, self.load_unsigned(ws, df, 2 * i)?);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `ILVOD.df` — interleave the odd lanes of `wt` and `ws`.
    pub fn ilvod(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        let mut out = VectorReg::zeroed();

        for i in 0..df.elements() / 2 {
            out.set_lane(df, 2 * i, self.load_unsigned(wt, df, 2 * i + 1)?);
            out.set_lane(df, 2 * i + 1, self.load_unsigned(ws, df, 2 * i + 1)?);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `ILVR.df` — interleave the right (low) halves of `ws` and `wt`.
    pub fn ilvr(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        let mut out = VectorReg::zeroed();

        for i in 0..df.elements() / 2 {
            out.set_lane(df, 2 * i, self.load_unsigned(wt, df, i)?);
            out.set_lane(df, 2 * i + 1, self.load_unsigned(ws, df, i)?);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `ILVL.df` — interleave the left (high) halves of `ws` and `wt`.
    pub fn ilvl(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        let mut out = VectorReg::zeroed();
        let half = df.elements() / 2;

        for i in 0..half {
            out.set_lane(df, 2 * i, self.load_unsigned(wt, df, half + i)?);
            out.set_lane(df, 2 * i + 1, self.load_unsigned(ws, df, half + i)?);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `PCKEV.df` — pack even lanes: `wt`'s into the low half, `ws`'s
    /// into the high half.
    pub fn pckev(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        let mut out = VectorReg::zeroed();
        let half = df.elements() / 2;

        for i in 0..half {
            out.set_lane(df, i, self.load_unsigned(wt, df, 2 * i)?);
            out.set_lane(df, half + i, self.load_unsigned(ws, df, 2 * i)?);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `PCKOD.df` — pack odd lanes: `wt`'s into the low half, `ws`'s
    /// into the high half.
    pub fn pckod(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        let mut out = VectorReg::zeroed();
        let half = df.elements() / 2;

        for i in 0..half {
            out.set_lane(df, i, self.load_unsigned(wt, df, 2 * i + 1)?);
            out.set_lane(df, half + i, self.load_unsigned(ws, df, 2 * i + 1)?);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `VSHF.df` — per-lane table shuffle.
    ///
    /// The previous destination holds one selector per output lane: the
    /// low six bits index the concatenation `[wt, ws]` (modulo twice the
    /// lane count), and any of the two bits above forces a zero output.
    pub fn vshf(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        wt: RegisterId,
    ) -> Result<(), Exception> {
        let n = df.elements();
        let mut out = VectorReg::zeroed();

        for i in 0..n {
            let control = self.load_unsigned(wd, df, i)?;
            let k = (control & 0x3f) as usize % (2 * n);

            let value = if control & 0xc0 != 0 {
                0
            } else if k < n {
                self.load_unsigned(wt, df, k)?
            } else {
                self.load_unsigned(ws, df, k - n)?
            };

            out.set_lane(df, i, value);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `SHF.df` — shuffle within each aligned group of four lanes, two
    /// selector bits per lane. Defined for byte, half and word formats.
    pub fn shf(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        imm: Word,
    ) -> Result<(), Exception> {
        debug_assert!(df != DataFormat::Double);

        let mut out = VectorReg::zeroed();

        for i in 0..df.elements() {
            let source = (i & !3) | ((imm >> (2 * (i & 3))) & 3) as usize;
            out.set_lane(df, i, self.load_unsigned(ws, df, source)?);
        }

        self.commit(wd, out);

        Ok(())
    }

    /// `SLDI.df` — slide by an immediate element count.
    pub fn sldi(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        n: usize,
    ) -> Result<(), Exception> {
        self.slide(df, wd, ws, n)
    }

    /// `SPLATI.df` — broadcast the lane selected by an immediate.
    pub fn splati(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        n: usize,
    ) -> Result<(), Exception> {
        self.broadcast_lane(df, wd, ws, n)
    }

    /// `LDI.df` — broadcast a 10-bit immediate, pre-sign-extended by the
    /// decoder, to every lane.
    pub fn ldi(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        s10: i64,
    ) -> Result<(), Exception> {
        for i in 0..df.elements() {
            self.store(wd, df, i, s10 as Word)?;
        }

        self.mark_modified(wd);

        Ok(())
    }

    /// `MOVE.V` — whole-register copy.
    pub fn move_v(&mut self, wd: RegisterId, ws: RegisterId) -> Result<(), Exception> {
        let value = self.registers[ws];
        self.commit(wd, value);

        Ok(())
    }

    /// The slide core: registers are viewed as `2^df` rows of
    /// `lanes(df)` bytes; within each row the bytes of `[ws-row ++
    /// wd-row]` shift down by `n` columns. A zero count reduces to a
    /// register move.
    fn slide(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        n: usize,
    ) -> Result<(), Exception> {
        let n = n % df.elements();
        Self::check_index(df, n)?;

        let row = df.elements();
        let src = *self.registers[ws].as_bytes();
        let dest = *self.registers[wd].as_bytes();

        let mut out = VectorReg::zeroed();
        for r in 0..df.lane_bytes() {
            let base = r * row;
            for j in 0..row {
                let k = j + n;
                out.as_bytes_mut()[base + j] = if k < row {
                    src[base + k]
                } else {
                    dest[base + k - row]
                };
            }
        }

        self.commit(wd, out);

        Ok(())
    }

    fn broadcast_lane(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        n: usize,
    ) -> Result<(), Exception> {
        let n = n % df.elements();
        Self::check_index(df, n)?;

        let value = self.load_unsigned(ws, df, n)?;

        let mut out = VectorReg::zeroed();
        for i in 0..df.elements() {
            out.set_lane(df, i, value);
        }

        self.commit(wd, out);

        Ok(())
    }
}

impl<G> MsaUnit<G>
where
    G: GeneralRegisters,
{
    /// `SLD.df` — slide by an element count read from general-purpose
    /// register `rt`.
    pub fn sld(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        rt: RegisterId,
    ) -> Result<(), Exception> {
        let n = self.gpr.gpr(rt) as usize;
        self.slide(df, wd, ws, n)
    }

    /// `SPLAT.df` — broadcast the lane selected by general-purpose
    /// register `rt`.
    pub fn splat(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        ws: RegisterId,
        rt: RegisterId,
    ) -> Result<(), Exception> {
        let n = self.gpr.gpr(rt) as usize;
        self.broadcast_lane(df, wd, ws, n)
    }

    /// `FILL.df` — broadcast the low lane-width bits of general-purpose
    /// register `rs` to every lane.
    pub fn fill(
        &mut self,
        df: DataFormat,
        wd: RegisterId,
        rs: RegisterId,
    ) -> Result<(), Exception> {
        let value = self.gpr.gpr(rs);

        for i in 0..df.elements() {
            self.store(wd, df, i, value)?;
        }

        self.mark_modified(wd);

        Ok(())
    }
}
