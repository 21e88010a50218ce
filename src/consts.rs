//! Vector unit parameters

/// Width of a vector register, in bits.
pub const MSA_WRLEN: usize = 128;

/// Width of a vector register, in bytes.
pub const MSA_WRLEN_BYTES: usize = MSA_WRLEN / 8;

/// Number of vector registers in the bank.
pub const MSA_REGISTER_COUNT: usize = 32;

/// Number of general-purpose registers visible through the read seam.
pub const GPR_COUNT: usize = 32;

/// Write-protect tracking enable bit of the `MSAIR` configuration word.
///
/// While set, every helper that writes a vector register also sets the
/// destination's bit in the modified-register bitmap.
pub const MSAIR_WRP: u32 = 0x01;
