//! Guest-visible trap taxonomy.

use thiserror::Error;

/// Guest exception raised by a vector helper.
///
/// Raising is modeled as an error return: the helper writes nothing
/// observable to the destination register and does not touch the
/// modified-register bitmap. The embedding emulator converts the value
/// into its architectural exception delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[repr(u8)]
pub enum Exception {
    /// Reserved-instruction trap: an element index derived from a guest
    /// register falls outside the lane range of the selected format.
    #[error("reserved instruction")]
    ReservedInstruction = 0x01,
}
