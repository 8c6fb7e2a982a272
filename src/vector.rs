//! Authentication vector assembly
//!
//! Decodes K and OP from hex, derives OPc, draws a fresh RAND, runs
//! f1 and f2345, and assembles AUTN = (SQN XOR AK) || AMF || MAC-A.
//! SQN and AMF are fixed to zero: no sequence-number state is kept
//! across calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aes::BLOCK_SIZE;
use crate::error::{MilenageError, MilenageResult};
use crate::milenage::{
    compute_opc, Milenage, AMF_SIZE, KEY_SIZE, OP_SIZE, RAND_SIZE, SQN_SIZE,
};
use crate::rng::{OsRand, RandSource};

/// AUTN size in bytes: (SQN XOR AK) || AMF || MAC-A
pub const AUTN_SIZE: usize = 16;

/// A 3G authentication vector, all fields lower-case hex.
///
/// Field lengths: RAND/CK/IK/AUTN 32 hex chars, XRES 16.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AuthVector {
    /// Random challenge
    pub rand: String,
    /// Expected user response (f2 output)
    pub xres: String,
    /// Confidentiality key (f3 output)
    pub ck: String,
    /// Integrity key (f4 output)
    pub ik: String,
    /// Authentication token: (SQN XOR AK) || AMF || MAC-A
    pub autn: String,
}

/// Decode a hex field into a fixed-size array, rejecting bad digits,
/// odd length, and wrong decoded length before any cipher work.
fn decode_fixed<const N: usize>(field: &'static str, hex_str: &str) -> MilenageResult<[u8; N]> {
    let bytes = hex::decode(hex_str).map_err(|source| MilenageError::InvalidHex { field, source })?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| MilenageError::InvalidLength {
        field,
        expected: N,
        actual,
    })
}

/// Generate a 3G authentication vector from K and OP hex strings,
/// drawing RAND from the operating system.
pub fn generate_auth_vector(key_hex: &str, op_hex: &str) -> MilenageResult<AuthVector> {
    generate_auth_vector_with(key_hex, op_hex, &mut OsRand)
}

/// Generate a 3G authentication vector with an explicit RAND source.
///
/// Everything except the RAND draw is a pure function of K and OP;
/// passing a deterministic source makes the whole vector reproducible.
pub fn generate_auth_vector_with(
    key_hex: &str,
    op_hex: &str,
    rng: &mut impl RandSource,
) -> MilenageResult<AuthVector> {
    let k: [u8; KEY_SIZE] = decode_fixed("key", key_hex)?;
    let op: [u8; OP_SIZE] = decode_fixed("op", op_hex)?;

    // No persisted sequence-number state: SQN and AMF are always zero
    let sqn = [0u8; SQN_SIZE];
    let amf = [0u8; AMF_SIZE];

    let opc = compute_opc(&k, &op);

    let mut rand = [0u8; RAND_SIZE];
    rng.fill(&mut rand)?;

    let m = Milenage::new(&k, &opc);
    let mac_a = m.f1(&rand, &sqn, &amf);
    let (res, ck, ik, ak) = m.f2345(&rand);

    let mut autn = [0u8; AUTN_SIZE];
    for i in 0..SQN_SIZE {
        autn[i] = sqn[i] ^ ak[i];
    }
    autn[SQN_SIZE..SQN_SIZE + AMF_SIZE].copy_from_slice(&amf);
    autn[SQN_SIZE + AMF_SIZE..].copy_from_slice(&mac_a);

    debug!(rand = %hex::encode(rand), "generated authentication vector");

    Ok(AuthVector {
        rand: hex::encode(rand),
        xres: hex::encode(res),
        ck: hex::encode(ck),
        ik: hex::encode(ik),
        autn: hex::encode(autn),
    })
}

// AUTN must always fill one cipher block
const _: () = assert!(AUTN_SIZE == BLOCK_SIZE);
