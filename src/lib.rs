//! 3G/UMTS authentication vector generation
//!
//! Implements the MILENAGE algorithm set (3GPP TS 35.206) on top of
//! AES-128:
//! - OPc derivation from K and OP
//! - f1/f1* network authentication (MAC-A/MAC-S)
//! - f2..f5 response and key derivation (RES, CK, IK, AK)
//! - f5* re-synchronization anonymity key
//! - Authentication vector assembly {RAND, XRES, CK, IK, AUTN}
//!
//! Test vectors from 3GPP TS 35.207.

pub mod aes;
pub mod error;
pub mod milenage;
pub mod rng;
pub mod vector;

pub use error::{MilenageError, MilenageResult};
pub use milenage::{compute_opc, rotate_left, Milenage};
pub use rng::{OsRand, RandSource};
pub use vector::{generate_auth_vector, generate_auth_vector_with, AuthVector};
