//! MILENAGE algorithm set (3GPP TS 35.206)
//!
//! The set comprises the network authentication function f1/f1* and
//! the key derivation functions f2..f5 and f5*, all built from a
//! single AES-128 block encryption per evaluation:
//!
//! - f1/f1*: MAC-A / MAC-S over RAND, SQN, AMF
//! - f2: RES (user response)
//! - f3: CK (confidentiality key)
//! - f4: IK (integrity key)
//! - f5: AK (anonymity key)
//! - f5*: AK for re-synchronization
//!
//! Constants fixed to the TS 35.206 section 4.1 reference
//! configuration. Test vectors from TS 35.207.

use crate::aes::{xor_block, Aes128Block, BLOCK_SIZE};

/// K size in bytes (128 bits)
pub const KEY_SIZE: usize = 16;

/// OP/OPc size in bytes (128 bits)
pub const OP_SIZE: usize = 16;

/// RAND size in bytes (128 bits)
pub const RAND_SIZE: usize = 16;

/// SQN size in bytes (48 bits)
pub const SQN_SIZE: usize = 6;

/// AMF size in bytes (16 bits)
pub const AMF_SIZE: usize = 2;

/// MAC-A/MAC-S size in bytes (64 bits)
pub const MAC_SIZE: usize = 8;

/// RES size in bytes (64 bits)
pub const RES_SIZE: usize = 8;

/// CK size in bytes (128 bits)
pub const CK_SIZE: usize = 16;

/// IK size in bytes (128 bits)
pub const IK_SIZE: usize = 16;

/// AK size in bytes (48 bits)
pub const AK_SIZE: usize = 6;

/// Rotation amounts r1..r5 in bits (TS 35.206 section 4.1)
const R: [usize; 5] = [64, 0, 32, 64, 96];

/// Additive constants c1..c5 as 128-bit big-endian values 0, 1, 2, 4, 8
const C: [[u8; BLOCK_SIZE]; 5] = {
    let mut c = [[0u8; BLOCK_SIZE]; 5];
    c[1][BLOCK_SIZE - 1] = 0x01;
    c[2][BLOCK_SIZE - 1] = 0x02;
    c[3][BLOCK_SIZE - 1] = 0x04;
    c[4][BLOCK_SIZE - 1] = 0x08;
    c
};

/// Rotate a 16-byte block left by `bits` positions.
///
/// The block is treated as a 128-bit big-endian integer; bits shifted
/// out the top re-enter at the bottom. Rotation amount is taken
/// modulo 128, so rotating by 0 or 128 is the identity.
pub fn rotate_left(block: &[u8; BLOCK_SIZE], bits: usize) -> [u8; BLOCK_SIZE] {
    let bits = bits % 128;
    let byte_shift = bits / 8;
    let bit_shift = bits % 8;

    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        let hi = block[(i + byte_shift) % BLOCK_SIZE];
        if bit_shift == 0 {
            out[i] = hi;
        } else {
            let lo = block[(i + byte_shift + 1) % BLOCK_SIZE];
            out[i] = (hi << bit_shift) | (lo >> (8 - bit_shift));
        }
    }
    out
}

/// Derive OPc from K and OP.
///
/// OPc = E_K(OP) XOR OP. Deterministic; recomputed from the supplied
/// K and OP on every call, never persisted.
pub fn compute_opc(k: &[u8; KEY_SIZE], op: &[u8; OP_SIZE]) -> [u8; OP_SIZE] {
    let mut opc = Aes128Block::new(k).encrypt(op);
    xor_block(&mut opc, op);
    opc
}

/// MILENAGE context: the key-scheduled cipher plus OPc.
///
/// All methods are pure over `&self`; a context is safe to share
/// across threads.
#[derive(Clone)]
pub struct Milenage {
    cipher: Aes128Block,
    opc: [u8; OP_SIZE],
}

impl Milenage {
    /// Create a context from K and a pre-computed OPc.
    pub fn new(k: &[u8; KEY_SIZE], opc: &[u8; OP_SIZE]) -> Self {
        Self {
            cipher: Aes128Block::new(k),
            opc: *opc,
        }
    }

    /// Create a context from K and OP, deriving OPc internally.
    pub fn new_with_op(k: &[u8; KEY_SIZE], op: &[u8; OP_SIZE]) -> Self {
        let opc = compute_opc(k, op);
        Self::new(k, &opc)
    }

    /// TEMP = E_K(RAND XOR OPc), shared by all functions.
    fn temp(&self, rand: &[u8; RAND_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut temp = *rand;
        xor_block(&mut temp, &self.opc);
        self.cipher.encrypt_block(&mut temp);
        temp
    }

    /// OUT1 = E_K(TEMP XOR rot(IN1 XOR OPc, r1) XOR c1) XOR OPc
    /// with IN1 = SQN || AMF || SQN || AMF.
    fn out1(
        &self,
        rand: &[u8; RAND_SIZE],
        sqn: &[u8; SQN_SIZE],
        amf: &[u8; AMF_SIZE],
    ) -> [u8; BLOCK_SIZE] {
        let temp = self.temp(rand);

        let mut in1 = [0u8; BLOCK_SIZE];
        in1[0..6].copy_from_slice(sqn);
        in1[6..8].copy_from_slice(amf);
        in1[8..14].copy_from_slice(sqn);
        in1[14..16].copy_from_slice(amf);

        xor_block(&mut in1, &self.opc);
        let mut block = rotate_left(&in1, R[0]);
        xor_block(&mut block, &temp);
        xor_block(&mut block, &C[0]);
        self.cipher.encrypt_block(&mut block);
        xor_block(&mut block, &self.opc);
        block
    }

    /// OUTn = E_K(rot(TEMP XOR OPc, r_n) XOR c_n) XOR OPc, for the
    /// f2345 family (`n` is the zero-based index into R and C).
    fn out_n(&self, temp: &[u8; BLOCK_SIZE], n: usize) -> [u8; BLOCK_SIZE] {
        let mut mixed = *temp;
        xor_block(&mut mixed, &self.opc);
        let mut block = rotate_left(&mixed, R[n]);
        xor_block(&mut block, &C[n]);
        self.cipher.encrypt_block(&mut block);
        xor_block(&mut block, &self.opc);
        block
    }

    /// f1: network authentication, MAC-A = OUT1[0..8].
    pub fn f1(
        &self,
        rand: &[u8; RAND_SIZE],
        sqn: &[u8; SQN_SIZE],
        amf: &[u8; AMF_SIZE],
    ) -> [u8; MAC_SIZE] {
        let out1 = self.out1(rand, sqn, amf);
        let mut mac_a = [0u8; MAC_SIZE];
        mac_a.copy_from_slice(&out1[0..8]);
        mac_a
    }

    /// f1*: re-synchronization authentication, MAC-S = OUT1[8..16].
    pub fn f1_star(
        &self,
        rand: &[u8; RAND_SIZE],
        sqn: &[u8; SQN_SIZE],
        amf: &[u8; AMF_SIZE],
    ) -> [u8; MAC_SIZE] {
        let out1 = self.out1(rand, sqn, amf);
        let mut mac_s = [0u8; MAC_SIZE];
        mac_s.copy_from_slice(&out1[8..16]);
        mac_s
    }

    /// f2: user response, RES = OUT2[8..16].
    pub fn f2(&self, rand: &[u8; RAND_SIZE]) -> [u8; RES_SIZE] {
        let out2 = self.out_n(&self.temp(rand), 1);
        let mut res = [0u8; RES_SIZE];
        res.copy_from_slice(&out2[8..16]);
        res
    }

    /// f3: confidentiality key, CK = OUT3.
    pub fn f3(&self, rand: &[u8; RAND_SIZE]) -> [u8; CK_SIZE] {
        self.out_n(&self.temp(rand), 2)
    }

    /// f4: integrity key, IK = OUT4.
    pub fn f4(&self, rand: &[u8; RAND_SIZE]) -> [u8; IK_SIZE] {
        self.out_n(&self.temp(rand), 3)
    }

    /// f5: anonymity key, AK = OUT2[0..6].
    pub fn f5(&self, rand: &[u8; RAND_SIZE]) -> [u8; AK_SIZE] {
        let out2 = self.out_n(&self.temp(rand), 1);
        let mut ak = [0u8; AK_SIZE];
        ak.copy_from_slice(&out2[0..6]);
        ak
    }

    /// f5*: re-synchronization anonymity key, AK = OUT5[0..6].
    ///
    /// Only f5* uses the fifth evaluation (c5/r5); the regular f5
    /// shares OUT2 with f2.
    pub fn f5_star(&self, rand: &[u8; RAND_SIZE]) -> [u8; AK_SIZE] {
        let out5 = self.out_n(&self.temp(rand), 4);
        let mut ak = [0u8; AK_SIZE];
        ak.copy_from_slice(&out5[0..6]);
        ak
    }

    /// f2..f5 combined: (RES, CK, IK, AK) from one shared TEMP.
    ///
    /// Computes TEMP once instead of four times, which matters when a
    /// full vector is assembled per call.
    pub fn f2345(
        &self,
        rand: &[u8; RAND_SIZE],
    ) -> ([u8; RES_SIZE], [u8; CK_SIZE], [u8; IK_SIZE], [u8; AK_SIZE]) {
        let temp = self.temp(rand);
        let out2 = self.out_n(&temp, 1);
        let ck = self.out_n(&temp, 2);
        let ik = self.out_n(&temp, 3);

        let mut res = [0u8; RES_SIZE];
        res.copy_from_slice(&out2[8..16]);
        let mut ak = [0u8; AK_SIZE];
        ak.copy_from_slice(&out2[0..6]);

        (res, ck, ik, ak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSet {
        k: [u8; 16],
        rand: [u8; 16],
        sqn: [u8; 6],
        amf: [u8; 2],
        op: [u8; 16],
        opc: [u8; 16],
        f1: [u8; 8],
        f1_star: [u8; 8],
        f2: [u8; 8],
        f3: [u8; 16],
        f4: [u8; 16],
        f5: [u8; 6],
        f5_star: [u8; 6],
    }

    /// 3GPP TS 35.207 Test Set 1
    fn test_set_1() -> TestSet {
        TestSet {
            k: [
                0x46, 0x5b, 0x5c, 0xe8, 0xb1, 0x99, 0xb4, 0x9f,
                0xaa, 0x5f, 0x0a, 0x2e, 0xe2, 0x38, 0xa6, 0xbc,
            ],
            rand: [
                0x23, 0x55, 0x3c, 0xbe, 0x96, 0x37, 0xa8, 0x9d,
                0x21, 0x8a, 0xe6, 0x4d, 0xae, 0x47, 0xbf, 0x35,
            ],
            sqn: [0xff, 0x9b, 0xb4, 0xd0, 0xb6, 0x07],
            amf: [0xb9, 0xb9],
            op: [
                0xcd, 0xc2, 0x02, 0xd5, 0x12, 0x3e, 0x20, 0xf6,
                0x2b, 0x6d, 0x67, 0x6a, 0xc7, 0x2c, 0xb3, 0x18,
            ],
            opc: [
                0xcd, 0x63, 0xcb, 0x71, 0x95, 0x4a, 0x9f, 0x4e,
                0x48, 0xa5, 0x99, 0x4e, 0x37, 0xa0, 0x2b, 0xaf,
            ],
            f1: [0x4a, 0x9f, 0xfa, 0xc3, 0x54, 0xdf, 0xaf, 0xb3],
            f1_star: [0x01, 0xcf, 0xaf, 0x9e, 0xc4, 0xe8, 0x71, 0xe9],
            f2: [0xa5, 0x42, 0x11, 0xd5, 0xe3, 0xba, 0x50, 0xbf],
            f3: [
                0xb4, 0x0b, 0xa9, 0xa3, 0xc5, 0x8b, 0x2a, 0x05,
                0xbb, 0xf0, 0xd9, 0x87, 0xb2, 0x1b, 0xf8, 0xcb,
            ],
            f4: [
                0xf7, 0x69, 0xbc, 0xd7, 0x51, 0x04, 0x46, 0x04,
                0x12, 0x76, 0x72, 0x71, 0x1c, 0x6d, 0x34, 0x41,
            ],
            f5: [0xaa, 0x68, 0x9c, 0x64, 0x83, 0x70],
            f5_star: [0x45, 0x1e, 0x8b, 0xec, 0xa4, 0x3b],
        }
    }

    /// 3GPP TS 35.207 Test Set 3
    fn test_set_3() -> TestSet {
        TestSet {
            k: [
                0xfe, 0xc8, 0x6b, 0xa6, 0xeb, 0x70, 0x7e, 0xd0,
                0x89, 0x05, 0x75, 0x7b, 0x1b, 0xb4, 0x4b, 0x8f,
            ],
            rand: [
                0x9f, 0x7c, 0x8d, 0x02, 0x1a, 0xcc, 0xf4, 0xdb,
                0x21, 0x3c, 0xcf, 0xf0, 0xc7, 0xf7, 0x1a, 0x6a,
            ],
            sqn: [0x9d, 0x02, 0x77, 0x59, 0x5f, 0xfc],
            amf: [0x72, 0x5c],
            op: [
                0xdb, 0xc5, 0x9a, 0xdc, 0xb6, 0xf9, 0xa0, 0xef,
                0x73, 0x54, 0x77, 0xb7, 0xfa, 0xdf, 0x83, 0x74,
            ],
            opc: [
                0x10, 0x06, 0x02, 0x0f, 0x0a, 0x47, 0x8b, 0xf6,
                0xb6, 0x99, 0xf1, 0x5c, 0x06, 0x2e, 0x42, 0xb3,
            ],
            f1: [0x9c, 0xab, 0xc3, 0xe9, 0x9b, 0xaf, 0x72, 0x81],
            f1_star: [0x95, 0x81, 0x4b, 0xa2, 0xb3, 0x04, 0x43, 0x24],
            f2: [0x80, 0x11, 0xc4, 0x8c, 0x0c, 0x21, 0x4e, 0xd2],
            f3: [
                0x5d, 0xbd, 0xbb, 0x29, 0x54, 0xe8, 0xf3, 0xcd,
                0xe6, 0x65, 0xb0, 0x46, 0x17, 0x9a, 0x50, 0x98,
            ],
            f4: [
                0x59, 0xa9, 0x2d, 0x3b, 0x47, 0x6a, 0x04, 0x43,
                0x48, 0x70, 0x55, 0xcf, 0x88, 0xb2, 0x30, 0x7b,
            ],
            f5: [0x33, 0x48, 0x4d, 0xc2, 0x13, 0x6b],
            f5_star: [0xde, 0xac, 0xdd, 0x84, 0x8c, 0xc6],
        }
    }

    fn check_test_set(ts: &TestSet) {
        let opc = compute_opc(&ts.k, &ts.op);
        assert_eq!(opc, ts.opc, "OPc mismatch");

        let m = Milenage::new(&ts.k, &opc);
        assert_eq!(m.f1(&ts.rand, &ts.sqn, &ts.amf), ts.f1, "f1 mismatch");
        assert_eq!(
            m.f1_star(&ts.rand, &ts.sqn, &ts.amf),
            ts.f1_star,
            "f1* mismatch"
        );
        assert_eq!(m.f2(&ts.rand), ts.f2, "f2 mismatch");
        assert_eq!(m.f3(&ts.rand), ts.f3, "f3 mismatch");
        assert_eq!(m.f4(&ts.rand), ts.f4, "f4 mismatch");
        assert_eq!(m.f5(&ts.rand), ts.f5, "f5 mismatch");
        assert_eq!(m.f5_star(&ts.rand), ts.f5_star, "f5* mismatch");
    }

    #[test]
    fn test_3gpp_test_set_1() {
        check_test_set(&test_set_1());
    }

    #[test]
    fn test_3gpp_test_set_3() {
        check_test_set(&test_set_3());
    }

    /// f2345 must agree with the individual functions and pin f5 to
    /// the OUT2-derived AK (the OUT5 derivation belongs to f5* only).
    #[test]
    fn test_f2345_matches_individual_functions() {
        let ts = test_set_1();
        let m = Milenage::new_with_op(&ts.k, &ts.op);

        let (res, ck, ik, ak) = m.f2345(&ts.rand);
        assert_eq!(res, ts.f2);
        assert_eq!(ck, ts.f3);
        assert_eq!(ik, ts.f4);
        assert_eq!(ak, ts.f5);

        // The two AK derivations must differ for the same inputs
        assert_ne!(ak, m.f5_star(&ts.rand));
    }

    #[test]
    fn test_compute_opc_deterministic() {
        let ts = test_set_1();
        assert_eq!(compute_opc(&ts.k, &ts.op), compute_opc(&ts.k, &ts.op));
    }

    #[test]
    fn test_rotate_left_identities() {
        let block: [u8; 16] = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
            0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
        ];

        assert_eq!(rotate_left(&block, 0), block);
        assert_eq!(rotate_left(&block, 128), block);

        // Rotating by r then 128 - r restores the input
        for r in 1..128 {
            let round_trip = rotate_left(&rotate_left(&block, r), 128 - r);
            assert_eq!(round_trip, block, "round trip failed for r = {r}");
        }
    }

    #[test]
    fn test_rotate_left_by_8_bits() {
        let block: [u8; 16] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
            0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        ];
        let expected: [u8; 16] = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
            0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x00,
        ];
        assert_eq!(rotate_left(&block, 8), expected);
    }

    #[test]
    fn test_rotate_left_sub_byte_shift() {
        // 0x8000..01 rotated by 1 bit: top bit wraps to the bottom
        let mut block = [0u8; 16];
        block[0] = 0x80;
        block[15] = 0x01;

        let mut expected = [0u8; 16];
        expected[14] = 0x02;
        expected[15] = 0x01;
        assert_eq!(rotate_left(&block, 1), expected);
    }

    #[test]
    fn test_constant_tables() {
        assert_eq!(R, [64, 0, 32, 64, 96]);
        assert_eq!(C[0], [0u8; 16]);
        for (i, value) in [(1usize, 0x01u8), (2, 0x02), (3, 0x04), (4, 0x08)] {
            let mut expected = [0u8; 16];
            expected[15] = value;
            assert_eq!(C[i], expected, "c{} mismatch", i + 1);
        }
    }
}
