//! RISC-V Vector Encodings (V, Zvbb, Zvbc, Zvkb, Zvf*, Zvk*).
//!
//! Vector arithmetic uses the OP-V major opcode with a `funct6` operation
//! selector and a `funct3` operand-category selector; the vector
//! cryptography suites (Zvkg, Zvkned, Zvknh, Zvksed, Zvksh) use the OP-VE
//! major opcode with the same field layout. Unary operations encode the
//! concrete operation in the vs1 field.

/// Vector arithmetic and configuration major opcode (OP-V).
pub const OP_V: u32 = 0b1010111;

/// Vector cryptography major opcode (OP-VE).
pub const OP_VE: u32 = 0b1110111;

/// Unmasked operation (vm bit set).
pub const VM_UNMASKED: u32 = 1;

/// Operand-category function codes (funct3).
pub mod funct3 {
    /// Vector-vector integer operands (OPIVV).
    pub const OPIVV: u32 = 0b000;
    /// Vector-vector floating-point operands (OPFVV).
    pub const OPFVV: u32 = 0b001;
    /// Vector-vector mask/integer operands (OPMVV).
    pub const OPMVV: u32 = 0b010;
    /// Configuration instructions (VSETVLI/VSETIVLI).
    pub const OPCFG: u32 = 0b111;
}

/// Operation selectors (funct6).
pub mod funct6 {
    /// Vector bitwise AND.
    pub const VAND: u32 = 0b001001;
    /// Vector bitwise AND-NOT (Zvkb/Zvbb).
    pub const VANDN: u32 = 0b000001;
    /// Vector single-width floating-point add.
    pub const VFADD: u32 = 0b000000;
    /// Integer unary group (VCTZ et al.; operation in vs1) - Zvbb.
    pub const VXUNARY: u32 = 0b010010;
    /// Floating-point unary group (VFWCVT et al.; operation in vs1).
    pub const VFUNARY0: u32 = 0b010010;
    /// Vector carry-less multiply (Zvbc).
    pub const VCLMUL: u32 = 0b001100;
    /// Vector GHASH add-multiply (Zvkg).
    pub const VGHSH: u32 = 0b101100;
    /// Vector AES round group (vaes*, vsm4r; operation in vs1) - Zvkned/Zvksed.
    pub const VAES: u32 = 0b101000;
    /// Vector SHA-2 message schedule (Zvknha/Zvknhb).
    pub const VSHA2MS: u32 = 0b101101;
    /// Vector SM3 message expansion (Zvksh).
    pub const VSM3ME: u32 = 0b100000;
}

/// vs1 selectors for the unary operation groups.
pub mod vs1 {
    /// Count trailing zeros (VCTZ.V, in VXUNARY) - Zvbb.
    pub const VCTZ: u32 = 0b01101;
    /// Widening float-to-float convert (VFWCVT.F.F.V, in VFUNARY0).
    pub const VFWCVT_F_F: u32 = 0b01100;
    /// AES encrypt final round, vector-vector (VAESEF.VV, in VAES).
    pub const VAESEF: u32 = 0b00011;
    /// SM4 rounds, vector-vector (VSM4R.VV, in VAES).
    pub const VSM4R: u32 = 0b10000;
}

/// Selected element width for the vtype configuration field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sew {
    /// 8-bit elements.
    E8 = 0b000,
    /// 16-bit elements.
    E16 = 0b001,
    /// 32-bit elements.
    E32 = 0b010,
    /// 64-bit elements.
    E64 = 0b011,
}

impl Sew {
    /// Returns the vtype immediate for this element width with LMUL=1 and
    /// undisturbed tail/mask policy.
    #[inline]
    pub const fn vtype(self) -> u32 {
        (self as u32) << 3
    }
}
