//! The fixed molecule catalog.
//!
//! One instance per species, shared by reference across every equation that
//! uses it. Atom order defines the display symbol (see
//! [`Molecule`](crate::model::molecule::Molecule)) and the order atom counts
//! are reported in.

use crate::model::element::Element::{C, Cl, F, H, N, O, P, S};
use crate::model::molecule::Molecule;
use std::sync::LazyLock;

pub static C_SOLID: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C]));
pub static S_SOLID: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[S]));
pub static P4: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[P, P, P, P]));

pub static H2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[H, H]));
pub static N2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[N, N]));
pub static O2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[O, O]));
pub static F2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[F, F]));
pub static CL2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[Cl, Cl]));

pub static H2O: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[H, H, O]));
pub static H2S: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[H, H, S]));
pub static HCL: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[H, Cl]));
pub static HF: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[H, F]));
pub static NH3: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[N, H, H, H]));
pub static PH3: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[P, H, H, H]));

pub static CO: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, O]));
pub static CO2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, O, O]));
pub static CS2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, S, S]));
pub static NO: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[N, O]));
pub static NO2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[N, O, O]));
pub static N2O: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[N, N, O]));
pub static SO2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[S, O, O]));
pub static SO3: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[S, O, O, O]));
pub static OF2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[O, F, F]));

pub static PCL3: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[P, Cl, Cl, Cl]));
pub static PCL5: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[P, Cl, Cl, Cl, Cl, Cl]));
pub static PF3: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[P, F, F, F]));

pub static CH4: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, H, H, H, H]));
pub static CH2O: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, H, H, O]));
pub static CH3OH: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, H, H, H, O, H]));
pub static C2H2: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, C, H, H]));
pub static C2H4: LazyLock<Molecule> = LazyLock::new(|| Molecule::new(&[C, C, H, H, H, H]));
pub static C2H6: LazyLock<Molecule> =
    LazyLock::new(|| Molecule::new(&[C, C, H, H, H, H, H, H]));
pub static C2H5OH: LazyLock<Molecule> =
    LazyLock::new(|| Molecule::new(&[C, C, H, H, H, H, H, O, H]));

/// Every catalog molecule, for enumeration by consumers and tests.
pub fn all() -> Vec<&'static Molecule> {
    vec![
        &C_SOLID, &S_SOLID, &P4, &H2, &N2, &O2, &F2, &CL2, &H2O, &H2S, &HCL, &HF, &NH3, &PH3,
        &CO, &CO2, &CS2, &NO, &NO2, &N2O, &SO2, &SO3, &OF2, &PCL3, &PCL5, &PF3, &CH4, &CH2O,
        &CH3OH, &C2H2, &C2H4, &C2H6, &C2H5OH,
    ]
}
