//! The fixed, hand-verified equation catalog.
//!
//! Constructor names spell out the balanced form, e.g.
//! [`synthesis_2h2_o2_2h2o`] builds `2 H2 + O2 -> 2 H2O`. Every constructor
//! uses the default coefficient settings; callers wanting a different range
//! or initial value go through the factories directly.
//!
//! A defective entry would be caught by the balance verification inside
//! `Equation::new`; the `expect` here is the deliberate fail-fast point for
//! catalog-authoring mistakes.

use super::factories::{decomposition, displacement, synthesis};
use super::molecules as mol;
use crate::model::config::CoefficientSettings;
use crate::model::equation::Equation;
use crate::model::molecule::Molecule;
use crate::model::term::TermSpec;

const CATALOG_DEFECT: &str = "hand-authored catalog entry must balance";

fn term(balanced_coefficient: i32, molecule: &'static Molecule) -> TermSpec {
    TermSpec::new(balanced_coefficient, molecule)
}

fn settings() -> CoefficientSettings {
    CoefficientSettings::default()
}

// --- Synthesis: two reactants, one product ---

pub fn synthesis_2h2_o2_2h2o() -> Equation {
    synthesis(term(2, &mol::H2), term(1, &mol::O2), term(2, &mol::H2O), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_h2_f2_2hf() -> Equation {
    synthesis(term(1, &mol::H2), term(1, &mol::F2), term(2, &mol::HF), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_h2_cl2_2hcl() -> Equation {
    synthesis(term(1, &mol::H2), term(1, &mol::CL2), term(2, &mol::HCL), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_n2_3h2_2nh3() -> Equation {
    synthesis(term(1, &mol::N2), term(3, &mol::H2), term(2, &mol::NH3), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_2c_o2_2co() -> Equation {
    synthesis(term(2, &mol::C_SOLID), term(1, &mol::O2), term(2, &mol::CO), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_c_o2_co2() -> Equation {
    synthesis(term(1, &mol::C_SOLID), term(1, &mol::O2), term(1, &mol::CO2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_2n2_o2_2n2o() -> Equation {
    synthesis(term(2, &mol::N2), term(1, &mol::O2), term(2, &mol::N2O), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_p4_6h2_4ph3() -> Equation {
    synthesis(term(1, &mol::P4), term(6, &mol::H2), term(4, &mol::PH3), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_p4_6f2_4pf3() -> Equation {
    synthesis(term(1, &mol::P4), term(6, &mol::F2), term(4, &mol::PF3), settings())
        .expect(CATALOG_DEFECT)
}

pub fn synthesis_c_2s_cs2() -> Equation {
    synthesis(term(1, &mol::C_SOLID), term(2, &mol::S_SOLID), term(1, &mol::CS2), settings())
        .expect(CATALOG_DEFECT)
}

// --- Decomposition: one reactant, two products ---

pub fn decomposition_2h2o_2h2_o2() -> Equation {
    decomposition(term(2, &mol::H2O), term(2, &mol::H2), term(1, &mol::O2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_2hcl_h2_cl2() -> Equation {
    decomposition(term(2, &mol::HCL), term(1, &mol::H2), term(1, &mol::CL2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_2nh3_n2_3h2() -> Equation {
    decomposition(term(2, &mol::NH3), term(1, &mol::N2), term(3, &mol::H2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_2no_n2_o2() -> Equation {
    decomposition(term(2, &mol::NO), term(1, &mol::N2), term(1, &mol::O2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_2no2_2no_o2() -> Equation {
    decomposition(term(2, &mol::NO2), term(2, &mol::NO), term(1, &mol::O2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_2co2_2co_o2() -> Equation {
    decomposition(term(2, &mol::CO2), term(2, &mol::CO), term(1, &mol::O2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_2co_c_co2() -> Equation {
    decomposition(term(2, &mol::CO), term(1, &mol::C_SOLID), term(1, &mol::CO2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_4pcl3_p4_6cl2() -> Equation {
    decomposition(term(4, &mol::PCL3), term(1, &mol::P4), term(6, &mol::CL2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_pcl5_pcl3_cl2() -> Equation {
    decomposition(term(1, &mol::PCL5), term(1, &mol::PCL3), term(1, &mol::CL2), settings())
        .expect(CATALOG_DEFECT)
}

pub fn decomposition_2so3_2so2_o2() -> Equation {
    decomposition(term(2, &mol::SO3), term(2, &mol::SO2), term(1, &mol::O2), settings())
        .expect(CATALOG_DEFECT)
}

// --- Displacement: two reactants, two products (includes combustion) ---

pub fn displacement_ch4_2o2_co2_2h2o() -> Equation {
    displacement(
        term(1, &mol::CH4),
        term(2, &mol::O2),
        term(1, &mol::CO2),
        term(2, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_2c2h6_7o2_4co2_6h2o() -> Equation {
    displacement(
        term(2, &mol::C2H6),
        term(7, &mol::O2),
        term(4, &mol::CO2),
        term(6, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_c2h4_3o2_2co2_2h2o() -> Equation {
    displacement(
        term(1, &mol::C2H4),
        term(3, &mol::O2),
        term(2, &mol::CO2),
        term(2, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_2c2h2_5o2_4co2_2h2o() -> Equation {
    displacement(
        term(2, &mol::C2H2),
        term(5, &mol::O2),
        term(4, &mol::CO2),
        term(2, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_c2h5oh_3o2_2co2_3h2o() -> Equation {
    displacement(
        term(1, &mol::C2H5OH),
        term(3, &mol::O2),
        term(2, &mol::CO2),
        term(3, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_2ch3oh_3o2_2co2_4h2o() -> Equation {
    displacement(
        term(2, &mol::CH3OH),
        term(3, &mol::O2),
        term(2, &mol::CO2),
        term(4, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_ch4_h2o_3h2_co() -> Equation {
    displacement(
        term(1, &mol::CH4),
        term(1, &mol::H2O),
        term(3, &mol::H2),
        term(1, &mol::CO),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_2h2s_3o2_2so2_2h2o() -> Equation {
    displacement(
        term(2, &mol::H2S),
        term(3, &mol::O2),
        term(2, &mol::SO2),
        term(2, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_so2_2h2_s_2h2o() -> Equation {
    displacement(
        term(1, &mol::SO2),
        term(2, &mol::H2),
        term(1, &mol::S_SOLID),
        term(2, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn displacement_so2_3h2_h2s_2h2o() -> Equation {
    displacement(
        term(1, &mol::SO2),
        term(3, &mol::H2),
        term(1, &mol::H2S),
        term(2, &mol::H2O),
        settings(),
    )
    .expect(CATALOG_DEFECT)
}

pub fn synthesis_catalog() -> Vec<Equation> {
    vec![
        synthesis_2h2_o2_2h2o(),
        synthesis_h2_f2_2hf(),
        synthesis_h2_cl2_2hcl(),
        synthesis_n2_3h2_2nh3(),
        synthesis_2c_o2_2co(),
        synthesis_c_o2_co2(),
        synthesis_2n2_o2_2n2o(),
        synthesis_p4_6h2_4ph3(),
        synthesis_p4_6f2_4pf3(),
        synthesis_c_2s_cs2(),
    ]
}

pub fn decomposition_catalog() -> Vec<Equation> {
    vec![
        decomposition_2h2o_2h2_o2(),
        decomposition_2hcl_h2_cl2(),
        decomposition_2nh3_n2_3h2(),
        decomposition_2no_n2_o2(),
        decomposition_2no2_2no_o2(),
        decomposition_2co2_2co_o2(),
        decomposition_2co_c_co2(),
        decomposition_4pcl3_p4_6cl2(),
        decomposition_pcl5_pcl3_cl2(),
        decomposition_2so3_2so2_o2(),
    ]
}

pub fn displacement_catalog() -> Vec<Equation> {
    vec![
        displacement_ch4_2o2_co2_2h2o(),
        displacement_2c2h6_7o2_4co2_6h2o(),
        displacement_c2h4_3o2_2co2_2h2o(),
        displacement_2c2h2_5o2_4co2_2h2o(),
        displacement_c2h5oh_3o2_2co2_3h2o(),
        displacement_2ch3oh_3o2_2co2_4h2o(),
        displacement_ch4_h2o_3h2_co(),
        displacement_2h2s_3o2_2so2_2h2o(),
        displacement_so2_2h2_s_2h2o(),
        displacement_so2_3h2_h2s_2h2o(),
    ]
}

/// Every catalog equation, synthesis then decomposition then displacement.
pub fn catalog() -> Vec<Equation> {
    let mut all = synthesis_catalog();
    all.extend(decomposition_catalog());
    all.extend(displacement_catalog());
    all
}
