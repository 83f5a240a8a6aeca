use crate::error::Result;
use chembalance::catalog::{equations, molecules};
use tracing::debug;

pub fn run_equations() -> Result<()> {
    let catalog = equations::catalog();
    debug!("catalog holds {} equations", catalog.len());
    for (index, equation) in catalog.iter().enumerate() {
        let family = match (equation.reactants().len(), equation.products().len()) {
            (2, 1) => "synthesis",
            (1, 2) => "decomposition",
            _ => "displacement",
        };
        println!("{index:>3}  {family:<13}  {}", equation.display_string());
    }
    Ok(())
}

pub fn run_molecules() -> Result<()> {
    for molecule in molecules::all() {
        println!(
            "{:<8} {:<8} {:>2} atoms{}",
            molecule.symbol(),
            molecule.plain_symbol(),
            molecule.atom_count(),
            if molecule.is_big() { "  (big)" } else { "" }
        );
    }
    Ok(())
}
