use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use chembalance::catalog::equations;
use chembalance::model::equation::Equation;
use chembalance::model::snapshot::CoefficientSnapshot;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let mut catalog = equations::catalog();
    let count = catalog.len();
    let equation = catalog
        .get_mut(args.equation)
        .ok_or(CliError::UnknownEquation {
            index: args.equation,
            count,
        })?;

    if args.coefficients.len() != equation.term_count() {
        return Err(CliError::WrongCoefficientCount {
            equation: equation.answer_string(),
            expected: equation.term_count(),
            actual: args.coefficients.len(),
        });
    }
    let snapshot = CoefficientSnapshot {
        coefficients: args.coefficients.clone(),
    };
    equation.restore_coefficients(&snapshot)?;
    info!("checking coefficients {:?}", args.coefficients);

    println!("equation:  {}", equation.display_string());
    println!("yours:     {}", current_string(equation));
    println!(
        "balanced: {}   simplified: {}   any nonzero: {}",
        yes_no(equation.is_balanced()),
        yes_no(equation.is_simplified()),
        yes_no(equation.has_nonzero_coefficient()),
    );
    println!();
    println!("{:<8} {:>9} {:>9}", "element", "reactants", "products");
    for atom_count in equation.atom_counts() {
        println!(
            "{:<8} {:>9} {:>9}",
            atom_count.element.symbol(),
            atom_count.reactants_total,
            atom_count.products_total
        );
    }
    Ok(())
}

/// The equation rendered with the user's current coefficients, zeros included.
fn current_string(equation: &Equation) -> String {
    let mut out = String::new();
    format_side(equation.reactants(), &mut out);
    out.push_str(" → ");
    format_side(equation.products(), &mut out);
    out
}

fn format_side(terms: &[chembalance::model::term::EquationTerm], out: &mut String) {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push_str(" + ");
        }
        out.push_str(&term.coefficient().to_string());
        out.push(' ');
        out.push_str(term.molecule().symbol());
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
