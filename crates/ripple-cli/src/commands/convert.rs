use miette::Result;

use ripple_core::mode::SolutionMode;
use ripple_util::errors::RippleError;

pub fn exec(mode: &str) -> Result<()> {
    let mode: SolutionMode = mode
        .parse()
        .map_err(|message| RippleError::Generic { message })?;

    let mut solution = super::current_solution()?;
    if solution.mode() == mode {
        println!("Solution '{}' is already in {mode} mode", solution.name);
        return Ok(());
    }
    solution.convert_to(mode)?;
    solution.save()?;
    println!("Converted solution '{}' to {mode} mode", solution.name);
    Ok(())
}
