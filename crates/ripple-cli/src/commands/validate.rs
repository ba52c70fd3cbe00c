use miette::Result;

use ripple_util::errors::RippleError;

pub fn exec() -> Result<()> {
    let solution = super::current_solution()?;
    if let Err(err) = solution.assert_is_valid() {
        if let Some(RippleError::Validation { problems }) = err.downcast_ref::<RippleError>() {
            for problem in problems {
                eprintln!("  {problem}");
            }
        }
        return Err(err);
    }
    println!(
        "Solution '{}' is consistent across {} project(s)",
        solution.name,
        solution.projects().len()
    );
    Ok(())
}
