use miette::Result;

use ripple_core::mode::SolutionMode;
use ripple_core::solution::Solution;
use ripple_util::errors::RippleError;

pub fn exec(name: &str, mode: &str) -> Result<()> {
    let mode: SolutionMode = mode
        .parse()
        .map_err(|message| RippleError::Generic { message })?;
    let cwd = std::env::current_dir().map_err(RippleError::Io)?;

    let solution = Solution::new(name, &cwd, mode);
    let marker = cwd.join(solution.storage().solution_file());
    if marker.exists() {
        return Err(RippleError::Generic {
            message: format!("{} already exists in this directory", marker.display()),
        }
        .into());
    }

    solution.save()?;
    println!("Initialized {mode} solution '{name}' in {}", cwd.display());
    Ok(())
}
