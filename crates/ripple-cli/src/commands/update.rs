use miette::Result;

use ripple_core::dependency::Dependency;
use ripple_core::nuget::RemoteNuget;
use ripple_util::errors::RippleError;

pub fn exec(dep: &str) -> Result<()> {
    let nuget = Dependency::parse(dep)
        .and_then(|parsed| {
            let version = parsed.version?;
            Some(RemoteNuget::new(parsed.name, version))
        })
        .ok_or_else(|| RippleError::Generic {
            message: format!("expected Name@Version, got '{dep}'"),
        })?;

    let mut solution = super::current_solution()?;
    solution.update(&nuget)?;
    solution.save()?;
    println!("Pinned {nuget} across solution '{}'", solution.name);
    Ok(())
}
