use miette::Result;

pub fn exec() -> Result<()> {
    let mut solution = super::current_solution()?;
    println!("{} ({} mode)", solution.name, solution.mode());

    let merged = solution.dependencies();
    if merged.is_empty() {
        println!("  no dependencies declared");
        return Ok(());
    }
    for dep in merged {
        match dep.version {
            Some(ref version) => println!("  {} {}", dep.name, version),
            None => println!("  {} (floating)", dep.name),
        }
    }
    Ok(())
}
