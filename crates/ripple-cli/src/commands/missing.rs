use miette::Result;

pub fn exec() -> Result<()> {
    let solution = super::current_solution()?;
    let missing = solution.missing_nugets()?;
    if missing.is_empty() {
        println!("All declared packages are present locally");
        return Ok(());
    }
    println!("{} package(s) missing locally:", missing.len());
    for dep in &missing {
        println!("  {dep}");
    }
    Ok(())
}
