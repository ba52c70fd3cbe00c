use miette::Result;

pub fn exec(dep: &str) -> Result<()> {
    let mut solution = super::current_solution()?;
    solution.float(dep)?;
    solution.save()?;
    println!("Floated {dep} across solution '{}'", solution.name);
    Ok(())
}
