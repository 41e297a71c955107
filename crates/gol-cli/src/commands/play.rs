use super::SimArgs;

pub fn run(sim: &SimArgs) -> Result<(), String> {
    let engine = sim.engine()?;
    crate::tui::run(engine)
}
