use ldf_rs::{LdfParser, Result};

fn main() -> Result<()> {
    // 1) Pick the file: first argument, or the LIN 2.1 fixture
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/body_lin21.ldf".to_string());

    // 2) Load and parse it
    let parser = LdfParser::from_file(&path)?;
    let Some(ldf) = parser.document() else {
        return Ok(());
    };

    // 3) Short summary
    println!("File    : {path}");
    println!("Master  : {}", ldf.nodes().master);
    println!("Slaves  : {}", ldf.nodes().slaves.join(", "));
    println!("Frames  : {}", ldf.frames().len());
    println!("Signals : {}", ldf.signals().len());
    println!();

    // 4) Everything as JSON
    println!("{}", ldf.to_json()?);

    // 5) What was skipped
    if !ldf.diagnostics().is_empty() {
        eprintln!("{} diagnostics:", ldf.diagnostics().len());
        for diagnostic in ldf.diagnostics() {
            eprintln!("  {diagnostic}");
        }
    }

    Ok(())
}
