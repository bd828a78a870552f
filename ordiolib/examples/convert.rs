use ordiolib::{
    formats::{csv::Csv, json::Json},
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // CSV orders on stdin -> JSON on stdout
    let orders = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    Json::write(std::io::stdout(), &orders)?;
    Ok(())
}
