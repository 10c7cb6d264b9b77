use serde::Serialize;

pub fn output_json<T: Serialize>(data: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}
