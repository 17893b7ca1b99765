use letter_recognition_csv::ConversionError;
use letter_recognition_csv::conversion::ConversionRequest;

fn main() -> Result<(), ConversionError> {
    let request = ConversionRequest::default();
    request.run()?;
    println!(
        "Converted {} to {}",
        request.input.display(),
        request.output.display()
    );
    Ok(())
}
