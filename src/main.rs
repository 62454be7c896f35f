//! textkit - Configuration-driven text processing toolkit
//!
//! Demo entry point walking through the library surface:
//! 1. Initialize logging → logs/textkit.<date>
//! 2. Build a shared [`ConfigStore`], optionally loading a `key=value` file
//!    passed as the first command-line argument
//! 3. Run a named [`Core`] component through its initialize/process lifecycle
//! 4. Exercise the string utilities and validation helpers
//! 5. Process items and batches with a [`DataProcessor`] and print statistics
//! 6. Chain two [`PipelineModule`] stages
//!
//! Recoverable failures (empty input, oversized batch, missing config file)
//! are printed and the walk continues; only fatal construction or setup
//! errors exit with a non-zero status.

use anyhow::Result;
use textkit::{
    config::ConfigStore,
    text::{strings, validate},
    Core, DataProcessor, PipelineModule, ProcessingMode, APP_NAME, VERSION,
};

fn main() -> Result<()> {
    // File logging only; demo output goes to stdout directly
    let _guard = textkit::logging::setup_logging("logs", "textkit", false, false)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    println!("Welcome to {} v{}", APP_NAME, VERSION);

    // --- Configuration ---
    let config = ConfigStore::new_shared();
    if let Some(path) = std::env::args().nth(1) {
        match config.borrow_mut().load_from_file(&path) {
            Ok(()) => println!("Loaded configuration from {}", path),
            Err(e) => println!("Warning: {}", e),
        }
    }
    println!("Configuration keys: {}", config.borrow().keys().join(", "));

    // --- Core component ---
    let mut core = Core::new("demo-core")?;
    core.initialize();
    println!("{}", core.process("hello from the core component")?);

    // --- String utilities ---
    let csv = "alpha,beta,,gamma";
    let parts = strings::split(csv, ',');
    println!("split({:?}) -> {:?}", csv, parts);
    println!("join -> {:?}", strings::join(&parts, " | "));
    println!("upper -> {}", strings::to_upper("mixed Case 42"));

    // --- Validation ---
    for candidate in ["user@example.com", "not-an-email"] {
        println!(
            "{:?} is {} email",
            candidate,
            if validate::is_valid_email(candidate) {
                "a valid"
            } else {
                "not a valid"
            }
        );
    }

    // --- Item and batch processing ---
    let processor = DataProcessor::new(config.clone());

    let item = processor.process_item("hello world", ProcessingMode::Simple);
    println!("item -> {}", item.output);

    let failed = processor.process_item("", ProcessingMode::Simple);
    println!("empty item -> error: {}", failed.error_message);

    let batch: Vec<String> = vec![
        "  first  ".to_string(),
        "second".to_string(),
        "third".to_string(),
    ];
    let result = processor.process_batch(&batch, ProcessingMode::Batch);
    if result.success {
        println!("batch ({} items) -> {}", result.processed_items, result.output);
    } else {
        println!("batch -> error: {}", result.error_message);
    }

    println!("{}", processor.statistics());
    processor.metrics().log_summary();

    // --- Pipeline chaining ---
    let mut first = PipelineModule::new("reverse-1")?;
    let mut second = PipelineModule::new("reverse-2")?;
    let chained = second.process_data(&first.process_data("pipeline data"));
    println!("chained -> {}", chained);

    tracing::info!("Demo finished");
    println!("Done.");
    Ok(())
}
