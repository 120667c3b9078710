// ============================================================================
// Basic Usage Example
// ============================================================================

use bigint_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== BigInt Engine Example ===\n");

    let caps = HostCapabilities::detect();
    println!("Host: {}", caps);

    let engine = create_engine();
    println!("Engine: {}\n", engine.name());

    // Small operands stay on the native fast path
    println!("Fast path:");
    println!("  7 * 6 = {}", engine.mul("7", "6").unwrap());
    println!("  -7 / 3 = {} r {}", engine.div_q("-7", "3").unwrap(), engine.div_r("-7", "3").unwrap());

    // Large operands escalate to the block-wise algorithms
    println!("\nBlock-wise path:");
    let sum = engine.add("999999999999999999", "1").unwrap();
    println!("  999999999999999999 + 1 = {}", sum);

    let product = engine
        .mul("123456789123456789", "987654321987654321")
        .unwrap();
    println!("  123456789123456789 * 987654321987654321 = {}", product);

    let (quotient, remainder) = engine.div_qr("100000000000000000000", "3").unwrap();
    println!("  10^20 / 3 = {} r {}", quotient, remainder);

    // Exponentiation and roots
    println!("\nExponentiation and roots:");
    println!("  2^128 = {}", engine.pow("2", 128).unwrap());
    println!("  4^13 mod 497 = {}", engine.mod_pow("4", "13", "497").unwrap());

    let root = engine
        .sqrt("152415787532388367501905199875019052100")
        .unwrap();
    println!("  sqrt(152415787532388367501905199875019052100) = {}", root);

    // Errors are detected at the boundary
    println!("\nError handling:");
    match engine.div_q("1", "0") {
        Ok(_) => unreachable!(),
        Err(e) => println!("  1 / 0 -> {}", e),
    }
    match engine.add("12x4", "1") {
        Ok(_) => unreachable!(),
        Err(e) => println!("  \"12x4\" + 1 -> {}", e),
    }
}
