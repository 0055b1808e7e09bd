// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_codec::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    decimal_codec::utils::init_tracing(tracing::Level::DEBUG);

    println!("=== Decimal Codec Example ===\n");

    // Shortest text for plain values
    println!("Shortest text:");
    for value in [123.123, -0.0, 7.402001334e-12, std::f64::consts::PI] {
        println!("  {:<24e} -> {}", value, to_text(value));
    }

    // Quantize to a tick size
    println!("\nQuantized to interval:");
    for (value, interval) in [(123.123, 3.1), (123.0, 10.0), (0.0, 0.001), (123.0, 0.01)] {
        println!(
            "  {:>8} @ {:<6} -> {}",
            value,
            interval,
            to_text_with_interval(value, interval)
        );
    }

    // Shift decimal text
    println!("\nText shifting:");
    for power in [-4, -1, 1, 4] {
        println!("  123.456 x 10^{:<3} -> {}", power, shift_text("123.456", power));
    }

    // Quantized value type
    println!("\nQuantized decimal:");
    let tick = QuantizedDecimal::from_text("0.25", 0.0);
    let mut price = QuantizedDecimal::new(100.1, tick.quantized_value());
    println!("  start: {} (raw {})", price, price.raw());

    for _ in 0..3 {
        price.add(&tick);
        println!("  +tick: {}", price);
    }

    let spread = price - QuantizedDecimal::from(99.0);
    println!("  spread vs 99: {} (interval {})", spread, spread.interval());

    // Malformed input is NaN, not an error
    let bad = QuantizedDecimal::from_text("12,5", 0.0);
    println!("\nMalformed text: {:?}", bad);

    match "12,5".parse::<QuantizedDecimal>() {
        Ok(d) => println!("Strict parse: {}", d),
        Err(e) => println!("Strict parse failed: {}", e),
    }

    println!("\n=== Example Complete ===");
}
