//! A binary executable that demonstrates how to use the `rill-srt` library.
//!
//! This is not part of the library itself, but provides a simple
//! example of both the streaming and the all-at-once parser.
//!
//! You can run this example with: `cargo run`

use rill_srt::{parse, parse_streaming};

const SAMPLE: &str = "1
00:00:01,123 --> 00:00:02,456
First line
Second line

2
00:00:03,123 --> 00:00:04,456
Single line
";

fn main() {
    println!("--- Running Streaming Parser ---");
    println!("Parsing:\n{}", SAMPLE);

    match parse_streaming(SAMPLE) {
        Ok(parser) => {
            for cue in parser {
                match cue {
                    Ok(cue) => println!(
                        "Cue #{}: {} -> {} {:?}",
                        cue.index, cue.start, cue.end, cue.text
                    ),
                    Err(e) => {
                        println!("Error: {}", e);
                        break;
                    }
                }
            }
        }
        Err(e) => println!("Error: {}", e),
    }

    println!("\n--- Running parse Demo (malformed input) ---");
    let broken = "1\n00:00:01,123 00:00:02,456\nMissing arrow";
    println!("Parsing:\n{}", broken);
    match parse(broken) {
        Ok(cues) => println!("Parsed {} cue(s)", cues.len()),
        Err(e) => println!("Parse Error: {}", e),
    }
}
