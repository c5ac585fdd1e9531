use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;

use newscast::{NewsConfig, NewsResolver};

use crate::OutputFormat;

pub async fn cmd_resolve(config: &NewsConfig, request: &str, format: OutputFormat) -> Result<ExitCode> {
    let resolver = NewsResolver::new(config)?;

    let start = Instant::now();
    let resolved = resolver.resolve(request).await?;
    let elapsed = start.elapsed();

    let Some(stream) = resolved else {
        eprintln!("❌ No bulletin available for {request}");
        return Ok(ExitCode::from(2));
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stream)?),
        OutputFormat::Text => {
            println!("📻 {}", stream.title);
            println!("   Author: {}", stream.author);
            println!("   Stream: {}", stream.uri);
            if let Some(ref image) = stream.image {
                println!("   Image: {image}");
            }
            eprintln!("   Time: {:.0}ms", elapsed.as_secs_f64() * 1000.0);
        }
    }

    Ok(ExitCode::SUCCESS)
}
