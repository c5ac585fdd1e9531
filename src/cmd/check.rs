use std::process::ExitCode;

use anyhow::Result;

use newscast::{NewsConfig, NewsResolver, StreamRequest};

pub fn cmd_check(config: &NewsConfig, request: &str) -> Result<ExitCode> {
    let resolver = NewsResolver::new(config)?;

    if !resolver.validate(request) {
        println!("❌ not handled: {request}");
        return Ok(ExitCode::from(2));
    }

    let parsed = StreamRequest::parse(request);
    match resolver.registry().lookup(parsed.source) {
        Some(source) => println!("✅ {} ({})", source.name, source.strategy.kind()),
        None => println!("✅ tagged, no matching source"),
    }
    Ok(ExitCode::SUCCESS)
}
