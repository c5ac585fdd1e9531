use std::process::ExitCode;

use anyhow::Result;

use newscast::{NewsConfig, NewsResolver};

pub fn cmd_sources(config: &NewsConfig) -> Result<ExitCode> {
    let resolver = NewsResolver::new(config)?;
    let registry = resolver.registry();

    println!("📋 {} sources (checked in this order):\n", registry.len());
    for (i, source) in registry.iter().enumerate() {
        println!("{:>3}. {:<16} {}", i + 1, source.name, source.strategy.kind());
        for prefix in source.prefixes {
            println!("       {prefix}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
