use anyhow::{anyhow, Result};
use clap::Parser;
use libindic::{language_from_name, layout_from_name, KeyTranslator};
use libindic_core::TranslatorConfig;
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "libindic-cli", about = "Interactive keystroke translation test")]
struct Args {
    /// Language: tamil, devanagari, malayalam, kannada, telugu, gurmukhi.
    #[arg(long, default_value = "tamil")]
    language: String,

    /// Layout: anjal, tamil99, tamil97, mylai, typewriter-new,
    /// typewriter-old, anjal-indic, murasu6, bamini, tn-typewriter.
    #[arg(long, default_value = "anjal")]
    layout: String,

    /// Optional TOML configuration file; --language/--layout override it.
    #[arg(long)]
    config: Option<String>,

    /// Print the engine state as JSON after each line.
    #[arg(long)]
    dump_state: bool,
}

fn apply(buffer: &mut String, delete_count: usize, inserted: &str) {
    for _ in 0..delete_count {
        buffer.pop();
    }
    buffer.push_str(inserted);
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TranslatorConfig::load_toml(path)
            .map_err(|e| anyhow!("failed to load {}: {}", path, e))?,
        None => TranslatorConfig::default(),
    };
    config.language = language_from_name(&args.language)
        .ok_or_else(|| anyhow!("unknown language: {}", args.language))?;
    config.layout = layout_from_name(&args.layout)
        .ok_or_else(|| anyhow!("unknown layout: {}", args.layout))?;

    let mut translator = KeyTranslator::new(config).map_err(|e| anyhow!(e))?;

    println!(
        "libindic - {:?} / {:?}. Type keys and press Enter; ! is backspace.",
        translator.language(),
        translator.layout()
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut buffer = String::new();
        for key in line.chars() {
            if key == '!' {
                let edit = translator.delete_last_char(&buffer);
                if edit.handled {
                    apply(&mut buffer, edit.delete_count, &edit.inserted_text);
                } else {
                    buffer.pop();
                }
                continue;
            }
            let edit = translator.translate_key(key);
            if edit.handled {
                apply(&mut buffer, edit.delete_count, &edit.inserted_text);
            } else if let Some(text) = translator.unmapped_char(key, &buffer) {
                buffer.push_str(&text);
            } else {
                buffer.push(key);
            }
        }
        let edit = translator.cleanup_stray_vowel_sign(&buffer);
        if edit.handled {
            apply(&mut buffer, edit.delete_count, &edit.inserted_text);
        }
        println!("  → {}", buffer);
        if args.dump_state {
            println!("  state: {}", serde_json::to_string(translator.state())?);
        }
        translator.terminate_composition();
    }
    Ok(())
}
