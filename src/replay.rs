use anyhow::{Context, Result};
use rtouchpad::{replay_script, ActionEvent, CallbackSink, Extent, GestureScript, PadConfig, ScriptGenerator, TouchPad};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

struct Config {
    config_file: Option<String>,
    script_file: Option<String>,
    random_count: Option<usize>,
    seed: u64,
    size: f32,
    output_file: Option<String>,
    hass_payload: bool,
    dump_script: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            config_file: None,
            script_file: None,
            random_count: None,
            seed: 42,
            size: 300.0,
            output_file: None,
            hass_payload: false,
            dump_script: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-config" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-config requires a file path argument");
                }
                config.config_file = Some(args[i].clone());
            }
            "-script" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-script requires a file path argument");
                }
                config.script_file = Some(args[i].clone());
            }
            "-random" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-random requires an argument");
                }
                config.random_count = Some(args[i].parse()?);
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-size" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-size requires an argument");
                }
                config.size = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-hass" => {
                config.hass_payload = true;
            }
            "-dump_script" => {
                config.dump_script = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    if config.script_file.is_some() && config.random_count.is_some() {
        anyhow::bail!("-script and -random are mutually exclusive");
    }
    if config.script_file.is_none() && config.random_count.is_none() {
        anyhow::bail!("either -script <FILE> or -random <N> is required (see -h)");
    }

    Ok(config)
}

fn print_help() {
    println!("Touch Pad Gesture Replay");
    println!("Usage: touchpad-replay [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -config <FILE>         Pad configuration (JSON, merged over defaults)");
    println!("  -script <FILE>         Gesture script to replay (JSON)");
    println!("  -random <N>            Synthesize N random gestures instead of a script");
    println!("  -seed <S>              Seed for -random (default: 42)");
    println!("  -size <PX>             Pad side for -random (default: 300)");
    println!("  -out <FILE>            Write emitted actions to FILE (default: stdout)");
    println!("  -hass                  Print the dashboard event payload instead of the raw action");
    println!("  -dump_script           Print the script being replayed and exit");
    println!("  -h, -help, --help      Show this help message");
    println!();
    println!("Set RUST_LOG=rtouchpad=debug to trace recognition.");
}

fn main() -> Result<()> {
    env_logger::init();
    let config = parse_args()?;

    let script = match &config.script_file {
        Some(path) => GestureScript::from_file(path)?,
        None => ScriptGenerator::with_config(config.seed, Extent::square(config.size))
            .random(config.random_count.unwrap_or_default()),
    };

    if config.dump_script {
        println!("{}", script.to_json_pretty()?);
        return Ok(());
    }

    let pad_config = match &config.config_file {
        Some(path) => PadConfig::from_file(path)?,
        None => script.pad_config()?,
    };

    let out: Box<dyn Write> = match &config.output_file {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output file '{}'", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let emitted = run(&config, &script, pad_config, out)?;
    log::info!("{} steps replayed, {} actions emitted", script.steps.len(), emitted);
    if let Some(path) = &config.output_file {
        println!("Actions written to: {}", path);
    }

    Ok(())
}

/// Replays the script, streaming every emitted action as one JSON line.
fn run(config: &Config, script: &GestureScript, pad_config: PadConfig, mut out: Box<dyn Write>) -> Result<usize> {
    let hass_payload = config.hass_payload;
    let mut emitted = 0usize;
    let mut write_error: Option<io::Error> = None;

    let sink = CallbackSink(|event: ActionEvent| {
        emitted += 1;
        if write_error.is_some() {
            return;
        }
        let body = if hass_payload {
            event.to_hass_payload()
        } else {
            event.action.as_json().clone()
        };
        let line = serde_json::json!({
            "t_ms": event.t_ms,
            "source": event.source.to_string(),
            "action": body,
        });
        if let Err(err) = writeln!(out, "{}", line) {
            write_error = Some(err);
        }
    });

    let mut pad = TouchPad::new(pad_config, sink);
    let finished_at = replay_script(&mut pad, script)?;
    log::debug!("replay settled at {}ms", finished_at);
    drop(pad);

    if let Some(err) = write_error {
        return Err(err).context("Failed to write emitted actions");
    }
    out.flush().context("Failed to flush output")?;
    Ok(emitted)
}
