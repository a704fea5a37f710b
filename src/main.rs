#[macro_use]
extern crate log;

use dnsdecode::buffer::load_packet;
use dnsdecode::config::{init_from_toml, InputFormat};
use dnsdecode::decode;
use dnsdecode::system::Result;
use std::str::FromStr;

const USAGE: &str = "usage: dnsdecode [-c <config.toml>] [-x] <packet-file>...";

struct Args {
    config: Option<String>,
    force_hex: bool,
    files: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        force_hex: false,
        files: Vec::new(),
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                args.config = Some(iter.next().ok_or(USAGE)?);
            }
            "-x" | "--hex" => args.force_hex = true,
            "-h" | "--help" => return Err(USAGE.into()),
            _ => args.files.push(arg),
        }
    }
    if args.files.is_empty() {
        return Err(USAGE.into());
    }
    Ok(args)
}

async fn decode_file(path: &str, format: InputFormat) -> Result<()> {
    let contents = tokio::fs::read(path).await?;
    let bytes = load_packet(contents, format)?;
    let message = decode(&bytes)?;
    println!(";; {}\n{}\n", path, message);
    Ok(())
}

// dnsdecode -x response.hex
#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args()?;
    let config = init_from_toml(args.config.as_deref()).await?;
    simple_logger::init_with_level(log::Level::from_str(&config.log_level)?)?;
    let format = if args.force_hex {
        InputFormat::Hex
    } else {
        config.input_format
    };
    debug!("config: {:?}", config);

    let mut failed = 0;
    for path in args.files.iter() {
        if let Err(e) = decode_file(path, format).await {
            error!("{}: {}", path, e);
            failed += 1;
        }
    }
    if failed > 0 {
        return Err(format!("{} of {} file(s) failed to decode", failed, args.files.len()).into());
    }
    Ok(())
}
