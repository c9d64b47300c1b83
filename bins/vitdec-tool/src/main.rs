use clap::Parser;

use vitdec_codec::{ConvEncoder, ViterbiDecoder};
use vitdec_config::{DecoderConfig, toml_config};
use vitdec_core::debug;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hard-decision Viterbi decoder",
    long_about = "Decodes received symbols, or encodes bits, with the trellis described by a TOML config"
)]
struct Args {
    /// Config file (required)
    #[arg(help = "TOML config with decoder options and trellis")]
    config: String,

    #[arg(help = "Mode: [ decode | encode ]")]
    mode: String,

    #[arg(help = "Comma separated values: received symbols for decode (decimal or 0b/0x prefixed), bits for encode")]
    values: String,

    #[arg(
        short = 'n',
        long = "num-symbols",
        help = "Decode only the first n symbols"
    )]
    num_symbols: Option<usize>,

    #[arg(short = 'v', long = "verbose", help = "Trace every ACS step")]
    verbose: bool,
}

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> DecoderConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

fn parse_value(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid value '{}': {}", s, e))
}

fn parse_values(list: &str) -> Result<Vec<u32>, String> {
    list.split(',').filter(|s| !s.trim().is_empty()).map(parse_value).collect()
}

fn parse_bits(list: &str) -> Result<Vec<u8>, String> {
    parse_values(list)?
        .into_iter()
        .map(|v| match v {
            0 | 1 => Ok(v as u8),
            _ => Err(format!("invalid bit {}", v)),
        })
        .collect()
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

fn main() {
    let args = Args::parse();
    let cfg = load_config_from_toml(&args.config);

    let _log_guard = if args.verbose {
        debug::setup_logging_verbose();
        None
    } else {
        debug::setup_logging_default(cfg.debug_log.clone())
    };

    let decoder = match ViterbiDecoder::from_config(&cfg) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.mode.to_lowercase().as_str() {
        "decode" | "dec" => parse_values(&args.values).and_then(|symbols| {
            let n = args.num_symbols.unwrap_or(symbols.len());
            let decoded = vitdec_codec::viterbi::decode_with_opts(&symbols, decoder.trellis(), n, decoder.opts())
                .map_err(|e| e.to_string())?;
            tracing::info!("path metric {}", decoded.path_metric);
            Ok(join(&decoded.bits))
        }),
        "encode" | "enc" => parse_bits(&args.values).map(|bits| {
            let symbols = ConvEncoder::new(decoder.trellis()).encode(&bits);
            join(&symbols)
        }),
        _ => Err(format!("unsupported mode '{}', use: decode, encode", args.mode)),
    };

    match result {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("3, 1,0b11,0x2,").unwrap(), vec![3, 1, 3, 2]);
        assert!(parse_values("3,x").is_err());
        assert!(parse_values("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bits() {
        assert_eq!(parse_bits("1,0,1").unwrap(), vec![1, 0, 1]);
        assert_eq!(parse_bits("1,2").unwrap_err(), "invalid bit 2");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[1u8, 0, 1]), "1,0,1");
    }
}
