use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::config_err::ConfigErr;
use super::decoder_config::{DecoderConfig, MetricKind, TieBreak, TransitionRow, TrellisDesc};

const EXPECTED_CONFIG_VERSION: &str = "0.1";

/// Build `DecoderConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<DecoderConfig, ConfigErr> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    if root.config_version != EXPECTED_CONFIG_VERSION {
        return Err(ConfigErr::Version {
            found: root.config_version,
            expected: EXPECTED_CONFIG_VERSION,
        });
    }
    check_no_extra("top level", &root.extra)?;
    check_no_extra("trellis", &root.trellis.extra)?;
    if let Some(ref dec) = root.decoder {
        check_no_extra("decoder", &dec.extra)?;
    }

    let mut cfg = DecoderConfig::with_trellis(build_trellis_desc(root.trellis)?);
    cfg.debug_log = root.debug_log;

    if let Some(dec) = root.decoder {
        apply_decoder_patch(&mut cfg, dec);
    }

    tracing::debug!(
        "loaded config: metric {:?} tie_break {:?} trellis {:?}",
        cfg.metric,
        cfg.tie_break,
        cfg.trellis
    );
    Ok(cfg)
}

/// Build `DecoderConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<DecoderConfig, ConfigErr> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `DecoderConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DecoderConfig, ConfigErr> {
    let f = File::open(path)?;
    from_reader(BufReader::new(f))
}

fn build_trellis_desc(src: TrellisDto) -> Result<TrellisDesc, ConfigErr> {
    match (src.polynomials, src.table) {
        (Some(generators), None) => {
            let Some(constraint_length) = src.constraint_length else {
                return Err(ConfigErr::Trellis("polynomials require constraint_length"));
            };
            Ok(TrellisDesc::Polynomials { constraint_length, generators })
        }
        (None, Some(table)) => {
            if src.constraint_length.is_some() {
                return Err(ConfigErr::Trellis("constraint_length is only valid with polynomials"));
            }
            let rows = table
                .into_iter()
                .map(|[to0, to1, out0, out1]| TransitionRow {
                    next_states: [to0, to1],
                    outputs: [out0, out1],
                })
                .collect();
            Ok(TrellisDesc::Table(rows))
        }
        (Some(_), Some(_)) => Err(ConfigErr::Trellis("specify either polynomials or table, not both")),
        (None, None) => Err(ConfigErr::Trellis("one of polynomials or table is required")),
    }
}

fn apply_decoder_patch(dst: &mut DecoderConfig, src: DecoderDto) {
    if let Some(v) = src.metric {
        dst.metric = v;
    }
    if let Some(v) = src.tie_break {
        dst.tie_break = v;
    }
}

fn check_no_extra(section: &'static str, extra: &HashMap<String, Value>) -> Result<(), ConfigErr> {
    if extra.is_empty() {
        return Ok(());
    }
    let mut fields: Vec<String> = extra.keys().cloned().collect();
    fields.sort_unstable();
    Err(ConfigErr::UnknownFields { section, fields })
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    decoder: Option<DecoderDto>,

    trellis: TrellisDto,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct DecoderDto {
    metric: Option<MetricKind>,
    tie_break: Option<TieBreak>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct TrellisDto {
    constraint_length: Option<usize>,
    polynomials: Option<Vec<u32>>,
    /// Per origin state: to0, to1, out0, out1
    table: Option<Vec<[u32; 4]>>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}
