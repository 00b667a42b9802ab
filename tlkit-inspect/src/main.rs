//! tlkit-inspect: decode a TL object from a hex dump.
//!
//! ```text
//! tlkit-inspect 2217515979d1d4e700000000
//! echo "87 8e 71 8c ..." | tlkit-inspect --family messages.Messages --lenient
//! ```
//!
//! Prints the decoded value, then the bytes it re-encodes to. Payloads from
//! older layers re-encode with current constructors, so the two differ.
//!
//! Logging: `RUST_LOG=tlkit_schema=trace` shows every legacy shape that was
//! normalized on the way.

use std::fmt::Debug;
use std::io::{self, Read};

use clap::Parser;
use tlkit::schema::registry;
use tlkit::{Mode, Serializable, TlObject};

#[derive(Parser, Debug)]
#[command(name = "tlkit-inspect", version, about)]
struct Args {
    /// Hex bytes of one boxed object; read from stdin when omitted.
    hex: Option<String>,

    /// Family to decode as; guessed from the leading constructor id if omitted.
    #[arg(short, long)]
    family: Option<String>,

    /// Report an undecodable object as "nothing" instead of failing.
    #[arg(short, long)]
    lenient: bool,

    /// List the families that can be decoded and exit.
    #[arg(long)]
    list: bool,
}

/// What came out of one decode.
struct Report {
    value: String,
    reencoded: Vec<u8>,
}

type Decoder = fn(&[u8], Mode) -> tlkit::Result<Option<Report>>;

fn decode<T: TlObject + Serializable + Debug>(bytes: &[u8], mode: Mode) -> tlkit::Result<Option<Report>> {
    Ok(T::from_bytes_with(bytes, mode)?.map(|value| Report {
        value: format!("{value:#?}"),
        reencoded: value.to_bytes(),
    }))
}

macro_rules! decoders {
    ($($family:ty),+ $(,)?) => {
        &[$( (<$family as TlObject>::FAMILY, decode::<$family> as Decoder), )+]
    };
}

/// One decoder per family in the schema registry.
const DECODERS: &[(&str, Decoder)] = tlkit::schema::for_each_family!(decoders);

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.list {
        for (name, _) in DECODERS {
            println!("{name}");
        }
        return Ok(());
    }

    let text = match args.hex {
        Some(hex) => hex,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(compact.trim_start_matches("0x"))?;
    if bytes.len() < 4 {
        return Err(format!("need at least a 4-byte constructor id, got {} bytes", bytes.len()).into());
    }

    let family = match args.family {
        Some(name) => name,
        None => {
            let id = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            registry::family_of(id)
                .ok_or_else(|| format!("no known family has constructor {id:#010x}; pass --family"))?
                .to_owned()
        }
    };
    let &(_, decoder) = DECODERS
        .iter()
        .find(|(name, _)| *name == family)
        .ok_or_else(|| format!("unknown family {family:?}; see --list"))?;

    let mode = if args.lenient { Mode::Lenient } else { Mode::Strict };
    log::debug!("decoding {} bytes as {family} ({mode:?})", bytes.len());

    let Some(report) = decoder(&bytes, mode)? else {
        println!("{family}: dropped (unknown constructor or malformed field inside)");
        return Ok(());
    };

    println!("{}", report.value);
    println!();
    println!("re-encoded ({} bytes): {}", report.reencoded.len(), hex::encode(&report.reencoded));
    if report.reencoded == bytes {
        println!("identical to input");
    } else if report.reencoded.len() < bytes.len() && bytes.starts_with(&report.reencoded) {
        println!("input has {} trailing bytes", bytes.len() - report.reencoded.len());
    } else {
        println!("differs from input ({} bytes)", bytes.len());
    }
    Ok(())
}
