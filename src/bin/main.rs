//! btcaudit CLI - every helper as a JSON-printing command
//!
//!   btcaudit server [spec] --network <net> --backend <kind>  → {"host", "port", "spec"}
//!   btcaudit xpub <xpub>                                     → {"network"}
//!   btcaudit address <address>                               → {"network"}
//!   btcaudit genesis --network <net>                         → {"network", "hash"}
//!   btcaudit multisig <m> <n>                                → {"valid", "m", "n"}
//!   btcaudit max <v1> [v2 ...]                               → {"max"}
//!
//! Output format:
//!   --json     Compact JSON (default for non-tty)
//!   --pretty   Pretty-print JSON (default for tty)

use anyhow::{anyhow, bail, Context};
use btcaudit::config::ENV_CONFIG;
use btcaudit::logging::{init_logging, LogFormat, DEFAULT_LEVEL};
use btcaudit::{Config, Network};
use serde_json::{json, Value};
use std::env;
use std::io::IsTerminal;
use tracing::debug;

fn main() {
    let args: Vec<String> = env::args().collect();
    let opts = match ParsedArgs::parse(&args[1..]) {
        Ok(opts) => opts,
        Err(e) => fail(&e, std::io::stdout().is_terminal()),
    };
    init_logging(&opts.log_level, LogFormat::from_env());

    if opts.help {
        print_usage();
        return;
    }

    if opts.version {
        println!("btcaudit {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let result = match opts.command.as_deref() {
        Some("server") => cmd_server(&opts),
        Some("xpub") => cmd_xpub(&opts),
        Some("address") | Some("addr") => cmd_address(&opts),
        Some("genesis") => cmd_genesis(&opts),
        Some("multisig") => cmd_multisig(&opts),
        Some("max") => cmd_max(&opts),
        Some(cmd) => Err(anyhow!("Unknown command: {}", cmd)),
        None => {
            print_usage();
            return;
        }
    };

    let pretty = !opts.json && (opts.pretty || std::io::stdout().is_terminal());
    match result {
        Ok(output) => println!("{}", render(&output, pretty)),
        Err(e) => fail(&e, pretty),
    }
}

fn fail(err: &anyhow::Error, pretty: bool) -> ! {
    eprintln!("{}", render(&json!({"error": format!("{:#}", err)}), pretty));
    std::process::exit(1);
}

fn render(value: &Value, pretty: bool) -> String {
    let rendered = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    rendered.unwrap_or_else(|_| value.to_string())
}

/// Negative numbers and `-` alone are values, not flags.
fn is_value(arg: &str) -> bool {
    !arg.starts_with('-') || arg == "-" || arg.parse::<f64>().is_ok()
}

fn take_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> anyhow::Result<String> {
    iter.next()
        .filter(|v| is_value(v))
        .cloned()
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

#[derive(Default)]
struct ParsedArgs {
    command: Option<String>,
    positional: Vec<String>,
    network: Option<String>,
    backend: Option<String>,
    config: Option<String>,
    log_level: String,
    json: bool,
    pretty: bool,
    help: bool,
    version: bool,
}

impl ParsedArgs {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut opts = ParsedArgs { log_level: DEFAULT_LEVEL.to_string(), ..Default::default() };
        let mut positional = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => opts.help = true,
                "--version" | "-V" => opts.version = true,
                "--json" => opts.json = true,
                "--pretty" => opts.pretty = true,
                "--verbose" | "-v" => opts.log_level = "debug".into(),
                "--log-level" => opts.log_level = take_value(&mut iter, arg)?,
                "--network" | "-n" => opts.network = Some(take_value(&mut iter, arg)?),
                "--backend" | "-b" => opts.backend = Some(take_value(&mut iter, arg)?),
                "--config" | "-c" => opts.config = Some(take_value(&mut iter, arg)?),
                "--" => {
                    positional.extend(iter.by_ref().cloned());
                    break;
                }
                _ if is_value(arg) => positional.push(arg.clone()),
                _ => bail!("Unknown flag: {}", arg),
            }
        }

        if !positional.is_empty() {
            opts.command = Some(positional.remove(0));
        }
        opts.positional = positional;

        if opts.config.is_none() {
            opts.config = env::var(ENV_CONFIG).ok().filter(|s| !s.is_empty());
        }

        Ok(opts)
    }

    fn arg(&self, index: usize, usage: &str) -> anyhow::Result<&str> {
        self.positional
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Usage: btcaudit {}", usage))
    }

    /// Defaults < config file < BTCAUDIT_* env < command-line flags.
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).with_context(|| format!("loading {}", path))?,
            None => Config::default(),
        };
        config = config.apply_env().context("reading BTCAUDIT_* environment")?;
        if let Some(network) = &self.network {
            config.network = network.parse()?;
        }
        if let Some(backend) = &self.backend {
            config.backend = backend.parse()?;
        }
        debug!(network = %config.network, backend = %config.backend, "effective config");
        Ok(config)
    }
}

fn print_usage() {
    println!(
        r#"btcaudit - Bitcoin audit helpers

USAGE:
    btcaudit <command> [args] [options]

COMMANDS:
    server [spec]           Resolve backend server (empty spec → default)
    xpub <xpub>             Network of an extended public key
    address <address>       Network of an address
    genesis                 Genesis block hash
    multisig <m> <n>        Validate M-of-N bounds (1 <= m <= n <= 20)
    max <v1> [v2 ...]       Largest of the given u32 values

OPTIONS:
    --network, -n <net>     mainnet|testnet (env: BTCAUDIT_NETWORK)
    --backend, -b <kind>    electrum|btcd (env: BTCAUDIT_BACKEND)
    --config, -c <file>     JSON config file (env: BTCAUDIT_CONFIG)
    --log-level <filter>    Log filter, e.g. debug (env: RUST_LOG overrides)
    --verbose, -v           Same as --log-level debug
    --                      Treat everything after as arguments
    --json                  Compact JSON output
    --pretty                Pretty-print JSON
    --version, -V           Print version

EXAMPLES:
    btcaudit server --network testnet --backend btcd
    btcaudit server "[2001:db8::1]:s50002"
    btcaudit xpub tpubDC5s7LsM3QFZz8CKNz8ePa2wpvQiq5LsGXrkoaaGsLhNx44wTr13XqoKEMCFPWMK4yen2DsLN7ArrZuqRqQE24Y9kNN51bpcjNdbWpJngdG
    btcaudit multisig 2 3
"#
    );
}

fn cmd_server(opts: &ParsedArgs) -> anyhow::Result<Value> {
    let mut config = opts.config()?;
    if let Some(spec) = opts.positional.first() {
        config.server = Some(spec.clone());
    }
    let endpoint = config.resolve_server()?;
    Ok(json!({
        "network": config.network,
        "backend": config.backend,
        "host": endpoint.host,
        "port": endpoint.port,
        "spec": endpoint.to_string(),
    }))
}

fn cmd_xpub(opts: &ParsedArgs) -> anyhow::Result<Value> {
    let xpub = opts.arg(0, "xpub <xpub>")?;
    Ok(json!({"network": btcaudit::xpub_to_network(xpub)?}))
}

fn cmd_address(opts: &ParsedArgs) -> anyhow::Result<Value> {
    let address = opts.arg(0, "address <address>")?;
    Ok(json!({"address": address, "network": btcaudit::address_to_network(address)?}))
}

fn cmd_genesis(opts: &ParsedArgs) -> anyhow::Result<Value> {
    let network: Network = opts.config()?.network;
    Ok(json!({"network": network, "hash": btcaudit::genesis_block(network)}))
}

fn cmd_multisig(opts: &ParsedArgs) -> anyhow::Result<Value> {
    let usage = "multisig <m> <n>";
    let m: u32 = opts.arg(0, usage)?.parse().context("m must be a number")?;
    let n: u32 = opts.arg(1, usage)?.parse().context("n must be a number")?;
    btcaudit::verify_m_and_n(m, n)?;
    Ok(json!({"valid": true, "m": m, "n": n}))
}

fn cmd_max(opts: &ParsedArgs) -> anyhow::Result<Value> {
    let values = opts
        .positional
        .iter()
        .map(|v| v.parse::<u32>().with_context(|| format!("not a u32: {}", v)))
        .collect::<anyhow::Result<Vec<u32>>>()?;
    let Some((first, rest)) = values.split_first() else {
        bail!("Usage: btcaudit max <v1> [v2 ...]");
    };
    Ok(json!({"max": btcaudit::max(*first, rest)}))
}
